//! # State Module
//!
//! Yew reducers around the signex-core controllers, plus configuration.
//!
//! ## Why One Reducer Per Controller?
//! Each page only asks for the state it renders. A reducer wraps exactly
//! one controller and exposes its operations as actions:
//!
//! 1. **Single Owner**: the controller is only mutated inside `reduce`
//! 2. **Cheap Re-renders**: a no-op action returns the same `Rc`, so Yew skips the render
//! 3. **Host Testable**: `reduce` is a plain function, tested without a browser
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      App (root component)                       │   │
//! │  │  <ContextProvider<ConfigState>>                                 │   │
//! │  │  <ContextProvider<ToastContext>>                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ About page   │  │ Contact page │  │   Media page     │              │
//! │  │              │  │              │  │                  │              │
//! │  │ Carousel     │  │ ContactState │  │  GalleryState    │              │
//! │  │ Accordion    │  │              │  │                  │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  Page-local state is dropped when the route changes.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod accordion;
mod carousel;
pub mod config;
mod contact;
mod gallery;
mod nav;
mod toasts;
mod typewriter;

pub use accordion::{AccordionAction, AccordionState};
pub use carousel::{CarouselAction, CarouselState};
pub use config::{ConfigError, ConfigState};
pub use contact::{ContactAction, ContactState};
pub use gallery::{GalleryAction, GalleryState};
pub use nav::{NavAction, NavState};
pub use toasts::{ToastAction, ToastContext, ToastState};
pub use typewriter::{TypewriterAction, TypewriterState};
