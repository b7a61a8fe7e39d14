//! # Components
//!
//! Pieces shared across pages.
//!
//! ```text
//! components/
//! ├── navbar.rs        ◄─── Header, mobile menu, scroll shadow
//! ├── footer.rs        ◄─── Contact details and quick links
//! ├── toasts.rs        ◄─── App-wide toast stack
//! ├── team_carousel.rs ◄─── About page leadership carousel
//! └── faq.rs           ◄─── Contact page FAQ accordion
//! ```

mod faq;
mod footer;
mod navbar;
mod team_carousel;
mod toasts;

pub use faq::FaqAccordion;
pub use footer::Footer;
pub use navbar::Navbar;
pub use team_carousel::TeamCarousel;
pub use toasts::ToastContainer;
