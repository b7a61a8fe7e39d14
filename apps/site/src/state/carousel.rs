//! # Carousel State
//!
//! Reducer around the team carousel.
//!
//! ```text
//! Next / Previous / GoTo ──► index moves, leaving = Some(old index)
//!                                  │
//!        both slides render: old with slide-exit-*, new with slide-enter-*
//!                                  │
//! Settle (after the animation) ──► leaving = None
//! ```

use std::rc::Rc;

use chrono::Duration;
use signex_core::{Carousel, TeamMember};
use tracing::warn;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub carousel: Carousel<TeamMember>,
    /// Slide still animating out after a move.
    pub leaving: Option<usize>,
}

impl CarouselState {
    pub fn new(members: Vec<TeamMember>, interval: Duration) -> Self {
        CarouselState {
            carousel: Carousel::new(members).with_interval(interval),
            leaving: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselAction {
    Next,
    Previous,
    GoTo(usize),
    /// The exit animation finished.
    Settle,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let before = next.carousel.index();
        match action {
            CarouselAction::Next => next.carousel.next(),
            CarouselAction::Previous => next.carousel.previous(),
            CarouselAction::GoTo(index) => {
                if let Err(err) = next.carousel.go_to(index) {
                    warn!(%err, "Ignoring carousel jump");
                    return self;
                }
            }
            CarouselAction::Settle => {
                if next.leaving.is_none() {
                    return self;
                }
                next.leaving = None;
                return Rc::new(next);
            }
        }
        if next.carousel.index() != before {
            next.leaving = Some(before);
        }
        Rc::new(next)
    }
}
