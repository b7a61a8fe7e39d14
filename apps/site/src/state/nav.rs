//! # Navbar State

use std::rc::Rc;

use signex_core::NavMenu;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavState {
    pub menu: NavMenu,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    Toggle,
    Close,
    /// Window scrolled to this vertical offset.
    Scroll(f64),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            NavAction::Toggle => next.menu.toggle(),
            NavAction::Close => {
                if !next.menu.is_open() {
                    return self;
                }
                next.menu.close();
            }
            // Scroll events fire constantly; only re-render on a flip.
            NavAction::Scroll(y) => {
                if !next.menu.observe_scroll(y) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_only_changes_on_threshold() {
        let s = Rc::new(NavState::default());
        let same = s.clone().reduce(NavAction::Scroll(5.0));
        assert!(Rc::ptr_eq(&s, &same));

        let s = s.reduce(NavAction::Scroll(120.0));
        assert!(s.menu.is_scrolled());
    }

    #[test]
    fn test_toggle_then_close() {
        let s = Rc::new(NavState::default()).reduce(NavAction::Toggle);
        assert!(s.menu.is_open());
        let s = s.reduce(NavAction::Close);
        assert!(!s.menu.is_open());
    }
}
