//! # Typewriter State

use std::rc::Rc;

use signex_core::Typewriter;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypewriterState {
    pub writer: Typewriter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterAction {
    Tick,
}

impl Reducible for TypewriterState {
    type Action = TypewriterAction;

    fn reduce(self: Rc<Self>, _action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.writer.tick();
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_types_one_char() {
        let s = Rc::new(TypewriterState::default()).reduce(TypewriterAction::Tick);
        assert_eq!(s.writer.text(), "W");
    }
}
