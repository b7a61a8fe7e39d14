//! # Accordion State
//!
//! Reducer around the FAQ accordion.

use std::rc::Rc;

use signex_core::{Accordion, FaqEntry};
use tracing::warn;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionState {
    pub accordion: Accordion<FaqEntry>,
}

impl AccordionState {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        AccordionState {
            accordion: Accordion::new(entries),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionAction {
    Toggle(usize),
}

impl Reducible for AccordionState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let AccordionAction::Toggle(index) = action;
        let mut next = (*self).clone();
        if let Err(err) = next.accordion.toggle(index) {
            warn!(%err, "Ignoring FAQ toggle");
            return self;
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signex_core::content::FAQS;

    #[test]
    fn test_toggle_moves_open_entry() {
        let s = Rc::new(AccordionState::new(FAQS.to_vec()));
        assert_eq!(s.accordion.open_index(), Some(0));

        let s = s.reduce(AccordionAction::Toggle(3));
        assert_eq!(s.accordion.open_index(), Some(3));

        let s = s.reduce(AccordionAction::Toggle(3));
        assert_eq!(s.accordion.open_index(), None);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let s = Rc::new(AccordionState::new(FAQS.to_vec()));
        let after = s.clone().reduce(AccordionAction::Toggle(FAQS.len()));
        assert!(Rc::ptr_eq(&s, &after));
    }
}
