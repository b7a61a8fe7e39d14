//! # Accordion Controller
//!
//! Single-open accordion: opening one entry closes whichever was open.

use crate::error::{CoreError, CoreResult};

/// Accordion over a fixed list of entries.
///
/// ## Invariants
/// - `open` is `None` or a valid index
/// - At most one entry is open
#[derive(Debug, Clone, PartialEq)]
pub struct Accordion<T> {
    entries: Vec<T>,
    open: Option<usize>,
}

impl<T> Accordion<T> {
    /// Creates an accordion with the first entry expanded.
    pub fn new(entries: Vec<T>) -> Self {
        let open = if entries.is_empty() { None } else { Some(0) };
        Accordion { entries, open }
    }

    /// Collapses `index` if it is open, otherwise expands it alone.
    pub fn toggle(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.entries.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    #[inline]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[inline]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accordion(n: usize) -> Accordion<usize> {
        Accordion::new((0..n).collect())
    }

    #[test]
    fn test_first_entry_starts_open() {
        assert_eq!(accordion(5).open_index(), Some(0));
        assert_eq!(accordion(0).open_index(), None);
    }

    #[test]
    fn test_toggle_switches_between_entries() {
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    continue;
                }
                let mut a = accordion(4);
                if !a.is_open(i) {
                    a.toggle(i).unwrap();
                }
                a.toggle(j).unwrap();
                assert!(!a.is_open(i));
                assert!(a.is_open(j));
            }
        }
    }

    #[test]
    fn test_toggle_open_entry_collapses() {
        let mut a = accordion(3);
        a.toggle(0).unwrap();
        assert_eq!(a.open_index(), None);

        a.toggle(2).unwrap();
        a.toggle(2).unwrap();
        assert_eq!(a.open_index(), None);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut a = accordion(2);
        assert!(a.toggle(2).is_err());
        assert_eq!(a.open_index(), Some(0));
    }
}
