//! # Carousel Controller
//!
//! Index + direction over a fixed, ordered list of entries.
//!
//! ## Navigation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Carousel (N = 3)                                     │
//! │                                                                         │
//! │      previous()          next()                                         │
//! │   ◄─────────────  [0] ─────────► [1] ─────────► [2] ──┐                 │
//! │   │                ▲                                  │                 │
//! │   └──► [2]         └──────────── wrap ────────────────┘                 │
//! │                                                                         │
//! │  next()      direction = Forward,  current = (current + 1) mod N        │
//! │  previous()  direction = Backward, current = (current + N - 1) mod N    │
//! │  go_to(i)    direction = Forward if i > current else Backward           │
//! │                                                                         │
//! │  Auto-advance: the site calls next() every `auto_advance_interval()`    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Slide Animation
//! The incoming slide enters from [`Direction::enter_from`] and the outgoing
//! one leaves toward [`Direction::exit_to`]; the two are always mirrored.

use chrono::Duration;

use crate::error::{CoreError, CoreResult};
use crate::types::Side;
use crate::CAROUSEL_INTERVAL_SECS;

/// Which way the carousel last moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// Side the incoming slide enters from.
    pub const fn enter_from(&self) -> Side {
        match self {
            Direction::Forward => Side::Right,
            Direction::Backward => Side::Left,
        }
    }

    /// Side the outgoing slide exits toward.
    pub const fn exit_to(&self) -> Side {
        self.enter_from().opposite()
    }
}

/// Carousel over a fixed list of entries.
///
/// ## Invariants
/// - `current < entries.len()` whenever the list is non-empty
/// - An empty carousel has no current entry and every move is a no-op
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    entries: Vec<T>,
    current: usize,
    direction: Direction,
    interval: Duration,
}

impl<T> Carousel<T> {
    /// Creates a carousel positioned on the first entry.
    pub fn new(entries: Vec<T>) -> Self {
        Carousel {
            entries,
            current: 0,
            direction: Direction::Forward,
            interval: Duration::seconds(CAROUSEL_INTERVAL_SECS),
        }
    }

    /// Overrides the auto-advance interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Advances one entry, wrapping past the end.
    pub fn next(&mut self) {
        self.direction = Direction::Forward;
        if !self.entries.is_empty() {
            self.current = (self.current + 1) % self.entries.len();
        }
    }

    /// Steps back one entry, wrapping before the start.
    pub fn previous(&mut self) {
        self.direction = Direction::Backward;
        let len = self.entries.len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Jumps straight to `index`.
    ///
    /// Selecting the current entry again counts as Backward, matching the
    /// indicator dots' behavior.
    pub fn go_to(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.entries.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        Ok(())
    }

    /// The entry on display, if any.
    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.current)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Whether `index` is the entry on display (for indicator dots).
    pub fn is_active(&self, index: usize) -> bool {
        !self.entries.is_empty() && index == self.current
    }

    /// How often the site should call [`Carousel::next`] on its own.
    pub fn auto_advance_interval(&self) -> Duration {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel<usize> {
        Carousel::new((0..n).collect())
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for n in 1..6 {
            for start in 0..n {
                let mut c = carousel(n);
                c.go_to(start).unwrap();
                for _ in 0..n {
                    c.next();
                }
                assert_eq!(c.index(), start, "n={n} start={start}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        let mut c = carousel(4);
        for start in 0..4 {
            c.go_to(start).unwrap();
            c.next();
            c.previous();
            assert_eq!(c.index(), start);
        }
    }

    #[test]
    fn test_wraps_on_both_ends() {
        let mut c = carousel(3);
        c.previous();
        assert_eq!(c.index(), 2);
        assert_eq!(c.direction(), Direction::Backward);

        c.next();
        assert_eq!(c.index(), 0);
        assert_eq!(c.direction(), Direction::Forward);
    }

    #[test]
    fn test_go_to_sets_direction() {
        let mut c = carousel(5);
        c.go_to(3).unwrap();
        assert_eq!(c.direction(), Direction::Forward);

        c.go_to(1).unwrap();
        assert_eq!(c.direction(), Direction::Backward);

        c.go_to(1).unwrap();
        assert_eq!(c.direction(), Direction::Backward);
        assert!(c.is_active(1));
    }

    #[test]
    fn test_go_to_out_of_range_leaves_state() {
        let mut c = carousel(2);
        c.next();
        let before = c.clone();

        assert_eq!(
            c.go_to(2),
            Err(CoreError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(c, before);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c: Carousel<usize> = carousel(0);
        c.next();
        c.previous();
        assert_eq!(c.index(), 0);
        assert!(c.current().is_none());
        assert!(!c.is_active(0));
    }

    #[test]
    fn test_slide_sides_are_mirrored() {
        assert_eq!(Direction::Forward.enter_from(), Side::Right);
        assert_eq!(Direction::Forward.exit_to(), Side::Left);
        assert_eq!(Direction::Backward.enter_from(), Side::Left);
        assert_eq!(Direction::Backward.exit_to(), Side::Right);
    }

    #[test]
    fn test_default_interval_is_twenty_seconds() {
        assert_eq!(carousel(2).auto_advance_interval(), Duration::seconds(20));
        let custom = carousel(2).with_interval(Duration::seconds(5));
        assert_eq!(custom.auto_advance_interval(), Duration::seconds(5));
    }
}
