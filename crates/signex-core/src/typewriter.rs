//! # Typewriter Headline
//!
//! Types a phrase one character per tick, holds it, erases back to the
//! prefix it shares with the next phrase, then types the rest of that one.
//! Loops forever.
//!
//! ```text
//!  Typing ──(fully typed)──► Holding(hold_ticks) ──(0)──► Erasing ──(shared prefix)──┐
//!    ▲                                                                               │
//!    └──────────────────────────── next phrase (wraps) ◄─────────────────────────────┘
//! ```
//!
//! "We create roads" followed by "We deliver signs" only erases down to
//! "We ", never to an empty line.

use crate::content::HEADLINE_PHRASES;
use crate::{TYPEWRITER_HOLD_TICKS, TYPEWRITER_TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Typing,
    Holding(u32),
    Erasing,
}

/// Cycling headline state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    stage: Stage,
    hold_ticks: u32,
}

impl Default for Typewriter {
    fn default() -> Self {
        Typewriter::new(
            HEADLINE_PHRASES.iter().map(|p| p.to_string()).collect(),
            TYPEWRITER_HOLD_TICKS,
        )
    }
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, hold_ticks: u32) -> Self {
        Typewriter {
            phrases,
            phrase: 0,
            shown: 0,
            stage: Stage::Typing,
            hold_ticks,
        }
    }

    /// Milliseconds between ticks the site should use.
    pub const fn tick_interval_ms() -> u32 {
        TYPEWRITER_TICK_MS
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.phrase)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    fn next_phrase(&self) -> usize {
        (self.phrase + 1) % self.phrases.len()
    }

    /// Characters of the current phrase the next one starts with.
    fn kept_prefix(&self) -> usize {
        let next = self.next_phrase();
        if next == self.phrase {
            return 0;
        }
        match (self.phrases.get(self.phrase), self.phrases.get(next)) {
            (Some(current), Some(upcoming)) => current
                .chars()
                .zip(upcoming.chars())
                .take_while(|(a, b)| a == b)
                .count(),
            _ => 0,
        }
    }

    /// Advances by one step.
    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }

        match self.stage {
            Stage::Typing => {
                let len = self.phrase_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.stage = if self.hold_ticks == 0 {
                        Stage::Erasing
                    } else {
                        Stage::Holding(self.hold_ticks)
                    };
                }
            }
            Stage::Holding(remaining) => {
                self.stage = if remaining <= 1 {
                    Stage::Erasing
                } else {
                    Stage::Holding(remaining - 1)
                };
            }
            Stage::Erasing => {
                let keep = self.kept_prefix();
                if self.shown > keep {
                    self.shown -= 1;
                }
                if self.shown <= keep {
                    self.phrase = self.next_phrase();
                    self.stage = Stage::Typing;
                }
            }
        }
    }

    /// The visible prefix of the current phrase.
    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(phrases: &[&str], hold: u32) -> Typewriter {
        Typewriter::new(phrases.iter().map(|p| p.to_string()).collect(), hold)
    }

    #[test]
    fn test_types_holds_and_erases() {
        let mut tw = writer(&["abc", "de"], 2);
        assert_eq!(tw.text(), "");

        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "abc");

        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "abc");

        tw.tick();
        assert_eq!(tw.text(), "ab");
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_first_phrase() {
        let hold = 3;
        let mut tw = writer(&["Welcome", "Roads", "Safety"], hold);
        let ticks: usize = ["Welcome", "Roads", "Safety"]
            .iter()
            .map(|p| 2 * p.len() + hold as usize)
            .sum();

        for _ in 0..ticks {
            tw.tick();
        }
        assert_eq!(tw, writer(&["Welcome", "Roads", "Safety"], hold));
    }

    #[test]
    fn test_erases_only_to_shared_prefix() {
        let mut tw = writer(&["We create", "We deliver"], 0);
        for _ in 0.."We create".len() {
            tw.tick();
        }
        assert_eq!(tw.text(), "We create");

        for _ in 0..6 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.text(), "We ");

        tw.tick();
        assert_eq!(tw.text(), "We d");
    }

    #[test]
    fn test_single_phrase_is_fully_erased() {
        let mut tw = writer(&["ab"], 0);
        tw.tick();
        tw.tick();
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
    }

    #[test]
    fn test_multibyte_text_is_sliced_on_char_boundaries() {
        let mut tw = writer(&["né→"], 0);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "né");
        tw.tick();
        assert_eq!(tw.text(), "né→");
    }

    #[test]
    fn test_no_phrases_is_inert() {
        let mut tw = writer(&[], 1);
        tw.tick();
        assert_eq!(tw.text(), "");
    }

    #[test]
    fn test_default_uses_headline_phrases() {
        let mut tw = Typewriter::default();
        for _ in 0.."Welcome to Signex".len() {
            tw.tick();
        }
        assert_eq!(tw.text(), "Welcome to Signex");
    }
}
