//! Rotating headline: types a phrase, pauses, deletes it, moves to the next one.

use serde::Serialize;
use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);
pub const NEXT_WORD_DELAY: Duration = Duration::from_millis(500);

/// Text to show and how long to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub text: String,
    #[serde(rename = "delayMs")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    /// Blank phrases are skipped.
    pub fn new<S: AsRef<str>>(phrases: &[S]) -> Self {
        let phrases = phrases
            .iter()
            .map(|p| p.as_ref().trim())
            .filter(|p| !p.is_empty())
            .map(|p| p.chars().collect())
            .collect();
        Self { phrases, index: 0, shown: 0, phase: Phase::Typing }
    }

    pub fn text(&self) -> String {
        self.phrases.get(self.index).map(|p| p[..self.shown].iter().collect()).unwrap_or_default()
    }

    /// First phrase in full, or an empty string when there are none.
    pub fn headline(&self) -> String {
        self.phrases.first().map(|p| p.iter().collect()).unwrap_or_default()
    }

    /// Advances one step and returns the frame to display.
    pub fn tick(&mut self) -> Frame {
        let Some(len) = self.phrases.get(self.index).map(Vec::len) else {
            return Frame { text: String::new(), delay_ms: millis(HOLD_DELAY) };
        };

        let delay = match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= len {
                    self.phase = Phase::Deleting;
                    HOLD_DELAY
                } else {
                    TYPE_DELAY
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phase = Phase::Typing;
                    self.index = (self.index + 1) % self.phrases.len();
                    NEXT_WORD_DELAY
                } else {
                    DELETE_DELAY
                }
            }
        };

        Frame { text: self.text(), delay_ms: millis(delay) }
    }

    /// Every frame of one full rotation through all phrases.
    pub fn cycle(&self) -> Vec<Frame> {
        let mut machine = Self { phrases: self.phrases.clone(), index: 0, shown: 0, phase: Phase::Typing };
        let steps: usize = self.phrases.iter().map(|p| p.len() * 2).sum();
        (0..steps).map(|_| machine.tick()).collect()
    }
}

fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut tw = Typewriter::new(&["ab", "c"]);

        assert_eq!(tw.tick(), Frame { text: "a".into(), delay_ms: 100 });
        assert_eq!(tw.tick(), Frame { text: "ab".into(), delay_ms: 2000 });
        assert_eq!(tw.tick(), Frame { text: "a".into(), delay_ms: 50 });
        assert_eq!(tw.tick(), Frame { text: String::new(), delay_ms: 500 });
        assert_eq!(tw.tick(), Frame { text: "c".into(), delay_ms: 2000 });
        assert_eq!(tw.tick(), Frame { text: String::new(), delay_ms: 500 });
        assert_eq!(tw.tick(), Frame { text: "a".into(), delay_ms: 100 });
    }

    #[test]
    fn cycle_covers_every_phrase_once() {
        let tw = Typewriter::new(&["Rust", "", "Web"]);
        let frames = tw.cycle();
        assert_eq!(frames.len(), 14);
        assert_eq!(frames[3].text, "Rust");
        assert_eq!(frames[10].text, "Web");
        assert_eq!(frames.last().map(|f| f.delay_ms), Some(500));
        assert_eq!(tw.headline(), "Rust");
    }

    #[test]
    fn no_phrases_is_harmless() {
        let mut tw = Typewriter::new::<&str>(&[]);
        assert_eq!(tw.tick().text, "");
        assert!(tw.cycle().is_empty());
    }
}
