//! Typed-text cycling
//!
//! An element carrying a comma-separated list of strings types each one out
//! a character at a time, holds, deletes back to empty, holds again, then
//! advances to the next string, looping indefinitely.
//!
//! The cycle itself is a pure state machine: each step yields the text to
//! display and the delay until the next step, and the engine feeds it
//! through the timer queue.

/// Milliseconds per typed character
pub const TYPE_MS: f64 = 80.0;
/// Hold at the full string before deleting
pub const HOLD_FULL_MS: f64 = 1200.0;
/// Milliseconds per deleted character
pub const DELETE_MS: f64 = 40.0;
/// Hold at the empty string before the next entry
pub const HOLD_EMPTY_MS: f64 = 220.0;

/// State machine for one typed-text element
#[derive(Clone, Debug)]
pub struct TypedCycle {
    entries: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl TypedCycle {
    /// Parse a comma-separated attribute value. Entries are trimmed and
    /// empties dropped; an attribute with no usable entries yields `None`.
    pub fn parse(attr: &str) -> Option<Self> {
        let entries: Vec<Vec<char>> = attr
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.chars().collect())
            .collect();
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            index: 0,
            shown: 0,
            deleting: false,
        })
    }

    /// Advance one tick. Returns the text to display and the delay in
    /// milliseconds until the next tick.
    pub fn step(&mut self) -> (String, f64) {
        let current = &self.entries[self.index];
        let delay = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.entries.len();
                HOLD_EMPTY_MS
            } else {
                DELETE_MS
            }
        } else {
            self.shown += 1;
            if self.shown == current.len() {
                self.deleting = true;
                HOLD_FULL_MS
            } else {
                TYPE_MS
            }
        };
        let text: String = self.entries[self.index][..self.shown.min(self.entries[self.index].len())]
            .iter()
            .collect();
        (text, delay)
    }
}
