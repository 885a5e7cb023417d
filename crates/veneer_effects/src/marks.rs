//! Attachment side-table
//!
//! Elements never carry behavior state themselves. The registry records, per
//! element identity, which behaviors have already been wired up, so repeated
//! scans (including the ones the mutation watcher triggers) bind each
//! behavior at most once.

use rustc_hash::FxHashMap;
use veneer_core::NodeId;

/// Per-element behavior mark flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BehaviorMarks {
    bits: u8,
}

impl BehaviorMarks {
    pub const RIPPLE: u8 = 0b0000_0001;
    pub const TILT: u8 = 0b0000_0010;
    pub const SMOOTH: u8 = 0b0000_0100;
    pub const REVEAL: u8 = 0b0000_1000;
    pub const TYPED: u8 = 0b0001_0000;
    pub const ACCENT: u8 = 0b0010_0000;
    pub const TOGGLE: u8 = 0b0100_0000;

    pub const fn contains(&self, mark: u8) -> bool {
        self.bits & mark != 0
    }

    pub fn insert(&mut self, mark: u8) {
        self.bits |= mark;
    }
}

/// Side-table mapping element identity to its behavior marks
#[derive(Default)]
pub struct AttachmentRegistry {
    marks: FxHashMap<NodeId, BehaviorMarks>,
}

impl AttachmentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a behavior on an element. Returns false when it was already
    /// marked, in which case the caller must not bind again.
    pub fn try_mark(&mut self, node: NodeId, mark: u8) -> bool {
        let entry = self.marks.entry(node).or_default();
        if entry.contains(mark) {
            return false;
        }
        entry.insert(mark);
        true
    }

    pub fn is_marked(&self, node: NodeId, mark: u8) -> bool {
        self.marks.get(&node).is_some_and(|m| m.contains(mark))
    }

    /// Drop all marks for an element (its identity died with it)
    pub fn forget(&mut self, node: NodeId) {
        self.marks.remove(&node);
    }
}
