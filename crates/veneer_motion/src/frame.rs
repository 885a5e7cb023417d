//! Per-frame task scheduling

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle for a scheduled per-frame task
    pub struct FrameHandle;
}

/// Tasks executed once per animation frame until cancelled.
///
/// The driving loop snapshots the active tasks each frame, so a task that
/// cancels itself (or schedules a replacement) mid-frame never invalidates
/// the iteration.
pub struct FrameScheduler<T> {
    tasks: SlotMap<FrameHandle, T>,
}

impl<T: Clone> FrameScheduler<T> {
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
        }
    }

    /// Register a task to run every frame; returns its cancellation handle
    pub fn request(&mut self, task: T) -> FrameHandle {
        self.tasks.insert(task)
    }

    /// Cancel a task. Returns the task if it was still scheduled.
    pub fn cancel(&mut self, handle: FrameHandle) -> Option<T> {
        self.tasks.remove(handle)
    }

    pub fn is_active(&self, handle: FrameHandle) -> bool {
        self.tasks.contains_key(handle)
    }

    /// The tasks to run this frame
    pub fn snapshot(&self) -> Vec<(FrameHandle, T)> {
        self.tasks.iter().map(|(h, t)| (h, t.clone())).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T: Clone> Default for FrameScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_removes_task() {
        let mut scheduler = FrameScheduler::new();
        let handle = scheduler.request("spin");
        assert!(scheduler.is_active(handle));
        assert_eq!(scheduler.cancel(handle), Some("spin"));
        assert!(!scheduler.is_active(handle));
        assert_eq!(scheduler.cancel(handle), None);
    }

    #[test]
    fn snapshot_reflects_active_tasks() {
        let mut scheduler = FrameScheduler::new();
        let a = scheduler.request('a');
        let _b = scheduler.request('b');
        scheduler.cancel(a);

        let snapshot = scheduler.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].1, 'b');
    }
}
