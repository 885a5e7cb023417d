//! Veneer Motion
//!
//! Cooperative, single-threaded scheduling for the page engine:
//!
//! - [`TimerQueue`]: one-shot deadline-ordered tasks (ripple lifecycles,
//!   typed-text steps). Tasks run to completion once scheduled; there is no
//!   cancellation path.
//! - [`FrameScheduler`]: tasks executed once per animation frame until their
//!   handle is cancelled (the rotating hero gradient).
//!
//! Tasks are plain data, not closures. The driving loop pops what is due and
//! interprets it, which keeps scheduling observable from tests and free of
//! shared mutable captures.

pub mod frame;
pub mod timer;

pub use frame::{FrameHandle, FrameScheduler};
pub use timer::TimerQueue;
