//! Event-loop primitives for the overlay engine.
//!
//! Everything runs on the host's UI thread. Work that must happen "later" is
//! either a deferred task (next turn of the loop, see [`TaskQueue`]) or a
//! one-shot timer (see [`TimerQueue`]). Payloads are plain data; the owner
//! decides what to do when they come due.

pub mod tasks;
pub mod timers;

pub use tasks::{QueuedTask, TaskQueue};
pub use timers::{TimerQueue, TimerToken};
pub use web_time::{Duration, Instant};
