//! Toast notification queue.
//!
//! [`ToastQueue`] keeps at most `max_visible` records in insertion order.
//! Appending to a full queue evicts the oldest record first. Records with a
//! non-zero duration expire through a cancellable one-shot timer that starts
//! at creation and is never rescheduled.

pub mod position;
pub mod queue;
pub mod toast;

pub use position::ToastPosition;
pub use queue::{DismissReason, ToastEvent, ToastQueue};
pub use toast::{Toast, ToastContent, ToastPatch, ToastRequest, Variant};
