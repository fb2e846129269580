//! Overlay lifecycle controller.
//!
//! [`OverlayManager`] owns the open/closed state of every popover, modal and
//! dialog. Opening mounts the overlay surface into a shared detached render
//! root, subscribes it to document-level listeners and, for blocking
//! overlays, pushes a focus scope and takes a scroll lock. Closing undoes all
//! of it exactly once, whatever triggered the close.
//!
//! The host document is reached only through the [`Document`] trait.
//! [`HeadlessDocument`] implements it in memory.

pub mod document;
pub mod focus;
pub mod handle;
pub mod headless;
pub mod listeners;
pub mod manager;
pub mod phase;
pub mod portal;
pub mod request;
pub mod scroll_lock;

pub use document::{Document, Overflow, RootPurpose};
pub use focus::{FocusScope, FocusStack};
pub use handle::OverlayHandle;
pub use headless::HeadlessDocument;
pub use listeners::{ListenerRegistry, Subscription};
pub use manager::{EventOutcome, OverlayDefaults, OverlayEvent, OverlayManager};
pub use phase::{CloseReason, OverlayPhase};
pub use portal::RenderRoots;
pub use request::{OpenRequest, OverlayKind};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
