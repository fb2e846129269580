//! Headless overlay engine.
//!
//! [`Engine`] ties together the overlay lifecycle controller, the toast queue
//! and the render roots they share. Hosts feed it [`HostEvent`]s and call
//! [`Engine::turn`] once per loop iteration (or let [`driver::run`] do both).
//!
//! ```no_run
//! use veil::{Engine, EngineConfig, HeadlessDocument, HostEvent, KeyEvent, OpenRequest, Rect};
//!
//! let mut doc = HeadlessDocument::new(Rect::new(0.0, 0.0, 1280.0, 720.0));
//! let mut engine = Engine::new(EngineConfig::default());
//! let modal = engine.open(&mut doc, OpenRequest::blocking());
//! engine.handle_event(&mut doc, HostEvent::KeyDown(KeyEvent::escape()));
//! assert!(!modal.is_open(engine.overlays()));
//! ```

pub mod config;
pub mod driver;
pub mod engine;

pub use config::{ConfigError, EngineConfig, OverlayConfig, PlacementConfig, Result, ToastConfig};
pub use engine::Engine;
pub use veil_notifications::{DismissReason, Toast, ToastContent, ToastEvent, ToastPatch, ToastPosition, ToastRequest, Variant};
pub use veil_overlay::{
	CloseReason, Document, EventOutcome, HeadlessDocument, OpenRequest, Overflow, OverlayEvent, OverlayHandle, OverlayKind, OverlayPhase,
	RootPurpose,
};
pub use veil_placement::{Placement, compute_position};
pub use veil_primitives::{ElementId, HostEvent, Key, KeyEvent, Modifiers, OverlayId, PointerEvent, Position, Rect, Size, ToastId};
pub use veil_runtime::{Duration, Instant};
