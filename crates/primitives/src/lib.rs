//! Core types for the overlay engine: geometry, identifiers and host input events.

/// Rectangles, sizes and positions in host (CSS pixel) coordinates.
pub mod geometry;
/// Identifier types for host elements, overlays and toasts.
pub mod ids;
/// Key and pointer event types delivered by the host document.
pub mod input;

pub use geometry::{Position, Rect, Size};
pub use ids::{ElementId, IdGen, OverlayId, ToastId};
pub use input::{HostEvent, Key, KeyEvent, ListenerKind, Modifiers, PointerEvent};
