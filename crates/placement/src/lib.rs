//! Placement engine: pure geometry for anchored overlays.
//!
//! Given an anchor rectangle, the measured overlay size, a [`Placement`], an
//! offset and the viewport, [`compute_position`] yields the overlay's
//! top/left coordinates clamped to stay on screen. Nothing here holds state
//! except [`PositionTracker`], which remembers the last valid result for
//! anchors that disappear while an overlay is open.

pub mod compute;
pub mod placement;
pub mod tracker;

pub use compute::{CLAMP_MARGIN, base_position, clamp_to_viewport, compute_position};
pub use placement::{Alignment, Placement, PlacementParseError, Side};
pub use tracker::{PositionTracker, fallback_position};
