use veil_primitives::{Position, Rect, Size};

use crate::compute::{CLAMP_MARGIN, compute_position};
use crate::placement::Placement;

/// Remembers the last valid position of one anchored overlay.
///
/// Anchors can be unmounted or become unmeasurable while the overlay is open.
/// Recomputation is then skipped and the previous coordinates are kept until
/// the overlay closes.
#[derive(Debug, Default, Clone)]
pub struct PositionTracker {
	last: Option<Position>,
}

impl PositionTracker {
	pub const fn new() -> Self {
		Self { last: None }
	}

	/// Last position produced from a measurable anchor.
	pub const fn last(&self) -> Option<Position> {
		self.last
	}

	pub fn reset(&mut self) {
		self.last = None;
	}

	/// Recomputes the position, or falls back when `anchor` is unusable.
	///
	/// An anchor is unusable when it is absent or measures 0×0. The fallback
	/// is the last valid position, or the viewport's top-left corner inset by
	/// [`CLAMP_MARGIN`] when nothing was computed yet.
	pub fn update(&mut self, anchor: Option<Rect>, overlay: Size, placement: Placement, offset: f64, viewport: Rect) -> Position {
		match anchor.filter(|rect| !is_unmeasurable(rect)) {
			Some(anchor) => {
				let position = compute_position(anchor, overlay, placement, offset, viewport);
				self.last = Some(position);
				position
			}
			None => {
				tracing::trace!(?placement, has_last = self.last.is_some(), "anchor unavailable, keeping position");
				self.last.unwrap_or_else(|| fallback_position(viewport))
			}
		}
	}
}

/// Default corner used before any anchor measurement succeeded.
pub fn fallback_position(viewport: Rect) -> Position {
	Position::new(viewport.top() + CLAMP_MARGIN, viewport.left() + CLAMP_MARGIN)
}

fn is_unmeasurable(rect: &Rect) -> bool {
	rect.width == 0.0 && rect.height == 0.0
}
