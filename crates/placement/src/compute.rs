use veil_primitives::{Position, Rect, Size};

use crate::placement::{Alignment, Placement, Side};

/// Gap kept between a clamped overlay and every viewport edge.
pub const CLAMP_MARGIN: f64 = 10.0;

/// Computes the clamped on-screen position of an anchored overlay.
///
/// Equivalent to [`base_position`] followed by [`clamp_to_viewport`] with
/// [`CLAMP_MARGIN`]. Deterministic for identical inputs.
pub fn compute_position(anchor: Rect, overlay: Size, placement: Placement, offset: f64, viewport: Rect) -> Position {
	let base = base_position(anchor, overlay, placement, offset);
	clamp_to_viewport(base, overlay, viewport, CLAMP_MARGIN)
}

/// Computes the unclamped position derived from `placement`.
///
/// The primary axis places the overlay `offset` away from the anchor edge
/// named by the side; the cross axis lines up the near edges, centers, or
/// far edges according to the alignment.
pub fn base_position(anchor: Rect, overlay: Size, placement: Placement, offset: f64) -> Position {
	let alignment = placement.alignment();
	match placement.side() {
		Side::Top => Position::new(
			anchor.top() - overlay.height - offset,
			align(anchor.left(), anchor.width, overlay.width, alignment),
		),
		Side::Bottom => Position::new(
			anchor.bottom() + offset,
			align(anchor.left(), anchor.width, overlay.width, alignment),
		),
		Side::Right => Position::new(
			align(anchor.top(), anchor.height, overlay.height, alignment),
			anchor.right() + offset,
		),
		Side::Left => Position::new(
			align(anchor.top(), anchor.height, overlay.height, alignment),
			anchor.left() - overlay.width - offset,
		),
	}
}

fn align(anchor_start: f64, anchor_len: f64, overlay_len: f64, alignment: Alignment) -> f64 {
	match alignment {
		Alignment::Start => anchor_start,
		Alignment::Center => anchor_start + anchor_len / 2.0 - overlay_len / 2.0,
		Alignment::End => anchor_start + anchor_len - overlay_len,
	}
}

/// Clamps both axes independently into `viewport` shrunk by `margin`.
///
/// The low edge is checked first. An overlay larger than the shrunk viewport
/// therefore ends up aligned to the far edge minus the margin, which can put
/// its origin before the near margin.
pub fn clamp_to_viewport(position: Position, overlay: Size, viewport: Rect, margin: f64) -> Position {
	Position::new(
		clamp_axis(position.top, overlay.height, viewport.top(), viewport.bottom(), margin),
		clamp_axis(position.left, overlay.width, viewport.left(), viewport.right(), margin),
	)
}

fn clamp_axis(value: f64, len: f64, lo: f64, hi: f64, margin: f64) -> f64 {
	if value < lo + margin {
		lo + margin
	} else if value + len > hi - margin {
		hi - len - margin
	} else {
		value
	}
}
