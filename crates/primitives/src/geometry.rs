//! Abstract geometry types for overlay placement.
//!
//! Coordinates are viewport-relative and measured in host units (CSS pixels
//! for a browser host, cells for a terminal host). The y axis grows downward.

use serde::{Deserialize, Serialize};

/// A rectangle with origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	/// Creates a new rectangle. Negative dimensions are clamped to zero.
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width: if width > 0.0 { width } else { 0.0 },
			height: if height > 0.0 { height } else { 0.0 },
		}
	}

	/// Creates a rectangle at the origin with the given size.
	pub const fn from_size(size: Size) -> Self {
		Self::new(0.0, 0.0, size.width, size.height)
	}

	/// Returns true if the rectangle has zero area.
	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}

	/// Returns the left edge x coordinate.
	pub const fn left(&self) -> f64 {
		self.x
	}

	/// Returns the right edge x coordinate (exclusive).
	pub fn right(&self) -> f64 {
		self.x + self.width
	}

	/// Returns the top edge y coordinate.
	pub const fn top(&self) -> f64 {
		self.y
	}

	/// Returns the bottom edge y coordinate (exclusive).
	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	pub fn center_x(&self) -> f64 {
		self.x + self.width / 2.0
	}

	pub fn center_y(&self) -> f64 {
		self.y + self.height / 2.0
	}

	pub const fn size(&self) -> Size {
		Size::new(self.width, self.height)
	}

	/// Returns true if the point lies inside, origin inclusive and far edges exclusive.
	pub fn contains(&self, point: Position) -> bool {
		point.left >= self.left()
			&& point.left < self.right()
			&& point.top >= self.top()
			&& point.top < self.bottom()
	}

	/// Shrinks every edge inward by `margin`, never below zero size.
	pub fn inset(&self, margin: f64) -> Self {
		Self::new(
			self.x + margin,
			self.y + margin,
			self.width - 2.0 * margin,
			self.height - 2.0 * margin,
		)
	}
}

/// Width and height of a measured box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
	pub width: f64,
	pub height: f64,
}

impl Size {
	pub const ZERO: Self = Self::new(0.0, 0.0);

	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	pub fn is_empty(&self) -> bool {
		self.width <= 0.0 || self.height <= 0.0
	}
}

/// Absolute screen coordinates for an overlay's top-left corner.
///
/// Field names follow the `top`/`left` convention of fixed-position styling
/// so renderers can apply them directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
	pub top: f64,
	pub left: f64,
}

impl Position {
	pub const fn new(top: f64, left: f64) -> Self {
		Self { top, left }
	}
}

#[cfg(test)]
mod tests;
