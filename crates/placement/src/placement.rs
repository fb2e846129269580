use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side of the anchor the overlay is attached to (the primary axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
	Top,
	Right,
	Bottom,
	Left,
}

/// Cross-axis alignment against the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
	/// Near edges line up (left edge for top/bottom, top edge for left/right).
	Start,
	Center,
	/// Far edges line up.
	End,
}

/// One of the twelve compass placements relative to an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
	Top,
	TopStart,
	TopEnd,
	Right,
	RightStart,
	RightEnd,
	#[default]
	Bottom,
	BottomStart,
	BottomEnd,
	Left,
	LeftStart,
	LeftEnd,
}

impl Placement {
	pub const ALL: [Self; 12] = [
		Self::Top,
		Self::TopStart,
		Self::TopEnd,
		Self::Right,
		Self::RightStart,
		Self::RightEnd,
		Self::Bottom,
		Self::BottomStart,
		Self::BottomEnd,
		Self::Left,
		Self::LeftStart,
		Self::LeftEnd,
	];

	pub const fn new(side: Side, alignment: Alignment) -> Self {
		match (side, alignment) {
			(Side::Top, Alignment::Start) => Self::TopStart,
			(Side::Top, Alignment::Center) => Self::Top,
			(Side::Top, Alignment::End) => Self::TopEnd,
			(Side::Right, Alignment::Start) => Self::RightStart,
			(Side::Right, Alignment::Center) => Self::Right,
			(Side::Right, Alignment::End) => Self::RightEnd,
			(Side::Bottom, Alignment::Start) => Self::BottomStart,
			(Side::Bottom, Alignment::Center) => Self::Bottom,
			(Side::Bottom, Alignment::End) => Self::BottomEnd,
			(Side::Left, Alignment::Start) => Self::LeftStart,
			(Side::Left, Alignment::Center) => Self::Left,
			(Side::Left, Alignment::End) => Self::LeftEnd,
		}
	}

	pub const fn side(self) -> Side {
		match self {
			Self::Top | Self::TopStart | Self::TopEnd => Side::Top,
			Self::Right | Self::RightStart | Self::RightEnd => Side::Right,
			Self::Bottom | Self::BottomStart | Self::BottomEnd => Side::Bottom,
			Self::Left | Self::LeftStart | Self::LeftEnd => Side::Left,
		}
	}

	pub const fn alignment(self) -> Alignment {
		match self {
			Self::Top | Self::Right | Self::Bottom | Self::Left => Alignment::Center,
			Self::TopStart | Self::RightStart | Self::BottomStart | Self::LeftStart => Alignment::Start,
			Self::TopEnd | Self::RightEnd | Self::BottomEnd | Self::LeftEnd => Alignment::End,
		}
	}

	/// Kebab-case name, e.g. `"bottom-start"`.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::TopStart => "top-start",
			Self::TopEnd => "top-end",
			Self::Right => "right",
			Self::RightStart => "right-start",
			Self::RightEnd => "right-end",
			Self::Bottom => "bottom",
			Self::BottomStart => "bottom-start",
			Self::BottomEnd => "bottom-end",
			Self::Left => "left",
			Self::LeftStart => "left-start",
			Self::LeftEnd => "left-end",
		}
	}
}

impl fmt::Display for Placement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a placement name is not one of the twelve known values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown placement `{0}` (expected e.g. `top`, `bottom-start`, `left-end`)")]
pub struct PlacementParseError(pub String);

impl FromStr for Placement {
	type Err = PlacementParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|p| p.as_str() == s)
			.ok_or_else(|| PlacementParseError(s.to_string()))
	}
}
