use serde::{Deserialize, Serialize};

/// Lifecycle phase of one overlay instance.
///
/// `Opening` and `Closing` only let renderers synchronize transitions; for
/// dismissal purposes an overlay is either open or not, see [`OverlayPhase::is_open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverlayPhase {
	#[default]
	Closed,
	Opening,
	Open,
	Closing,
}

impl OverlayPhase {
	pub const fn is_open(self) -> bool {
		matches!(self, Self::Opening | Self::Open)
	}

	pub const fn label(self) -> &'static str {
		match self {
			Self::Closed => "closed",
			Self::Opening => "opening",
			Self::Open => "open",
			Self::Closing => "closing",
		}
	}
}

/// What triggered a close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloseReason {
	/// `close` called by the owner.
	Explicit,
	/// Escape pressed while the overlay was the topmost one.
	Escape,
	/// Pointer pressed outside the overlay and its anchor.
	OutsideInteraction,
	/// The overlay was destroyed while open.
	Destroyed,
}
