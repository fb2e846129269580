use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
	($(#[$meta:meta])* $name:ident, $prefix:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub struct $name(pub u64);

		impl $name {
			/// Returns the raw numeric value.
			pub const fn get(self) -> u64 {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, concat!($prefix, "#{}"), self.0)
			}
		}
	};
}

define_id!(
	/// Handle to an element owned by the host document.
	///
	/// Identity is stable across detach/re-attach: an element removed from the
	/// tree and inserted again keeps its id.
	ElementId,
	"element"
);

define_id!(
	/// Identifier of one overlay instance (popover, modal, dialog).
	OverlayId,
	"overlay"
);

define_id!(
	/// Identifier of one queued notification.
	ToastId,
	"toast"
);

/// Monotonic id allocator.
#[derive(Debug, Default, Clone)]
pub struct IdGen {
	next: u64,
}

impl IdGen {
	pub const fn new() -> Self {
		Self { next: 0 }
	}

	/// Returns the next value, starting at 1.
	pub fn next_raw(&mut self) -> u64 {
		self.next = self.next.wrapping_add(1);
		self.next
	}
}
