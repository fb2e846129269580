use veil_primitives::OverlayId;

use crate::document::Document;
use crate::manager::OverlayManager;
use crate::phase::{CloseReason, OverlayPhase};

/// Caller-side handle to one overlay.
///
/// The handle is plain data; every query goes through the manager, so a
/// handle to a destroyed overlay simply reports closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle {
	id: OverlayId,
}

impl OverlayHandle {
	pub(crate) const fn new(id: OverlayId) -> Self {
		Self { id }
	}

	pub const fn id(self) -> OverlayId {
		self.id
	}

	pub fn is_open(self, manager: &OverlayManager) -> bool {
		manager.is_open(self.id)
	}

	pub fn phase(self, manager: &OverlayManager) -> OverlayPhase {
		manager.phase(self.id).unwrap_or_default()
	}

	/// Closes the overlay. No-op if it is already closed.
	pub fn close(self, manager: &mut OverlayManager, doc: &mut dyn Document) -> bool {
		manager.close(self.id, doc, CloseReason::Explicit)
	}

	/// Reopens an overlay that was closed.
	pub fn open(self, manager: &mut OverlayManager, doc: &mut dyn Document) -> bool {
		manager.open(self.id, doc)
	}
}
