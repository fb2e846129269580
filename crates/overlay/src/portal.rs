//! Detached render roots, reference-counted per purpose.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use veil_primitives::ElementId;

use crate::document::{Document, RootPurpose};

#[derive(Debug, Clone, Copy)]
struct RootSlot {
	element: ElementId,
	mounts: usize,
}

/// Shared arena of render roots keyed by [`RootPurpose`].
///
/// A root is created on the first mount for its purpose and removed from the
/// document when its live-mount count returns to zero. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct RenderRoots {
	slots: Rc<RefCell<FxHashMap<RootPurpose, RootSlot>>>,
}

impl RenderRoots {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers one mount and returns the root to mount into.
	pub fn acquire(&self, doc: &mut dyn Document, purpose: RootPurpose) -> ElementId {
		let mut slots = self.slots.borrow_mut();
		let slot = slots.entry(purpose).or_insert_with(|| {
			let element = doc.create_root(purpose);
			tracing::debug!(container = purpose.container_name(), root = %element, "render root created");
			RootSlot { element, mounts: 0 }
		});
		slot.mounts += 1;
		slot.element
	}

	/// Releases one mount. Returns `true` if the root was removed.
	///
	/// Releasing a purpose with no live mounts is a no-op.
	pub fn release(&self, doc: &mut dyn Document, purpose: RootPurpose) -> bool {
		let mut slots = self.slots.borrow_mut();
		let Some(slot) = slots.get_mut(&purpose) else {
			tracing::debug!(?purpose, "release of unused render root ignored");
			return false;
		};
		slot.mounts = slot.mounts.saturating_sub(1);
		if slot.mounts > 0 {
			return false;
		}
		let element = slot.element;
		slots.remove(&purpose);
		doc.remove_root(element);
		tracing::debug!(container = purpose.container_name(), root = %element, "render root removed");
		true
	}

	/// Current root for `purpose`, if any overlay is mounted there.
	pub fn root(&self, purpose: RootPurpose) -> Option<ElementId> {
		self.slots.borrow().get(&purpose).map(|slot| slot.element)
	}

	pub fn mounts(&self, purpose: RootPurpose) -> usize {
		self.slots.borrow().get(&purpose).map_or(0, |slot| slot.mounts)
	}
}
