//! Document-level listener subscriptions keyed by overlay.
//!
//! Each open overlay holds [`Subscription`]s for the channels it listens on.
//! Dropping a subscription unregisters it, so tearing down an overlay's
//! subscription list is all that is needed to stop further deliveries.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use veil_primitives::{ListenerKind, OverlayId};

#[derive(Debug, Default)]
struct RegistryState {
	next: u64,
	entries: BTreeMap<u64, (OverlayId, ListenerKind)>,
}

/// Registry of live document listeners.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
	state: Rc<RefCell<RegistryState>>,
}

impl ListenerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `overlay` on `kind`. Unregistered when the handle drops.
	pub fn subscribe(&self, overlay: OverlayId, kind: ListenerKind) -> Subscription {
		let mut state = self.state.borrow_mut();
		state.next += 1;
		let key = state.next;
		state.entries.insert(key, (overlay, kind));
		tracing::trace!(overlay.id = %overlay, ?kind, "listener registered");
		Subscription {
			key,
			registry: Rc::downgrade(&self.state),
		}
	}

	/// Overlays listening on `kind`, in registration order, without duplicates.
	pub fn subscribers(&self, kind: ListenerKind) -> Vec<OverlayId> {
		let state = self.state.borrow();
		let mut out: Vec<OverlayId> = Vec::new();
		for &(overlay, k) in state.entries.values() {
			if k == kind && !out.contains(&overlay) {
				out.push(overlay);
			}
		}
		out
	}

	pub fn is_subscribed(&self, overlay: OverlayId, kind: ListenerKind) -> bool {
		self.state
			.borrow()
			.entries
			.values()
			.any(|&(o, k)| o == overlay && k == kind)
	}

	/// Total live subscriptions.
	pub fn len(&self) -> usize {
		self.state.borrow().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn count_for(&self, overlay: OverlayId) -> usize {
		self.state
			.borrow()
			.entries
			.values()
			.filter(|(o, _)| *o == overlay)
			.count()
	}
}

/// Scoped registration; unsubscribes on drop.
#[derive(Debug)]
#[must_use = "dropping the subscription unregisters the listener"]
pub struct Subscription {
	key: u64,
	registry: Weak<RefCell<RegistryState>>,
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(state) = self.registry.upgrade()
			&& let Some((overlay, kind)) = state.borrow_mut().entries.remove(&self.key)
		{
			tracing::trace!(overlay.id = %overlay, ?kind, "listener removed");
		}
	}
}
