//! Reference-counted background scroll suppression.

use std::cell::RefCell;
use std::rc::Rc;

use crate::document::{Document, Overflow};

#[derive(Debug, Default)]
struct LockState {
	count: usize,
	/// Body overflow captured when the lock was applied; `Some` iff applied.
	saved: Option<Overflow>,
}

/// Counts everything currently suppressing background scroll.
///
/// The body is locked iff the count is positive. The original overflow is
/// captured when the first holder arrives and restored exactly once when the
/// last one leaves. Clones share the same count.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
	state: Rc<RefCell<LockState>>,
}

impl ScrollLock {
	pub fn new() -> Self {
		Self::default()
	}

	/// Takes one hold on the lock and applies it to `doc`.
	pub fn acquire(&self, doc: &mut dyn Document) -> ScrollLockGuard {
		self.state.borrow_mut().count += 1;
		self.sync(doc);
		ScrollLockGuard {
			state: Rc::clone(&self.state),
			released: false,
		}
	}

	/// Brings `doc` in line with the current count.
	///
	/// Needed after a guard was dropped without [`ScrollLockGuard::release`].
	pub fn sync(&self, doc: &mut dyn Document) {
		let mut state = self.state.borrow_mut();
		match (state.count, state.saved) {
			(0, Some(original)) => {
				doc.set_body_overflow(original);
				state.saved = None;
				tracing::debug!(?original, "scroll lock released");
			}
			(n, None) if n > 0 => {
				let original = doc.body_overflow();
				state.saved = Some(original);
				doc.set_body_overflow(Overflow::Hidden);
				tracing::debug!(?original, "scroll lock applied");
			}
			_ => {}
		}
	}

	pub fn is_locked(&self) -> bool {
		self.state.borrow().count > 0
	}

	pub fn count(&self) -> usize {
		self.state.borrow().count
	}
}

/// One hold on a [`ScrollLock`].
///
/// Dropping the guard gives the hold back; the document itself is updated by
/// [`ScrollLockGuard::release`] or the next [`ScrollLock::sync`].
#[derive(Debug)]
#[must_use = "dropping the guard releases the scroll lock"]
pub struct ScrollLockGuard {
	state: Rc<RefCell<LockState>>,
	released: bool,
}

impl ScrollLockGuard {
	/// Gives the hold back and restores the body if this was the last one.
	pub fn release(mut self, doc: &mut dyn Document) {
		self.give_back();
		ScrollLock {
			state: Rc::clone(&self.state),
		}
		.sync(doc);
	}

	fn give_back(&mut self) {
		if self.released {
			return;
		}
		self.released = true;
		let mut state = self.state.borrow_mut();
		state.count = state.count.saturating_sub(1);
	}
}

impl Drop for ScrollLockGuard {
	fn drop(&mut self) {
		self.give_back();
	}
}
