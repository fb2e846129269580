use rustc_hash::FxHashMap;
use veil_overlay::{Document, RenderRoots, RootPurpose};
use veil_primitives::{ElementId, IdGen, ToastId};
use veil_runtime::{Instant, TimerQueue, TimerToken};

use crate::position::ToastPosition;
use crate::toast::{Toast, ToastPatch, ToastRequest};

/// Why a toast left the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
	/// `dismiss` or a user close action.
	Explicit,
	/// Its duration elapsed.
	Expired,
	/// Pushed out by a newer toast while the queue was full.
	Evicted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEvent {
	Added { id: ToastId },
	Updated { id: ToastId },
	Dismissed { id: ToastId, reason: DismissReason },
}

/// Bounded, insertion-ordered toast queue.
///
/// Holds the notification render root while non-empty.
#[derive(Debug)]
pub struct ToastQueue {
	ids: IdGen,
	max_visible: usize,
	position: ToastPosition,
	toasts: Vec<Toast>,
	timers: TimerQueue<ToastId>,
	tokens: FxHashMap<ToastId, TimerToken>,
	roots: RenderRoots,
	container: Option<ElementId>,
	events: Vec<ToastEvent>,
}

impl Default for ToastQueue {
	fn default() -> Self {
		Self::new(Self::DEFAULT_MAX_VISIBLE, ToastPosition::default())
	}
}

impl ToastQueue {
	pub const DEFAULT_MAX_VISIBLE: usize = 5;

	pub fn new(max_visible: usize, position: ToastPosition) -> Self {
		Self::with_roots(RenderRoots::new(), max_visible, position)
	}

	/// Creates a queue that mounts its container through shared render roots.
	///
	/// `max_visible` below 1 is raised to 1.
	pub fn with_roots(roots: RenderRoots, max_visible: usize, position: ToastPosition) -> Self {
		Self {
			ids: IdGen::new(),
			max_visible: max_visible.max(1),
			position,
			toasts: Vec::new(),
			timers: TimerQueue::new(),
			tokens: FxHashMap::default(),
			roots,
			container: None,
			events: Vec::new(),
		}
	}

	/// Appends a toast, evicting the oldest ones first while the queue is full.
	pub fn enqueue(&mut self, request: ToastRequest, now: Instant, doc: &mut dyn Document) -> ToastId {
		while self.toasts.len() >= self.max_visible {
			let oldest = self.toasts.remove(0);
			self.forget(oldest.id, DismissReason::Evicted);
		}
		if self.container.is_none() {
			self.container = Some(self.roots.acquire(doc, RootPurpose::Notifications));
		}

		let id = ToastId(self.ids.next_raw());
		let toast = Toast::from_request(id, request, now);
		if let Some(deadline) = toast.deadline() {
			self.tokens.insert(id, self.timers.schedule(deadline, id));
		}
		tracing::debug!(toast.id = %id, variant = ?toast.variant, duration = ?toast.duration, len = self.toasts.len() + 1, "toast queued");
		self.toasts.push(toast);
		self.events.push(ToastEvent::Added { id });
		id
	}

	/// Merges `patch` into a queued toast. The expiry timer is left alone.
	pub fn update(&mut self, id: ToastId, patch: ToastPatch) -> bool {
		let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) else {
			tracing::debug!(toast.id = %id, "update of unknown toast ignored");
			return false;
		};
		toast.apply(patch);
		self.events.push(ToastEvent::Updated { id });
		true
	}

	/// Removes a toast and cancels its timer. Unknown ids are ignored.
	pub fn dismiss(&mut self, id: ToastId, doc: &mut dyn Document) -> bool {
		self.remove(id, DismissReason::Explicit, doc).is_some()
	}

	/// Dismissal requested from the toast's close control.
	///
	/// Refused for toasts created with `dismissible(false)`.
	pub fn dismiss_by_user(&mut self, id: ToastId, doc: &mut dyn Document) -> bool {
		if self.get(id).is_some_and(|t| !t.dismissible) {
			tracing::debug!(toast.id = %id, "toast is not dismissible");
			return false;
		}
		self.dismiss(id, doc)
	}

	/// Dismisses every queued toast.
	pub fn clear(&mut self, doc: &mut dyn Document) {
		for toast in std::mem::take(&mut self.toasts) {
			self.forget(toast.id, DismissReason::Explicit);
		}
		self.release_if_empty(doc);
	}

	/// Expires every toast whose deadline is at or before `now`.
	///
	/// Returns how many expired.
	pub fn tick(&mut self, now: Instant, doc: &mut dyn Document) -> usize {
		let mut expired = 0;
		for (token, id) in self.timers.drain_due(now) {
			if self.tokens.get(&id) != Some(&token) {
				tracing::trace!(toast.id = %id, "stale toast timer ignored");
				continue;
			}
			if self.remove(id, DismissReason::Expired, doc).is_some() {
				expired += 1;
			}
		}
		expired
	}

	/// Raises or lowers the cap, evicting the oldest toasts that no longer fit.
	pub fn set_max_visible(&mut self, max_visible: usize, doc: &mut dyn Document) {
		self.max_visible = max_visible.max(1);
		let excess = self.toasts.len().saturating_sub(self.max_visible);
		let evicted: Vec<Toast> = self.toasts.drain(..excess).collect();
		for oldest in evicted {
			self.forget(oldest.id, DismissReason::Evicted);
		}
		self.release_if_empty(doc);
	}

	/// Queued toasts, oldest first.
	pub fn toasts(&self) -> &[Toast] {
		&self.toasts
	}

	/// Queued toasts from the top of the screen to the bottom.
	///
	/// The newest toast sits nearest the container's anchored edge.
	pub fn visual_order(&self) -> Vec<&Toast> {
		if self.position.is_top() {
			self.toasts.iter().rev().collect()
		} else {
			self.toasts.iter().collect()
		}
	}

	pub fn get(&self, id: ToastId) -> Option<&Toast> {
		self.toasts.iter().find(|t| t.id == id)
	}

	pub fn next_deadline(&self) -> Option<Instant> {
		self.timers.next_deadline()
	}

	pub fn has_timer(&self, id: ToastId) -> bool {
		self.tokens.get(&id).is_some_and(|&token| self.timers.is_pending(token))
	}

	/// Notification container element, present while the queue is non-empty.
	pub fn container(&self) -> Option<ElementId> {
		self.container
	}

	pub fn position(&self) -> ToastPosition {
		self.position
	}

	pub fn max_visible(&self) -> usize {
		self.max_visible
	}

	pub fn len(&self) -> usize {
		self.toasts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.toasts.is_empty()
	}

	pub fn drain_events(&mut self) -> Vec<ToastEvent> {
		std::mem::take(&mut self.events)
	}

	fn remove(&mut self, id: ToastId, reason: DismissReason, doc: &mut dyn Document) -> Option<Toast> {
		let Some(index) = self.toasts.iter().position(|t| t.id == id) else {
			tracing::debug!(toast.id = %id, ?reason, "dismiss of unknown toast ignored");
			return None;
		};
		let toast = self.toasts.remove(index);
		self.forget(id, reason);
		self.release_if_empty(doc);
		Some(toast)
	}

	fn forget(&mut self, id: ToastId, reason: DismissReason) {
		if let Some(token) = self.tokens.remove(&id) {
			self.timers.cancel(token);
		}
		tracing::debug!(toast.id = %id, ?reason, "toast dismissed");
		self.events.push(ToastEvent::Dismissed { id, reason });
	}

	fn release_if_empty(&mut self, doc: &mut dyn Document) {
		if self.toasts.is_empty() && self.container.take().is_some() {
			self.roots.release(doc, RootPurpose::Notifications);
		}
	}
}
