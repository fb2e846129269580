//! Overlay registry and lifecycle state machine.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use veil_placement::{Placement, PositionTracker};
use veil_primitives::{ElementId, HostEvent, IdGen, Key, KeyEvent, ListenerKind, OverlayId, PointerEvent, Position, Size};
use veil_runtime::TaskQueue;

use crate::document::{Document, RootPurpose};
use crate::focus::{FocusScope, FocusStack};
use crate::handle::OverlayHandle;
use crate::listeners::{ListenerRegistry, Subscription};
use crate::phase::{CloseReason, OverlayPhase};
use crate::portal::RenderRoots;
use crate::request::{OpenRequest, OverlayKind};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Values used for request fields left unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayDefaults {
	pub placement: Placement,
	pub offset: f64,
	pub animated: bool,
}

impl Default for OverlayDefaults {
	fn default() -> Self {
		Self {
			placement: Placement::Bottom,
			offset: 8.0,
			animated: false,
		}
	}
}

/// Notifications for renderers, drained with [`OverlayManager::drain_events`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
	PhaseChanged { id: OverlayId, phase: OverlayPhase },
	Opened { id: OverlayId },
	/// New absolute coordinates for an anchored overlay.
	Positioned { id: OverlayId, position: Position },
	Closed { id: OverlayId, reason: CloseReason },
	FocusRestored { id: OverlayId, element: ElementId },
}

/// Whether the engine acted on a host event.
///
/// `Handled` key events should have their default action prevented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
	Ignored,
	Handled,
}

impl EventOutcome {
	pub const fn is_handled(self) -> bool {
		matches!(self, Self::Handled)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredTask {
	RestoreFocus { overlay: OverlayId, element: ElementId },
}

#[derive(Debug)]
struct OverlayEntry {
	request: OpenRequest,
	placement: Placement,
	offset: f64,
	animated: bool,
	phase: OverlayPhase,
	surface: Option<ElementId>,
	tracker: PositionTracker,
	position: Option<Position>,
	subscriptions: SmallVec<[Subscription; 4]>,
	scroll_guard: Option<ScrollLockGuard>,
}

/// Owns every overlay instance and the resources they share.
///
/// All methods run synchronously on the UI thread. Deferred work (focus
/// restoration) is queued and executed by [`OverlayManager::run_deferred`]
/// on the next turn of the host loop.
#[derive(Debug)]
pub struct OverlayManager {
	ids: IdGen,
	defaults: OverlayDefaults,
	entries: BTreeMap<OverlayId, OverlayEntry>,
	/// Open overlays, bottom of the visual stack first.
	open_order: Vec<OverlayId>,
	focus: FocusStack,
	scroll_lock: ScrollLock,
	listeners: ListenerRegistry,
	roots: RenderRoots,
	tasks: TaskQueue<DeferredTask>,
	events: Vec<OverlayEvent>,
}

impl Default for OverlayManager {
	fn default() -> Self {
		Self::new(OverlayDefaults::default())
	}
}

impl OverlayManager {
	pub fn new(defaults: OverlayDefaults) -> Self {
		Self::with_context(RenderRoots::new(), ScrollLock::new(), defaults)
	}

	/// Creates a manager sharing render roots and scroll lock with other owners.
	pub fn with_context(roots: RenderRoots, scroll_lock: ScrollLock, defaults: OverlayDefaults) -> Self {
		Self {
			ids: IdGen::new(),
			defaults,
			entries: BTreeMap::new(),
			open_order: Vec::new(),
			focus: FocusStack::new(),
			scroll_lock,
			listeners: ListenerRegistry::new(),
			roots,
			tasks: TaskQueue::new(),
			events: Vec::new(),
		}
	}

	/// Registers an overlay in the closed state.
	pub fn create(&mut self, request: OpenRequest) -> OverlayId {
		let id = OverlayId(self.ids.next_raw());
		let entry = OverlayEntry {
			placement: request.placement.unwrap_or(self.defaults.placement),
			offset: request.offset.unwrap_or(self.defaults.offset),
			animated: request.animated.unwrap_or(self.defaults.animated),
			request,
			phase: OverlayPhase::Closed,
			surface: None,
			tracker: PositionTracker::new(),
			position: None,
			subscriptions: SmallVec::new(),
			scroll_guard: None,
		};
		self.entries.insert(id, entry);
		id
	}

	/// Creates an overlay and opens it.
	pub fn request_open(&mut self, request: OpenRequest, doc: &mut dyn Document) -> OverlayHandle {
		let id = self.create(request);
		self.open(id, doc);
		OverlayHandle::new(id)
	}

	/// Opens an overlay. No-op for unknown ids and overlays already open.
	pub fn open(&mut self, id: OverlayId, doc: &mut dyn Document) -> bool {
		let Some(entry) = self.entries.get_mut(&id) else {
			tracing::debug!(overlay.id = %id, "open of unknown overlay ignored");
			return false;
		};
		if entry.phase.is_open() {
			tracing::debug!(overlay.id = %id, phase = entry.phase.label(), "overlay already open");
			return false;
		}

		let surface = match entry.surface {
			Some(surface) => surface,
			None => {
				let root = self.roots.acquire(doc, RootPurpose::Overlay);
				let surface = doc.mount_surface(root, id);
				entry.surface = Some(surface);
				surface
			}
		};

		entry.phase = OverlayPhase::Opening;
		self.events.push(OverlayEvent::PhaseChanged {
			id,
			phase: OverlayPhase::Opening,
		});
		self.open_order.push(id);

		let OpenRequest {
			kind,
			close_on_outside,
			trap_focus,
			block_scroll,
			..
		} = entry.request;

		entry.subscriptions.push(self.listeners.subscribe(id, ListenerKind::KeyDown));
		if close_on_outside {
			entry.subscriptions.push(self.listeners.subscribe(id, ListenerKind::PointerDown));
		}
		if kind == OverlayKind::Anchored {
			entry.subscriptions.push(self.listeners.subscribe(id, ListenerKind::Scroll));
			entry.subscriptions.push(self.listeners.subscribe(id, ListenerKind::Resize));
			reposition_entry(entry, id, doc, &mut self.events);
		}
		if trap_focus {
			let scope = FocusScope::capture(doc, id, surface);
			scope.focus_initial(doc);
			self.focus.push(scope);
		}
		if block_scroll {
			entry.scroll_guard = Some(self.scroll_lock.acquire(doc));
		}

		self.events.push(OverlayEvent::Opened { id });
		if !entry.animated {
			entry.phase = OverlayPhase::Open;
			self.events.push(OverlayEvent::PhaseChanged {
				id,
				phase: OverlayPhase::Open,
			});
		}
		tracing::debug!(overlay.id = %id, ?kind, depth = self.open_order.len(), "overlay opened");
		true
	}

	/// Closes an overlay and tears down everything `open` set up.
	///
	/// No-op for unknown ids and overlays that are not open. Focus is restored
	/// one turn later, see [`OverlayManager::run_deferred`].
	pub fn close(&mut self, id: OverlayId, doc: &mut dyn Document, reason: CloseReason) -> bool {
		let Some(entry) = self.entries.get_mut(&id) else {
			tracing::debug!(overlay.id = %id, "close of unknown overlay ignored");
			return false;
		};
		if !entry.phase.is_open() {
			tracing::debug!(overlay.id = %id, phase = entry.phase.label(), "overlay already closed");
			return false;
		}

		entry.subscriptions.clear();
		if let Some(guard) = entry.scroll_guard.take() {
			guard.release(doc);
		}
		self.open_order.retain(|&open| open != id);
		if let Some(scope) = self.focus.remove(id)
			&& entry.request.return_focus
			&& let Some(element) = scope.restore_to
		{
			self.tasks.enqueue(DeferredTask::RestoreFocus { overlay: id, element });
		}

		entry.phase = OverlayPhase::Closing;
		self.events.push(OverlayEvent::PhaseChanged {
			id,
			phase: OverlayPhase::Closing,
		});
		self.events.push(OverlayEvent::Closed { id, reason });
		if !entry.animated {
			finish_close(entry, id, doc, &self.roots, &mut self.events);
		}
		tracing::debug!(overlay.id = %id, ?reason, depth = self.open_order.len(), "overlay closed");
		true
	}

	/// Reports that the renderer finished the current opening or closing transition.
	pub fn transition_finished(&mut self, id: OverlayId, doc: &mut dyn Document) -> bool {
		let Some(entry) = self.entries.get_mut(&id) else {
			return false;
		};
		match entry.phase {
			OverlayPhase::Opening => {
				entry.phase = OverlayPhase::Open;
				self.events.push(OverlayEvent::PhaseChanged {
					id,
					phase: OverlayPhase::Open,
				});
				true
			}
			OverlayPhase::Closing => {
				finish_close(entry, id, doc, &self.roots, &mut self.events);
				true
			}
			OverlayPhase::Open | OverlayPhase::Closed => false,
		}
	}

	/// Closes (if needed), unmounts and forgets an overlay.
	pub fn destroy(&mut self, id: OverlayId, doc: &mut dyn Document) -> bool {
		self.close(id, doc, CloseReason::Destroyed);
		let Some(mut entry) = self.entries.remove(&id) else {
			return false;
		};
		if let Some(surface) = entry.surface.take() {
			doc.unmount_surface(surface);
			self.roots.release(doc, RootPurpose::Overlay);
		}
		tracing::debug!(overlay.id = %id, "overlay destroyed");
		true
	}

	/// Routes a document-level event to the overlays subscribed to its channel.
	pub fn handle_event(&mut self, event: HostEvent, doc: &mut dyn Document) -> EventOutcome {
		let outcome = match event {
			HostEvent::KeyDown(key) => self.on_key_down(key, doc),
			HostEvent::PointerDown(pointer) => self.on_pointer_down(pointer, doc),
			HostEvent::Scroll { .. } | HostEvent::Resize => {
				self.reposition_channel(event.channel(), doc);
				EventOutcome::Ignored
			}
		};
		self.scroll_lock.sync(doc);
		outcome
	}

	fn on_key_down(&mut self, key: KeyEvent, doc: &mut dyn Document) -> EventOutcome {
		match key.key {
			Key::Escape => {
				let Some(&top) = self.open_order.last() else {
					return EventOutcome::Ignored;
				};
				let closable = self.listeners.is_subscribed(top, ListenerKind::KeyDown)
					&& self.entries.get(&top).is_some_and(|e| e.request.close_on_escape);
				if !closable {
					return EventOutcome::Ignored;
				}
				self.close(top, doc, CloseReason::Escape);
				EventOutcome::Handled
			}
			Key::Tab => {
				let Some(scope) = self.focus.top() else {
					return EventOutcome::Ignored;
				};
				if !self.listeners.is_subscribed(scope.overlay, ListenerKind::KeyDown) {
					return EventOutcome::Ignored;
				}
				let focused = scope.cycle(doc, key.modifiers.shift);
				tracing::trace!(overlay.id = %scope.overlay, ?focused, shift = key.modifiers.shift, "focus trapped");
				EventOutcome::Handled
			}
			_ => EventOutcome::Ignored,
		}
	}

	fn on_pointer_down(&mut self, pointer: PointerEvent, doc: &mut dyn Document) -> EventOutcome {
		let subscribers = self.listeners.subscribers(ListenerKind::PointerDown);
		let mut dismissed: SmallVec<[OverlayId; 4]> = SmallVec::new();

		for (index, &id) in self.open_order.iter().enumerate().rev() {
			if !subscribers.contains(&id) {
				continue;
			}
			let Some(entry) = self.entries.get(&id) else {
				continue;
			};
			let inside = pointer.target.is_some_and(|target| {
				let in_self = entry.surface.is_some_and(|s| doc.contains(s, target));
				let in_anchor = entry.request.anchor.is_some_and(|a| doc.contains(a, target));
				let in_layer_above = self.open_order[index + 1..].iter().any(|above| {
					self.entries
						.get(above)
						.and_then(|e| e.surface)
						.is_some_and(|s| doc.contains(s, target))
				});
				in_self || in_anchor || in_layer_above
			});
			if !inside {
				dismissed.push(id);
			}
		}

		for &id in &dismissed {
			self.close(id, doc, CloseReason::OutsideInteraction);
		}
		if dismissed.is_empty() {
			EventOutcome::Ignored
		} else {
			EventOutcome::Handled
		}
	}

	fn reposition_channel(&mut self, kind: ListenerKind, doc: &dyn Document) {
		for id in self.listeners.subscribers(kind) {
			if let Some(entry) = self.entries.get_mut(&id)
				&& entry.phase.is_open()
			{
				reposition_entry(entry, id, doc, &mut self.events);
			}
		}
	}

	/// Recomputes the position of one open anchored overlay.
	///
	/// Call after the overlay's content changed size. Returns the position now
	/// in effect.
	pub fn reposition(&mut self, id: OverlayId, doc: &dyn Document) -> Option<Position> {
		let entry = self.entries.get_mut(&id)?;
		if !entry.phase.is_open() || entry.request.kind != OverlayKind::Anchored {
			return None;
		}
		Some(reposition_entry(entry, id, doc, &mut self.events))
	}

	/// Runs deferred tasks queued before this call. Returns how many ran.
	pub fn run_deferred(&mut self, doc: &mut dyn Document) -> usize {
		let batch = self.tasks.take_batch();
		let ran = batch.len();
		for queued in batch {
			match queued.task {
				DeferredTask::RestoreFocus { overlay, element } => self.restore_focus(overlay, element, doc),
			}
		}
		ran
	}

	fn restore_focus(&mut self, overlay: OverlayId, element: ElementId, doc: &mut dyn Document) {
		if !doc.is_connected(element) {
			tracing::debug!(overlay.id = %overlay, element = %element, "focus restore target no longer exists");
			return;
		}
		if let Some(top) = self.focus.top()
			&& !top.contains(doc, element)
		{
			tracing::debug!(overlay.id = %overlay, active = %top.overlay, "focus restore target outside active scope");
			return;
		}
		if doc.focus(element) {
			self.events.push(OverlayEvent::FocusRestored { id: overlay, element });
		}
	}

	pub fn has_deferred(&self) -> bool {
		!self.tasks.is_empty()
	}

	pub fn drain_events(&mut self) -> Vec<OverlayEvent> {
		std::mem::take(&mut self.events)
	}

	pub fn is_open(&self, id: OverlayId) -> bool {
		self.entries.get(&id).is_some_and(|e| e.phase.is_open())
	}

	pub fn phase(&self, id: OverlayId) -> Option<OverlayPhase> {
		self.entries.get(&id).map(|e| e.phase)
	}

	/// Last computed position of an anchored overlay.
	pub fn position(&self, id: OverlayId) -> Option<Position> {
		self.entries.get(&id).and_then(|e| e.position)
	}

	/// Mounted surface element of an overlay.
	pub fn surface(&self, id: OverlayId) -> Option<ElementId> {
		self.entries.get(&id).and_then(|e| e.surface)
	}

	pub fn request(&self, id: OverlayId) -> Option<&OpenRequest> {
		self.entries.get(&id).map(|e| &e.request)
	}

	/// Open overlays, bottom of the visual stack first.
	pub fn open_overlays(&self) -> &[OverlayId] {
		&self.open_order
	}

	pub fn focus_stack(&self) -> &FocusStack {
		&self.focus
	}

	pub fn scroll_lock(&self) -> &ScrollLock {
		&self.scroll_lock
	}

	pub fn listeners(&self) -> &ListenerRegistry {
		&self.listeners
	}

	pub fn render_roots(&self) -> &RenderRoots {
		&self.roots
	}

	pub fn defaults(&self) -> OverlayDefaults {
		self.defaults
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Drop for OverlayManager {
	fn drop(&mut self) {
		let held = self.entries.values().filter(|e| e.scroll_guard.is_some()).count();
		if held > 0 {
			tracing::warn!(held, "overlay manager dropped with scroll locks held; body overflow not restored");
		}
	}
}

fn reposition_entry(entry: &mut OverlayEntry, id: OverlayId, doc: &dyn Document, events: &mut Vec<OverlayEvent>) -> Position {
	let anchor = entry
		.request
		.anchor
		.filter(|&anchor| doc.is_connected(anchor))
		.and_then(|anchor| doc.bounding_rect(anchor));
	let overlay = entry
		.surface
		.and_then(|surface| doc.bounding_rect(surface))
		.map_or(Size::ZERO, |rect| rect.size());
	let position = entry
		.tracker
		.update(anchor, overlay, entry.placement, entry.offset, doc.viewport());
	entry.position = Some(position);
	events.push(OverlayEvent::Positioned { id, position });
	position
}

fn finish_close(entry: &mut OverlayEntry, id: OverlayId, doc: &mut dyn Document, roots: &RenderRoots, events: &mut Vec<OverlayEvent>) {
	entry.phase = OverlayPhase::Closed;
	entry.position = None;
	entry.tracker.reset();
	events.push(OverlayEvent::PhaseChanged {
		id,
		phase: OverlayPhase::Closed,
	});
	if entry.request.keep_mounted {
		return;
	}
	if let Some(surface) = entry.surface.take() {
		doc.unmount_surface(surface);
		roots.release(doc, RootPurpose::Overlay);
	}
}
