use veil_notifications::{Toast, ToastEvent, ToastPatch, ToastQueue, ToastRequest};
use veil_overlay::{
	CloseReason, Document, EventOutcome, OpenRequest, OverlayEvent, OverlayHandle, OverlayManager, RenderRoots, ScrollLock,
};
use veil_primitives::{HostEvent, OverlayId, ToastId};
use veil_runtime::Instant;

use crate::config::EngineConfig;

/// Overlay manager and toast queue sharing one set of render roots.
///
/// Every method runs to completion on the caller's thread. Work deferred to
/// "the next turn" (focus restoration, toast expiry) happens in
/// [`Engine::turn`].
#[derive(Debug)]
pub struct Engine {
	config: EngineConfig,
	roots: RenderRoots,
	overlays: OverlayManager,
	toasts: ToastQueue,
}

impl Default for Engine {
	fn default() -> Self {
		Self::new(EngineConfig::default())
	}
}

impl Engine {
	pub fn new(config: EngineConfig) -> Self {
		let roots = RenderRoots::new();
		let overlays = OverlayManager::with_context(roots.clone(), ScrollLock::new(), config.overlay_defaults());
		let toasts = ToastQueue::with_roots(roots.clone(), config.toasts.max_visible, config.toasts.position);
		Self {
			config,
			roots,
			overlays,
			toasts,
		}
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn render_roots(&self) -> &RenderRoots {
		&self.roots
	}

	pub fn overlays(&self) -> &OverlayManager {
		&self.overlays
	}

	pub fn overlays_mut(&mut self) -> &mut OverlayManager {
		&mut self.overlays
	}

	pub fn toast_queue(&self) -> &ToastQueue {
		&self.toasts
	}

	/// Creates and opens an overlay.
	pub fn open(&mut self, doc: &mut dyn Document, request: OpenRequest) -> OverlayHandle {
		self.overlays.request_open(request, doc)
	}

	pub fn close(&mut self, doc: &mut dyn Document, id: OverlayId) -> bool {
		self.overlays.close(id, doc, CloseReason::Explicit)
	}

	pub fn destroy(&mut self, doc: &mut dyn Document, id: OverlayId) -> bool {
		self.overlays.destroy(id, doc)
	}

	/// Dispatches a document-level event to the open overlays.
	pub fn handle_event(&mut self, doc: &mut dyn Document, event: HostEvent) -> EventOutcome {
		let outcome = self.overlays.handle_event(event, doc);
		tracing::trace!(?event, ?outcome, "host event dispatched");
		outcome
	}

	/// Runs one turn of the host loop: due toast timers, then the deferred
	/// tasks queued before this call.
	///
	/// Returns the number of timers and tasks that ran.
	pub fn turn(&mut self, doc: &mut dyn Document, now: Instant) -> usize {
		let expired = self.toasts.tick(now, doc);
		let deferred = self.overlays.run_deferred(doc);
		if expired + deferred > 0 {
			tracing::trace!(expired, deferred, "engine turn");
		}
		expired + deferred
	}

	/// Earliest instant at which [`Engine::turn`] has timer work to do.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.toasts.next_deadline()
	}

	/// Whether deferred tasks are waiting for the next turn.
	pub fn has_deferred(&self) -> bool {
		self.overlays.has_deferred()
	}

	/// A toast request carrying the configured default duration.
	pub fn toast(&self, title: impl Into<String>) -> ToastRequest {
		ToastRequest::new(title).duration(self.config.toasts.duration())
	}

	pub fn enqueue(&mut self, doc: &mut dyn Document, request: ToastRequest, now: Instant) -> ToastId {
		self.toasts.enqueue(request, now, doc)
	}

	pub fn update(&mut self, id: ToastId, patch: ToastPatch) -> bool {
		self.toasts.update(id, patch)
	}

	pub fn dismiss(&mut self, doc: &mut dyn Document, id: ToastId) -> bool {
		self.toasts.dismiss(id, doc)
	}

	pub fn dismiss_by_user(&mut self, doc: &mut dyn Document, id: ToastId) -> bool {
		self.toasts.dismiss_by_user(id, doc)
	}

	/// Queued toasts, oldest first.
	pub fn toasts(&self) -> &[Toast] {
		self.toasts.toasts()
	}

	pub fn visual_order(&self) -> Vec<&Toast> {
		self.toasts.visual_order()
	}

	pub fn drain_overlay_events(&mut self) -> Vec<OverlayEvent> {
		self.overlays.drain_events()
	}

	pub fn drain_toast_events(&mut self) -> Vec<ToastEvent> {
		self.toasts.drain_events()
	}
}
