//! Shared page fixture for engine integration tests.

use veil::{Document, ElementId, Engine, EngineConfig, HeadlessDocument, Rect};

pub const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

/// A page with a focused trigger button and a separate anchor element.
pub struct Page {
	pub doc: HeadlessDocument,
	pub engine: Engine,
	pub trigger: ElementId,
	pub anchor: ElementId,
}

pub fn page() -> Page {
	page_with(EngineConfig::default())
}

pub fn page_with(config: EngineConfig) -> Page {
	let _ = tracing_subscriber::fmt::try_init();
	let mut doc = HeadlessDocument::new(VIEWPORT);
	let trigger = doc.create_element(doc.body(), true);
	let anchor = doc.create_element(doc.body(), true);
	doc.set_rect(trigger, Rect::new(20.0, 20.0, 80.0, 24.0));
	doc.set_rect(anchor, Rect::new(100.0, 100.0, 50.0, 20.0));
	doc.focus(trigger);
	Page {
		doc,
		engine: Engine::new(config),
		trigger,
		anchor,
	}
}

impl Page {
	/// Surface element of an open overlay.
	pub fn surface(&self, id: veil::OverlayId) -> ElementId {
		self.engine.overlays().surface(id).expect("overlay surface is mounted")
	}

	pub fn active(&self) -> Option<ElementId> {
		self.doc.active_element()
	}
}
