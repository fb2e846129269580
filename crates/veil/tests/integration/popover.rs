use pretty_assertions::assert_eq;
use veil::{EngineConfig, HostEvent, OpenRequest, OverlayEvent, Placement, Position, Rect};

use crate::common::{page, page_with};

fn positions(events: Vec<OverlayEvent>) -> Vec<Position> {
	events
		.into_iter()
		.filter_map(|event| match event {
			OverlayEvent::Positioned { position, .. } => Some(position),
			_ => None,
		})
		.collect()
}

#[test]
fn bottom_placement_centers_under_anchor() {
	let mut page = page();
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	let surface = page.surface(popover.id());
	page.doc.set_rect(surface, Rect::new(0.0, 0.0, 120.0, 40.0));

	let position = page.engine.overlays_mut().reposition(popover.id(), &page.doc);
	assert_eq!(position, Some(Position::new(128.0, 65.0)));
}

#[test]
fn scroll_and_resize_track_the_anchor() {
	let mut page = page();
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor).placement(Placement::RightStart));
	let surface = page.surface(popover.id());
	page.doc.set_rect(surface, Rect::new(0.0, 0.0, 100.0, 60.0));
	page.engine.drain_overlay_events();

	page.doc.set_rect(page.anchor, Rect::new(100.0, 40.0, 50.0, 20.0));
	page.engine.handle_event(&mut page.doc, HostEvent::Scroll { target: None });
	page.doc.set_rect(page.anchor, Rect::new(980.0, 40.0, 30.0, 20.0));
	page.engine.handle_event(&mut page.doc, HostEvent::Resize);

	assert_eq!(
		positions(page.engine.drain_overlay_events()),
		vec![Position::new(40.0, 158.0), Position::new(40.0, 914.0)]
	);
}

#[test]
fn removed_anchor_keeps_last_position_until_close() {
	let mut page = page();
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	let surface = page.surface(popover.id());
	page.doc.set_rect(surface, Rect::new(0.0, 0.0, 120.0, 40.0));
	page.engine.handle_event(&mut page.doc, HostEvent::Resize);
	let before = page.engine.overlays().position(popover.id());
	assert!(before.is_some());

	page.doc.detach(page.anchor);
	page.engine.handle_event(&mut page.doc, HostEvent::Scroll { target: None });
	page.doc.set_viewport(Rect::new(0.0, 0.0, 400.0, 300.0));
	page.engine.handle_event(&mut page.doc, HostEvent::Resize);
	assert_eq!(page.engine.overlays().position(popover.id()), before);
	assert!(popover.is_open(page.engine.overlays()));

	page.engine.close(&mut page.doc, popover.id());
	assert_eq!(page.engine.overlays().position(popover.id()), None);
}

#[test]
fn zero_size_anchor_falls_back_to_viewport_corner() {
	let mut page = page();
	page.doc.set_rect(page.anchor, Rect::new(300.0, 300.0, 0.0, 0.0));
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	assert_eq!(page.engine.overlays().position(popover.id()), Some(Position::new(10.0, 10.0)));
}

#[test]
fn configured_defaults_apply_to_requests_without_overrides() {
	let config = EngineConfig::from_toml_str("[placement]\nplacement = \"top-start\"\noffset = 4").expect("valid config");
	let mut page = page_with(config);
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	let surface = page.surface(popover.id());
	page.doc.set_rect(surface, Rect::new(0.0, 0.0, 120.0, 40.0));

	let position = page.engine.overlays_mut().reposition(popover.id(), &page.doc);
	assert_eq!(position, Some(Position::new(56.0, 100.0)));
}
