use veil::{CloseReason, EventOutcome, HostEvent, KeyEvent, OpenRequest, OverlayEvent, PointerEvent};

use crate::common::page;

fn closed_reasons(events: Vec<OverlayEvent>) -> Vec<CloseReason> {
	events
		.into_iter()
		.filter_map(|event| match event {
			OverlayEvent::Closed { reason, .. } => Some(reason),
			_ => None,
		})
		.collect()
}

#[test]
fn escape_unwinds_the_stack_one_layer_at_a_time() {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	let surface = page.surface(modal.id());
	let menu_button = page.doc.create_element(surface, true);
	page.doc.set_rect(menu_button, veil::Rect::new(200.0, 200.0, 40.0, 20.0));
	let menu = page.engine.open(&mut page.doc, OpenRequest::anchored(menu_button));
	page.engine.drain_overlay_events();

	let escape = HostEvent::KeyDown(KeyEvent::escape());
	assert_eq!(page.engine.handle_event(&mut page.doc, escape), EventOutcome::Handled);
	assert!(!menu.is_open(page.engine.overlays()));
	assert!(modal.is_open(page.engine.overlays()));

	assert_eq!(page.engine.handle_event(&mut page.doc, escape), EventOutcome::Handled);
	assert!(!modal.is_open(page.engine.overlays()));
	assert_eq!(page.engine.handle_event(&mut page.doc, escape), EventOutcome::Ignored);

	assert_eq!(
		closed_reasons(page.engine.drain_overlay_events()),
		vec![CloseReason::Escape, CloseReason::Escape]
	);
}

#[test]
fn outside_click_closes_popover_but_not_clicks_on_anchor_or_content() {
	let mut page = page();
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	let surface = page.surface(popover.id());
	let link = page.doc.create_element(surface, true);

	for target in [page.anchor, surface, link] {
		page.engine.handle_event(&mut page.doc, HostEvent::PointerDown(PointerEvent::on(target)));
		assert!(popover.is_open(page.engine.overlays()));
	}

	page.engine.handle_event(&mut page.doc, HostEvent::PointerDown(PointerEvent::on(page.trigger)));
	assert!(!popover.is_open(page.engine.overlays()));
	assert_eq!(
		closed_reasons(page.engine.drain_overlay_events()),
		vec![CloseReason::OutsideInteraction]
	);
}

#[test]
fn click_with_no_target_counts_as_outside() {
	let mut page = page();
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	let pointer = PointerEvent {
		target: None,
		position: veil::Position::new(700.0, 900.0),
	};
	page.engine.handle_event(&mut page.doc, HostEvent::PointerDown(pointer));
	assert!(!popover.is_open(page.engine.overlays()));
}

#[test]
fn disabled_dismissal_paths_leave_overlay_open() {
	let mut page = page();
	let locked = page.engine.open(
		&mut page.doc,
		OpenRequest::blocking().close_on_escape(false).close_on_outside(false),
	);

	page.engine.handle_event(&mut page.doc, HostEvent::KeyDown(KeyEvent::escape()));
	page.engine.handle_event(&mut page.doc, HostEvent::PointerDown(PointerEvent::on(page.trigger)));
	assert!(locked.is_open(page.engine.overlays()));
	assert_eq!(page.engine.overlays().listeners().count_for(locked.id()), 1);

	assert!(locked.close(page.engine.overlays_mut(), &mut page.doc));
	assert!(page.engine.overlays().listeners().is_empty());
}

#[test]
fn destroy_closes_and_forgets_overlay() {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	assert!(page.engine.destroy(&mut page.doc, modal.id()));
	assert!(!modal.is_open(page.engine.overlays()));
	assert!(page.engine.overlays().is_empty());
	assert!(!page.engine.destroy(&mut page.doc, modal.id()));
	assert_eq!(
		closed_reasons(page.engine.drain_overlay_events()),
		vec![CloseReason::Destroyed]
	);
}
