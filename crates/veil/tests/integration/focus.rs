use pretty_assertions::assert_eq;
use rstest::rstest;
use veil::{HostEvent, Instant, KeyEvent, OpenRequest};

use crate::common::page;

#[rstest]
#[case::no_focusables(0)]
#[case::single_focusable(1)]
#[case::several_focusables(5)]
fn tab_keeps_focus_inside_modal(#[case] count: usize) {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	let surface = page.surface(modal.id());
	let items = page.doc.create_focusables(surface, count);

	let presses = [KeyEvent::tab(), KeyEvent::tab(), KeyEvent::shift_tab()]
		.into_iter()
		.cycle()
		.take(3 * (count + 2));
	for key in presses {
		let outcome = page.engine.handle_event(&mut page.doc, HostEvent::KeyDown(key));
		assert!(outcome.is_handled());
		let active = page.active().expect("something is focused");
		assert!(
			active == surface || items.contains(&active),
			"focus escaped to {active}"
		);
	}
}

#[test]
fn tab_order_wraps_forward_and_backward() {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	let surface = page.surface(modal.id());
	let items = page.doc.create_focusables(surface, 3);

	let mut visited = Vec::new();
	for _ in 0..4 {
		page.engine.handle_event(&mut page.doc, HostEvent::KeyDown(KeyEvent::tab()));
		visited.extend(page.active());
	}
	assert_eq!(visited, vec![items[0], items[1], items[2], items[0]]);

	page.engine.handle_event(&mut page.doc, HostEvent::KeyDown(KeyEvent::shift_tab()));
	assert_eq!(page.active(), Some(items[2]));
}

#[test]
fn focus_returns_to_trigger_on_the_next_turn() {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	assert_ne!(page.active(), Some(page.trigger));

	page.engine.close(&mut page.doc, modal.id());
	assert_ne!(page.active(), Some(page.trigger));
	page.engine.turn(&mut page.doc, Instant::now());
	assert_eq!(page.active(), Some(page.trigger));
}

#[test]
fn trigger_removed_and_readded_before_restore_still_gets_focus() {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	let body = page.doc.body();
	page.doc.detach(page.trigger);
	page.engine.close(&mut page.doc, modal.id());
	page.doc.attach(body, page.trigger);

	page.engine.turn(&mut page.doc, Instant::now());
	assert_eq!(page.active(), Some(page.trigger));
}

#[test]
fn trigger_removed_for_good_is_skipped() {
	let mut page = page();
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());
	page.doc.detach(page.trigger);
	page.engine.close(&mut page.doc, modal.id());

	let focus_moves = page.doc.focus_moves();
	page.engine.turn(&mut page.doc, Instant::now());
	assert_eq!(page.active(), None);
	assert_eq!(page.doc.focus_moves(), focus_moves);
}

#[test]
fn nested_modals_restore_focus_layer_by_layer() {
	let mut page = page();
	let outer = page.engine.open(&mut page.doc, OpenRequest::blocking());
	let outer_surface = page.surface(outer.id());
	let confirm = page.doc.create_element(outer_surface, true);
	page.engine.handle_event(&mut page.doc, HostEvent::KeyDown(KeyEvent::tab()));
	assert_eq!(page.active(), Some(confirm));

	let inner = page.engine.open(&mut page.doc, OpenRequest::dialog());
	assert_eq!(page.engine.overlays().focus_stack().len(), 2);
	assert!(page.engine.overlays().focus_stack().is_top(inner.id()));

	page.engine.close(&mut page.doc, inner.id());
	page.engine.turn(&mut page.doc, Instant::now());
	assert_eq!(page.active(), Some(confirm));

	page.engine.close(&mut page.doc, outer.id());
	page.engine.turn(&mut page.doc, Instant::now());
	assert_eq!(page.active(), Some(page.trigger));
}
