use proptest::prelude::*;
use veil::{Document, Engine, EngineConfig, HeadlessDocument, OpenRequest, Overflow, Rect};

use crate::common::{VIEWPORT, page};

#[test]
fn popovers_do_not_lock_scroll() {
	let mut page = page();
	let popover = page.engine.open(&mut page.doc, OpenRequest::anchored(page.anchor));
	assert_eq!(page.doc.body_overflow(), Overflow::Visible);
	assert!(!page.engine.overlays().scroll_lock().is_locked());
	page.engine.close(&mut page.doc, popover.id());
}

#[test]
fn unlocked_modal_leaves_body_alone() {
	let mut page = page();
	page.engine.open(&mut page.doc, OpenRequest::blocking().block_scroll(false));
	assert_eq!(page.doc.body_overflow(), Overflow::Visible);
}

#[test]
fn lock_survives_until_the_last_modal_closes() {
	let mut page = page();
	page.doc.set_body_overflow(Overflow::Scroll);
	let first = page.engine.open(&mut page.doc, OpenRequest::blocking());
	let second = page.engine.open(&mut page.doc, OpenRequest::dialog());
	assert_eq!(page.engine.overlays().scroll_lock().count(), 2);

	page.engine.close(&mut page.doc, first.id());
	assert_eq!(page.doc.body_overflow(), Overflow::Hidden);
	page.engine.close(&mut page.doc, second.id());
	assert_eq!(page.doc.body_overflow(), Overflow::Scroll);
}

fn overflow() -> impl Strategy<Value = Overflow> {
	prop_oneof![
		Just(Overflow::Visible),
		Just(Overflow::Auto),
		Just(Overflow::Scroll),
		Just(Overflow::Clip),
	]
}

proptest! {
	#[test]
	fn any_close_order_restores_original_overflow(
		original in overflow(),
		order in (1usize..6).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle()),
	) {
		let mut doc = HeadlessDocument::new(VIEWPORT);
		doc.set_body_overflow(original);
		let mut engine = Engine::new(EngineConfig::default());
		let handles: Vec<_> = order.iter().map(|_| engine.open(&mut doc, OpenRequest::blocking())).collect();
		prop_assert_eq!(doc.body_overflow(), Overflow::Hidden);

		let (last, rest) = order.split_last().expect("at least one modal");
		for &index in rest {
			prop_assert!(engine.close(&mut doc, handles[index].id()));
			prop_assert_eq!(doc.body_overflow(), Overflow::Hidden);
		}
		prop_assert!(engine.close(&mut doc, handles[*last].id()));
		prop_assert_eq!(doc.body_overflow(), original);
		prop_assert_eq!(engine.overlays().scroll_lock().count(), 0);
		prop_assert!(!engine.close(&mut doc, handles[*last].id()));
		prop_assert_eq!(doc.body_overflow(), original);
	}
}

#[test]
fn viewport_resize_does_not_touch_lock() {
	let mut page = page();
	page.engine.open(&mut page.doc, OpenRequest::blocking());
	page.doc.set_viewport(Rect::new(0.0, 0.0, 320.0, 480.0));
	page.engine.handle_event(&mut page.doc, veil::HostEvent::Resize);
	assert_eq!(page.doc.body_overflow(), Overflow::Hidden);
}
