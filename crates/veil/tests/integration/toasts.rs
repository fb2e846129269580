use pretty_assertions::assert_eq;
use veil::{
	DismissReason, Duration, EngineConfig, Instant, RootPurpose, ToastEvent, ToastPatch, ToastPosition, ToastRequest, Variant,
};

use crate::common::{page, page_with};

#[test]
fn queue_scenario_with_cap_of_three() {
	let config = EngineConfig::from_toml_str("[toasts]\nmax-visible = 3").expect("valid config");
	let mut page = page_with(config);
	let now = Instant::now();

	let [_a, b, c, d] = ["A", "B", "C", "D"].map(|title| page.engine.enqueue(&mut page.doc, ToastRequest::new(title), now));
	let ids = |engine: &veil::Engine| engine.toasts().iter().map(|t| t.id).collect::<Vec<_>>();
	assert_eq!(ids(&page.engine), vec![b, c, d]);

	page.engine.dismiss(&mut page.doc, c);
	assert_eq!(ids(&page.engine), vec![b, d]);

	let e = page.engine.enqueue(&mut page.doc, ToastRequest::new("E"), now);
	assert_eq!(ids(&page.engine), vec![b, d, e]);
}

#[test]
fn configured_duration_expires_toasts_on_turn() {
	let config = EngineConfig::from_toml_str("[toasts]\nduration-ms = 1500\nposition = \"top-right\"").expect("valid config");
	let mut page = page_with(config);
	let now = Instant::now();
	let request = page.engine.toast("Saved").variant(Variant::Success);
	let saved = page.engine.enqueue(&mut page.doc, request, now);
	let sticky = page.engine.enqueue(&mut page.doc, ToastRequest::new("Offline").variant(Variant::Warning), now);

	let order: Vec<_> = page.engine.visual_order().iter().map(|t| t.id).collect();
	assert_eq!(order, vec![sticky, saved]);

	assert_eq!(page.engine.turn(&mut page.doc, now + Duration::from_millis(1499)), 0);
	assert_eq!(page.engine.turn(&mut page.doc, now + Duration::from_millis(1500)), 1);
	assert_eq!(page.engine.toasts().len(), 1);
	assert!(page.engine.drain_toast_events().contains(&ToastEvent::Dismissed {
		id: saved,
		reason: DismissReason::Expired,
	}));
	assert_eq!(page.engine.toast_queue().position(), ToastPosition::TopRight);
}

#[test]
fn update_changes_content_but_not_expiry() {
	let mut page = page();
	let now = Instant::now();
	let id = page.engine.enqueue(
		&mut page.doc,
		ToastRequest::new("Uploading").duration(Duration::from_secs(3)),
		now,
	);
	assert!(page.engine.update(id, ToastPatch::default().title("Uploaded").action("Open")));

	let toast = &page.engine.toasts()[0];
	assert_eq!(toast.content.title.as_deref(), Some("Uploaded"));
	assert_eq!(toast.content.action.as_deref(), Some("Open"));
	assert_eq!(page.engine.next_deadline(), Some(now + Duration::from_secs(3)));
}

#[test]
fn notification_and_overlay_roots_are_independent() {
	let mut page = page();
	let now = Instant::now();
	let popover = page.engine.open(&mut page.doc, veil::OpenRequest::anchored(page.anchor));
	let toast = page.engine.enqueue(&mut page.doc, ToastRequest::new("hi"), now);
	assert_eq!(page.doc.roots(RootPurpose::Overlay).len(), 1);
	assert_eq!(page.doc.roots(RootPurpose::Notifications).len(), 1);

	page.engine.close(&mut page.doc, popover.id());
	assert!(page.doc.roots(RootPurpose::Overlay).is_empty());
	assert_eq!(page.doc.roots(RootPurpose::Notifications).len(), 1);

	assert!(page.engine.dismiss_by_user(&mut page.doc, toast));
	assert!(page.doc.roots(RootPurpose::Notifications).is_empty());
}
