use tokio::sync::mpsc;
use veil::driver::{self, Command, DriverReport};
use veil::{Document, Duration, EngineConfig, HostEvent, Instant, KeyEvent, OpenRequest, ToastRequest};

use crate::common::page_with;

#[tokio::test(start_paused = true)]
async fn driver_expires_toasts_and_dispatches_events() {
	let config = EngineConfig::from_toml_str("[toasts]\nduration-ms = 2000").expect("valid config");
	let mut page = page_with(config);
	let toast = page.engine.toast("Saved");
	page.engine.enqueue(&mut page.doc, toast, Instant::now());
	page.engine.enqueue(&mut page.doc, ToastRequest::new("Pinned"), Instant::now());
	let modal = page.engine.open(&mut page.doc, OpenRequest::blocking());

	let (tx, rx) = mpsc::channel::<Command>(8);
	let feeder = async move {
		tokio::time::sleep(std::time::Duration::from_secs(5)).await;
		tx.send(HostEvent::KeyDown(KeyEvent::escape()).into()).await.expect("driver is running");
	};
	let (report, ()) = tokio::join!(driver::run(&mut page.engine, &mut page.doc, rx), feeder);

	assert_eq!(report.events, 1);
	assert!(report.turns >= 3);
	assert_eq!(page.engine.toasts().len(), 1);
	assert!(!modal.is_open(page.engine.overlays()));
	assert_eq!(page.doc.active_element(), Some(page.trigger));
}

#[tokio::test]
async fn driver_returns_when_channel_closes() {
	let mut page = page_with(EngineConfig::default());
	let (tx, rx) = mpsc::channel(1);
	drop(tx);
	let report = driver::run(&mut page.engine, &mut page.doc, rx).await;
	assert_eq!(report, DriverReport { events: 0, turns: 1 });
}

#[tokio::test(start_paused = true)]
async fn driver_applies_commands_sent_while_running() {
	let mut page = page_with(EngineConfig::default());
	let (tx, rx) = mpsc::channel::<Command>(8);
	let feeder = async move {
		tx.send(Command::Toast(ToastRequest::new("Uploading").duration(Duration::from_secs(1))))
			.await
			.expect("driver is running");
		tx.send(Command::Toast(ToastRequest::new("Forever").duration(Duration::MAX)))
			.await
			.expect("driver is running");
		tx.send(Command::Open(OpenRequest::blocking())).await.expect("driver is running");
		tokio::time::sleep(std::time::Duration::from_secs(3)).await;
	};
	let (report, ()) = tokio::join!(driver::run(&mut page.engine, &mut page.doc, rx), feeder);

	assert_eq!(report.events, 3);
	let titles: Vec<_> = page.engine.toasts().iter().map(|t| t.content.title.as_deref()).collect();
	assert_eq!(titles, [Some("Forever")]);
	assert_eq!(page.engine.overlays().open_overlays().len(), 1);
}
