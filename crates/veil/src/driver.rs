//! Tokio loop driving an [`Engine`] from a channel of [`Command`]s.
//!
//! The loop owns the engine for as long as it runs, so everything the host
//! wants done in the meantime goes through the channel: host events as well
//! as opening overlays and posting toasts. Callers that need the
//! [`OverlayHandle`](veil_overlay::OverlayHandle) returned by
//! [`Engine::open`] open before starting the loop and send
//! [`Command::Close`] later.
//!
//! The engine keeps time in [`veil_runtime::Instant`]; the loop maps it onto
//! the tokio clock so timers honour paused time in tests.

use tokio::sync::mpsc;
use veil_notifications::{ToastPatch, ToastRequest};
use veil_overlay::{Document, OpenRequest};
use veil_primitives::{HostEvent, OverlayId, ToastId};
use veil_runtime::Instant;

use crate::engine::Engine;

/// Work submitted to a running [`run`] loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
	/// Document-level event, see [`Engine::handle_event`].
	Event(HostEvent),
	Open(OpenRequest),
	Close(OverlayId),
	/// Posts a toast stamped with the loop's current time.
	Toast(ToastRequest),
	Update(ToastId, ToastPatch),
	Dismiss(ToastId),
}

impl From<HostEvent> for Command {
	fn from(event: HostEvent) -> Self {
		Self::Event(event)
	}
}

/// Counters for one [`run`] invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DriverReport {
	/// Commands received, host events included.
	pub events: usize,
	pub turns: usize,
}

#[derive(Debug, Clone, Copy)]
struct Clock {
	engine: Instant,
	tokio: tokio::time::Instant,
}

impl Clock {
	fn start() -> Self {
		Self {
			engine: Instant::now(),
			tokio: tokio::time::Instant::now(),
		}
	}

	fn now(&self) -> Instant {
		self.engine + self.tokio.elapsed()
	}

	/// `None` when the deadline lies beyond what the tokio clock can hold.
	fn to_tokio(&self, deadline: Instant) -> Option<tokio::time::Instant> {
		self.tokio.checked_add(deadline.saturating_duration_since(self.engine))
	}
}

fn apply(engine: &mut Engine, doc: &mut dyn Document, command: Command, now: Instant) {
	match command {
		Command::Event(event) => {
			engine.handle_event(doc, event);
		}
		Command::Open(request) => {
			let handle = engine.open(doc, request);
			tracing::trace!(overlay.id = %handle.id(), "overlay opened from driver");
		}
		Command::Close(id) => {
			engine.close(doc, id);
		}
		Command::Toast(request) => {
			engine.enqueue(doc, request, now);
		}
		Command::Update(id, patch) => {
			engine.update(id, patch);
		}
		Command::Dismiss(id) => {
			engine.dismiss(doc, id);
		}
	}
}

/// Runs the engine until `commands` closes.
///
/// Every iteration runs one [`Engine::turn`], then waits for the next
/// command or the next timer deadline, whichever comes first.
pub async fn run(engine: &mut Engine, doc: &mut dyn Document, mut commands: mpsc::Receiver<Command>) -> DriverReport {
	let clock = Clock::start();
	let mut report = DriverReport::default();

	loop {
		engine.turn(doc, clock.now());
		report.turns += 1;

		let command = match engine.next_deadline().and_then(|deadline| clock.to_tokio(deadline)) {
			Some(deadline) => {
				tokio::select! {
					biased;
					command = commands.recv() => command,
					() = tokio::time::sleep_until(deadline) => continue,
				}
			}
			None if engine.has_deferred() => continue,
			None => commands.recv().await,
		};
		let Some(command) = command else {
			break;
		};
		apply(engine, doc, command, clock.now());
		report.events += 1;
	}

	tracing::debug!(events = report.events, turns = report.turns, "engine driver stopped");
	report
}
