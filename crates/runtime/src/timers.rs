//! Cancellable one-shot timers ordered by deadline.
//!
//! Each scheduled timer gets a fresh [`TimerToken`]. Cancelling removes the
//! entry, so a token that was cancelled (or already fired) can never fire
//! again; owners compare tokens to reject stale payloads.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use web_time::Instant;

/// Identity of one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
	pub const fn get(self) -> u64 {
		self.0
	}
}

/// Deadline-ordered set of pending one-shot timers.
///
/// Timers sharing a deadline fire in scheduling order.
#[derive(Debug)]
pub struct TimerQueue<T> {
	seq: u64,
	pending: BTreeMap<(Instant, u64), T>,
	deadlines: FxHashMap<u64, Instant>,
}

impl<T> Default for TimerQueue<T> {
	fn default() -> Self {
		Self {
			seq: 0,
			pending: BTreeMap::new(),
			deadlines: FxHashMap::default(),
		}
	}
}

impl<T> TimerQueue<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Schedules `payload` to come due at `deadline`.
	pub fn schedule(&mut self, deadline: Instant, payload: T) -> TimerToken {
		self.seq = self.seq.wrapping_add(1);
		let seq = self.seq;
		self.pending.insert((deadline, seq), payload);
		self.deadlines.insert(seq, deadline);
		TimerToken(seq)
	}

	/// Cancels a pending timer, returning its payload.
	///
	/// Returns `None` if the timer already fired or was cancelled before.
	pub fn cancel(&mut self, token: TimerToken) -> Option<T> {
		let deadline = self.deadlines.remove(&token.0)?;
		self.pending.remove(&(deadline, token.0))
	}

	pub fn is_pending(&self, token: TimerToken) -> bool {
		self.deadlines.contains_key(&token.0)
	}

	/// Earliest pending deadline, used by drivers to decide how long to sleep.
	pub fn next_deadline(&self) -> Option<Instant> {
		self.pending.keys().next().map(|(deadline, _)| *deadline)
	}

	/// Removes and returns the earliest timer whose deadline is `<= now`.
	pub fn pop_due(&mut self, now: Instant) -> Option<(TimerToken, T)> {
		let (&(deadline, seq), _) = self.pending.first_key_value()?;
		if deadline > now {
			return None;
		}
		let payload = self.pending.remove(&(deadline, seq))?;
		self.deadlines.remove(&seq);
		Some((TimerToken(seq), payload))
	}

	/// Removes every timer due at `now`, in firing order.
	pub fn drain_due(&mut self, now: Instant) -> Vec<(TimerToken, T)> {
		let mut due = Vec::new();
		while let Some(fired) = self.pop_due(now) {
			due.push(fired);
		}
		if !due.is_empty() {
			tracing::trace!(count = due.len(), remaining = self.pending.len(), "timers fired");
		}
		due
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}
}
