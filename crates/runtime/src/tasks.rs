//! FIFO queue of deferred tasks (macrotasks).
//!
//! A task enqueued during turn N runs at the earliest in turn N + 1: each turn
//! takes a batch of what was queued before it started, so tasks enqueued while
//! the batch runs wait for the next turn.

use std::collections::VecDeque;

/// Queue entry carrying its sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedTask<T> {
	pub seq: u64,
	pub task: T,
}

/// FIFO queue for deferred tasks.
#[derive(Debug)]
pub struct TaskQueue<T> {
	seq_next: u64,
	queue: VecDeque<QueuedTask<T>>,
}

impl<T> Default for TaskQueue<T> {
	fn default() -> Self {
		Self {
			seq_next: 0,
			queue: VecDeque::new(),
		}
	}
}

impl<T> TaskQueue<T> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Enqueues one task and returns its sequence number.
	pub fn enqueue(&mut self, task: T) -> u64 {
		let seq = self.seq_next;
		self.seq_next = self.seq_next.wrapping_add(1);
		self.queue.push_back(QueuedTask { seq, task });
		seq
	}

	/// Takes every task queued so far, leaving the queue empty.
	pub fn take_batch(&mut self) -> VecDeque<QueuedTask<T>> {
		std::mem::take(&mut self.queue)
	}

	pub fn len(&self) -> usize {
		self.queue.len()
	}

	pub fn is_empty(&self) -> bool {
		self.queue.is_empty()
	}
}
