//! Focus scopes for blocking overlays.
//!
//! Scopes form a stack: the most recently opened scope is the only one that
//! reacts to Tab. Within the top scope every Tab and Shift+Tab is performed
//! by the engine over the freshly computed focusable list, so focus cannot
//! leave the overlay while it is open.

use veil_primitives::{ElementId, OverlayId};

use crate::document::Document;

/// Focus state of one open blocking overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusScope {
	pub overlay: OverlayId,
	/// Boundary of the scope, also the fallback focus target.
	pub container: ElementId,
	/// Element focused just before the overlay opened, captured once.
	pub restore_to: Option<ElementId>,
}

impl FocusScope {
	/// Captures the current focus and creates a scope bounded by `container`.
	pub fn capture(doc: &dyn Document, overlay: OverlayId, container: ElementId) -> Self {
		Self {
			overlay,
			container,
			restore_to: doc.active_element(),
		}
	}

	/// Focuses the first focusable element, or the container when there is none.
	pub fn focus_initial(&self, doc: &mut dyn Document) -> Option<ElementId> {
		let target = doc
			.focusable_within(self.container)
			.first()
			.copied()
			.unwrap_or(self.container);
		doc.focus(target).then_some(target)
	}

	/// Moves focus one step forward (or backward with `shift`), wrapping at the ends.
	///
	/// The focusable list is recomputed on every call since content may change
	/// while the overlay is open. Focus outside the list enters at the first
	/// element (or the last one with `shift`).
	pub fn cycle(&self, doc: &mut dyn Document, shift: bool) -> Option<ElementId> {
		let focusables = doc.focusable_within(self.container);
		let Some(last) = focusables.len().checked_sub(1) else {
			return doc.focus(self.container).then_some(self.container);
		};
		let current = doc
			.active_element()
			.and_then(|active| focusables.iter().position(|&el| el == active));
		let next = match (current, shift) {
			(None, false) => 0,
			(None, true) => last,
			(Some(i), false) if i == last => 0,
			(Some(i), false) => i + 1,
			(Some(0), true) => last,
			(Some(i), true) => i - 1,
		};
		let target = focusables[next];
		doc.focus(target).then_some(target)
	}

	/// Whether `element` lies inside the scope boundary.
	pub fn contains(&self, doc: &dyn Document, element: ElementId) -> bool {
		doc.contains(self.container, element)
	}
}

/// Ordered stack of active focus scopes, oldest first.
#[derive(Debug, Default, Clone)]
pub struct FocusStack {
	scopes: Vec<FocusScope>,
}

impl FocusStack {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pushes a scope. A second scope for the same overlay replaces the first.
	pub fn push(&mut self, scope: FocusScope) {
		self.scopes.retain(|s| s.overlay != scope.overlay);
		self.scopes.push(scope);
	}

	/// Removes the scope of `overlay` wherever it sits in the stack.
	pub fn remove(&mut self, overlay: OverlayId) -> Option<FocusScope> {
		let index = self.scopes.iter().position(|s| s.overlay == overlay)?;
		Some(self.scopes.remove(index))
	}

	pub fn top(&self) -> Option<&FocusScope> {
		self.scopes.last()
	}

	pub fn is_top(&self, overlay: OverlayId) -> bool {
		self.top().is_some_and(|s| s.overlay == overlay)
	}

	pub fn len(&self) -> usize {
		self.scopes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.scopes.is_empty()
	}
}
