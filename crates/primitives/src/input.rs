//! Host input events consumed by the overlay engine.

use serde::{Deserialize, Serialize};

use crate::geometry::Position;
use crate::ids::ElementId;

/// Logical key identity. Only keys the engine reacts to are distinguished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
	Tab,
	Escape,
	Enter,
	Char(char),
	/// Any key the engine does not interpret.
	Other,
}

/// Key modifiers (Ctrl, Alt, Shift, Meta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Meta (Cmd/Super) is held.
	pub meta: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
		meta: false,
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
		meta: false,
	};

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift && !self.meta
	}
}

/// A key press delivered at the document level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
	pub key: Key,
	pub modifiers: Modifiers,
}

impl KeyEvent {
	pub const fn new(key: Key, modifiers: Modifiers) -> Self {
		Self { key, modifiers }
	}

	pub const fn plain(key: Key) -> Self {
		Self::new(key, Modifiers::NONE)
	}

	pub const fn tab() -> Self {
		Self::plain(Key::Tab)
	}

	pub const fn shift_tab() -> Self {
		Self::new(Key::Tab, Modifiers::SHIFT)
	}

	pub const fn escape() -> Self {
		Self::plain(Key::Escape)
	}
}

/// A pointer press delivered at the document level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
	/// Element hit by the press, `None` when it landed on no element.
	pub target: Option<ElementId>,
	pub position: Position,
}

impl PointerEvent {
	pub const fn on(target: ElementId) -> Self {
		Self {
			target: Some(target),
			position: Position::new(0.0, 0.0),
		}
	}
}

/// Everything the host forwards to the engine's document-level listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
	KeyDown(KeyEvent),
	PointerDown(PointerEvent),
	/// A scroll on any element, observed in the capture phase.
	Scroll { target: Option<ElementId> },
	/// The viewport changed size.
	Resize,
}

impl HostEvent {
	/// Returns the listener channel this event is delivered on.
	pub const fn channel(&self) -> ListenerKind {
		match self {
			Self::KeyDown(_) => ListenerKind::KeyDown,
			Self::PointerDown(_) => ListenerKind::PointerDown,
			Self::Scroll { .. } => ListenerKind::Scroll,
			Self::Resize => ListenerKind::Resize,
		}
	}
}

/// Document-level listener channels an overlay can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListenerKind {
	KeyDown,
	PointerDown,
	/// Registered in capture mode so scrolls of any ancestor are observed.
	Scroll,
	Resize,
}
