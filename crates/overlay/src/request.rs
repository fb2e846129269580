use veil_placement::Placement;
use veil_primitives::ElementId;

/// Kind of overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
	/// Positioned relative to an anchor (popover); does not block the page.
	Anchored,
	/// Modal or dialog; traps focus and locks background scroll by default.
	Blocking,
}

/// Parameters of an open request.
///
/// `placement`, `offset` and `animated` left unset take the manager's
/// [`crate::OverlayDefaults`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpenRequest {
	pub kind: OverlayKind,
	pub anchor: Option<ElementId>,
	pub placement: Option<Placement>,
	pub offset: Option<f64>,
	pub close_on_escape: bool,
	pub close_on_outside: bool,
	pub return_focus: bool,
	pub trap_focus: bool,
	pub block_scroll: bool,
	/// Keep the surface mounted after close so the overlay can be reopened cheaply.
	pub keep_mounted: bool,
	/// Wait for [`crate::OverlayManager::transition_finished`] between phases.
	pub animated: Option<bool>,
}

impl OpenRequest {
	/// A popover anchored to `anchor`.
	pub fn anchored(anchor: ElementId) -> Self {
		Self {
			kind: OverlayKind::Anchored,
			anchor: Some(anchor),
			placement: None,
			offset: None,
			close_on_escape: true,
			close_on_outside: true,
			return_focus: false,
			trap_focus: false,
			block_scroll: false,
			keep_mounted: false,
			animated: None,
		}
	}

	/// A modal surface.
	pub fn blocking() -> Self {
		Self {
			kind: OverlayKind::Blocking,
			anchor: None,
			placement: None,
			offset: None,
			close_on_escape: true,
			close_on_outside: true,
			return_focus: true,
			trap_focus: true,
			block_scroll: true,
			keep_mounted: false,
			animated: None,
		}
	}

	/// A dialog. Dismissal and focus behave exactly as [`OpenRequest::blocking`];
	/// the smaller surface is a renderer concern.
	pub fn dialog() -> Self {
		Self::blocking()
	}

	pub fn placement(mut self, placement: Placement) -> Self {
		self.placement = Some(placement);
		self
	}

	pub fn offset(mut self, offset: f64) -> Self {
		self.offset = Some(offset);
		self
	}

	pub fn anchor(mut self, anchor: ElementId) -> Self {
		self.anchor = Some(anchor);
		self
	}

	pub fn close_on_escape(mut self, enabled: bool) -> Self {
		self.close_on_escape = enabled;
		self
	}

	pub fn close_on_outside(mut self, enabled: bool) -> Self {
		self.close_on_outside = enabled;
		self
	}

	pub fn return_focus(mut self, enabled: bool) -> Self {
		self.return_focus = enabled;
		self
	}

	pub fn trap_focus(mut self, enabled: bool) -> Self {
		self.trap_focus = enabled;
		self
	}

	pub fn block_scroll(mut self, enabled: bool) -> Self {
		self.block_scroll = enabled;
		self
	}

	pub fn keep_mounted(mut self, enabled: bool) -> Self {
		self.keep_mounted = enabled;
		self
	}

	pub fn animated(mut self, enabled: bool) -> Self {
		self.animated = Some(enabled);
		self
	}
}
