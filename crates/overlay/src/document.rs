//! Host document abstraction.

use serde::{Deserialize, Serialize};
use veil_primitives::{ElementId, OverlayId, Rect};

/// Purpose of a detached render root. Each purpose gets its own container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootPurpose {
	/// Popovers, modals and dialogs.
	Overlay,
	/// The notification (toast) container.
	Notifications,
}

impl RootPurpose {
	/// Stable container name, usable as a DOM id.
	pub const fn container_name(self) -> &'static str {
		match self {
			Self::Overlay => "overlay-container",
			Self::Notifications => "toast-container",
		}
	}
}

/// Scroll behavior of the document body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Overflow {
	#[default]
	Visible,
	Auto,
	Scroll,
	Hidden,
	Clip,
}

/// Everything the overlay engine needs from the host document.
///
/// Implementations must be cheap to query: the engine calls these from
/// inside event dispatch.
pub trait Document {
	/// Visible viewport in the same coordinate space as [`Document::bounding_rect`].
	fn viewport(&self) -> Rect;

	/// Bounding rectangle of a connected element, `None` when detached.
	fn bounding_rect(&self, element: ElementId) -> Option<Rect>;

	/// Whether the element is currently attached to the document tree.
	fn is_connected(&self, element: ElementId) -> bool;

	/// Inclusive containment: an element contains itself.
	fn contains(&self, ancestor: ElementId, node: ElementId) -> bool;

	/// Element that currently holds input focus.
	fn active_element(&self) -> Option<ElementId>;

	/// Moves input focus. Returns `false` if the element cannot take focus.
	fn focus(&mut self, element: ElementId) -> bool;

	/// Focusable descendants of `root` in tab order, excluding `root` itself.
	fn focusable_within(&self, root: ElementId) -> Vec<ElementId>;

	fn body_overflow(&self) -> Overflow;

	fn set_body_overflow(&mut self, overflow: Overflow);

	/// Creates an empty container attached directly to the document body.
	fn create_root(&mut self, purpose: RootPurpose) -> ElementId;

	/// Detaches and discards a container created by [`Document::create_root`].
	fn remove_root(&mut self, root: ElementId);

	/// Creates the surface element of `overlay` inside `root` and returns it.
	fn mount_surface(&mut self, root: ElementId, overlay: OverlayId) -> ElementId;

	/// Removes a surface created by [`Document::mount_surface`].
	fn unmount_surface(&mut self, surface: ElementId);
}
