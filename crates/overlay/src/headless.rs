//! In-memory [`Document`] for hosts without a DOM and for tests.

use rustc_hash::FxHashMap;
use veil_primitives::{ElementId, IdGen, OverlayId, Rect};

use crate::document::{Document, Overflow, RootPurpose};

#[derive(Debug, Clone)]
struct Node {
	parent: Option<ElementId>,
	children: Vec<ElementId>,
	focusable: bool,
	rect: Rect,
	label: NodeLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeLabel {
	Body,
	Element,
	Root(RootPurpose),
	Surface(OverlayId),
}

/// A minimal element tree with focus, geometry and body overflow.
///
/// Elements keep their id when detached, so removing and re-inserting an
/// element preserves its identity.
#[derive(Debug, Clone)]
pub struct HeadlessDocument {
	ids: IdGen,
	nodes: FxHashMap<ElementId, Node>,
	body: ElementId,
	active: Option<ElementId>,
	viewport: Rect,
	overflow: Overflow,
	focus_moves: usize,
}

impl HeadlessDocument {
	pub fn new(viewport: Rect) -> Self {
		let mut ids = IdGen::new();
		let body = ElementId(ids.next_raw());
		let mut nodes = FxHashMap::default();
		nodes.insert(
			body,
			Node {
				parent: None,
				children: Vec::new(),
				focusable: false,
				rect: viewport,
				label: NodeLabel::Body,
			},
		);
		Self {
			ids,
			nodes,
			body,
			active: None,
			viewport,
			overflow: Overflow::default(),
			focus_moves: 0,
		}
	}

	pub const fn body(&self) -> ElementId {
		self.body
	}

	/// Appends a new element under `parent`.
	pub fn create_element(&mut self, parent: ElementId, focusable: bool) -> ElementId {
		let id = self.alloc(Some(parent), focusable, NodeLabel::Element);
		if let Some(node) = self.nodes.get_mut(&parent) {
			node.children.push(id);
		}
		id
	}

	/// Appends `count` focusable elements under `parent`.
	pub fn create_focusables(&mut self, parent: ElementId, count: usize) -> Vec<ElementId> {
		(0..count).map(|_| self.create_element(parent, true)).collect()
	}

	/// Detaches `element` (and its subtree) from its parent without discarding it.
	pub fn detach(&mut self, element: ElementId) {
		let Some(parent) = self.nodes.get_mut(&element).and_then(|n| n.parent.take()) else {
			return;
		};
		if let Some(node) = self.nodes.get_mut(&parent) {
			node.children.retain(|&c| c != element);
		}
	}

	/// Re-attaches a previously detached element as the last child of `parent`.
	///
	/// Attaching an element under itself or one of its descendants is refused
	/// and leaves the tree unchanged.
	pub fn attach(&mut self, parent: ElementId, element: ElementId) {
		if !self.nodes.contains_key(&parent) || !self.nodes.contains_key(&element) {
			return;
		}
		if self.contains(element, parent) {
			tracing::debug!(%parent, %element, "attach would create a cycle");
			return;
		}
		self.detach(element);
		if let Some(node) = self.nodes.get_mut(&element) {
			node.parent = Some(parent);
		}
		if let Some(node) = self.nodes.get_mut(&parent) {
			node.children.push(element);
		}
	}

	pub fn set_rect(&mut self, element: ElementId, rect: Rect) {
		if let Some(node) = self.nodes.get_mut(&element) {
			node.rect = rect;
		}
	}

	pub fn set_focusable(&mut self, element: ElementId, focusable: bool) {
		if let Some(node) = self.nodes.get_mut(&element) {
			node.focusable = focusable;
		}
	}

	pub fn set_viewport(&mut self, viewport: Rect) {
		self.viewport = viewport;
		if let Some(body) = self.nodes.get_mut(&self.body) {
			body.rect = viewport;
		}
	}

	pub fn children(&self, element: ElementId) -> &[ElementId] {
		self.nodes.get(&element).map(|n| n.children.as_slice()).unwrap_or_default()
	}

	/// Containers currently attached to the body for `purpose`.
	pub fn roots(&self, purpose: RootPurpose) -> Vec<ElementId> {
		self.children(self.body)
			.iter()
			.copied()
			.filter(|id| self.nodes.get(id).is_some_and(|n| n.label == NodeLabel::Root(purpose)))
			.collect()
	}

	/// Whether the element exists at all, attached or not.
	pub fn exists(&self, element: ElementId) -> bool {
		self.nodes.contains_key(&element)
	}

	/// Number of successful [`Document::focus`] calls so far.
	pub const fn focus_moves(&self) -> usize {
		self.focus_moves
	}

	fn alloc(&mut self, parent: Option<ElementId>, focusable: bool, label: NodeLabel) -> ElementId {
		let id = ElementId(self.ids.next_raw());
		self.nodes.insert(
			id,
			Node {
				parent,
				children: Vec::new(),
				focusable,
				rect: Rect::default(),
				label,
			},
		);
		id
	}

	fn discard(&mut self, element: ElementId) {
		self.detach(element);
		let mut stack = vec![element];
		while let Some(id) = stack.pop() {
			if let Some(node) = self.nodes.remove(&id) {
				stack.extend(node.children);
			}
		}
	}

	fn collect_focusables(&self, element: ElementId, out: &mut Vec<ElementId>) {
		for &child in self.children(element) {
			if self.nodes.get(&child).is_some_and(|n| n.focusable) {
				out.push(child);
			}
			self.collect_focusables(child, out);
		}
	}
}

impl Document for HeadlessDocument {
	fn viewport(&self) -> Rect {
		self.viewport
	}

	fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
		self.nodes
			.get(&element)
			.filter(|_| self.is_connected(element))
			.map(|n| n.rect)
	}

	fn is_connected(&self, element: ElementId) -> bool {
		let mut current = Some(element);
		while let Some(id) = current {
			if id == self.body {
				return true;
			}
			current = self.nodes.get(&id).and_then(|n| n.parent);
		}
		false
	}

	fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
		let mut current = Some(node);
		while let Some(id) = current {
			if id == ancestor {
				return true;
			}
			current = self.nodes.get(&id).and_then(|n| n.parent);
		}
		false
	}

	fn active_element(&self) -> Option<ElementId> {
		self.active.filter(|&id| self.is_connected(id))
	}

	fn focus(&mut self, element: ElementId) -> bool {
		if !self.is_connected(element) {
			return false;
		}
		self.active = Some(element);
		self.focus_moves += 1;
		true
	}

	fn focusable_within(&self, root: ElementId) -> Vec<ElementId> {
		let mut out = Vec::new();
		self.collect_focusables(root, &mut out);
		out
	}

	fn body_overflow(&self) -> Overflow {
		self.overflow
	}

	fn set_body_overflow(&mut self, overflow: Overflow) {
		self.overflow = overflow;
	}

	fn create_root(&mut self, purpose: RootPurpose) -> ElementId {
		let body = self.body;
		let id = self.alloc(Some(body), false, NodeLabel::Root(purpose));
		if let Some(node) = self.nodes.get_mut(&body) {
			node.children.push(id);
		}
		id
	}

	fn remove_root(&mut self, root: ElementId) {
		self.discard(root);
	}

	fn mount_surface(&mut self, root: ElementId, overlay: OverlayId) -> ElementId {
		let id = self.alloc(Some(root), false, NodeLabel::Surface(overlay));
		if let Some(node) = self.nodes.get_mut(&root) {
			node.children.push(id);
		}
		id
	}

	fn unmount_surface(&mut self, surface: ElementId) {
		self.discard(surface);
	}
}
