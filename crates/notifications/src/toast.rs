use serde::{Deserialize, Serialize};
use veil_primitives::ToastId;
use veil_runtime::{Duration, Instant};

/// Visual tag of a toast. The engine never interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
	#[default]
	Default,
	Primary,
	Secondary,
	Success,
	Warning,
	Danger,
	Info,
}

/// Renderer-facing payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastContent {
	pub title: Option<String>,
	pub description: Option<String>,
	/// Label of the optional action button.
	pub action: Option<String>,
}

/// Parameters of a new toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
	pub content: ToastContent,
	pub variant: Variant,
	/// Lifetime from creation. `Duration::ZERO` never expires.
	pub duration: Duration,
	pub dismissible: bool,
}

impl Default for ToastRequest {
	fn default() -> Self {
		Self {
			content: ToastContent::default(),
			variant: Variant::Default,
			duration: Duration::ZERO,
			dismissible: true,
		}
	}
}

impl ToastRequest {
	pub fn new(title: impl Into<String>) -> Self {
		Self {
			content: ToastContent {
				title: Some(title.into()),
				..ToastContent::default()
			},
			..Self::default()
		}
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.content.description = Some(description.into());
		self
	}

	pub fn action(mut self, label: impl Into<String>) -> Self {
		self.content.action = Some(label.into());
		self
	}

	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	pub fn duration(mut self, duration: Duration) -> Self {
		self.duration = duration;
		self
	}

	pub fn dismissible(mut self, dismissible: bool) -> Self {
		self.dismissible = dismissible;
		self
	}
}

/// A queued toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
	pub id: ToastId,
	pub content: ToastContent,
	pub variant: Variant,
	pub duration: Duration,
	pub created_at: Instant,
	pub dismissible: bool,
}

impl Toast {
	pub(crate) fn from_request(id: ToastId, request: ToastRequest, created_at: Instant) -> Self {
		Self {
			id,
			content: request.content,
			variant: request.variant,
			duration: request.duration,
			created_at,
			dismissible: request.dismissible,
		}
	}

	/// When the toast expires, if it ever does.
	///
	/// A duration too large to represent as an instant never expires.
	pub fn deadline(&self) -> Option<Instant> {
		if self.duration.is_zero() {
			return None;
		}
		self.created_at.checked_add(self.duration)
	}

	/// Merges the fields set in `patch`.
	pub fn apply(&mut self, patch: ToastPatch) {
		let ToastPatch {
			title,
			description,
			action,
			variant,
			dismissible,
		} = patch;
		if let Some(title) = title {
			self.content.title = title;
		}
		if let Some(description) = description {
			self.content.description = description;
		}
		if let Some(action) = action {
			self.content.action = action;
		}
		if let Some(variant) = variant {
			self.variant = variant;
		}
		if let Some(dismissible) = dismissible {
			self.dismissible = dismissible;
		}
	}
}

/// Partial update of a queued toast.
///
/// Outer `None` leaves a field unchanged; `Some(None)` clears an optional
/// content field. The duration is not patchable since updates never
/// reschedule expiry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastPatch {
	pub title: Option<Option<String>>,
	pub description: Option<Option<String>>,
	pub action: Option<Option<String>>,
	pub variant: Option<Variant>,
	pub dismissible: Option<bool>,
}

impl ToastPatch {
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(Some(title.into()));
		self
	}

	pub fn description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(Some(description.into()));
		self
	}

	pub fn clear_description(mut self) -> Self {
		self.description = Some(None);
		self
	}

	pub fn action(mut self, label: impl Into<String>) -> Self {
		self.action = Some(Some(label.into()));
		self
	}

	pub fn variant(mut self, variant: Variant) -> Self {
		self.variant = Some(variant);
		self
	}

	pub fn dismissible(mut self, dismissible: bool) -> Self {
		self.dismissible = Some(dismissible);
		self
	}
}
