use serde::{Deserialize, Serialize};

/// Screen corner or edge the toast container is attached to.
///
/// Queue-wide; individual toasts cannot override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
	TopLeft,
	TopCenter,
	TopRight,
	BottomLeft,
	BottomCenter,
	#[default]
	BottomRight,
}

impl ToastPosition {
	pub const ALL: [Self; 6] = [
		Self::TopLeft,
		Self::TopCenter,
		Self::TopRight,
		Self::BottomLeft,
		Self::BottomCenter,
		Self::BottomRight,
	];

	pub const fn is_top(self) -> bool {
		matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::TopLeft => "top-left",
			Self::TopCenter => "top-center",
			Self::TopRight => "top-right",
			Self::BottomLeft => "bottom-left",
			Self::BottomCenter => "bottom-center",
			Self::BottomRight => "bottom-right",
		}
	}
}

impl std::fmt::Display for ToastPosition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
