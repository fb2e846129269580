//! Engine configuration loaded from TOML.
//!
//! Every table and key is optional:
//!
//! ```toml
//! [placement]
//! placement = "bottom-start"
//! offset = 8
//!
//! [toasts]
//! max-visible = 5
//! position = "bottom-right"
//! duration-ms = 0
//!
//! [overlay]
//! animated = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use veil_notifications::ToastPosition;
use veil_overlay::OverlayDefaults;
use veil_placement::Placement;
use veil_runtime::Duration;

/// Errors from loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		error: std::io::Error,
	},

	#[error("invalid value for {field}: {reason}")]
	Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EngineConfig {
	pub placement: PlacementConfig,
	pub toasts: ToastConfig,
	pub overlay: OverlayConfig,
}

/// Defaults for anchored overlays that do not set their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PlacementConfig {
	pub placement: Placement,
	/// Gap between anchor and overlay, in pixels.
	pub offset: f64,
}

impl Default for PlacementConfig {
	fn default() -> Self {
		Self {
			placement: Placement::Bottom,
			offset: 8.0,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ToastConfig {
	pub max_visible: usize,
	pub position: ToastPosition,
	/// Lifetime given to toasts built with [`crate::Engine::toast`]. 0 never expires.
	pub duration_ms: u64,
}

impl Default for ToastConfig {
	fn default() -> Self {
		Self {
			max_visible: 5,
			position: ToastPosition::BottomRight,
			duration_ms: 0,
		}
	}
}

impl ToastConfig {
	pub fn duration(&self) -> Duration {
		Duration::from_millis(self.duration_ms)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct OverlayConfig {
	/// Whether overlays wait for the renderer between phases unless the request says otherwise.
	pub animated: bool,
}

impl EngineConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads and parses a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let input = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		tracing::debug!(path = %path.display(), "engine config loaded");
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		if !self.placement.offset.is_finite() {
			return Err(ConfigError::Invalid {
				field: "placement.offset",
				reason: format!("{} is not finite", self.placement.offset),
			});
		}
		if self.toasts.max_visible == 0 {
			return Err(ConfigError::Invalid {
				field: "toasts.max-visible",
				reason: "must be at least 1".to_string(),
			});
		}
		Ok(())
	}

	pub fn overlay_defaults(&self) -> OverlayDefaults {
		OverlayDefaults {
			placement: self.placement.placement,
			offset: self.placement.offset,
			animated: self.overlay.animated,
		}
	}
}
