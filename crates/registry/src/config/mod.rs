//! Configuration for magic registration and invocation.
//!
//! Configuration is read from an optional `magics.toml`:
//!
//! ```toml
//! marker = "%"
//! duplicate_policy = "last_wins"
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::registry::DuplicatePolicy;

/// File name looked up by [`load_from_dir`].
pub const CONFIG_FILE: &str = "magics.toml";

/// Default invocation marker (`%line` and `%%cell`).
pub const DEFAULT_MARKER: char = '%';

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The config file exists but could not be read.
	#[error("I/O error: {0}")]
	Io(String),

	/// Error parsing TOML syntax or field types.
	#[error("TOML parse error: {0}")]
	Toml(String),

	/// The marker cannot start an invocation line.
	#[error("invalid marker {0:?}: expected a single non-alphanumeric, non-whitespace character")]
	InvalidMarker(char),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Settings shared by the registry and the invocation parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MagicsConfig {
	/// Character that introduces a magic; doubled for cell magics.
	pub marker: char,
	/// What happens when a name is registered twice in the same table.
	pub duplicate_policy: DuplicatePolicy,
}

impl Default for MagicsConfig {
	fn default() -> Self {
		Self {
			marker: DEFAULT_MARKER,
			duplicate_policy: DuplicatePolicy::default(),
		}
	}
}

impl MagicsConfig {
	/// Parses and validates a TOML document.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input).map_err(|e| ConfigError::Toml(e.to_string()))?;
		config.validate()?;
		Ok(config)
	}

	/// Checks field values that the TOML schema cannot express.
	pub fn validate(&self) -> Result<()> {
		if self.marker.is_whitespace() || self.marker.is_alphanumeric() || self.marker.is_control() {
			return Err(ConfigError::InvalidMarker(self.marker));
		}
		Ok(())
	}
}

/// Loads `magics.toml` from `config_dir`.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_from_dir(config_dir: &Path) -> Result<Option<MagicsConfig>> {
	let path = config_dir.join(CONFIG_FILE);
	if !path.exists() {
		return Ok(None);
	}

	let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
	let config = MagicsConfig::from_toml_str(&content)?;
	tracing::debug!(path = %path.display(), ?config, "loaded magics config");
	Ok(Some(config))
}
