//! Rendering options.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type for loading render options
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Options controlling how a tree is serialized.
///
/// # Example
///
/// ```
/// use reinhardt_markup_core::RenderOptions;
///
/// let options = RenderOptions::new().all_tags(true);
/// assert!(options.all_tags);
///
/// let options = RenderOptions::from_toml_str("all_tags = true").unwrap();
/// assert!(options.all_tags);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	/// Print every start and end tag, including the ones an element would
	/// normally omit. Literal blocks are unaffected.
	pub all_tags: bool,
}

impl RenderOptions {
	/// Creates the default options: optional tags are omitted.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether every start and end tag is printed.
	pub fn all_tags(mut self, all_tags: bool) -> Self {
		self.all_tags = all_tags;
		self
	}

	/// Parses options from a TOML document.
	///
	/// Missing keys take their default values.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Loads options from a TOML file.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = fs::read_to_string(path.as_ref())?;
		Self::from_toml_str(&content)
	}
}
