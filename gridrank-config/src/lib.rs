//! Shared configuration loader for gridrank.
//!
//! `defaults/gridrank.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`GridrankConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use gridrank_core::OutputStyle;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/gridrank.default.toml");

/// File name picked up from the working directory when present.
const LOCAL_CONFIG_FILE: &str = "gridrank.toml";

/// Top-level configuration consumed by gridrank applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GridrankConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub style: OutputStyle,
}

/// Diagnostics written to stderr.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

/// Layers the working-directory file, an explicit file and flag overrides over
/// the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start from the embedded defaults only.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer `gridrank.toml` from the working directory when it exists.
    pub fn with_local_file(self) -> Self {
        self.with_toml(Path::new(LOCAL_CONFIG_FILE), false)
    }

    /// Layer a file named on the command line. A missing file fails the build.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Force the output style by name, taking precedence over every file.
    ///
    /// Unknown names are accepted here and rejected by [`Loader::build`].
    pub fn with_output_style(mut self, name: &str) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.style", name.to_string())?;
        Ok(self)
    }

    /// Merge every layer and deserialize the result.
    pub fn build(self) -> Result<GridrankConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
