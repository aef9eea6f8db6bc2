//! Configuration types for dictuml.
//!
//! This module provides configuration structures that control how diagrams
//! are written and how they are handed to the external renderer. All types
//! implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining diagram and renderer settings.
//! - [`DiagramConfig`] - Controls the layout of the emitted PlantUML text.
//! - [`RendererConfig`] - Controls which PlantUML executable is run and what it produces.
//!
//! # Example
//!
//! ```
//! # use dictuml::config::{AppConfig, OutputFormat};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.diagram().indent(), "\t");
//! assert_eq!(config.renderer().command(), "plantuml");
//! assert_eq!(config.renderer().format(), OutputFormat::Svg);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration combining diagram and renderer settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Diagram text configuration section.
    #[serde(default)]
    diagram: DiagramConfig,

    /// Renderer configuration section.
    #[serde(default)]
    renderer: RendererConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified diagram and renderer configurations.
    ///
    /// # Arguments
    ///
    /// * `diagram` - Settings for the emitted PlantUML text.
    /// * `renderer` - Settings for the external renderer.
    pub fn new(diagram: DiagramConfig, renderer: RendererConfig) -> Self {
        Self { diagram, renderer }
    }

    /// Returns the diagram configuration.
    pub fn diagram(&self) -> &DiagramConfig {
        &self.diagram
    }

    /// Returns the renderer configuration.
    pub fn renderer(&self) -> &RendererConfig {
        &self.renderer
    }
}

/// Layout of the emitted PlantUML text.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagramConfig {
    /// Prefix for every line inside a class block.
    #[serde(default = "default_indent")]
    indent: String,
}

impl DiagramConfig {
    /// Creates a new [`DiagramConfig`] with the given class body indentation.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Returns the indentation used inside class blocks.
    pub fn indent(&self) -> &str {
        &self.indent
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

fn default_indent() -> String {
    "\t".to_string()
}

/// Image formats PlantUML is asked to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Png,
}

impl OutputFormat {
    /// Returns the PlantUML command-line flag selecting this format.
    pub fn flag(self) -> &'static str {
        match self {
            OutputFormat::Svg => "-tsvg",
            OutputFormat::Png => "-tpng",
        }
    }

    /// Returns the file extension PlantUML gives its output in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

/// External renderer configuration.
///
/// The renderer is invoked as `<command> <args...> -t<format> <input file>`.
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Executable name or path.
    #[serde(default = "default_command")]
    command: String,

    /// Arguments placed before the format flag and input file.
    #[serde(default)]
    args: Vec<String>,

    #[serde(default)]
    format: OutputFormat,

    /// Directory that scratch directories are created in. Falls back to the
    /// system temporary directory.
    #[serde(default)]
    work_dir: Option<PathBuf>,
}

impl RendererConfig {
    /// Returns the configured executable.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the extra leading arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the requested [`OutputFormat`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the parent directory for scratch files, if one is configured.
    pub fn work_dir(&self) -> Option<&Path> {
        self.work_dir.as_deref()
    }

    /// Replaces the executable.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Replaces the extra leading arguments.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Replaces the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the parent directory for scratch files.
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
            format: OutputFormat::default(),
            work_dir: None,
        }
    }
}

fn default_command() -> String {
    "plantuml".to_string()
}
