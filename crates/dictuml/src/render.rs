//! Image rendering through an external PlantUML executable.
//!
//! This module provides the [`Renderer`] trait that turns PlantUML text into
//! image bytes, and [`PlantUml`], the implementation that shells out to the
//! `plantuml` binary.
//!
//! # Pipeline Position
//!
//! ```text
//! JSON Document
//!     ↓ parse
//! Value Tree
//!     ↓ traverse + serialize
//! PlantUML Text
//!     ↓ render (this module)
//! Image Bytes
//! ```
//!
//! # Scratch Files
//!
//! PlantUML reads its input from a file and writes the image next to it.
//! Both live in a fresh temporary directory that is removed when rendering
//! finishes, whether it succeeded or not.

use std::{
    fs, io,
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

use log::{debug, info};
use tempfile::TempDir;
use thiserror::Error;

use crate::config::RendererConfig;

/// File stem used for the scratch input and the produced image.
const SCRATCH_STEM: &str = "diagram";

/// Abstraction for diagram rendering backends.
pub trait Renderer {
    /// Renders PlantUML `source` into image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] when the backend cannot be run or does not produce
    /// an image.
    fn render(&self, source: &str) -> Result<Vec<u8>, Error>;
}

/// Errors that can occur while rendering a diagram.
///
/// This type is converted into [`DictUmlError::Render`] at the crate
/// boundary.
///
/// [`DictUmlError::Render`]: crate::DictUmlError::Render
#[derive(Debug, Error)]
pub enum Error {
    /// The renderer executable could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The renderer ran but reported failure.
    #[error("`{command}` exited with {status}: {stderr}")]
    Status {
        command: String,
        status: ExitStatus,
        stderr: String,
    },

    /// The renderer exited successfully without writing an image.
    #[error("renderer produced no output at {}", .0.display())]
    MissingOutput(PathBuf),

    /// An I/O error while preparing or collecting scratch files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Renderer backed by the PlantUML command-line tool.
#[derive(Debug, Clone, Default)]
pub struct PlantUml {
    config: RendererConfig,
}

impl PlantUml {
    /// Creates a renderer that runs the executable described by `config`.
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    fn scratch_dir(&self) -> io::Result<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("dictuml-");
        match self.config.work_dir() {
            Some(dir) => builder.tempdir_in(dir),
            None => builder.tempdir(),
        }
    }
}

impl Renderer for PlantUml {
    fn render(&self, source: &str) -> Result<Vec<u8>, Error> {
        let scratch = self.scratch_dir()?;
        let format = self.config.format();
        let command = self.config.command();

        let input = scratch.path().join(format!("{SCRATCH_STEM}.uml"));
        fs::write(&input, source)?;

        info!(command, format = format.extension(); "Rendering diagram");
        let output = Command::new(command)
            .args(self.config.args())
            .arg(format.flag())
            .arg(&input)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| Error::Spawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Status {
                command: command.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let image = scratch
            .path()
            .join(format!("{SCRATCH_STEM}.{}", format.extension()));
        if !image.is_file() {
            return Err(Error::MissingOutput(image));
        }

        let bytes = fs::read(&image)?;
        debug!(bytes = bytes.len(); "Renderer output collected");
        Ok(bytes)
    }
}
