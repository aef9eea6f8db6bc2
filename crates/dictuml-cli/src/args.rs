//! Command-line argument definitions for the dictuml CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, what is emitted,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use dictuml::config::OutputFormat;

/// Command-line arguments for the dictuml tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON file
    #[arg(help = "Path to the input JSON file, or `-` for standard input (default)")]
    pub input: Option<String>,

    /// Path to the output file, standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// What to produce
    #[arg(short, long, value_enum, default_value_t = Emit::Uml)]
    pub emit: Emit,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// PlantUML executable, overriding the configured one
    #[arg(long)]
    pub renderer: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Output produced by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// PlantUML diagram text
    Uml,
    /// SVG image rendered by PlantUML
    Svg,
    /// PNG image rendered by PlantUML
    Png,
}

impl Emit {
    /// Returns the image format to render, or `None` for plain text.
    pub fn image_format(self) -> Option<OutputFormat> {
        match self {
            Emit::Uml => None,
            Emit::Svg => Some(OutputFormat::Svg),
            Emit::Png => Some(OutputFormat::Png),
        }
    }
}
