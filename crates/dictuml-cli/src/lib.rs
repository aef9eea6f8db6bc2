//! CLI logic for the dictuml tool.
//!
//! This module contains the core CLI logic: reading a JSON document,
//! turning it into a PlantUML class diagram, and optionally rendering it.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Emit};

use std::{
    fs,
    io::{self, Read, Write},
};

use log::info;

use dictuml::{DiagramBuilder, DictUmlError};

/// Run the dictuml CLI application
///
/// This function processes the input document through the dictuml pipeline
/// and writes the resulting diagram text or image to the output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DictUmlError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - JSON parsing errors
/// - Documents whose root is not a mapping
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), DictUmlError> {
    info!(
        input_path = args.input.as_deref().unwrap_or("-"),
        emit:? = args.emit;
        "Processing document"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config =
        config::apply_overrides(app_config, args.renderer.as_deref(), args.emit.image_format());

    // Read input document
    let source = read_input(args.input.as_deref())?;

    // Process document using DiagramBuilder API
    let builder = DiagramBuilder::new(app_config);
    let value = builder.parse(&source)?;
    let text = builder.to_plantuml(&value)?;

    let output = match args.emit {
        Emit::Uml => {
            let mut text = text.into_bytes();
            text.push(b'\n');
            text
        }
        Emit::Svg | Emit::Png => builder.render(&text)?,
    };

    write_output(args.output.as_deref(), &output)?;

    info!(output_path = args.output.as_deref().unwrap_or("-"); "Diagram written successfully");

    Ok(())
}

/// Read the whole input document from `path`, or standard input for `None` and `-`.
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => fs::read_to_string(path),
    }
}

/// Write `bytes` to `path`, or standard output for `None` and `-`.
fn write_output(path: Option<&str>, bytes: &[u8]) -> io::Result<()> {
    match path {
        None | Some("-") => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
        Some(path) => fs::write(path, bytes),
    }
}
