//! Dictuml - Visualize the shape of nested data as a UML class diagram.
//!
//! A JSON document is parsed into a [`Value`] tree, flattened into class
//! records and containment edges, and written out as PlantUML text. The text
//! can then be handed to an external PlantUML executable to produce an image.

pub mod config;
pub mod render;
pub mod serialize;
pub mod traverse;

mod error;

pub use dictuml_core::{model, value};

pub use error::DictUmlError;

use log::{debug, info, trace};

use config::AppConfig;
use render::{PlantUml, Renderer};
use value::Value;

/// Builder for turning documents into diagrams.
///
/// This provides an API for processing documents through parsing,
/// serialization, and rendering stages.
///
/// # Examples
///
/// ```rust
/// use dictuml::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"{"service": {"name": "api", "ports": [80, 443]}}"#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // Parse source to a value tree
/// let value = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Serialize the value tree to PlantUML
/// let text = builder.to_plantuml(&value)
///     .expect("Failed to serialize");
/// assert!(text.contains("class \"service\" as root.service {"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including diagram and renderer settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON document into a value tree.
    ///
    /// Object keys keep their order of appearance in `source`.
    ///
    /// # Errors
    ///
    /// Returns [`DictUmlError::Parse`] when `source` is not valid JSON.
    pub fn parse(&self, source: &str) -> Result<Value, DictUmlError> {
        info!("Parsing document");

        let json: serde_json::Value = serde_json::from_str(source)
            .map_err(|err| DictUmlError::new_parse_error(err, source))?;
        let value = Value::from(json);

        debug!(kind = value.kind(); "Document parsed successfully");
        trace!(value:?; "Parsed document");

        Ok(value)
    }

    /// Serialize a value tree into PlantUML text.
    ///
    /// # Errors
    ///
    /// Returns [`DictUmlError::InvalidInputKind`] when `value` is not a mapping.
    pub fn to_plantuml(&self, value: &Value) -> Result<String, DictUmlError> {
        info!("Serializing diagram");

        let text = serialize::serialize_with(value, self.config.diagram())?;

        debug!(bytes = text.len(); "Diagram serialized successfully");
        Ok(text)
    }

    /// Render PlantUML text into image bytes with the configured executable.
    ///
    /// # Errors
    ///
    /// Returns [`DictUmlError::Render`] when the executable cannot be run,
    /// fails, or produces no image.
    pub fn render(&self, plantuml: &str) -> Result<Vec<u8>, DictUmlError> {
        self.render_with(&PlantUml::new(self.config.renderer().clone()), plantuml)
    }

    /// Render PlantUML text into image bytes with a caller-provided renderer.
    ///
    /// # Errors
    ///
    /// Returns [`DictUmlError::Render`] when `renderer` fails.
    pub fn render_with(
        &self,
        renderer: &impl Renderer,
        plantuml: &str,
    ) -> Result<Vec<u8>, DictUmlError> {
        let image = renderer.render(plantuml)?;
        info!(bytes = image.len(); "Diagram rendered successfully");
        Ok(image)
    }
}
