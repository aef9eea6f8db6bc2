//! PlantUML text generation.
//!
//! The document root is traversed as the single entry of a synthetic mapping
//! keyed [`ROOT_KEY`], then written out as:
//!
//! ```text
//! @startuml
//! class "<name>" as <full reference> {
//!     .. Properties ..
//!     <key>: <value>
//!     .. Objects ..
//!     <key>: [object Object]
//! }
//!
//! "<parent>" "1" --> "1" "<child>"
//! @enduml
//! ```
//!
//! A section header is left out when its section is empty.

use std::fmt;

use dictuml_core::{
    model::{ClassRecord, Edge},
    value::Value,
};

use crate::{DictUmlError, config::DiagramConfig, traverse};

/// Opening diagram marker.
pub const START_MARKER: &str = "@startuml";

/// Closing diagram marker.
pub const END_MARKER: &str = "@enduml";

/// Key the document root is placed under.
pub const ROOT_KEY: &str = "root";

/// Serialize `root` with the default [`DiagramConfig`].
///
/// # Errors
///
/// Returns [`DictUmlError::InvalidInputKind`] when `root` is not a mapping.
///
/// # Examples
///
/// ```
/// # use dictuml::serialize::serialize;
/// # use dictuml::value::{Mapping, Value};
/// let mut root = Mapping::new();
/// root.insert("name".to_string(), Value::from("dictuml"));
///
/// let text = serialize(&Value::Mapping(root)).unwrap();
/// assert!(text.starts_with("@startuml\n"));
/// assert!(text.contains("\tname: dictuml\n"));
/// assert!(text.ends_with("@enduml"));
///
/// assert!(serialize(&Value::from(1_i64)).is_err());
/// ```
pub fn serialize(root: &Value) -> Result<String, DictUmlError> {
    serialize_with(root, &DiagramConfig::default())
}

/// Serialize `root` into PlantUML text laid out according to `config`.
///
/// # Errors
///
/// Returns [`DictUmlError::InvalidInputKind`] when `root` is not a mapping.
pub fn serialize_with(root: &Value, config: &DiagramConfig) -> Result<String, DictUmlError> {
    if root.as_mapping().is_none() {
        return Err(DictUmlError::InvalidInputKind { found: root.kind() });
    }

    let (records, edges) = traverse::traverse_entry(ROOT_KEY, root).into_parts();
    let diagram = Diagram {
        records: &records,
        edges: &edges,
        indent: config.indent(),
    };
    Ok(diagram.to_string())
}

/// Records and edges ready to be written as PlantUML.
struct Diagram<'a> {
    records: &'a [ClassRecord],
    edges: &'a [Edge],
    indent: &'a str,
}

impl Diagram<'_> {
    fn write_class(&self, f: &mut fmt::Formatter<'_>, record: &ClassRecord) -> fmt::Result {
        let indent = self.indent;

        writeln!(
            f,
            "class \"{}\" as {} {{",
            record.name(),
            record.full_reference()
        )?;
        if !record.properties().is_empty() {
            writeln!(f, "{indent}.. Properties ..")?;
            for property in record.properties() {
                writeln!(f, "{indent}{property}")?;
            }
        }
        if !record.objects().is_empty() {
            writeln!(f, "{indent}.. Objects ..")?;
            for object in record.objects() {
                writeln!(f, "{indent}{object}")?;
            }
        }
        writeln!(f, "}}")
    }
}

impl fmt::Display for Diagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{START_MARKER}")?;
        for record in self.records {
            self.write_class(f, record)?;
            writeln!(f)?;
        }
        for edge in self.edges {
            writeln!(f, "{edge}")?;
        }
        write!(f, "{END_MARKER}")
    }
}
