//! Flattened diagram model.
//!
//! The traversal turns a nested [`Value`](crate::value::Value) into a flat
//! list of [`ClassRecord`]s and a flat list of containment [`Edge`]s, grouped
//! together as a [`Traversal`].

use std::fmt;

/// Placeholder shown in place of a nested mapping or sequence.
pub const OBJECT_PLACEHOLDER: &str = "[object Object]";

/// One diagram class box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    name: String,
    full_reference: String,
    properties: Vec<String>,
    objects: Vec<String>,
}

impl ClassRecord {
    /// Creates a record whose full reference is its own name.
    ///
    /// # Arguments
    ///
    /// * `name` - The key the mapping or sequence was found under.
    /// * `properties` - `key: value` lines for scalar entries.
    /// * `objects` - `key: [object Object]` lines for nested entries.
    pub fn new(name: impl Into<String>, properties: Vec<String>, objects: Vec<String>) -> Self {
        let name = name.into();
        Self {
            full_reference: name.clone(),
            name,
            properties,
            objects,
        }
    }

    /// Returns the display name of the class.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the dotted path uniquely identifying this record.
    pub fn full_reference(&self) -> &str {
        &self.full_reference
    }

    /// Returns the property lines, in entry order.
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Returns the nested-object summary lines, in entry order.
    pub fn objects(&self) -> &[String] {
        &self.objects
    }

    /// Returns this record with `prefix` prepended to its full reference.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.full_reference = format!("{prefix}.{}", self.full_reference);
        self
    }
}

/// A directed one-to-one containment relationship between two records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    parent: String,
    child: String,
}

impl Edge {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn child(&self) -> &str {
        &self.child
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" \"1\" --> \"1\" \"{}\"", self.parent, self.child)
    }
}

/// Records and edges produced by one traversal, in depth-first input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    records: Vec<ClassRecord>,
    edges: Vec<Edge>,
}

impl Traversal {
    pub fn new(records: Vec<ClassRecord>, edges: Vec<Edge>) -> Self {
        Self { records, edges }
    }

    pub fn records(&self) -> &[ClassRecord] {
        &self.records
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` when no record was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consumes the traversal, returning its records and edges.
    pub fn into_parts(self) -> (Vec<ClassRecord>, Vec<Edge>) {
        (self.records, self.edges)
    }
}
