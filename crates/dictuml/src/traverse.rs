//! Flattening of nested mappings into class records and edges.
//!
//! Every mapping or sequence reachable from the traversed mapping becomes one
//! [`ClassRecord`]. Scalar entries of a mapping become property lines, nested
//! entries become `key: [object Object]` lines plus a containment [`Edge`].
//!
//! Sequence elements are always nested children keyed by their index. An
//! element that is not a mapping is wrapped in a one-entry mapping
//! `{"value [<type>]": element}` so it still gets a class box of its own.
//!
//! Output follows the insertion order of the input, depth first: a record is
//! followed by the records of its descendants, and the edges found below a
//! record come before the edges leaving it.

use std::borrow::Cow;

use log::trace;

use dictuml_core::{
    model::{ClassRecord, Edge, OBJECT_PLACEHOLDER, Traversal},
    value::{Mapping, Value},
};

/// A value seen as an entry of the mapping being traversed.
#[derive(Debug, Clone, Copy)]
enum Node<'a> {
    Value(&'a Value),
    /// A non-mapping sequence element, standing for `{"value [<type>]": element}`.
    Wrapped(&'a Value),
}

impl<'a> Node<'a> {
    fn element(value: &'a Value) -> Self {
        match value {
            Value::Mapping(_) => Node::Value(value),
            _ => Node::Wrapped(value),
        }
    }
}

type Entry<'a> = (Cow<'a, str>, Node<'a>);

/// Lines and nested children collected from the direct entries of one node.
#[derive(Default)]
struct Fields<'a> {
    properties: Vec<String>,
    objects: Vec<String>,
    children: Vec<Entry<'a>>,
}

impl<'a> Fields<'a> {
    /// Files one mapping entry as a property line or a nested child.
    fn push_entry(&mut self, key: Cow<'a, str>, value: &'a Value) {
        if value.is_container() {
            self.objects.push(format!("{key}: {OBJECT_PLACEHOLDER}"));
            self.children.push((key, Node::Value(value)));
        } else {
            self.properties.push(format!("{key}: {value}"));
        }
    }

    fn push_element(&mut self, index: usize, element: &'a Value) {
        self.objects.push(format!("{index}: {OBJECT_PLACEHOLDER}"));
        self.children
            .push((Cow::Owned(index.to_string()), Node::element(element)));
    }
}

/// Traverse `node`, producing one record per nested mapping or sequence.
///
/// Entries of `node` whose value is a scalar produce nothing at all: no
/// record and no property line. `parent` is the dotted path of the mapping
/// `node` was found under; it only affects the edges.
///
/// # Examples
///
/// ```
/// # use dictuml::traverse::traverse;
/// # use dictuml::value::{Mapping, Value};
/// let mut inner = Mapping::new();
/// inner.insert("b".to_string(), Value::from(1_i64));
/// let mut node = Mapping::new();
/// node.insert("a".to_string(), Value::Mapping(inner));
///
/// let traversal = traverse(&node, None);
/// assert_eq!(traversal.records().len(), 1);
/// assert_eq!(traversal.records()[0].properties(), ["b: 1"]);
/// assert!(traversal.edges().is_empty());
/// ```
pub fn traverse(node: &Mapping, parent: Option<&str>) -> Traversal {
    let entries = node
        .iter()
        .map(|(key, value)| (Cow::Borrowed(key.as_str()), Node::Value(value)))
        .collect();

    let traversal = walk(entries, parent);
    trace!(
        records = traversal.records().len(),
        edges = traversal.edges().len();
        "Traversed mapping"
    );
    traversal
}

/// Traverse the single-entry mapping `{key: value}` without building it.
pub(crate) fn traverse_entry(key: &str, value: &Value) -> Traversal {
    walk(vec![(Cow::Borrowed(key), Node::Value(value))], None)
}

fn walk(entries: Vec<Entry<'_>>, parent: Option<&str>) -> Traversal {
    let mut records = Vec::new();
    let mut edges = Vec::new();

    for (key, node) in entries {
        let mut fields = Fields::default();

        match node {
            Node::Value(Value::Sequence(items)) => {
                for (index, item) in items.iter().enumerate() {
                    fields.push_element(index, item);
                }
            }
            Node::Value(Value::Mapping(mapping)) => {
                for (field, value) in mapping {
                    fields.push_entry(Cow::Borrowed(field.as_str()), value);
                }
            }
            Node::Wrapped(value) => {
                let label = format!("value [{}]", value.type_name());
                fields.push_entry(Cow::Owned(label), value);
            }
            // Scalars directly under the traversed mapping are dropped.
            Node::Value(Value::Scalar(_)) => continue,
        }

        let Fields {
            properties,
            objects,
            children,
        } = fields;

        records.push(ClassRecord::new(&*key, properties, objects));

        if children.is_empty() {
            continue;
        }

        let path = match parent {
            Some(parent) => format!("{parent}.{key}"),
            None => key.to_string(),
        };
        let child_keys: Vec<String> = children.iter().map(|(child, _)| child.to_string()).collect();

        let (child_records, child_edges) = walk(children, Some(&path)).into_parts();
        edges.extend(child_edges);
        records.extend(
            child_records
                .into_iter()
                .map(|record| record.with_prefix(&key)),
        );
        edges.extend(
            child_keys
                .into_iter()
                .map(|child| Edge::new(path.clone(), format!("{path}.{child}"))),
        );
    }

    Traversal::new(records, edges)
}

#[cfg(test)]
mod tests {
    use dictuml_core::value::Scalar;
    use serde_json::json;

    use super::*;

    fn mapping(json: serde_json::Value) -> Mapping {
        match Value::from(json) {
            Value::Mapping(mapping) => mapping,
            other => panic!("expected a mapping, got {}", other.kind()),
        }
    }

    fn edge_lines(traversal: &Traversal) -> Vec<String> {
        traversal.edges().iter().map(Edge::to_string).collect()
    }

    #[test]
    fn test_nested_mapping() {
        let traversal = traverse(&mapping(json!({"a": {"b": 1, "c": {"d": 2}}})), None);

        let records = traversal.records();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].name(), "a");
        assert_eq!(records[0].full_reference(), "a");
        assert_eq!(records[0].properties(), ["b: 1"]);
        assert_eq!(records[0].objects(), ["c: [object Object]"]);

        assert_eq!(records[1].name(), "c");
        assert_eq!(records[1].full_reference(), "a.c");
        assert_eq!(records[1].properties(), ["d: 2"]);
        assert!(records[1].objects().is_empty());

        assert_eq!(edge_lines(&traversal), [r#""a" "1" --> "1" "a.c""#]);
    }

    #[test]
    fn test_sequence_of_scalars_is_wrapped() {
        let traversal = traverse(&mapping(json!({"a": [1, 2]})), None);

        let records = traversal.records();
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].full_reference(), "a");
        assert!(records[0].properties().is_empty());
        assert_eq!(
            records[0].objects(),
            ["0: [object Object]", "1: [object Object]"]
        );

        assert_eq!(records[1].name(), "0");
        assert_eq!(records[1].full_reference(), "a.0");
        assert_eq!(records[1].properties(), ["value [int]: 1"]);

        assert_eq!(records[2].name(), "1");
        assert_eq!(records[2].full_reference(), "a.1");
        assert_eq!(records[2].properties(), ["value [int]: 2"]);

        assert_eq!(
            edge_lines(&traversal),
            [
                r#""a" "1" --> "1" "a.0""#,
                r#""a" "1" --> "1" "a.1""#,
            ]
        );
    }

    #[test]
    fn test_sequence_of_mappings_is_not_wrapped() {
        let traversal = traverse(&mapping(json!({"items": [{"id": 7}]})), None);

        let records = traversal.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].full_reference(), "items.0");
        assert_eq!(records[1].properties(), ["id: 7"]);
    }

    #[test]
    fn test_mixed_sequence_type_names() {
        let traversal = traverse(
            &mapping(json!({"mixed": ["x", 1.5, true, null, 3]})),
            None,
        );

        let properties: Vec<&str> = traversal.records()[1..]
            .iter()
            .map(|record| record.properties()[0].as_str())
            .collect();
        assert_eq!(
            properties,
            [
                "value [str]: x",
                "value [float]: 1.5",
                "value [bool]: true",
                "value [NoneType]: null",
                "value [int]: 3",
            ]
        );
    }

    #[test]
    fn test_nested_sequence_is_wrapped_as_list() {
        let traversal = traverse(&mapping(json!({"grid": [[1]]})), None);

        let references: Vec<&str> = traversal
            .records()
            .iter()
            .map(ClassRecord::full_reference)
            .collect();
        assert_eq!(
            references,
            ["grid", "grid.0", "grid.0.value [list]", "grid.0.value [list].0"]
        );

        let wrapper = &traversal.records()[1];
        assert!(wrapper.properties().is_empty());
        assert_eq!(wrapper.objects(), ["value [list]: [object Object]"]);

        assert_eq!(
            traversal.records()[3].properties(),
            ["value [int]: 1"]
        );

        // Edges found deeper come first
        assert_eq!(
            edge_lines(&traversal),
            [
                r#""grid.0.value [list]" "1" --> "1" "grid.0.value [list].0""#,
                r#""grid.0" "1" --> "1" "grid.0.value [list]""#,
                r#""grid" "1" --> "1" "grid.0""#,
            ]
        );
    }

    #[test]
    fn test_top_level_scalars_are_skipped() {
        let traversal = traverse(&mapping(json!({"name": "x", "count": 3, "flag": false})), None);
        assert!(traversal.is_empty());
        assert!(traversal.edges().is_empty());
    }

    #[test]
    fn test_scalar_next_to_container() {
        let traversal = traverse(&mapping(json!({"name": "x", "meta": {"v": 1}})), None);

        assert_eq!(traversal.records().len(), 1);
        assert_eq!(traversal.records()[0].name(), "meta");
    }

    #[test]
    fn test_empty_containers_produce_bare_records() {
        let traversal = traverse(&mapping(json!({"list": [], "map": {}})), None);

        let records = traversal.records();
        assert_eq!(records.len(), 2);
        for record in records {
            assert!(record.properties().is_empty());
            assert!(record.objects().is_empty());
        }
        assert!(traversal.edges().is_empty());
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(traverse(&Mapping::new(), None), Traversal::default());
    }

    #[test]
    fn test_parent_path_prefixes_edges_only() {
        let traversal = traverse(&mapping(json!({"a": {"c": {"d": 2}}})), Some("root"));

        assert_eq!(traversal.records()[0].full_reference(), "a");
        assert_eq!(traversal.records()[1].full_reference(), "a.c");
        assert_eq!(
            edge_lines(&traversal),
            [r#""root.a" "1" --> "1" "root.a.c""#]
        );
    }

    #[test]
    fn test_entry_order_is_preserved() {
        let traversal = traverse(
            &mapping(json!({"z": {"y": 1, "x": {}, "w": 2}, "a": {"k": []}})),
            None,
        );

        let references: Vec<&str> = traversal
            .records()
            .iter()
            .map(ClassRecord::full_reference)
            .collect();
        assert_eq!(references, ["z", "z.x", "a", "a.k"]);
        assert_eq!(traversal.records()[0].properties(), ["y: 1", "w: 2"]);
    }

    #[test]
    fn test_traverse_entry_matches_wrapped_mapping() {
        let value = Value::from(json!({"a": {"b": [1]}}));

        let mut wrapped = Mapping::new();
        wrapped.insert("root".to_string(), value.clone());

        assert_eq!(traverse_entry("root", &value), traverse(&wrapped, None));
    }

    #[test]
    fn test_scalar_formatting_in_properties() {
        let mut inner = Mapping::new();
        inner.insert("f".to_string(), Value::from(3.0));
        inner.insert("n".to_string(), Value::Scalar(Scalar::Null));
        inner.insert("t".to_string(), Value::from("two words"));
        let mut node = Mapping::new();
        node.insert("m".to_string(), Value::Mapping(inner));

        let traversal = traverse(&node, None);
        assert_eq!(
            traversal.records()[0].properties(),
            ["f: 3.0", "n: null", "t: two words"]
        );
    }
}
