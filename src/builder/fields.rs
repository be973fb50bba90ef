//! Output field selections and their rendering.
//!
//! A [`FieldSpec`] describes the desired shape of a response as an ordered
//! tree. Leaves name scalar fields, nodes name sub-objects whose own
//! selection is rendered inside braces.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a [`FieldSpec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldNode {
    /// A scalar field; the contained name is what gets rendered.
    Leaf(String),
    /// A sub-object; its key is rendered followed by the nested selection.
    Node(FieldSpec),
}

/// An ordered selection of output fields.
///
/// Entries render in insertion order. For a leaf the field name is
/// emitted and its key is only used for lookups and serialization; for a
/// node the key is emitted followed by the nested selection.
///
/// # Example
///
/// ```rust
/// use graphql_payload::FieldSpec;
///
/// let fields = FieldSpec::new()
///     .field("id")
///     .nested("profile", FieldSpec::new().field("name"));
///
/// assert_eq!(fields.render(), "{ id profile { name } } ");
/// ```
///
/// # JSON Form
///
/// `FieldSpec` deserializes from an array of names, an object mapping keys
/// to names or nested selections, or any mix of the two:
///
/// ```rust
/// use graphql_payload::FieldSpec;
///
/// let fields: FieldSpec =
///     serde_json::from_str(r#"["id", {"profile": ["name", "email"]}]"#).unwrap();
/// assert_eq!(fields.render(), "{ id profile { name email } } ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct FieldSpec {
    entries: Vec<(String, FieldNode)>,
}

impl FieldSpec {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a scalar field keyed by its own name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.entries.push((name.clone(), FieldNode::Leaf(name)));
        self
    }

    /// Appends a sub-object selection under `key`.
    #[must_use]
    pub fn nested(mut self, key: impl Into<String>, fields: Self) -> Self {
        self.entries.push((key.into(), FieldNode::Node(fields)));
        self
    }

    /// Appends an arbitrary entry.
    pub fn push(&mut self, key: impl Into<String>, node: FieldNode) {
        self.entries.push((key.into(), node));
    }

    /// Builds a flat selection from scalar field names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().fold(Self::new(), Self::field)
    }

    /// Returns `true` if the selection has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Returns the brace nesting depth of the rendered selection.
    ///
    /// An empty selection still renders one brace pair, so its depth is 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .entries
            .iter()
            .filter_map(|(_, node)| match node {
                FieldNode::Node(sub) => Some(sub.depth()),
                FieldNode::Leaf(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Renders the selection as a brace-delimited field graph.
    ///
    /// Every token, including the closing brace, is followed by a single
    /// space, so the result always ends in `"} "`. An empty selection, at
    /// any level, renders as `"{ } "`.
    #[must_use]
    pub fn render(&self) -> String {
        let mut graph = String::from("{ ");
        self.render_into(&mut graph, None);
        graph
    }

    /// Renders the selection, selecting `defaults` wherever a nested
    /// sub-object has no fields of its own.
    ///
    /// The substituted defaults are rendered as-is: empty sub-objects inside
    /// `defaults` render as `"{ } "`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_payload::FieldSpec;
    ///
    /// let defaults = FieldSpec::from_names(["id"]);
    /// let fields = FieldSpec::new().field("name").nested("owner", FieldSpec::new());
    ///
    /// assert_eq!(fields.render_with_defaults(&defaults), "{ name owner { id } } ");
    /// ```
    #[must_use]
    pub fn render_with_defaults(&self, defaults: &Self) -> String {
        let mut graph = String::from("{ ");
        self.render_into(&mut graph, Some(defaults));
        graph
    }

    fn render_into(&self, graph: &mut String, defaults: Option<&Self>) {
        for (key, node) in &self.entries {
            match node {
                FieldNode::Node(sub) => {
                    graph.push_str(key);
                    graph.push_str(" { ");
                    match defaults {
                        Some(defaults) if sub.is_empty() => defaults.render_into(graph, None),
                        _ => sub.render_into(graph, defaults),
                    }
                }
                FieldNode::Leaf(name) => {
                    graph.push_str(name);
                    graph.push(' ');
                }
            }
        }
        graph.push_str("} ");
    }

    fn extend_from_json(&mut self, value: Value) -> Result<(), ConfigError> {
        match value {
            Value::String(name) => self.push(name.clone(), FieldNode::Leaf(name)),
            Value::Array(items) => {
                for item in items {
                    match item {
                        Value::String(_) | Value::Object(_) => self.extend_from_json(item)?,
                        other => return Err(Self::invalid_entry("array item", &other)),
                    }
                }
            }
            Value::Object(map) => {
                for (key, node) in map {
                    match node {
                        Value::String(name) => self.push(key, FieldNode::Leaf(name)),
                        Value::Array(_) | Value::Object(_) => {
                            let mut sub = Self::new();
                            sub.extend_from_json(node)?;
                            self.push(key, FieldNode::Node(sub));
                        }
                        other => return Err(Self::invalid_entry(&key, &other)),
                    }
                }
            }
            Value::Null => {}
            other => return Err(Self::invalid_entry("selection", &other)),
        }
        Ok(())
    }

    fn invalid_entry(at: &str, value: &Value) -> ConfigError {
        ConfigError::InvalidFieldSpec {
            reason: format!(
                "'{at}' must be a field name, a list or a nested object, found {value}"
            ),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, FieldNode)> for FieldSpec {
    fn from_iter<T: IntoIterator<Item = (K, FieldNode)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, node)| (k.into(), node)).collect(),
        }
    }
}

impl TryFrom<Value> for FieldSpec {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut spec = Self::new();
        spec.extend_from_json(value)?;
        Ok(spec)
    }
}

impl From<FieldSpec> for Value {
    /// Produces the array form, which keeps order and repeated keys.
    ///
    /// Leaves keyed by their own name become plain strings; every other
    /// entry becomes a single-key object.
    fn from(spec: FieldSpec) -> Self {
        let items = spec
            .entries
            .into_iter()
            .map(|(key, node)| match node {
                FieldNode::Leaf(name) if name == key => Self::String(name),
                FieldNode::Leaf(name) => single_entry(key, Self::String(name)),
                FieldNode::Node(sub) => single_entry(key, sub.into()),
            })
            .collect();
        Self::Array(items)
    }
}

fn single_entry(key: String, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key, value);
    Value::Object(map)
}
