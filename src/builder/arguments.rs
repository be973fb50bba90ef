//! Argument serialization.
//!
//! Arguments are first converted to a [`serde_json::Value`] and then written
//! as GraphQL literals: bare keys, JSON string literals with Unicode left
//! intact, inline `{key:value}` objects and `[a,b]` lists.

use serde::Serialize;
use serde_json::{Map, Value};

use super::finite::ensure_finite;
use super::BuildError;

/// How enum arguments are turned into bare tokens.
///
/// Both strategies emit `status:ACTIVE` for an enum argument `status`
/// holding the string `"ACTIVE"`. They differ only when the same quoted
/// text appears more than once in the serialized arguments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnumStrategy {
    /// Skip quoting while serializing, for the flagged top-level keys only.
    #[default]
    Structural,
    /// Serialize everything, then replace each enum value's quoted form
    /// with its bare form across the whole argument string.
    ///
    /// Any other argument holding the same string is unquoted as well.
    TextReplace,
}

/// Serializes `arguments` into a comma-separated `key:value` list.
pub(crate) fn serialize_arguments<T>(
    arguments: &T,
    enum_arguments: &[String],
    strategy: EnumStrategy,
) -> Result<String, BuildError>
where
    T: Serialize + ?Sized,
{
    let map = to_argument_map(arguments)?;

    if enum_arguments.is_empty() {
        return Ok(render_entries(&map, |_| false));
    }

    let is_enum = |key: &str| enum_arguments.iter().any(|name| name == key);
    match strategy {
        EnumStrategy::Structural => Ok(render_entries(&map, is_enum)),
        EnumStrategy::TextReplace => {
            let rendered = render_entries(&map, |_| false);
            Ok(replace_enum_literals(&map, rendered, is_enum))
        }
    }
}

fn to_argument_map<T>(arguments: &T) -> Result<Map<String, Value>, BuildError>
where
    T: Serialize + ?Sized,
{
    ensure_finite(arguments)?;

    match serde_json::to_value(arguments)? {
        Value::Object(map) => Ok(map),
        // `()`, `None` and empty sequences stand for "no arguments"
        Value::Null => Ok(Map::new()),
        Value::Array(items) if items.is_empty() => Ok(Map::new()),
        other => Err(BuildError::ArgumentsNotAnObject {
            found: json_type_name(&other),
        }),
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn render_entries(map: &Map<String, Value>, is_enum: impl Fn(&str) -> bool) -> String {
    let mut out = String::new();
    for (index, (key, value)) in map.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        out.push_str(key);
        out.push(':');
        match value {
            Value::String(symbol) if is_enum(key.as_str()) => out.push_str(symbol),
            _ => {
                if is_enum(key.as_str()) {
                    tracing::debug!(
                        "Enum argument '{}' is not a string; rendering it as a literal",
                        key
                    );
                }
                write_value(&mut out, value);
            }
        }
    }
    out
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Object(map) => {
            out.push('{');
            out.push_str(&render_entries(map, |_| false));
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        // serde_json leaves non-ASCII characters unescaped
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
            out.push_str(&value.to_string());
        }
    }
}

fn replace_enum_literals(
    map: &Map<String, Value>,
    rendered: String,
    is_enum: impl Fn(&str) -> bool,
) -> String {
    map.iter()
        .filter(|(key, _)| is_enum(key.as_str()))
        .fold(rendered, |acc, (key, value)| {
            let Value::String(symbol) = value else {
                tracing::debug!(
                    "Enum argument '{}' is not a string; leaving it unchanged",
                    key
                );
                return acc;
            };
            let quoted = value.to_string();
            if !acc.contains(&quoted) {
                tracing::debug!(
                    "Quoted value of enum argument '{}' not found; leaving it unchanged",
                    key
                );
                return acc;
            }
            acc.replace(&quoted, symbol)
        })
}
