use serde_json::{Map, Value};

use super::to_camel_case::to_camel_case;

/// Object keys whose *string values* are also converted to camelCase.
///
/// Renaming keys alone is not enough for OpenAPI documents: `operationId`
/// values and parameter `name` values are themselves snake_case tokens that
/// must be renamed in lockstep with the schemas that mention them. Extend
/// this list to cover further fields; the traversal logic never needs to
/// change.
pub const TRANSFORMABLE_VALUE_KEYS: &[&str] = &["operationId", "name"];

/// Check whether a key's string value should itself be converted.
///
/// # Examples
///
/// ```
/// use camelize_schema::is_transformable_value_key;
///
/// assert!(is_transformable_value_key("operationId"));
/// assert!(is_transformable_value_key("name"));
/// assert!(!is_transformable_value_key("description"));
/// ```
pub fn is_transformable_value_key(key: &str) -> bool {
    TRANSFORMABLE_VALUE_KEYS.contains(&key)
}

/// Recursively convert the keys of a JSON Schema / OpenAPI style document to
/// camelCase.
///
/// Walks an arbitrary JSON value tree and returns a transformed copy with the
/// same shape:
///
/// - object keys are renamed from snake_case / kebab-case to camelCase;
/// - nested objects and arrays are processed recursively;
/// - string elements of a `required` array are renamed in lockstep with the
///   property definitions they list;
/// - string values under the keys in [`TRANSFORMABLE_VALUE_KEYS`] are
///   converted as well.
///
/// Everything else passes through unchanged; scalars and empty containers are
/// returned as-is. In particular, `$ref` pointer strings are never rewritten,
/// even when they target a definition whose key was renamed - callers that
/// rely on internal references resolving must account for this.
///
/// The function is total over finite JSON trees and never mutates its input.
/// Cycles cannot occur in [`Value`], but recursion depth is bounded only by
/// the input's nesting depth, so a pathologically deep document can exhaust
/// the call stack.
///
/// # Examples
///
/// ```
/// use camelize_schema::camelize_schema;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "user_id": { "type": "string" },
///         "display_name": { "type": "string" },
///     },
///     "required": ["user_id"],
/// });
///
/// assert_eq!(
///     camelize_schema(&schema),
///     json!({
///         "type": "object",
///         "properties": {
///             "userId": { "type": "string" },
///             "displayName": { "type": "string" },
///         },
///         "required": ["userId"],
///     }),
/// );
/// ```
pub fn camelize_schema(schema: &Value) -> Value {
    match schema {
        Value::Array(items) => Value::Array(items.iter().map(camelize_element).collect()),
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, value) in obj {
                let new_key = to_camel_case(key);
                let new_value = match value {
                    // A `required` array lists property names; rename them in
                    // lockstep with the property definitions.
                    Value::Array(items) if key == "required" => Value::Array(
                        items
                            .iter()
                            .map(|item| match item {
                                Value::String(s) => Value::String(to_camel_case(s)),
                                other => other.clone(),
                            })
                            .collect(),
                    ),
                    Value::Array(items) => {
                        Value::Array(items.iter().map(camelize_element).collect())
                    }
                    Value::Object(_) => camelize_schema(value),
                    Value::String(s) if is_transformable_value_key(key) => {
                        Value::String(to_camel_case(s))
                    }
                    other => other.clone(),
                };
                out.insert(new_key, new_value);
            }
            Value::Object(out)
        }
        other => other.clone(),
    }
}

// Array elements recurse only when they are containers. Scalar elements are
// not reached through a named field and are never converted.
fn camelize_element(item: &Value) -> Value {
    match item {
        Value::Array(_) | Value::Object(_) => camelize_schema(item),
        other => other.clone(),
    }
}
