//! Recursive camelCase conversion for JSON Schema / OpenAPI documents.
//!
//! [`to_camel_case`] converts a single snake_case or kebab-case token;
//! [`camelize_schema`] walks a whole JSON value tree and applies it to object
//! keys and to a small allow-list of string-valued fields.

pub mod camelize_schema;
pub mod to_camel_case;

pub use camelize_schema::{camelize_schema, is_transformable_value_key, TRANSFORMABLE_VALUE_KEYS};
pub use to_camel_case::to_camel_case;
