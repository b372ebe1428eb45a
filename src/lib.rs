//! camelize-schema - small, independent JSON and async utilities.
//!
//! The centerpiece is [`camelize_schema`], a recursive key converter that
//! rewrites snake_case and kebab-case keys in JSON Schema / OpenAPI style
//! documents to camelCase. [`add`] and [`delay`] are tiny standalone helpers
//! that ship alongside it; none of the three depends on the others.

pub mod add;
pub mod camelize;
pub mod delay;

// Re-exports for convenience
pub use add::add;
pub use camelize::camelize_schema::{camelize_schema, is_transformable_value_key, TRANSFORMABLE_VALUE_KEYS};
pub use camelize::to_camel_case::to_camel_case;
pub use delay::delay;
