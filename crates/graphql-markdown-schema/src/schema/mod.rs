//! Loading SDL documents into a validated, queryable [`Schema`].

mod builtins;
#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;

pub use schema::OperationKind;
pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;

#[cfg(test)]
mod tests;
