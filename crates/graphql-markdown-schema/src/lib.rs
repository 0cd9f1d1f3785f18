pub mod ast;
mod directive_annotation;
mod file_reader;
pub mod loc;
pub mod schema;
pub mod types;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use file_reader::ReadContentError;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
pub use value::Value;
pub use value::quote_string;
