mod config;
pub mod directives;
mod entity;
mod error;
pub mod groups;
pub mod introspection;
pub mod printer;
pub mod relations;
mod render;

pub use config::CustomDirectiveConfig;
pub use config::DeprecatedMode;
pub use config::GeneratorConfig;
pub use config::HeaderOptions;
pub use config::Hierarchy;
pub use config::PrintTypeConfig;
pub use entity::SchemaEntity;
pub use entity::SchemaMapSlot;
pub use error::ConfigError;
pub use error::DirectiveError;
pub use error::PrintError;
pub use introspection::SchemaMap;
pub use render::render_schema;
pub use render::RenderedDocument;

#[cfg(test)]
mod test_utils;
