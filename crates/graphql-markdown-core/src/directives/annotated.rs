use crate::SchemaEntity;
use graphql_markdown_schema::DirectiveAnnotation;
use graphql_markdown_schema::types::EnumValue;
use graphql_markdown_schema::types::Field;
use graphql_markdown_schema::types::InputValue;

/// Anything directives can be applied to: documented entities as well as the
/// fields, arguments and enum values printed inside their documents.
pub trait Annotated {
    fn annotations(&self) -> &[DirectiveAnnotation];
    fn annotated_name(&self) -> &str;

    fn has_annotation(&self, directive_name: &str) -> bool {
        self.annotations()
            .iter()
            .any(|annot| annot.directive_name() == directive_name)
    }
}

impl Annotated for SchemaEntity<'_> {
    fn annotations(&self) -> &[DirectiveAnnotation] {
        self.directives()
    }

    fn annotated_name(&self) -> &str {
        self.name()
    }
}

impl Annotated for EnumValue {
    fn annotations(&self) -> &[DirectiveAnnotation] {
        self.directives()
    }

    fn annotated_name(&self) -> &str {
        self.name()
    }
}

impl Annotated for Field {
    fn annotations(&self) -> &[DirectiveAnnotation] {
        self.directives()
    }

    fn annotated_name(&self) -> &str {
        self.name()
    }
}

impl Annotated for InputValue {
    fn annotations(&self) -> &[DirectiveAnnotation] {
        self.directives()
    }

    fn annotated_name(&self) -> &str {
        self.name()
    }
}
