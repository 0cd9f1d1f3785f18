use crate::ast;
use crate::Value;
use indexmap::IndexMap;

/// Represents a directive applied to some schema item, together with the
/// argument values written at the application site.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) directive_name: String,
}
impl DirectiveAnnotation {
    pub(crate) fn from_ast(
        ast_annots: &[ast::operation::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| {
            let mut arguments = IndexMap::new();
            for (arg_name, arg_val) in ast_annot.arguments.iter() {
                arguments.insert(arg_name.to_string(), Value::from_ast(arg_val));
            }

            DirectiveAnnotation {
                arguments,
                directive_name: ast_annot.name.to_string(),
            }
        }).collect()
    }

    /// The arguments explicitly passed to this annotation, in the order they
    /// were written.
    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    /// The name of the directive being applied (without the leading `@`).
    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }
}
