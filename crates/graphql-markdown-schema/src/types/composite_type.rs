use crate::DirectiveAnnotation;
use crate::types::Field;
use indexmap::IndexMap;

/// A type made of fields that may implement interfaces: an
/// [`ObjectType`](crate::types::ObjectType) or an
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait CompositeType {
    fn description(&self) -> Option<&str>;
    fn directives(&self) -> &Vec<DirectiveAnnotation>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;

    fn implements(&self, iface_name: &str) -> bool {
        self.interface_names().contains(&iface_name)
    }

    /// Indicates whether a field or field argument of this type is declared
    /// with `type_name` as its innermost type.
    fn references_type(&self, type_name: &str) -> bool {
        self.fields()
            .values()
            .any(|field| field.references_type(type_name))
    }
}
