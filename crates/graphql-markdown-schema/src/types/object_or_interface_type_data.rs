use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Storage shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType), whose definitions only
/// differ by keyword.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    pub(crate) fn interface_names(&self) -> Vec<&str> {
        self.interfaces.iter().map(String::as_str).collect()
    }
}
