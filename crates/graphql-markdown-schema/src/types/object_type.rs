use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::CompositeType;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use inherent::inherent;

/// An [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType(pub(crate) ObjectOrInterfaceTypeData);
impl ObjectType {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.0.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        (&self.0.directives).into()
    }
}

#[inherent]
impl CompositeType for ObjectType {
    pub fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    /// Annotations written on the definition, then those added by type
    /// extensions in load order.
    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.0.directives
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.0.fields
    }

    pub fn interface_names(&self) -> Vec<&str> {
        self.0.interface_names()
    }

    pub fn name(&self) -> &str {
        self.0.name.as_str()
    }
}
