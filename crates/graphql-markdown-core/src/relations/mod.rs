use crate::SchemaEntity;
use crate::SchemaMap;
use crate::SchemaMapSlot;
use graphql_markdown_schema::types::CompositeType;
use graphql_markdown_schema::types::InputValue;
use graphql_markdown_schema::types::TypeAnnotation;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// Entities related to some type, per slot. Slots without any related entity
/// are omitted.
pub type RelationMap<'a> = IndexMap<SchemaMapSlot, Vec<SchemaEntity<'a>>>;

const OPERATION_SLOTS: [SchemaMapSlot; 3] = [
    SchemaMapSlot::Queries,
    SchemaMapSlot::Mutations,
    SchemaMapSlot::Subscriptions,
];

const FIELD_OWNER_SLOTS: [SchemaMapSlot; 7] = [
    SchemaMapSlot::Queries,
    SchemaMapSlot::Mutations,
    SchemaMapSlot::Subscriptions,
    SchemaMapSlot::Objects,
    SchemaMapSlot::Interfaces,
    SchemaMapSlot::Inputs,
    SchemaMapSlot::Directives,
];

/// Visits every entity of `slots` and keeps the ones `is_related` accepts.
///
/// Each slot list is deduplicated by [`relation_key`], keeping the first
/// occurrence in schema map order.
fn get_relation_of_type<'a>(
    slots: &[SchemaMapSlot],
    schema_map: &SchemaMap<'a>,
    is_related: impl Fn(SchemaEntity<'a>) -> bool,
) -> RelationMap<'a> {
    let mut relations = RelationMap::new();
    for slot in slots {
        let mut seen = IndexSet::new();
        let related: Vec<SchemaEntity<'a>> = schema_map.get(*slot)
            .values()
            .copied()
            .filter(|entity| is_related(*entity))
            .filter(|entity| seen.insert(relation_key(*entity)))
            .collect();
        if !related.is_empty() {
            relations.insert(*slot, related);
        }
    }
    relations
}

/// Directives are keyed by the directive name, every other entity by its own
/// name.
pub fn relation_key(entity: SchemaEntity<'_>) -> &str {
    match entity {
        SchemaEntity::Directive(definition) => definition.name(),
        entity => entity.name(),
    }
}

fn references(annot: &TypeAnnotation, type_name: &str) -> bool {
    annot.innermost_type_name() == type_name
}

fn any_argument_references<'v>(
    mut arguments: impl Iterator<Item = &'v InputValue>,
    type_name: &str,
) -> bool {
    arguments.any(|arg| references(arg.type_annotation(), type_name))
}

/// Operations whose (unwrapped) return type is `type_name`.
pub fn get_relation_of_return<'a>(
    type_name: &str,
    schema_map: &SchemaMap<'a>,
) -> RelationMap<'a> {
    get_relation_of_type(&OPERATION_SLOTS, schema_map, |entity| match entity {
        SchemaEntity::Operation { field, .. } =>
            references(field.type_annotation(), type_name),
        _ => false,
    })
}

/// Entities with a field or argument of type `type_name`. The owning entity is
/// recorded, not the field.
pub fn get_relation_of_field<'a>(
    type_name: &str,
    schema_map: &SchemaMap<'a>,
) -> RelationMap<'a> {
    get_relation_of_type(&FIELD_OWNER_SLOTS, schema_map, |entity| match entity {
        SchemaEntity::Operation { field, .. } => field.references_type(type_name),
        SchemaEntity::Object(object_type) => object_type.references_type(type_name),
        SchemaEntity::Interface(iface_type) => iface_type.references_type(type_name),
        SchemaEntity::InputObject(input_type) =>
            any_argument_references(input_type.fields().values(), type_name),
        SchemaEntity::Directive(definition) =>
            any_argument_references(definition.arguments().values(), type_name),
        SchemaEntity::Enum(_)
        | SchemaEntity::Scalar(_)
        | SchemaEntity::Union(_) => false,
    })
}

/// Unions listing `type_name` as a member.
pub fn get_relation_of_union<'a>(
    type_name: &str,
    schema_map: &SchemaMap<'a>,
) -> RelationMap<'a> {
    get_relation_of_type(&[SchemaMapSlot::Unions], schema_map, |entity| match entity {
        SchemaEntity::Union(union_type) =>
            union_type.has_member(type_name),
        _ => false,
    })
}

/// Objects and interfaces implementing the interface `type_name`.
pub fn get_relation_of_interface<'a>(
    type_name: &str,
    schema_map: &SchemaMap<'a>,
) -> RelationMap<'a> {
    let slots = [SchemaMapSlot::Objects, SchemaMapSlot::Interfaces];
    get_relation_of_type(&slots, schema_map, |entity| implements(entity, type_name))
}

/// Union of [`get_relation_of_union`] and [`get_relation_of_interface`]: every
/// entity extending `type_name`.
pub fn get_relation_of_implementation<'a>(
    type_name: &str,
    schema_map: &SchemaMap<'a>,
) -> RelationMap<'a> {
    let slots = [SchemaMapSlot::Objects, SchemaMapSlot::Interfaces, SchemaMapSlot::Unions];
    get_relation_of_type(&slots, schema_map, |entity| match entity {
        SchemaEntity::Union(union_type) =>
            union_type.has_member(type_name),
        entity => implements(entity, type_name),
    })
}

fn implements(entity: SchemaEntity<'_>, type_name: &str) -> bool {
    match entity {
        SchemaEntity::Object(object_type) => object_type.implements(type_name),
        SchemaEntity::Interface(iface_type) => iface_type.implements(type_name),
        _ => false,
    }
}
