use crate::SchemaEntity;
use crate::SchemaMapSlot;
use graphql_markdown_schema::Schema;
use graphql_markdown_schema::schema::OperationKind;
use graphql_markdown_schema::types::GraphQLType;
use indexmap::IndexMap;
use regex::Regex;

/// Entities of one [`SchemaMap`] slot, keyed by name in schema order.
pub type SchemaMapEntries<'a> = IndexMap<&'a str, SchemaEntity<'a>>;

/// Every documentable entity of a [`Schema`], partitioned into ten slots.
///
/// Root operation types never appear in the `objects` slot (their fields are
/// listed under `queries`, `mutations` and `subscriptions` instead), and
/// `__`-prefixed introspection types appear nowhere.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaMap<'a> {
    pub queries: SchemaMapEntries<'a>,
    pub mutations: SchemaMapEntries<'a>,
    pub subscriptions: SchemaMapEntries<'a>,
    pub directives: SchemaMapEntries<'a>,
    pub objects: SchemaMapEntries<'a>,
    pub unions: SchemaMapEntries<'a>,
    pub interfaces: SchemaMapEntries<'a>,
    pub enums: SchemaMapEntries<'a>,
    pub inputs: SchemaMapEntries<'a>,
    pub scalars: SchemaMapEntries<'a>,
}
impl<'a> SchemaMap<'a> {
    /// Finds the entity a type reference named `name` points at, searching
    /// the slots in [`SchemaMapSlot::TYPES`] order.
    pub fn find_type(&self, name: &str) -> Option<(SchemaMapSlot, SchemaEntity<'a>)> {
        SchemaMapSlot::TYPES.into_iter().find_map(|slot| {
            self.get(slot).get(name).map(|entity| (slot, *entity))
        })
    }

    pub fn get(&self, slot: SchemaMapSlot) -> &SchemaMapEntries<'a> {
        match slot {
            SchemaMapSlot::Queries => &self.queries,
            SchemaMapSlot::Mutations => &self.mutations,
            SchemaMapSlot::Subscriptions => &self.subscriptions,
            SchemaMapSlot::Directives => &self.directives,
            SchemaMapSlot::Objects => &self.objects,
            SchemaMapSlot::Unions => &self.unions,
            SchemaMapSlot::Interfaces => &self.interfaces,
            SchemaMapSlot::Enums => &self.enums,
            SchemaMapSlot::Inputs => &self.inputs,
            SchemaMapSlot::Scalars => &self.scalars,
        }
    }

    fn get_mut(&mut self, slot: SchemaMapSlot) -> &mut SchemaMapEntries<'a> {
        match slot {
            SchemaMapSlot::Queries => &mut self.queries,
            SchemaMapSlot::Mutations => &mut self.mutations,
            SchemaMapSlot::Subscriptions => &mut self.subscriptions,
            SchemaMapSlot::Directives => &mut self.directives,
            SchemaMapSlot::Objects => &mut self.objects,
            SchemaMapSlot::Unions => &mut self.unions,
            SchemaMapSlot::Interfaces => &mut self.interfaces,
            SchemaMapSlot::Enums => &mut self.enums,
            SchemaMapSlot::Inputs => &mut self.inputs,
            SchemaMapSlot::Scalars => &mut self.scalars,
        }
    }

    /// Iterates every slot in [`SchemaMapSlot::ALL`] order, empty ones
    /// included.
    pub fn iter(&self) -> impl Iterator<Item = (SchemaMapSlot, &SchemaMapEntries<'a>)> {
        SchemaMapSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    /// Iterates every entity of every slot, in slot then schema order.
    pub fn entities(&self) -> impl Iterator<Item = (SchemaMapSlot, SchemaEntity<'a>)> {
        self.iter().flat_map(|(slot, entries)| {
            entries.values().map(move |entity| (slot, *entity))
        })
    }
}

/// Builds the [`SchemaMap`] of `schema`.
///
/// Operation slots hold the fields of the resolved root types (empty when the
/// schema has no such root). The type slots follow the schema's type map
/// order, skipping the root types themselves and introspection types.
pub fn get_schema_map(schema: &Schema) -> SchemaMap<'_> {
    let mut schema_map = SchemaMap::default();

    for kind in OperationKind::ALL {
        if let Some(root_type) = schema.root_operation_type(kind) {
            let slot = schema_map.get_mut(SchemaMapSlot::from(kind));
            for (field_name, field) in root_type.fields() {
                slot.insert(
                    field_name.as_str(),
                    SchemaEntity::Operation { kind, field },
                );
            }
        }
    }

    let excluded = excluded_type_pattern(schema);
    for (type_name, type_) in schema.type_map() {
        if excluded.is_match(type_name) {
            continue;
        }
        let slot = match type_ {
            GraphQLType::Enum(_) => SchemaMapSlot::Enums,
            GraphQLType::InputObject(_) => SchemaMapSlot::Inputs,
            GraphQLType::Interface(_) => SchemaMapSlot::Interfaces,
            GraphQLType::Object(_) => SchemaMapSlot::Objects,
            GraphQLType::Scalar(_) => SchemaMapSlot::Scalars,
            GraphQLType::Union(_) => SchemaMapSlot::Unions,
        };
        schema_map.get_mut(slot).insert(
            type_name.as_str(),
            SchemaEntity::from_graphql_type(type_),
        );
    }

    for (directive_name, directive_def) in schema.directives() {
        schema_map.directives.insert(
            directive_name.as_str(),
            SchemaEntity::Directive(directive_def),
        );
    }

    schema_map
}

/// Matches `__`-prefixed names and the names of the root types actually
/// resolved from `schema`.
fn excluded_type_pattern(schema: &Schema) -> Regex {
    let root_names: Vec<String> = OperationKind::ALL
        .into_iter()
        .filter_map(|kind| schema.root_operation_type_name(kind))
        .map(regex::escape)
        .collect();

    let pattern =
        if root_names.is_empty() {
            "^__".to_string()
        } else {
            format!("^(?:__|(?:{})$)", root_names.join("|"))
        };

    Regex::new(pattern.as_str())
        .expect("escaped type names always form a valid pattern")
}
