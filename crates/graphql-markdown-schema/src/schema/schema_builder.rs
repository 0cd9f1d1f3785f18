use crate::ast;
use crate::DirectiveAnnotation;
use crate::file_reader;
use crate::loc;
use crate::schema::builtins;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::DirectiveDefinition;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from one or more SDL documents.
///
/// No validation beyond what is needed to assemble the type map is performed:
/// the loaded documents are assumed to describe a valid schema.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, DirectiveDefinition>,
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(file_path.as_path(), ext)?;
        }

        let builtin_scalars = Self::parse_builtin(builtins::BUILTIN_SCALARS_SDL)?;
        let builtin_directives = Self::parse_builtin(builtins::BUILTIN_DIRECTIVES_SDL)?;
        let introspection = Self::parse_builtin(builtins::INTROSPECTION_SDL)?;

        for def in builtin_directives.definitions {
            if let ast::schema::Definition::DirectiveDefinition(def) = def
                && !self.directive_defs.contains_key(def.name.as_str()) {
                self.directive_defs.insert(
                    def.name.to_string(),
                    DirectiveDefinition::from_ast(None, &def),
                );
            }
        }

        let mut builtin_scalar_types: IndexMap<String, GraphQLType> =
            IndexMap::new();
        for def in builtin_scalars.definitions {
            if let ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Scalar(scalar_def),
            ) = def {
                let scalar_type = Self::scalar_type_from_ast(None, &scalar_def);
                builtin_scalar_types.insert(
                    scalar_def.name.to_string(),
                    GraphQLType::Scalar(scalar_type),
                );
            }
        }

        let types = self.order_types_with_builtins(
            builtin_scalar_types,
            introspection,
        )?;

        let query_type = Self::resolve_root_type(
            self.query_type.take(),
            OperationKind::Query,
            &types,
        );
        let mutation_type = Self::resolve_root_type(
            self.mutation_type.take(),
            OperationKind::Mutation,
            &types,
        );
        let subscription_type = Self::resolve_root_type(
            self.subscription_type.take(),
            OperationKind::Subscription,
            &types,
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: IndexMap::new(),
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_schema_file(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: Some(file_path.to_owned()),
                    err: err.to_string(),
                })?.into_static();

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn add_new_type(
        &mut self,
        type_name: &str,
        type_: GraphQLType,
    ) -> Result<()> {
        if let Some(conflicting_type) = self.types.get(type_name) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: type_name.to_string(),
                def1: conflicting_type.def_location().to_owned(),
                def2: type_.def_location().to_owned(),
            });
        }

        self.types.insert(type_name.to_string(), type_);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;

        let (type_name, position, expected_kind) = match &ext {
            TypeExtension::Enum(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Enum),
            TypeExtension::InputObject(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::InputObject),
            TypeExtension::Interface(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Interface),
            TypeExtension::Object(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Object),
            TypeExtension::Scalar(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Scalar),
            TypeExtension::Union(ext) =>
                (ext.name.to_string(), ext.position, GraphQLTypeKind::Union),
        };
        let extension_loc: loc::SchemaDefLocation =
            loc::FilePosition::from_pos(file_path, position).into();
        let file_path = Some(file_path);

        let Some(existing_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_type_loc: extension_loc,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) => {
                enum_type.directives.append(
                    &mut DirectiveAnnotation::from_ast(&ext.directives),
                );
                for value in ext.values.iter() {
                    enum_type.values.insert(
                        value.name.to_string(),
                        EnumValue::from_ast(file_path, &type_name, value),
                    );
                }
            },

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) => {
                inputobj_type.directives.append(
                    &mut DirectiveAnnotation::from_ast(&ext.directives),
                );
                for field in ext.fields.iter() {
                    inputobj_type.fields.insert(
                        field.name.to_string(),
                        InputValue::from_ast(file_path, field),
                    );
                }
            },

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) =>
                Self::merge_object_or_interface_extension(
                    &mut iface_type.0,
                    file_path,
                    &ext.directives,
                    &ext.implements_interfaces,
                    &ext.fields,
                ),

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) =>
                Self::merge_object_or_interface_extension(
                    &mut obj_type.0,
                    file_path,
                    &ext.directives,
                    &ext.implements_interfaces,
                    &ext.fields,
                ),

            (GraphQLType::Scalar(scalar_type), TypeExtension::Scalar(ext)) =>
                scalar_type.directives.append(
                    &mut DirectiveAnnotation::from_ast(&ext.directives),
                ),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) => {
                union_type.directives.append(
                    &mut DirectiveAnnotation::from_ast(&ext.directives),
                );
                for member in ext.types.iter() {
                    if !union_type.members.contains(member) {
                        union_type.members.push(member.to_string());
                    }
                }
            },

            (existing_type, _) =>
                return Err(SchemaBuildError::InvalidExtensionType {
                    type_name,
                    existing_kind: GraphQLTypeKind::from(&*existing_type),
                    extension_kind: expected_kind,
                    extension_loc,
                }),
        }

        Ok(())
    }

    fn merge_object_or_interface_extension(
        data: &mut ObjectOrInterfaceTypeData,
        file_path: Option<&Path>,
        directives: &[ast::operation::Directive],
        implements_interfaces: &[String],
        fields: &[ast::schema::Field],
    ) {
        data.directives.append(&mut DirectiveAnnotation::from_ast(directives));
        for iface_name in implements_interfaces {
            if !data.interfaces.contains(iface_name) {
                data.interfaces.push(iface_name.to_string());
            }
        }
        for field in fields {
            data.fields.insert(
                field.name.to_string(),
                Field::from_ast(file_path, data.name.as_str(), field),
            );
        }
    }

    fn object_or_interface_data_from_ast(
        file_path: Option<&Path>,
        position: ast::Pos,
        description: &Option<String>,
        name: &str,
        directives: &[ast::operation::Directive],
        implements_interfaces: &[String],
        fields: &[ast::schema::Field],
    ) -> ObjectOrInterfaceTypeData {
        ObjectOrInterfaceTypeData {
            def_location: loc::SchemaDefLocation::from_pos(file_path, position),
            description: description.to_owned(),
            directives: DirectiveAnnotation::from_ast(directives),
            fields: fields.iter().map(|field| (
                field.name.to_string(),
                Field::from_ast(file_path, name, field),
            )).collect(),
            interfaces: implements_interfaces.to_vec(),
            name: name.to_string(),
        }
    }

    /// Appends the built-in scalars and the introspection types to the
    /// declared types.
    ///
    /// Built-in scalars only appear once referenced, right after the first
    /// declared type that references them. Scalars referenced only by
    /// directive arguments follow the declared types, and the introspection
    /// types come last.
    fn order_types_with_builtins(
        &mut self,
        mut builtin_scalars: IndexMap<String, GraphQLType>,
        introspection: ast::schema::Document,
    ) -> Result<IndexMap<String, GraphQLType>> {
        let declared = std::mem::take(&mut self.types);
        let mut types = IndexMap::with_capacity(declared.len());

        let mut pull_builtin =
            |types: &mut IndexMap<String, GraphQLType>, referenced: &str| {
                if !types.contains_key(referenced)
                    && !declared.contains_key(referenced)
                    && let Some(scalar) = builtin_scalars.shift_remove(referenced) {
                    types.insert(referenced.to_string(), scalar);
                }
            };

        for (type_name, type_) in declared.iter() {
            types.insert(type_name.to_string(), type_.clone());
            for referenced in referenced_type_names(type_) {
                pull_builtin(&mut types, referenced);
            }
        }

        for directive_def in self.directive_defs.values() {
            for arg in directive_def.arguments().values() {
                pull_builtin(&mut types, arg.type_annotation().innermost_type_name());
            }
        }

        for def in introspection.definitions {
            if let ast::schema::Definition::TypeDefinition(type_def) = def {
                let type_ = Self::type_from_ast(None, type_def);
                let referenced: Vec<String> = referenced_type_names(&type_)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if !types.contains_key(type_.name()) {
                    types.insert(type_.name().to_string(), type_);
                }
                for referenced in referenced.iter() {
                    pull_builtin(&mut types, referenced);
                }
            }
        }

        Ok(types)
    }

    fn parse_builtin(sdl: &str) -> Result<ast::schema::Document> {
        graphql_parser::schema::parse_schema::<String>(sdl)
            .map(|doc| doc.into_static())
            .map_err(|err| SchemaBuildError::ParseError {
                file: None,
                err: err.to_string(),
            })
    }

    fn resolve_root_type(
        explicit: Option<NamedTypeDefLocation>,
        kind: OperationKind,
        types: &IndexMap<String, GraphQLType>,
    ) -> Option<String> {
        match explicit {
            Some(def) => Some(def.type_name),
            None => match types.get(kind.default_type_name()) {
                Some(GraphQLType::Object(_)) =>
                    Some(kind.default_type_name().to_string()),
                _ => None,
            },
        }
    }

    fn scalar_type_from_ast(
        file_path: Option<&Path>,
        scalar_def: &ast::schema::ScalarType,
    ) -> ScalarType {
        ScalarType {
            def_location: loc::SchemaDefLocation::from_pos(
                file_path,
                scalar_def.position,
            ),
            description: scalar_def.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(&scalar_def.directives),
            name: scalar_def.name.to_string(),
        }
    }

    fn type_from_ast(
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> GraphQLType {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) =>
                GraphQLType::Enum(EnumType {
                    def_location: loc::SchemaDefLocation::from_pos(
                        file_path,
                        enum_def.position,
                    ),
                    description: enum_def.description.to_owned(),
                    directives: DirectiveAnnotation::from_ast(&enum_def.directives),
                    values: enum_def.values.iter().map(|value| (
                        value.name.to_string(),
                        EnumValue::from_ast(file_path, &enum_def.name, value),
                    )).collect(),
                    name: enum_def.name,
                }),

            TypeDefinition::InputObject(inputobj_def) =>
                GraphQLType::InputObject(InputObjectType {
                    def_location: loc::SchemaDefLocation::from_pos(
                        file_path,
                        inputobj_def.position,
                    ),
                    description: inputobj_def.description.to_owned(),
                    directives: DirectiveAnnotation::from_ast(&inputobj_def.directives),
                    fields: inputobj_def.fields.iter().map(|field| (
                        field.name.to_string(),
                        InputValue::from_ast(file_path, field),
                    )).collect(),
                    name: inputobj_def.name,
                }),

            TypeDefinition::Interface(iface_def) =>
                GraphQLType::Interface(InterfaceType(
                    Self::object_or_interface_data_from_ast(
                        file_path,
                        iface_def.position,
                        &iface_def.description,
                        &iface_def.name,
                        &iface_def.directives,
                        &iface_def.implements_interfaces,
                        &iface_def.fields,
                    ),
                )),

            TypeDefinition::Object(obj_def) =>
                GraphQLType::Object(ObjectType(
                    Self::object_or_interface_data_from_ast(
                        file_path,
                        obj_def.position,
                        &obj_def.description,
                        &obj_def.name,
                        &obj_def.directives,
                        &obj_def.implements_interfaces,
                        &obj_def.fields,
                    ),
                )),

            TypeDefinition::Scalar(scalar_def) =>
                GraphQLType::Scalar(Self::scalar_type_from_ast(
                    file_path,
                    &scalar_def,
                )),

            TypeDefinition::Union(union_def) =>
                GraphQLType::Union(UnionType {
                    def_location: loc::SchemaDefLocation::from_pos(
                        file_path,
                        union_def.position,
                    ),
                    description: union_def.description.to_owned(),
                    directives: DirectiveAnnotation::from_ast(&union_def.directives),
                    members: union_def.types.iter()
                        .map(|member| member.to_string())
                        .collect::<IndexSet<_>>()
                        .into_iter()
                        .collect(),
                    name: union_def.name,
                }),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) => {
                let type_ = Self::type_from_ast(Some(file_path), type_def);
                let type_name = type_.name().to_string();
                self.add_new_type(type_name.as_str(), type_)
            },
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let directive_def = DirectiveDefinition::from_ast(Some(file_path), &def);

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                location1: existing_def.def_location().clone(),
                location2: directive_def.def_location().clone(),
            });
        }

        self.directive_defs.insert(def.name.to_string(), directive_def);
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_defs = [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
            (OperationKind::Subscription, &schema_def.subscription),
        ];

        for (kind, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            let slot = match kind {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
                OperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation: kind,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of every type directly referenced by `type_` (field and argument
/// types, union members, implemented interfaces), in declaration order.
fn referenced_type_names(type_: &GraphQLType) -> Vec<&str> {
    fn field_refs<'a>(
        fields: impl Iterator<Item = &'a Field>,
        names: &mut Vec<&'a str>,
    ) {
        for field in fields {
            names.push(field.type_annotation().innermost_type_name());
            for arg in field.arguments().values() {
                names.push(arg.type_annotation().innermost_type_name());
            }
        }
    }

    let mut names = vec![];
    match type_ {
        GraphQLType::Enum(_) | GraphQLType::Scalar(_) => (),
        GraphQLType::InputObject(inputobj_type) => names.extend(
            inputobj_type.fields()
                .values()
                .map(|field| field.type_annotation())
                .map(TypeAnnotation::innermost_type_name),
        ),
        GraphQLType::Interface(iface_type) => {
            names.extend(iface_type.interface_names());
            field_refs(iface_type.fields().values(), &mut names);
        },
        GraphQLType::Object(obj_type) => {
            names.extend(obj_type.interface_names());
            field_refs(obj_type.fields().values(), &mut names);
        },
        GraphQLType::Union(union_type) =>
            names.extend(union_type.member_type_names()),
    }
    names
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error("The {operation:?} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend `{type_name}`, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error(
        "`{type_name}` is defined as `{existing_kind}` but extended with \
        `extend {extension_kind}`"
    )]
    InvalidExtensionType {
        type_name: String,
        existing_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Error parsing schema string: {err}")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),
}

/// Represents the file location of a given root type's reference in a
/// `schema { ... }` block.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: ast::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}
