use crate::ReadContentError;
use crate::loc;
use crate::schema::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn type_names(schema: &crate::Schema) -> Vec<&str> {
    schema.type_map().keys().map(|name| name.as_str()).collect()
}

mod build_operations {
    use super::*;

    #[test]
    fn build_empty_query_type_str() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query")?
            .build()?;

        assert_eq!(schema.directives().len(), 4);
        assert!(schema.mutation_type().is_none());
        assert!(schema.subscription_type().is_none());

        let query_type = schema.query_type().unwrap();
        assert_eq!(query_type.name(), "Query");
        assert_eq!(query_type.def_location(), &loc::SchemaDefLocation::Schema(
            loc::FilePosition {
                col: 1,
                file: PathBuf::from("str://0"),
                line: 1,
            },
        ));
        assert!(query_type.directives().is_empty());
        assert!(query_type.fields().is_empty());

        Ok(())
    }

    #[test]
    fn schema_block_overrides_default_root_names() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "schema { query: Root mutation: Writes }\n",
                "type Root { a: Int }\n",
                "type Writes { b: Int }\n",
                "type Query { c: Int }\n",
            ))?
            .build()?;

        assert_eq!(schema.root_operation_type_name(OperationKind::Query), Some("Root"));
        assert_eq!(schema.root_operation_type_name(OperationKind::Mutation), Some("Writes"));
        assert_eq!(schema.root_operation_type_name(OperationKind::Subscription), None);
        assert_eq!(schema.query_type().map(|t| t.name()), Some("Root"));

        Ok(())
    }

    #[test]
    fn query_root_is_optional() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Mutation { ping: Boolean }")?
            .build()?;

        assert!(schema.query_type().is_none());
        assert_eq!(schema.mutation_type().map(|t| t.name()), Some("Mutation"));

        Ok(())
    }

    #[test]
    fn default_root_name_requires_an_object_type() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "enum Query { A }")?
            .build()?;

        assert!(schema.root_operation_type_name(OperationKind::Query).is_none());

        Ok(())
    }

    #[test]
    fn duplicate_schema_block_operation_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "schema { query: A }\ntype A { a: Int }\ntype B { b: Int }")
            .and_then(|builder| builder.load_str(None, "schema { query: B }"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: OperationKind::Query,
                ..
            }),
        ));
    }
}

mod type_ordering {
    use super::*;

    #[test]
    fn declared_types_precede_builtins_and_introspection() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { color: Color }\n",
                "enum Color { RED GREEN }\n",
            ))?
            .build()?;

        assert_eq!(type_names(&schema), vec![
            "Query",
            "Color",
            "Boolean",
            "String",
            "__Schema",
            "__Type",
            "__TypeKind",
            "__Field",
            "__InputValue",
            "__EnumValue",
            "__Directive",
            "__DirectiveLocation",
        ]);

        Ok(())
    }

    #[test]
    fn builtin_scalars_follow_their_first_reference() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { user(id: ID!): User }\n",
                "type User { age: Int name: String }\n",
            ))?
            .build()?;

        let names = type_names(&schema);
        assert_eq!(&names[..6], &["Query", "ID", "User", "Int", "String", "Boolean"]);
        assert!(!names.contains(&"Float"));

        Ok(())
    }

    #[test]
    fn builtin_scalars_are_located_as_builtins() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "type Query { a: Int }")?
            .build()?;

        let int_type = schema.type_by_name("Int").unwrap();
        assert_eq!(int_type.def_location(), &loc::SchemaDefLocation::GraphQLBuiltIn);
        assert!(int_type.description().is_some());
        assert!(int_type.as_scalar().is_some_and(|scalar| scalar.is_builtin()));

        Ok(())
    }

    #[test]
    fn declared_builtin_scalar_replaces_the_builtin() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "type Query { a: String }\n",
                "\"Custom strings\"\n",
                "scalar String\n",
            ))?
            .build()?;

        let string_type = schema.type_by_name("String").unwrap();
        assert!(string_type.def_location().is_declared());
        assert_eq!(string_type.description(), Some("Custom strings"));
        assert_eq!(
            type_names(&schema).iter().filter(|name| **name == "String").count(),
            1,
        );

        Ok(())
    }
}

mod directives {
    use super::*;

    #[test]
    fn declared_directives_precede_builtins() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "directive @auth(requires: String = \"ADMIN\") on OBJECT | FIELD_DEFINITION\n",
                "type Query { a: Int }\n",
            ))?
            .build()?;

        let names: Vec<&str> = schema.directives()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["auth", "include", "skip", "deprecated", "specifiedBy"]);

        let auth = schema.directive_by_name("auth").unwrap();
        assert!(!auth.is_builtin());
        assert_eq!(auth.locations(), vec!["OBJECT", "FIELD_DEFINITION"]);
        let requires = auth.arguments().get("requires").unwrap();
        assert_eq!(requires.default_value(), Some(&crate::Value::String("ADMIN".to_string())));

        assert!(schema.directive_by_name("deprecated").unwrap().is_builtin());

        Ok(())
    }

    #[test]
    fn redeclared_builtin_directive_keeps_declared_position() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "directive @deprecated(reason: String) on FIELD_DEFINITION")?
            .build()?;

        let names: Vec<&str> = schema.directives()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, vec!["deprecated", "include", "skip", "specifiedBy"]);
        assert!(!schema.directive_by_name("deprecated").unwrap().is_builtin());

        Ok(())
    }

    #[test]
    fn duplicate_directive_definition_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "directive @a on OBJECT")
            .and_then(|builder| builder.load_str(None, "directive @a on FIELD"));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. })
                if directive_name == "a",
        ));
    }
}

mod extensions {
    use super::*;

    #[test]
    fn object_extension_appends_fields_interfaces_and_directives() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, "extend type User implements Node @tag { email: String }")?
            .load_str(None, concat!(
                "interface Node { id: ID! }\n",
                "type User implements Node { id: ID! }\n",
                "directive @tag on OBJECT\n",
            ))?
            .build()?;

        let user = schema.type_by_name("User")
            .and_then(GraphQLType::as_object)
            .unwrap();
        let field_names: Vec<&str> = user.fields()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(field_names, vec!["id", "email"]);
        assert_eq!(user.interface_names(), vec!["Node"]);
        assert_eq!(user.directives().len(), 1);
        assert_eq!(user.directives()[0].directive_name(), "tag");
        assert_eq!(user.fields().get("email").unwrap().parent_type_name(), "User");

        Ok(())
    }

    #[test]
    fn enum_and_union_extensions_append_in_load_order() -> Result<()> {
        let schema = SchemaBuilder::new()
            .load_str(None, concat!(
                "enum Color { RED }\n",
                "type A { a: Int }\n",
                "type B { b: Int }\n",
                "union AB = A\n",
                "extend enum Color { GREEN }\n",
                "extend union AB = B | A\n",
            ))?
            .build()?;

        let color = schema.type_by_name("Color")
            .and_then(GraphQLType::as_enum)
            .unwrap();
        let values: Vec<&str> = color.values()
            .keys()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(values, vec!["RED", "GREEN"]);

        let ab = schema.type_by_name("AB")
            .and_then(GraphQLType::as_union)
            .unwrap();
        assert_eq!(ab.member_type_names(), vec!["A", "B"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type_is_an_error() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "extend type Missing { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::ExtensionOfUndefinedType { type_name, .. })
                if type_name == "Missing",
        ));

        Ok(())
    }

    #[test]
    fn extension_with_mismatched_kind_is_an_error() -> Result<()> {
        let result = SchemaBuilder::new()
            .load_str(None, "enum Color { RED }\nextend type Color { a: Int }")?
            .build();

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                existing_kind: GraphQLTypeKind::Enum,
                extension_kind: GraphQLTypeKind::Object,
                ..
            }),
        ));

        Ok(())
    }
}

mod loading {
    use super::*;

    #[test]
    fn duplicate_type_definition_is_an_error() {
        let result = SchemaBuilder::new()
            .load_str(None, "type A { a: Int }")
            .and_then(|builder| builder.load_str(None, "type A { b: Int }"));

        let Err(SchemaBuildError::DuplicateTypeDefinition { type_name, def1, def2 }) = result else {
            panic!("expected a DuplicateTypeDefinition error");
        };
        assert_eq!(type_name, "A");
        assert_eq!(def1, loc::SchemaDefLocation::Schema(loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://0"),
            line: 1,
        }));
        assert_eq!(def2, loc::SchemaDefLocation::Schema(loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://1"),
            line: 1,
        }));
    }

    #[test]
    fn parse_errors_carry_the_file_path() {
        let result = SchemaBuilder::new()
            .load_str(Some(PathBuf::from("schema.graphql")), "type {");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file: Some(file), .. })
                if file == PathBuf::from("schema.graphql"),
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = SchemaBuilder::new()
            .load_file("/definitely/not/a/real/schema.graphql");

        let Err(SchemaBuildError::SchemaFileReadError(err)) = result else {
            panic!("expected a schema file read error");
        };
        assert_eq!(err.path(), Path::new("/definitely/not/a/real/schema.graphql"));
        assert!(matches!(*err, ReadContentError::NotAFile(_)));
    }

    #[test]
    fn load_file_reads_schema_from_disk() -> Result<()> {
        let dir = std::env::temp_dir()
            .join(format!("graphql-markdown-schema-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file_path = dir.join("schema.graphql");
        std::fs::write(&file_path, "type Query { hello: String }").unwrap();

        let schema = SchemaBuilder::new()
            .load_file(&file_path)?
            .build()?;
        std::fs::remove_dir_all(&dir).unwrap();

        let hello = schema.query_type().unwrap().fields().get("hello").unwrap();
        assert_eq!(hello.def_location(), &loc::SchemaDefLocation::Schema(
            loc::FilePosition {
                col: 14,
                file: file_path,
                line: 1,
            },
        ));

        Ok(())
    }
}
