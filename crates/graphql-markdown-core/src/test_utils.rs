use graphql_markdown_schema::Schema;

/// Builds a [`Schema`] from a single SDL string, panicking on any error.
pub(crate) fn build_schema(sdl: &str) -> Schema {
    Schema::builder()
        .load_str(None, sdl)
        .and_then(|builder| builder.build())
        .unwrap()
}

pub(crate) const ANIMALS_SDL: &str = concat!(
    "directive @doc(category: String) on OBJECT | INTERFACE | ENUM | UNION | INPUT_OBJECT | SCALAR | FIELD_DEFINITION\n",
    "directive @auth(requires: Role = ADMIN) on OBJECT | FIELD_DEFINITION\n",
    "directive @noDoc on OBJECT | FIELD_DEFINITION | ARGUMENT_DEFINITION | ENUM_VALUE | INPUT_FIELD_DEFINITION\n",
    "\n",
    "type Query {\n",
    "  \"Finds a pet by id\"\n",
    "  pet(id: ID!): Pet\n",
    "  pets(filter: PetFilter, first: Int = 10): [Pet!]!\n",
    "  owner(name: String = \"Alice\"): Owner @auth(requires: USER)\n",
    "}\n",
    "\n",
    "type Mutation {\n",
    "  adopt(petId: ID!, color: Color = BROWN): Pet\n",
    "}\n",
    "\n",
    "\"Something with an identifier\"\n",
    "interface Node {\n",
    "  id: ID!\n",
    "}\n",
    "\n",
    "\"A pet\"\n",
    "interface Pet implements Node @doc(category: \"animal\") {\n",
    "  id: ID!\n",
    "  name: String\n",
    "}\n",
    "\n",
    "type Dog implements Pet & Node @doc(category: \"animal\") {\n",
    "  id: ID!\n",
    "  name: String\n",
    "  color: Color\n",
    "  barks: Boolean @deprecated(reason: \"Dogs always bark\")\n",
    "}\n",
    "\n",
    "type Cat implements Pet & Node {\n",
    "  id: ID!\n",
    "  name: String\n",
    "  lives: Int\n",
    "}\n",
    "\n",
    "type Owner @auth(requires: ADMIN) {\n",
    "  name: String!\n",
    "  pets: [Pet]\n",
    "  secret: String @noDoc\n",
    "}\n",
    "\n",
    "type Internal @noDoc {\n",
    "  value: Int\n",
    "}\n",
    "\n",
    "union Animal = Dog | Cat\n",
    "\n",
    "enum Color {\n",
    "  BROWN\n",
    "  BLACK\n",
    "  SPOTTED @deprecated\n",
    "}\n",
    "\n",
    "enum Role { ADMIN USER }\n",
    "\n",
    "input PetFilter {\n",
    "  color: Color = BLACK\n",
    "  names: [String!] = [\"Rex\", \"Tom\"]\n",
    "}\n",
    "\n",
    "scalar Date @specifiedBy(url: \"https://tools.ietf.org/html/rfc3339\")\n",
);
