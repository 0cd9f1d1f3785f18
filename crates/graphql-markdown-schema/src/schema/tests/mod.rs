mod schema_builder;
