mod code;

use crate::SchemaEntity;
use crate::SchemaMap;

fn find_entity<'a>(schema_map: &SchemaMap<'a>, name: &str) -> Option<SchemaEntity<'a>> {
    schema_map.find_type(name).map(|(_, entity)| entity)
}
