use crate::SchemaMapSlot;
use crate::groups::GroupByDirectiveOptions;
use crate::groups::get_group_name;
use crate::groups::get_groups;
use crate::groups::parse_group_by_option;
use crate::introspection::get_schema_map;
use crate::test_utils::ANIMALS_SDL;
use crate::test_utils::build_schema;
use proptest::prelude::*;

fn doc_options() -> GroupByDirectiveOptions {
    parse_group_by_option("@doc(category|=misc)").unwrap()
}

#[test]
fn matching_directive_assigns_its_group() {
    let schema = build_schema(ANIMALS_SDL);
    let schema_map = get_schema_map(&schema);

    let dog = schema_map.objects.get("Dog").unwrap();
    assert_eq!(get_group_name(*dog, &doc_options()), "animal");

    let cat = schema_map.objects.get("Cat").unwrap();
    assert_eq!(get_group_name(*cat, &doc_options()), "misc");
}

#[test]
fn only_the_first_matching_directive_is_consulted() {
    let schema = build_schema(concat!(
        "directive @doc(category: String, other: String) repeatable on OBJECT\n",
        "type First @doc(other: \"x\") @doc(category: \"second\") { a: Int }\n",
        "type Second @doc(category: \"one\") @doc(category: \"two\") { a: Int }\n",
    ));
    let schema_map = get_schema_map(&schema);

    let first = schema_map.objects.get("First").unwrap();
    assert_eq!(get_group_name(*first, &doc_options()), "misc");
    let second = schema_map.objects.get("Second").unwrap();
    assert_eq!(get_group_name(*second, &doc_options()), "one");
}

#[test]
fn builtin_entities_get_the_fallback() {
    let schema = build_schema(ANIMALS_SDL);
    let schema_map = get_schema_map(&schema);

    let string_type = schema_map.scalars.get("String").unwrap();
    assert_eq!(get_group_name(*string_type, &doc_options()), "misc");
    let deprecated = schema_map.directives.get("deprecated").unwrap();
    assert_eq!(get_group_name(*deprecated, &doc_options()), "misc");
}

#[test]
fn get_groups_covers_every_slot_and_entity() {
    let schema = build_schema(ANIMALS_SDL);
    let schema_map = get_schema_map(&schema);
    let groups = get_groups(&schema_map, &doc_options());

    assert_eq!(groups.len(), SchemaMapSlot::ALL.len());
    for (slot, entries) in schema_map.iter() {
        let slot_groups = groups.get(&slot).unwrap();
        assert_eq!(slot_groups.len(), entries.len());
    }
    assert_eq!(groups[&SchemaMapSlot::Interfaces]["Pet"], "animal");
    assert_eq!(groups[&SchemaMapSlot::Interfaces]["Node"], "misc");
    assert_eq!(groups[&SchemaMapSlot::Queries]["pet"], "misc");
}

proptest! {
    #[test]
    fn entities_without_the_directive_get_the_fallback(
        fallback in "[A-Za-z0-9_]{1,12}",
        other_value in "[a-z]{1,8}",
    ) {
        let options = parse_group_by_option(&format!("@doc(category|={fallback})")).unwrap();
        prop_assert_eq!(&options.fallback, &fallback);

        let schema = build_schema(&format!(
            "directive @other(category: String) on OBJECT\n\
            type Plain {{ a: Int }}\n\
            type Tagged @other(category: \"{other_value}\") {{ a: Int }}\n",
        ));
        let schema_map = get_schema_map(&schema);

        for entity in schema_map.objects.values() {
            prop_assert_eq!(get_group_name(*entity, &options), fallback.clone());
        }
    }
}
