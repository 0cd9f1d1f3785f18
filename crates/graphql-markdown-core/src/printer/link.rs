use crate::Hierarchy;
use crate::SchemaMapSlot;
use crate::groups::lookup_group;
use crate::printer::PrintTypeOptions;
use crate::printer::slugify;

/// URL of the document of the entity `name` filed under `slot`.
pub fn entity_path(slot: SchemaMapSlot, name: &str, options: &PrintTypeOptions<'_>) -> String {
    let slug = slugify(name);
    let group = lookup_group(options.groups, slot, name).map(slugify);
    let mut segments = vec![options.link_root, options.base_url];
    match options.hierarchy {
        Hierarchy::Flat => (),
        Hierarchy::Api | Hierarchy::Entity => {
            if options.hierarchy == Hierarchy::Api {
                segments.push(if slot.is_operation() { "operations" } else { "types" });
            }
            if let Some(group) = group.as_deref() {
                segments.push(group);
            }
            segments.push(slot.name());
        },
    }
    segments.push(slug.as_str());
    join_path(&segments)
}

/// Joins URL segments with single slashes, keeping a leading slash if the
/// first segment has one.
fn join_path(segments: &[&str]) -> String {
    let joined = segments.iter()
        .flat_map(|segment| segment.split('/'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    match segments.first() {
        Some(first) if first.starts_with('/') => format!("/{joined}"),
        _ => joined,
    }
}

/// Links `display` (usually a type annotation such as `[Pet!]!`) to the
/// document of the named type `type_name`.
///
/// Names that resolve to no documented type (root types, unknown names,
/// excluded types) are printed as plain code.
pub fn to_link(display: &str, type_name: &str, options: &PrintTypeOptions<'_>) -> String {
    match options.schema_map.find_type(type_name) {
        Some((slot, entity)) if options.is_documented(entity) =>
            format!("[`{display}`]({})", entity_path(slot, type_name, options)),
        _ => format!("`{display}`"),
    }
}
