use crate::printer::PrintTypeOptions;

/// YAML frontmatter with the document id and title.
pub fn print_header(id: &str, title: &str, options: &PrintTypeOptions<'_>) -> String {
    let mut header = format!("---\nid: {id}\ntitle: {title}\n");
    if !options.header.toc {
        header.push_str("hide_table_of_contents: true\n");
    }
    if !options.header.pagination {
        header.push_str("pagination_next: null\npagination_prev: null\n");
    }
    header.push_str("---");
    header
}
