mod get_group_name;
mod parse_group_by_option;
