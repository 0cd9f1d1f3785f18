mod deprecation_state;
mod type_annotation;
mod value;
