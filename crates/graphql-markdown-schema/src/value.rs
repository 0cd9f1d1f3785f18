use crate::ast;
use indexmap::IndexMap;

/// A constant GraphQL value as written in the schema (argument defaults and
/// directive arguments).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    EnumValue(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    /// Variables are not meaningful in a schema document, but the parser
    /// accepts them so they are carried through verbatim.
    VarRef(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    pub(crate) fn from_ast(ast_value: &ast::operation::Value) -> Self {
        match ast_value {
            ast::operation::Value::Variable(var_name) =>
                Value::VarRef(var_name.clone()),

            ast::operation::Value::Int(value) =>
                Value::Int(value.as_i64().unwrap_or_default()),

            ast::operation::Value::Float(value) =>
                Value::Float(*value),

            ast::operation::Value::String(value) =>
                Value::String(value.clone()),

            ast::operation::Value::Boolean(value) =>
                Value::Bool(*value),

            ast::operation::Value::Null =>
                Value::Null,

            ast::operation::Value::Enum(value) =>
                Value::EnumValue(value.clone()),

            ast::operation::Value::List(values) =>
                Value::List(values.iter().map(Value::from_ast).collect()),

            ast::operation::Value::Object(entries) =>
                Value::Object(entries.iter().map(|(key, ast_value)|
                    (key.clone(), Value::from_ast(ast_value))
                ).collect()),
        }
    }
}
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::EnumValue(name) => write!(f, "{name}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(values) => write!(
                f,
                "[{}]",
                values.iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::Null => write!(f, "null"),
            Self::Object(entries) => write!(
                f,
                "{{{}}}",
                entries.iter()
                    .map(|(key, value)| format!("{key}: {value}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Self::String(value) => f.write_str(&quote_string(value)),
            Self::VarRef(name) => write!(f, "${name}"),
        }
    }
}

/// Quotes `value` as a GraphQL string literal.
///
/// Control characters without a short escape are written as `\uXXXX`; every
/// other character is kept as is.
pub fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            ch if ch < ' ' || ch == '\u{7f}' => {
                quoted.push_str(&format!("\\u{:04X}", ch as u32));
            },
            ch => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
