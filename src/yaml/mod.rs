//! YAML helpers - diagnostics and untyped value inspection

pub mod diagnostics;

pub use diagnostics::YamlSyntaxError;

/// Name of a YAML value's kind, for error messages
pub fn value_kind(value: &serde_yml::Value) -> &'static str {
    match value {
        serde_yml::Value::Null => "null",
        serde_yml::Value::Bool(_) => "a boolean",
        serde_yml::Value::Number(_) => "a number",
        serde_yml::Value::String(_) => "a string",
        serde_yml::Value::Sequence(_) => "a list",
        serde_yml::Value::Mapping(_) => "a mapping",
        serde_yml::Value::Tagged(_) => "a tagged value",
    }
}
