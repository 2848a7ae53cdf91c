//! Fatal materialization errors

use thiserror::Error;

use crate::value::Value;

/// Errors that abort construction of a node and its subtree
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MaterializeError {
    /// Tag is absent, not a string, or empty
    #[error("invalid tag option: {}", describe(found.as_ref()))]
    InvalidTag { found: Option<Value> },

    /// One of `attrs`, `styles` or `events` is not a mapping
    #[error("invalid `{field}` option: expected a mapping, found {}", found.kind())]
    InvalidObjectOptions { field: &'static str, found: Value },

    /// `template()` was given something other than a table or list
    #[error("invalid template argument: expected a table or list, found {}", describe(found.as_ref()))]
    InvalidTemplateArgument { found: Option<Value> },
}

impl MaterializeError {
    pub fn invalid_tag(found: Option<Value>) -> Self {
        Self::InvalidTag { found }
    }

    pub fn invalid_object_options(field: &'static str, found: Value) -> Self {
        Self::InvalidObjectOptions { field, found }
    }

    pub fn invalid_template_argument(found: Option<Value>) -> Self {
        Self::InvalidTemplateArgument { found }
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "nothing".to_string(),
        Some(Value::Str(s)) if s.is_empty() => "empty string".to_string(),
        Some(Value::Str(s)) => format!("string \"{}\"", s),
        Some(other) => format!("{} {}", other.kind(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tag_display() {
        let err = MaterializeError::invalid_tag(Some(Value::from("")));
        assert_eq!(err.to_string(), "invalid tag option: empty string");

        let err = MaterializeError::invalid_tag(None);
        assert_eq!(err.to_string(), "invalid tag option: nothing");

        let err = MaterializeError::invalid_tag(Some(Value::Int(7)));
        assert_eq!(err.to_string(), "invalid tag option: number 7");
    }

    #[test]
    fn test_invalid_object_options_display() {
        let err = MaterializeError::invalid_object_options("attrs", Value::from("x"));
        assert!(err.to_string().contains("`attrs`"));
        assert!(err.to_string().contains("found string"));
    }

    #[test]
    fn test_invalid_template_argument_display() {
        let err = MaterializeError::invalid_template_argument(Some(Value::Int(42)));
        assert_eq!(
            err.to_string(),
            "invalid template argument: expected a table or list, found number 42"
        );
    }
}
