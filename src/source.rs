//! Loading descriptors from plain data
//!
//! Plain data cannot carry callables, so every binding loads as a literal and
//! every event binding loads as a non-callable value. Containers of the wrong
//! shape are kept as [`Options::Malformed`] and rejected at materialization,
//! where the other validation happens.
//!
//! # Format
//!
//! ```toml
//! tag = "ul"
//!
//! [attrs]
//! id = "list"
//!
//! [[children]]
//! tag = "li"
//! text = "first"
//!
//! [[children]]
//! tag = "li"
//! text = "second"
//! renderIf = false
//! ```

use std::path::Path;
use std::rc::Rc;

use thiserror::Error;

use crate::descriptor::{Bindable, Descriptor, EventBinding, Options};
use crate::value::Value;

/// Errors that can occur when loading a descriptor
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read descriptor file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse descriptor TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// `children` is present but not a list
    #[error("invalid children at {path}: expected a list, found {found}")]
    InvalidChildren { path: String, found: &'static str },

    /// An entry of `children` is neither a table nor a list
    #[error("invalid child at {path}: expected a table, found {found}")]
    InvalidChild { path: String, found: &'static str },
}

/// Parse a TOML document into plain data, without building a descriptor
pub fn parse_toml(content: &str) -> Result<Value, LoadError> {
    let parsed: toml::Value = toml::from_str(content)?;
    Ok(Value::from(parsed))
}

/// Load a descriptor from a TOML document
pub fn from_toml_str(content: &str) -> Result<Descriptor, LoadError> {
    from_value(&parse_toml(content)?)
}

/// Load a descriptor from a TOML file
pub fn from_file(path: &Path) -> Result<Descriptor, LoadError> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Convert plain data into a descriptor
pub fn from_value(value: &Value) -> Result<Descriptor, LoadError> {
    load(value, "root")
}

fn load(value: &Value, path: &str) -> Result<Descriptor, LoadError> {
    let children = match value.get("children") {
        None => Vec::new(),
        Some(Value::List(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let child_path = format!("{}.children[{}]", path, i);
                if !item.is_object() {
                    return Err(LoadError::InvalidChild {
                        path: child_path,
                        found: item.kind(),
                    });
                }
                load(item, &child_path).map(Rc::new)
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(LoadError::InvalidChildren {
                path: path.to_string(),
                found: other.kind(),
            })
        }
    };

    Ok(Descriptor {
        tag: value.get("tag").cloned().map(Bindable::Literal),
        text: value.get("text").cloned().map(Bindable::Literal),
        attrs: options(value.get("attrs"), |v| Bindable::Literal(v.clone())),
        events: options(value.get("events"), |v| EventBinding::Value(v.clone())),
        styles: options(value.get("styles"), |v| Bindable::Literal(v.clone())),
        children,
        render_if: value
            .get("renderIf")
            .or_else(|| value.get("render_if"))
            .cloned(),
    })
}

fn options<B>(value: Option<&Value>, binding: impl Fn(&Value) -> B) -> Options<B> {
    match value {
        None => Options::default(),
        Some(Value::Table(entries)) => Options::Entries(
            entries
                .iter()
                .map(|(name, v)| (name.clone(), binding(v)))
                .collect(),
        ),
        Some(other) => Options::Malformed(other.clone()),
    }
}
