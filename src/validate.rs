//! Predicates over descriptor fields
//!
//! Event and style name checks live on [`HostProfile`](crate::HostProfile),
//! since the recognized names are supplied by the host.

use crate::descriptor::{Bindable, EventBinding, Options};
use crate::error::MaterializeError;
use crate::value::Value;

/// A tag is valid when it resolved to a non-empty string
pub fn valid_tag(tag: Option<&Value>) -> bool {
    matches!(tag, Some(Value::Str(s)) if !s.is_empty())
}

/// Check that `attrs`, `styles` and `events` are all mappings
///
/// Returns the first malformed container, checked in that order.
pub fn valid_object_options(
    attrs: &Options<Bindable<Value>>,
    styles: &Options<Bindable<Value>>,
    events: &Options<EventBinding>,
) -> Result<(), MaterializeError> {
    let malformed = [
        ("attrs", malformed_value(attrs)),
        ("styles", malformed_value(styles)),
        ("events", malformed_value(events)),
    ];
    match malformed.into_iter().find_map(|(field, v)| v.map(|v| (field, v))) {
        Some((field, found)) => Err(MaterializeError::invalid_object_options(field, found.clone())),
        None => Ok(()),
    }
}

fn malformed_value<B>(options: &Options<B>) -> Option<&Value> {
    match options {
        Options::Malformed(value) => Some(value),
        Options::Entries(_) => None,
    }
}

/// Identically the boolean `false`, as opposed to any falsy value
pub fn is_strictly_false(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(false)))
}
