//! Template wrapper: marks a root descriptor as ready to materialize

use std::rc::Rc;

use crate::descriptor::Descriptor;
use crate::error::MaterializeError;
use crate::host::Host;
use crate::materialize::{materialize, Materialized, Position};
use crate::source::{self, LoadError};
use crate::value::Value;
use crate::{MaterializeConfig, RenderError};

/// What a template wraps
#[derive(Debug, Clone)]
pub enum TemplateElement {
    /// Plain data, converted to a descriptor on use
    Data(Value),
    Descriptor(Rc<Descriptor>),
}

/// A validated template root
///
/// Only [`template`] and [`Template::from_descriptor`] produce one.
#[derive(Debug, Clone)]
pub struct Template {
    element: TemplateElement,
}

/// Wrap plain data as a template
///
/// Tables and lists are accepted; any other value is rejected.
///
/// # Example
///
/// ```rust
/// use treeweave::{template, Value};
///
/// let data = Value::table([("tag", Value::from("div"))]);
/// let t = template(data.clone()).unwrap();
/// assert_eq!(t.data(), Some(&data));
///
/// assert!(template(Value::Int(42)).is_err());
/// ```
pub fn template(value: Value) -> Result<Template, MaterializeError> {
    if !value.is_object() {
        return Err(MaterializeError::invalid_template_argument(Some(value)));
    }
    Ok(Template {
        element: TemplateElement::Data(value),
    })
}

impl Template {
    /// Wrap an already-typed descriptor
    pub fn from_descriptor(descriptor: Descriptor) -> Self {
        Self {
            element: TemplateElement::Descriptor(Rc::new(descriptor)),
        }
    }

    pub fn element(&self) -> &TemplateElement {
        &self.element
    }

    /// The wrapped plain data, if this template was built from data
    pub fn data(&self) -> Option<&Value> {
        match &self.element {
            TemplateElement::Data(value) => Some(value),
            TemplateElement::Descriptor(_) => None,
        }
    }

    /// The root descriptor
    pub fn descriptor(&self) -> Result<Rc<Descriptor>, LoadError> {
        match &self.element {
            TemplateElement::Data(value) => source::from_value(value).map(Rc::new),
            TemplateElement::Descriptor(descriptor) => Ok(Rc::clone(descriptor)),
        }
    }

    /// Materialize this template as a root
    pub fn materialize<H: Host>(
        &self,
        host: &mut H,
        config: &MaterializeConfig,
    ) -> Result<Materialized<H::Node>, RenderError> {
        let descriptor = self.descriptor()?;
        Ok(materialize(host, &descriptor, Position::Root, config)?)
    }
}
