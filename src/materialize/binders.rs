//! Attribute, event and style binders
//!
//! Each binding is applied or skipped on its own; a bad entry never stops the
//! rest of its container.

use crate::descriptor::{Bindable, EventBinding, Options};
use crate::host::Host;
use crate::validate::is_strictly_false;
use crate::value::Value;

use super::builder::Builder;

impl<H: Host> Builder<'_, H> {
    /// Write attributes, skipping undefined and strictly `false` values
    ///
    /// `value` is set as a live property: a form control's value attribute
    /// stops reflecting the control once the user has edited it.
    pub(super) fn bind_attrs(&mut self, node: &H::Node, attrs: &Options<Bindable<Value>>) {
        for (name, binding) in attrs.entries() {
            let Some(value) = binding.resolve() else {
                continue;
            };
            if is_strictly_false(Some(&value)) {
                continue;
            }

            if name == "value" {
                self.host.set_property(node, name, &value);
            } else {
                self.host.set_attribute(node, name, &value.to_string());
            }
            tracing::trace!(attr = %name, value = %value, "bound attribute");
        }
    }

    pub(super) fn bind_events(&mut self, node: &H::Node, events: &Options<EventBinding>) {
        for (name, binding) in events.entries() {
            if !self.profile.is_event(name) {
                self.diagnostics.invalid_event(name);
                continue;
            }
            match binding {
                EventBinding::Handler(handler) => {
                    self.host.add_event_listener(node, name, handler.clone());
                    tracing::trace!(event = %name, "bound event handler");
                }
                EventBinding::Value(_) => self.diagnostics.invalid_event_handler(name),
            }
        }
    }

    /// Apply styles; a value that is not there yet is skipped without a warning
    pub(super) fn bind_styles(&mut self, node: &H::Node, styles: &Options<Bindable<Value>>) {
        for (name, binding) in styles.entries() {
            if !self.profile.is_style(name) {
                self.diagnostics.invalid_style(name);
                continue;
            }
            if let Some(value) = binding.resolve() {
                self.host.set_style(node, name, &value.to_string());
                tracing::trace!(style = %name, value = %value, "bound style");
            }
        }
    }
}
