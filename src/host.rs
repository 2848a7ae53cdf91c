//! The host presentation tree the engine writes into

use std::hash::Hash;

use crate::descriptor::Handler;
use crate::value::Value;

/// Capability surface of a DOM-like host
///
/// Nodes are handles: cloning one must not clone the underlying host node,
/// and equal handles must refer to the same node.
pub trait Host {
    type Node: Clone + Eq + Hash;

    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set a markup attribute
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Set a live property, bypassing markup attributes
    fn set_property(&mut self, node: &Self::Node, name: &str, value: &Value);

    fn set_style(&mut self, node: &Self::Node, name: &str, value: &str);

    fn add_event_listener(&mut self, node: &Self::Node, event: &str, handler: Handler);

    fn create_text(&mut self, text: &str) -> Self::Node;

    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);
}
