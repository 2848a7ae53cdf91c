//! Arena-backed document tree

use crate::descriptor::{Event, Handler};
use crate::host::Host;
use crate::value::Value;

/// Handle to a node in a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// An element node
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    /// Markup attributes in first-set order
    pub attributes: Vec<(String, String)>,
    /// Live properties, e.g. a form control's `value`
    pub properties: Vec<(String, Value)>,
    /// Style properties in first-set order
    pub styles: Vec<(String, String)>,
    /// One handler per event name; binding a name again replaces it
    pub listeners: Vec<(String, Handler)>,
    pub children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            properties: Vec::new(),
            styles: Vec::new(),
            listeners: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// A node stored in the arena
#[derive(Debug, Clone)]
pub enum NodeData {
    Element(Element),
    Text(String),
}

/// An in-memory DOM-like tree
#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created, attached or not
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.0)
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        match self.get(id)? {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    /// Contents of a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.get(id)? {
            NodeData::Text(text) => Some(text),
            NodeData::Element(_) => None,
        }
    }

    /// Child nodes of an element, text leaves included
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    /// Child nodes that are elements
    pub fn child_elements(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.element(*c).is_some())
            .collect()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        lookup(&self.element(id)?.attributes, name).map(String::as_str)
    }

    pub fn property(&self, id: NodeId, name: &str) -> Option<&Value> {
        lookup(&self.element(id)?.properties, name)
    }

    pub fn style(&self, id: NodeId, name: &str) -> Option<&str> {
        lookup(&self.element(id)?.styles, name).map(String::as_str)
    }

    /// Number of listeners bound for `event`, zero or one
    pub fn listener_count(&self, id: NodeId, event: &str) -> usize {
        self.element(id)
            .map(|e| e.listeners.iter().filter(|(name, _)| name == event).count())
            .unwrap_or(0)
    }

    /// Concatenated text of all descendant text nodes, in document order
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match self.get(id) {
            Some(NodeData::Text(text)) => out.push_str(text),
            Some(NodeData::Element(element)) => {
                for child in &element.children {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    /// Fire every listener bound for `event` on `id`, returning how many ran
    pub fn dispatch(&self, id: NodeId, event: &str) -> usize {
        let Some(element) = self.element(id) else {
            return 0;
        };
        let payload = Event {
            name: event.to_string(),
        };
        let mut fired = 0;
        for (_, handler) in element.listeners.iter().filter(|(name, _)| name == event) {
            handler.call(&payload);
            fired += 1;
        }
        fired
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(id.0)? {
            NodeData::Element(element) => Some(element),
            NodeData::Text(_) => None,
        }
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        self.nodes.push(data);
        NodeId(self.nodes.len() - 1)
    }
}

fn lookup<'a, V>(entries: &'a [(String, V)], name: &str) -> Option<&'a V> {
    entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
}

fn upsert<V>(entries: &mut Vec<(String, V)>, name: &str, value: V) {
    match entries.iter_mut().find(|(n, _)| n == name) {
        Some(slot) => slot.1 = value,
        None => entries.push((name.to_string(), value)),
    }
}

impl Host for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)))
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(*node) {
            upsert(&mut element.attributes, name, value.to_string());
        }
    }

    fn set_property(&mut self, node: &NodeId, name: &str, value: &Value) {
        if let Some(element) = self.element_mut(*node) {
            upsert(&mut element.properties, name, value.clone());
        }
    }

    fn set_style(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(element) = self.element_mut(*node) {
            upsert(&mut element.styles, name, value.to_string());
        }
    }

    fn add_event_listener(&mut self, node: &NodeId, event: &str, handler: Handler) {
        if let Some(element) = self.element_mut(*node) {
            upsert(&mut element.listeners, event, handler);
        }
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        if let Some(element) = self.element_mut(*parent) {
            element.children.push(*child);
        }
    }
}
