//! Back-references from produced nodes to the descriptors they came from
//!
//! The table is metadata for a later diffing pass. It never owns the host
//! tree and is not consulted for tree structure.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::descriptor::Descriptor;

/// Link between one produced node and its originating descriptor
#[derive(Debug, Clone)]
pub struct Backref<N> {
    pub descriptor: Rc<Descriptor>,
    /// The node produced from `descriptor`
    pub target: N,
    /// Sibling index; `None` for a root
    pub index: Option<usize>,
}

/// Side table keyed by node identity, kept in creation (pre-order) order
#[derive(Debug)]
pub struct Backrefs<N> {
    entries: Vec<Backref<N>>,
    by_node: HashMap<N, usize>,
}

impl<N> Default for Backrefs<N> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_node: HashMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Backrefs<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, target: N, descriptor: Rc<Descriptor>, index: Option<usize>) {
        self.by_node.insert(target.clone(), self.entries.len());
        self.entries.push(Backref {
            descriptor,
            target,
            index,
        });
    }

    pub fn get(&self, node: &N) -> Option<&Backref<N>> {
        self.by_node.get(node).map(|&i| &self.entries[i])
    }

    /// Sibling index recorded for `node`
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.get(node)?.index
    }

    pub fn descriptor_of(&self, node: &N) -> Option<&Rc<Descriptor>> {
        self.get(node).map(|b| &b.descriptor)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Backref<N>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
