//! Materialization: descriptor tree in, host tree out
//!
//! Traversal is depth-first and pre-order within a single call. Per node the
//! engine resolves the tag, validates it and the binding containers, creates
//! the host element, records a back-reference, applies attributes, events and
//! styles in that order, then fills in text or children.

mod backrefs;
mod binders;
mod builder;
mod content;

use std::rc::Rc;

pub use backrefs::{Backref, Backrefs};

use crate::descriptor::Descriptor;
use crate::diagnostics::Diagnostics;
use crate::error::MaterializeError;
use crate::host::Host;
use crate::MaterializeConfig;

use builder::Builder;

/// Where the node being materialized sits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Root,
    /// A child at the given sibling index
    Child(usize),
}

impl Position {
    pub fn index(&self) -> Option<usize> {
        match self {
            Position::Root => None,
            Position::Child(index) => Some(*index),
        }
    }
}

/// Result of one materialization call
#[derive(Debug)]
pub struct Materialized<N> {
    /// The produced node; `None` when a root was refused for carrying `render_if`
    pub node: Option<N>,
    pub backrefs: Backrefs<N>,
    pub diagnostics: Diagnostics,
}

/// Materialize `descriptor` into `host`
///
/// Fatal errors on the node itself are returned as `Err`. Fatal errors in a
/// descendant only drop that descendant's subtree and show up in
/// [`Materialized::diagnostics`].
///
/// # Example
///
/// ```rust
/// use std::rc::Rc;
/// use treeweave::{materialize, Descriptor, Document, MaterializeConfig, Position};
///
/// let mut doc = Document::new();
/// let descriptor = Rc::new(Descriptor::new("div").text("hello"));
/// let out = materialize(&mut doc, &descriptor, Position::Root, &MaterializeConfig::default())
///     .unwrap();
///
/// let node = out.node.unwrap();
/// assert_eq!(doc.text_content(node), "hello");
/// ```
pub fn materialize<H: Host>(
    host: &mut H,
    descriptor: &Rc<Descriptor>,
    position: Position,
    config: &MaterializeConfig,
) -> Result<Materialized<H::Node>, MaterializeError> {
    let mut builder = Builder::new(host, &config.profile);
    let node = builder.materialize(descriptor, position)?;
    let (diagnostics, backrefs) = builder.finish();
    Ok(Materialized {
        node,
        backrefs,
        diagnostics,
    })
}
