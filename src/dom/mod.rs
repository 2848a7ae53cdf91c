//! In-memory reference host
//!
//! [`Document`] implements [`Host`](crate::Host) over an arena of nodes. It
//! backs the CLI and the test suite, and [`to_html`] serializes any subtree.

pub mod document;
pub mod html;

pub use document::{Document, Element, NodeData, NodeId};
pub use html::to_html;
