//! treeweave - materialize declarative UI descriptors into a host tree
//!
//! A [`Descriptor`] describes one node: its tag, text, attributes, event
//! handlers, styles, children and an optional `render_if` flag. Any field can
//! be a literal or a thunk evaluated at materialization time.
//! [`materialize`] walks the descriptor tree and writes it into anything
//! implementing [`Host`], recording which descriptor produced which node.
//!
//! # Example
//!
//! ```rust
//! use treeweave::render_html;
//!
//! let html = render_html(r#"
//!     tag = "ul"
//!
//!     [[children]]
//!     tag = "li"
//!     text = "first"
//! "#).unwrap();
//!
//! assert_eq!(html, "<ul><li>first</li></ul>");
//! ```

pub mod descriptor;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod host;
pub mod materialize;
pub mod profile;
pub mod source;
pub mod template;
pub mod validate;
pub mod value;

pub use descriptor::{Bindable, Descriptor, Event, EventBinding, Handler, Options, Thunk};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use dom::{to_html, Document, NodeId};
pub use error::MaterializeError;
pub use host::Host;
pub use materialize::{materialize, Backref, Backrefs, Materialized, Position};
pub use profile::{HostProfile, ProfileError};
pub use source::LoadError;
pub use template::{template, Template, TemplateElement};
pub use value::Value;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the descriptor
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// Fatal error on the root node
    #[error("materialize error: {0}")]
    Materialize(#[from] MaterializeError),
}

/// Configuration for materialization
#[derive(Debug, Clone, Default)]
pub struct MaterializeConfig {
    /// Recognized event and style names
    pub profile: HostProfile,
}

impl MaterializeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host profile
    pub fn with_profile(mut self, profile: HostProfile) -> Self {
        self.profile = profile;
        self
    }
}

/// Render a TOML descriptor to HTML with default configuration
///
/// A root refused for carrying `renderIf` renders as the empty string.
pub fn render_html(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &MaterializeConfig::default())
}

/// Render a TOML descriptor to HTML with custom configuration
pub fn render_with_config(source: &str, config: &MaterializeConfig) -> Result<String, RenderError> {
    render_with_diagnostics(source, config).map(|(html, _)| html)
}

/// Render a TOML descriptor to HTML, also returning every diagnostic raised
pub fn render_with_diagnostics(
    source: &str,
    config: &MaterializeConfig,
) -> Result<(String, Vec<Diagnostic>), RenderError> {
    let root = template(crate::source::parse_toml(source)?)?;

    let mut doc = Document::new();
    let out = root.materialize(&mut doc, config)?;

    let html = out.node.map(|node| to_html(&doc, node)).unwrap_or_default();
    Ok((html, out.diagnostics.into_vec()))
}
