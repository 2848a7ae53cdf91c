//! Diagnostics raised while materializing a tree.
//!
//! Every warning and every fatal error caught during child iteration is
//! logged through `tracing` and collected, so callers can inspect what was
//! skipped without installing a subscriber.

use std::fmt;

use crate::error::MaterializeError;

/// How bad a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The offending binding was skipped, construction went on
    Warning,
    /// A node and its subtree were not built
    Error,
}

/// Category of diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    RootRenderIf,
    InvalidRenderIf,
    InvalidEvent,
    InvalidEventHandler,
    InvalidStyle,
    TextWithChildren,
    InvalidTag,
    InvalidObjectOptions,
    InvalidTemplateArgument,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::RootRenderIf => write!(f, "root-render-if"),
            DiagnosticKind::InvalidRenderIf => write!(f, "render-if"),
            DiagnosticKind::InvalidEvent => write!(f, "event"),
            DiagnosticKind::InvalidEventHandler => write!(f, "event-handler"),
            DiagnosticKind::InvalidStyle => write!(f, "style"),
            DiagnosticKind::TextWithChildren => write!(f, "text-with-children"),
            DiagnosticKind::InvalidTag => write!(f, "tag"),
            DiagnosticKind::InvalidObjectOptions => write!(f, "object-options"),
            DiagnosticKind::InvalidTemplateArgument => write!(f, "template-argument"),
        }
    }
}

/// One reported problem
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}[{}]: {}", level, self.kind, self.message)
    }
}

/// Collector for the diagnostics of one materialization
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_render_if(&mut self) {
        self.warn(
            DiagnosticKind::RootRenderIf,
            "conditional rendering is not supported at the root; nothing was rendered".to_string(),
        );
    }

    pub fn invalid_render_if(&mut self, found: &crate::Value) {
        self.warn(
            DiagnosticKind::InvalidRenderIf,
            format!(
                "invalid renderIf option: expected a boolean, found {} {}; rendering anyway",
                found.kind(),
                found
            ),
        );
    }

    pub fn invalid_event(&mut self, name: &str) {
        self.warn(
            DiagnosticKind::InvalidEvent,
            format!("\"{}\" is not a recognized event name", name),
        );
    }

    pub fn invalid_event_handler(&mut self, name: &str) {
        self.warn(
            DiagnosticKind::InvalidEventHandler,
            format!("handler for \"{}\" is not callable", name),
        );
    }

    pub fn invalid_style(&mut self, name: &str) {
        self.warn(
            DiagnosticKind::InvalidStyle,
            format!("\"{}\" is not a recognized style property", name),
        );
    }

    pub fn text_with_children(&mut self, tag: &str) {
        self.warn(
            DiagnosticKind::TextWithChildren,
            format!(
                "<{}> cannot render text and children together; the text was discarded",
                tag
            ),
        );
    }

    /// Record a fatal error that aborted one child's subtree
    pub fn aborted(&mut self, error: &MaterializeError) {
        let kind = match error {
            MaterializeError::InvalidTag { .. } => DiagnosticKind::InvalidTag,
            MaterializeError::InvalidObjectOptions { .. } => DiagnosticKind::InvalidObjectOptions,
            MaterializeError::InvalidTemplateArgument { .. } => {
                DiagnosticKind::InvalidTemplateArgument
            }
        };
        tracing::error!(kind = %kind, "{}", error);
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            kind,
            message: error.to_string(),
        });
    }

    fn warn(&mut self, kind: DiagnosticKind, message: String) {
        tracing::warn!(kind = %kind, "{}", message);
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            kind,
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.severity == Severity::Error)
    }

    /// Whether any diagnostic of `kind` was reported
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.entries.iter().any(|d| d.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
