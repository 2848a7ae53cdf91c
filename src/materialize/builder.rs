//! Recursive tree builder

use std::rc::Rc;

use crate::descriptor::Descriptor;
use crate::diagnostics::Diagnostics;
use crate::error::MaterializeError;
use crate::host::Host;
use crate::profile::HostProfile;
use crate::validate::{valid_object_options, valid_tag};
use crate::value::Value;

use super::backrefs::Backrefs;
use super::Position;

/// State for one materialization call
pub(crate) struct Builder<'a, H: Host> {
    pub(super) host: &'a mut H,
    pub(super) profile: &'a HostProfile,
    pub(super) diagnostics: Diagnostics,
    pub(super) backrefs: Backrefs<H::Node>,
}

impl<'a, H: Host> Builder<'a, H> {
    pub(crate) fn new(host: &'a mut H, profile: &'a HostProfile) -> Self {
        Self {
            host,
            profile,
            diagnostics: Diagnostics::new(),
            backrefs: Backrefs::new(),
        }
    }

    pub(crate) fn finish(self) -> (Diagnostics, Backrefs<H::Node>) {
        (self.diagnostics, self.backrefs)
    }

    /// Build the node for `descriptor` and its subtree
    ///
    /// A root carrying `render_if` is refused with a warning and yields
    /// `Ok(None)`. A child position never skips.
    pub(crate) fn materialize(
        &mut self,
        descriptor: &Rc<Descriptor>,
        position: Position,
    ) -> Result<Option<H::Node>, MaterializeError> {
        let tag = resolve_tag(descriptor);

        if descriptor.render_if.is_some() && position == Position::Root {
            self.diagnostics.root_render_if();
            return Ok(None);
        }

        self.construct(descriptor, tag, position.index()).map(Some)
    }

    /// Validate, create, bind and fill one node
    fn construct(
        &mut self,
        descriptor: &Rc<Descriptor>,
        tag: Option<Value>,
        index: Option<usize>,
    ) -> Result<H::Node, MaterializeError> {
        if !valid_tag(tag.as_ref()) {
            return Err(MaterializeError::invalid_tag(tag));
        }
        let tag = tag.map(|t| t.to_string()).unwrap_or_default();
        valid_object_options(&descriptor.attrs, &descriptor.styles, &descriptor.events)?;

        let node = self.host.create_element(&tag);
        tracing::debug!(tag = %tag, index = ?index, "created element");
        self.backrefs
            .record(node.clone(), Rc::clone(descriptor), index);

        self.bind_attrs(&node, &descriptor.attrs);
        self.bind_events(&node, &descriptor.events);
        self.bind_styles(&node, &descriptor.styles);
        self.resolve_content(&tag, descriptor, &node);

        Ok(node)
    }

    /// Build and append each child in order
    ///
    /// A child's index is its position in `children`: a child skipped by
    /// `render_if = false` still takes its slot, so the next rendered sibling's
    /// index jumps past it. A child that fails validation is reported and
    /// dropped along with its subtree; its siblings are still built.
    pub(super) fn build_children(&mut self, parent: &H::Node, children: &[Rc<Descriptor>]) {
        for (index, child) in children.iter().enumerate() {
            let tag = resolve_tag(child);

            match &child.render_if {
                Some(Value::Bool(false)) => {
                    tracing::debug!(index, "skipped child with renderIf = false");
                    continue;
                }
                Some(Value::Bool(true)) | None => {}
                Some(other) => self.diagnostics.invalid_render_if(other),
            }

            match self.construct(child, tag, Some(index)) {
                Ok(node) => self.host.append_child(parent, &node),
                Err(err) => self.diagnostics.aborted(&err),
            }
        }
    }
}

fn resolve_tag(descriptor: &Descriptor) -> Option<Value> {
    descriptor.tag.as_ref().and_then(|tag| tag.resolve())
}
