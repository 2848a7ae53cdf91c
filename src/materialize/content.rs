//! Text-versus-children content resolution

use crate::descriptor::Descriptor;
use crate::host::Host;

use super::builder::Builder;

impl<H: Host> Builder<'_, H> {
    /// Fill `node` with either a text leaf or its children
    ///
    /// Children win over text. The text is then dropped without being
    /// resolved.
    pub(super) fn resolve_content(&mut self, tag: &str, descriptor: &Descriptor, node: &H::Node) {
        match (&descriptor.text, descriptor.children.is_empty()) {
            (Some(text), true) => {
                if let Some(content) = text.resolve() {
                    let leaf = self.host.create_text(&content.to_string());
                    self.host.append_child(node, &leaf);
                }
            }
            (Some(_), false) => {
                self.diagnostics.text_with_children(tag);
                self.build_children(node, &descriptor.children);
            }
            (None, false) => self.build_children(node, &descriptor.children),
            (None, true) => {}
        }
    }
}
