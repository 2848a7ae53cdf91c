//! HTML serialization for [`Document`] subtrees

use std::fmt::Write;

use super::document::{Document, NodeData, NodeId};

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Serialize the subtree rooted at `id` as HTML
///
/// Attributes come out in binding order, followed by the live `value`
/// property (if set) and a `style` attribute built from the style bindings.
/// An element whose tag is not a valid markup name is left out together with
/// its subtree, and attributes with invalid names are dropped.
pub fn to_html(doc: &Document, id: NodeId) -> String {
    let mut out = String::new();
    write_node(doc, id, &mut out);
    out
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let element = match doc.get(id) {
        Some(NodeData::Text(text)) => {
            out.push_str(&escape_text(text));
            return;
        }
        Some(NodeData::Element(element)) => element,
        None => return,
    };

    if !valid_name(&element.tag) {
        tracing::warn!(tag = %element.tag, "invalid element name; subtree not serialized");
        return;
    }

    out.push('<');
    out.push_str(&element.tag);

    for (name, value) in &element.attributes {
        if name == "value" && doc.property(id, "value").is_some() {
            continue;
        }
        if !valid_name(name) {
            tracing::warn!(attr = %name, "invalid attribute name; dropped");
            continue;
        }
        write!(out, " {}=\"{}\"", name, escape_attr(value)).ok();
    }

    if let Some(value) = doc.property(id, "value") {
        write!(out, " value=\"{}\"", escape_attr(&value.to_string())).ok();
    }

    if !element.styles.is_empty() {
        let style = element
            .styles
            .iter()
            .map(|(name, value)| format!("{}: {};", kebab_case(name), value))
            .collect::<Vec<_>>()
            .join(" ");
        write!(out, " style=\"{}\"", escape_attr(&style)).ok();
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for child in &element.children {
        write_node(doc, *child, out);
    }

    write!(out, "</{}>", element.tag).ok();
}

/// Whether `name` can stand as a tag or attribute name in markup
fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

/// `backgroundColor` -> `background-color`
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Host;
    use crate::value::Value;

    #[test]
    fn test_element_with_text() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let text = doc.create_text("a < b & c");
        doc.append_child(&p, &text);
        assert_eq!(to_html(&doc, p), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_attributes_and_styles() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(&div, "id", "x");
        doc.set_attribute(&div, "title", "say \"hi\"");
        doc.set_style(&div, "backgroundColor", "red");
        doc.set_style(&div, "fontSize", "12px");
        assert_eq!(
            to_html(&doc, div),
            r#"<div id="x" title="say &quot;hi&quot;" style="background-color: red; font-size: 12px;"></div>"#
        );
    }

    #[test]
    fn test_void_element_with_value_property() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(&input, "type", "text");
        doc.set_property(&input, "value", &Value::from("typed"));
        assert_eq!(to_html(&doc, input), r#"<input type="text" value="typed">"#);
    }

    #[test]
    fn test_invalid_tag_not_serialized() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let bad = doc.create_element("img src=x onerror=alert(1)");
        let ok = doc.create_element("p");
        doc.append_child(&div, &bad);
        doc.append_child(&div, &ok);
        assert_eq!(to_html(&doc, bad), "");
        assert_eq!(to_html(&doc, div), "<div><p></p></div>");
    }

    #[test]
    fn test_invalid_attribute_name_dropped() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attribute(&div, "x><script>alert(1)</script", "1");
        doc.set_attribute(&div, "data-ok", "1");
        assert_eq!(to_html(&doc, div), r#"<div data-ok="1"></div>"#);
    }

    #[test]
    fn test_valid_name() {
        assert!(valid_name("div"));
        assert!(valid_name("data-count"));
        assert!(valid_name("my-element"));
        assert!(!valid_name(""));
        assert!(!valid_name("a b"));
        assert!(!valid_name("a=b"));
        assert!(!valid_name("a/"));
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("color"), "color");
        assert_eq!(kebab_case("borderTopLeftRadius"), "border-top-left-radius");
    }
}
