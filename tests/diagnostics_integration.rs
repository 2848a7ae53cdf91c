//! Integration tests for warnings, fatal errors and index bookkeeping

use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use treeweave::{
    materialize, render_with_diagnostics, Bindable, DiagnosticKind, Descriptor, Document,
    Materialized, MaterializeConfig, MaterializeError, NodeId, Position, Severity, Value,
};

fn run(descriptor: Descriptor) -> (Document, Materialized<NodeId>) {
    let mut doc = Document::new();
    let out = materialize(
        &mut doc,
        &Rc::new(descriptor),
        Position::Root,
        &MaterializeConfig::default(),
    )
    .expect("Should materialize");
    (doc, out)
}

fn kinds(out: &Materialized<NodeId>) -> Vec<DiagnosticKind> {
    out.diagnostics.iter().map(|d| d.kind).collect()
}

#[test]
fn test_skipped_child_keeps_its_index_slot() {
    let (doc, out) = run(
        Descriptor::new("ul")
            .child(Descriptor::new("li").text("a").render_if(true))
            .child(Descriptor::new("li").text("b").render_if(false))
            .child(Descriptor::new("li").text("c").render_if(true)),
    );
    let root = out.node.expect("Should produce a node");
    let items = doc.child_elements(root);

    assert_eq!(items.len(), 2);
    assert_eq!(out.backrefs.index_of(&items[0]), Some(0));
    assert_eq!(out.backrefs.index_of(&items[1]), Some(2));
    assert_eq!(doc.text_content(items[1]), "c");
    assert!(out.diagnostics.is_empty());
}

#[test]
fn test_skipped_child_tag_still_resolved() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let (_, out) = run(Descriptor::new("div").child(
        Descriptor::with_tag(Bindable::computed(move || {
            counter.set(counter.get() + 1);
            Some(Value::from("p"))
        }))
        .render_if(false),
    ));
    assert_eq!(calls.get(), 1);
    assert_eq!(out.backrefs.len(), 1);
}

#[test]
fn test_non_boolean_render_if_warns_and_renders() {
    let (doc, out) = run(Descriptor::new("div").child(Descriptor::new("p").render_if("yes")));
    let root = out.node.expect("Should produce a node");
    assert_eq!(doc.child_elements(root).len(), 1);
    assert_eq!(kinds(&out), vec![DiagnosticKind::InvalidRenderIf]);
}

#[test]
fn test_text_and_children_conflict() {
    let (doc, out) = run(
        Descriptor::new("div")
            .text("dropped")
            .child(Descriptor::new("span").text("kept")),
    );
    let root = out.node.expect("Should produce a node");
    assert_eq!(kinds(&out), vec![DiagnosticKind::TextWithChildren]);
    assert_eq!(doc.text_content(root), "kept");
    assert_eq!(doc.child_elements(root).len(), 1);
}

#[test]
fn test_unknown_event_does_not_block_root() {
    let (doc, out) = run(Descriptor::new("div").on("onnothing", |_| {}));
    let root = out.node.expect("Should produce a node");
    assert_eq!(kinds(&out), vec![DiagnosticKind::InvalidEvent]);
    assert_eq!(doc.listener_count(root, "onnothing"), 0);
}

#[test]
fn test_invalid_child_isolated_from_siblings() {
    let (doc, out) = run(
        Descriptor::new("div")
            .child(Descriptor::new("p").text("before"))
            .child(Descriptor::new("").child(Descriptor::new("em")))
            .child(Descriptor::new("p").text("after")),
    );
    let root = out.node.expect("Should produce a node");
    let children = doc.child_elements(root);

    assert_eq!(children.len(), 2);
    assert_eq!(doc.text_content(root), "beforeafter");
    assert_eq!(out.backrefs.index_of(&children[1]), Some(2));

    let errors: Vec<_> = out.diagnostics.errors().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, DiagnosticKind::InvalidTag);
    assert_eq!(errors[0].severity, Severity::Error);
    // The aborted subtree created nothing
    assert_eq!(out.backrefs.len(), 3);
}

#[test]
fn test_grandchild_failure_keeps_parent() {
    let (doc, out) = run(
        Descriptor::new("div").child(
            Descriptor::new("section")
                .child(Descriptor::with_tag(Bindable::computed(|| Some(Value::Int(5))))),
        ),
    );
    let root = out.node.expect("Should produce a node");
    let section = doc.child_elements(root)[0];
    assert_eq!(doc.tag(section), Some("section"));
    assert!(doc.child_elements(section).is_empty());
    assert!(out.diagnostics.has(DiagnosticKind::InvalidTag));
}

#[test]
fn test_root_tag_failure_is_fatal() {
    let mut doc = Document::new();
    let result = materialize(
        &mut doc,
        &Rc::new(Descriptor::new("")),
        Position::Root,
        &MaterializeConfig::default(),
    );
    assert!(matches!(result, Err(MaterializeError::InvalidTag { .. })));
    assert!(doc.is_empty());
}

#[test]
fn test_toml_diagnostics() {
    let (html, diagnostics) = render_with_diagnostics(
        r#"
tag = "div"

[events]
onclick = "alert(1)"
onhover = "noop()"

[styles]
colour = "red"
color = "blue"

[[children]]
tag = "p"
attrs = "not a table"

[[children]]
tag = "p"
text = "ok"
"#,
        &MaterializeConfig::default(),
    )
    .expect("Should render");

    assert_eq!(html, r#"<div style="color: blue;"><p>ok</p></div>"#);
    let kinds: Vec<DiagnosticKind> = diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::InvalidEventHandler,
            DiagnosticKind::InvalidEvent,
            DiagnosticKind::InvalidStyle,
            DiagnosticKind::InvalidObjectOptions,
        ]
    );
}
