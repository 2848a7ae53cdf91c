//! Integration tests for materialization through the public API

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use treeweave::{
    materialize, render_html, template, to_html, Bindable, Descriptor, Document,
    MaterializeConfig, MaterializeError, NodeId, Position, Template, Value,
};

fn materialize_root(descriptor: Descriptor) -> (Document, NodeId) {
    let mut doc = Document::new();
    let out = materialize(
        &mut doc,
        &Rc::new(descriptor),
        Position::Root,
        &MaterializeConfig::default(),
    )
    .expect("Should materialize");
    let node = out.node.expect("Should produce a node");
    (doc, node)
}

#[test]
fn test_text_leaf() {
    let (doc, node) = materialize_root(Descriptor::new("div").text("hello"));
    assert_eq!(doc.children(node).len(), 1);
    assert_eq!(doc.text(doc.children(node)[0]), Some("hello"));
    assert!(doc.child_elements(node).is_empty());
}

#[test]
fn test_attribute_falsy_values() {
    let (doc, node) = materialize_root(
        Descriptor::new("div")
            .attr("hidden", false)
            .attr("data-count", 0)
            .attr("title", ""),
    );
    assert_eq!(doc.attribute(node, "hidden"), None);
    assert_eq!(doc.attribute(node, "data-count"), Some("0"));
    assert_eq!(doc.attribute(node, "title"), Some(""));
}

#[test]
fn test_value_is_a_property() {
    let (doc, node) = materialize_root(Descriptor::new("input").attr("value", "x"));
    assert_eq!(doc.property(node, "value"), Some(&Value::from("x")));
    assert_eq!(doc.attribute(node, "value"), None);
}

#[test]
fn test_template_argument_checked() {
    let err = template(Value::Int(42)).unwrap_err();
    assert!(matches!(err, MaterializeError::InvalidTemplateArgument { .. }));

    let data = Value::table([("tag", Value::from("div"))]);
    let t = template(data.clone()).expect("Should wrap");
    assert_eq!(t.data(), Some(&data));
}

#[test]
fn test_nested_tree_html() {
    let descriptor = Descriptor::new("form")
        .attr("id", "login")
        .style("display", "flex")
        .style("flexDirection", "column")
        .child(Descriptor::new("label").attr("for", "user").text("User"))
        .child(
            Descriptor::new("input")
                .attr("id", "user")
                .attr("type", "text")
                .attr("value", "ada"),
        )
        .child(Descriptor::new("button").attr("type", "submit").text("Sign in"));

    let (doc, node) = materialize_root(descriptor);
    insta::assert_snapshot!(
        to_html(&doc, node),
        @r#"<form id="login" style="display: flex; flex-direction: column;"><label for="user">User</label><input id="user" type="text" value="ada"><button type="submit">Sign in</button></form>"#
    );
}

#[test]
fn test_render_html_from_toml() {
    let html = render_html(
        r#"
tag = "ul"

[attrs]
class = "menu"

[[children]]
tag = "li"
text = "Home"

[[children]]
tag = "li"
text = "Admin"
renderIf = false

[[children]]
tag = "li"
text = "About"
"#,
    )
    .expect("Should render");
    insta::assert_snapshot!(html, @r#"<ul class="menu"><li>Home</li><li>About</li></ul>"#);
}

#[test]
fn test_thunks_see_current_state() {
    let name = Rc::new(RefCell::new("first".to_string()));
    let source = Rc::clone(&name);
    let descriptor = Rc::new(Descriptor::new("p").text(Bindable::computed(move || {
        Some(Value::from(source.borrow().clone()))
    })));

    let mut doc = Document::new();
    let config = MaterializeConfig::default();
    let first = materialize(&mut doc, &descriptor, Position::Root, &config)
        .expect("Should materialize")
        .node
        .expect("Should produce a node");

    *name.borrow_mut() = "second".to_string();
    let second = materialize(&mut doc, &descriptor, Position::Root, &config)
        .expect("Should materialize")
        .node
        .expect("Should produce a node");

    assert_eq!(doc.text_content(first), "first");
    assert_eq!(doc.text_content(second), "second");
}

#[test]
fn test_events_fire_after_materialization() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let (doc, node) = materialize_root(
        Descriptor::new("button")
            .text("Go")
            .on("onclick", move |event| sink.borrow_mut().push(event.name.clone())),
    );

    doc.dispatch(node, "onclick");
    doc.dispatch(node, "onclick");
    assert_eq!(*log.borrow(), vec!["onclick".to_string(), "onclick".to_string()]);
}

#[test]
fn test_template_from_descriptor() {
    let t = Template::from_descriptor(Descriptor::new("main").child(Descriptor::new("h1").text("Hi")));
    let mut doc = Document::new();
    let out = t
        .materialize(&mut doc, &MaterializeConfig::default())
        .expect("Should materialize");
    let node = out.node.expect("Should produce a node");
    assert_eq!(to_html(&doc, node), "<main><h1>Hi</h1></main>");
    assert_eq!(out.backrefs.len(), 2);
}
