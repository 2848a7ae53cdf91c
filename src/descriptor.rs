//! Node descriptors: the declarative input to materialization

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// A zero-argument callable supplying a value at resolution time
///
/// A thunk may produce nothing, which is treated the same as an absent field.
pub struct Thunk<T>(Rc<dyn Fn() -> Option<T>>);

impl<T> Thunk<T> {
    pub fn new(f: impl Fn() -> Option<T> + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self) -> Option<T> {
        (self.0)()
    }
}

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// A field that is either a literal or computed on demand
#[derive(Debug, Clone)]
pub enum Bindable<T> {
    Literal(T),
    Thunk(Thunk<T>),
}

impl<T: Clone> Bindable<T> {
    /// Resolve to a value, invoking the thunk once if there is one
    pub fn resolve(&self) -> Option<T> {
        match self {
            Bindable::Literal(value) => Some(value.clone()),
            Bindable::Thunk(thunk) => thunk.call(),
        }
    }
}

impl<T> Bindable<T> {
    /// Wrap a closure as a computed binding
    pub fn computed(f: impl Fn() -> Option<T> + 'static) -> Self {
        Bindable::Thunk(Thunk::new(f))
    }
}

macro_rules! literal_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Bindable<Value> {
                fn from(value: $ty) -> Self {
                    Bindable::Literal(value.into())
                }
            }
        )*
    };
}

literal_from!(Value, &str, String, bool, i32, i64, f64);

/// Event passed to a handler when a listener fires
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Event name the listener was bound under, e.g. `onclick`
    pub name: String,
}

/// A callable event handler
#[derive(Clone)]
pub struct Handler(Rc<dyn Fn(&Event)>);

impl Handler {
    pub fn new(f: impl Fn(&Event) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// The right-hand side of an event binding
///
/// Only `Handler` is bindable; `Value` exists because data loaded from plain
/// sources cannot carry callables, and is reported rather than bound.
#[derive(Debug, Clone)]
pub enum EventBinding {
    Handler(Handler),
    Value(Value),
}

/// Container for one category of bindings
#[derive(Debug, Clone)]
pub enum Options<B> {
    /// Name/binding pairs in declaration order
    Entries(Vec<(String, B)>),
    /// Something other than a mapping was supplied for this container
    Malformed(Value),
}

impl<B> Default for Options<B> {
    fn default() -> Self {
        Options::Entries(Vec::new())
    }
}

impl<B> Options<B> {
    pub fn is_mapping(&self) -> bool {
        matches!(self, Options::Entries(_))
    }

    /// Entries of a well-formed container; empty for a malformed one
    pub fn entries(&self) -> &[(String, B)] {
        match self {
            Options::Entries(entries) => entries,
            Options::Malformed(_) => &[],
        }
    }

    fn push(&mut self, name: String, binding: B) {
        match self {
            Options::Entries(entries) => entries.push((name, binding)),
            Options::Malformed(_) => *self = Options::Entries(vec![(name, binding)]),
        }
    }
}

/// Declarative description of one node and its subtree
#[derive(Debug, Clone, Default)]
pub struct Descriptor {
    pub tag: Option<Bindable<Value>>,
    pub text: Option<Bindable<Value>>,
    pub attrs: Options<Bindable<Value>>,
    pub events: Options<EventBinding>,
    pub styles: Options<Bindable<Value>>,
    pub children: Vec<Rc<Descriptor>>,
    /// Conditional inclusion flag; only meaningful on children
    pub render_if: Option<Value>,
}

impl Descriptor {
    /// Create a descriptor with a literal tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(Bindable::Literal(Value::Str(tag.into()))),
            ..Self::default()
        }
    }

    /// Create a descriptor whose tag is computed at materialization time
    pub fn with_tag(tag: Bindable<Value>) -> Self {
        Self {
            tag: Some(tag),
            ..Self::default()
        }
    }

    /// Set the text content
    pub fn text(mut self, text: impl Into<Bindable<Value>>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an attribute binding
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Bindable<Value>>) -> Self {
        self.attrs.push(name.into(), value.into());
        self
    }

    /// Add an event handler
    pub fn on(mut self, name: impl Into<String>, handler: impl Fn(&Event) + 'static) -> Self {
        self.events
            .push(name.into(), EventBinding::Handler(Handler::new(handler)));
        self
    }

    /// Add an event binding of any kind
    pub fn event(mut self, name: impl Into<String>, binding: EventBinding) -> Self {
        self.events.push(name.into(), binding);
        self
    }

    /// Add a style binding
    pub fn style(mut self, name: impl Into<String>, value: impl Into<Bindable<Value>>) -> Self {
        self.styles.push(name.into(), value.into());
        self
    }

    /// Append a child descriptor
    pub fn child(mut self, child: Descriptor) -> Self {
        self.children.push(Rc::new(child));
        self
    }

    /// Append several child descriptors
    pub fn children(mut self, children: impl IntoIterator<Item = Descriptor>) -> Self {
        self.children.extend(children.into_iter().map(Rc::new));
        self
    }

    /// Set the conditional inclusion flag
    pub fn render_if(mut self, flag: impl Into<Value>) -> Self {
        self.render_if = Some(flag.into());
        self
    }
}
