use std::{fmt, rc::Rc};

use enum_assoc::Assoc;
use indexmap::IndexMap;

use crate::style::StyleDeclaration;

/// Element kinds that components render into.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn attributes(&self) -> &'static [&'static str])]
pub enum Tag {
    #[assoc(as_str = "a")]
    #[assoc(attributes = &["href", "target", "rel", "download", "hreflang", "type"])]
    A,
    #[assoc(as_str = "div")]
    #[assoc(attributes = &[])]
    Div,
    #[assoc(as_str = "input")]
    #[assoc(attributes = &[
        "autocomplete", "autofocus", "checked", "defaultValue", "disabled", "form", "list", "max",
        "maxlength", "min", "minlength", "multiple", "name", "pattern", "placeholder", "readonly",
        "required", "size", "step", "type", "value",
    ])]
    Input,
    #[assoc(as_str = "label")]
    #[assoc(attributes = &["for", "form"])]
    Label,
    #[assoc(as_str = "path")]
    #[assoc(attributes = &["d", "fill-rule", "clip-rule"])]
    Path,
    #[assoc(as_str = "span")]
    #[assoc(attributes = &[])]
    Span,
    #[assoc(as_str = "svg")]
    #[assoc(attributes = &["viewBox", "xmlns", "width", "height", "focusable", "preserveAspectRatio"])]
    Svg,
}

const GLOBAL_ATTRIBUTES: &[&str] = &[
    "class", "dir", "hidden", "id", "lang", "role", "style", "tabindex", "title",
];

impl Tag {
    /// Void elements have no children and no closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Whether `name` is a valid attribute for this element kind.
    pub fn accepts_attribute(&self, name: &str) -> bool {
        name.starts_with("aria-")
            || name.starts_with("data-")
            || GLOBAL_ATTRIBUTES.contains(&name)
            || self.attributes().contains(&name)
    }
}

/// An attribute value. `Bool(false)` renders as an absent attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Bool(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered element attributes. Later writes win.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, AttrValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn with_opt<V: Into<AttrValue>>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.set(name, value);
        }
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.0.get(name)
    }

    pub fn extend(&mut self, other: Attributes) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for Attributes {
    type Item = (String, AttrValue);
    type IntoIter = indexmap::map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Payload of a dispatched event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: &'static str,
    pub value: Option<String>,
}

pub type EventHandler = Rc<dyn Fn(&Event) + 'static>;

/// A node of a rendered tree.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A rendered element with its computed style.
#[derive(Clone)]
pub struct Element {
    pub tag: Tag,
    pub display_name: Option<&'static str>,
    pub attributes: Attributes,
    pub style: StyleDeclaration,
    pub children: Vec<Node>,
    listeners: IndexMap<&'static str, EventHandler>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("display_name", &self.display_name)
            .field("attributes", &self.attributes)
            .field("style", &self.style)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .field("children", &self.children)
            .finish()
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            display_name: None,
            attributes: Attributes::new(),
            style: StyleDeclaration::new(),
            children: Vec::new(),
            listeners: IndexMap::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn style(mut self, style: StyleDeclaration) -> Self {
        self.style = style;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = impl Into<Node>>) -> Self {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn on(mut self, kind: &'static str, handler: EventHandler) -> Self {
        self.listeners.insert(kind, handler);
        self
    }

    pub fn has_listener(&self, kind: &str) -> bool {
        self.listeners.contains_key(kind)
    }

    /// Invokes the listener registered for `event.kind`. Returns whether one ran.
    pub fn dispatch(&self, event: &Event) -> bool {
        match self.listeners.get(event.kind) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }

    pub fn dispatch_change(&self, value: impl Into<String>) -> bool {
        self.dispatch(&Event {
            kind: "change",
            value: Some(value.into()),
        })
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first search including `self`.
    pub fn find(&self, predicate: &impl Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }

        self.child_elements()
            .find_map(|child| child.find(predicate))
    }

    pub fn find_by_display_name(&self, name: &str) -> Option<&Element> {
        self.find(&|element: &Element| element.display_name == Some(name))
    }

    pub fn find_by_tag(&self, tag: Tag) -> Option<&Element> {
        self.find(&|element: &Element| element.tag == tag)
    }

    /// Visits `self` and every descendant element, depth-first.
    pub fn walk(&self, visit: &mut impl FnMut(&Element)) {
        visit(self);
        for child in self.child_elements() {
            child.walk(visit);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, text: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(content) => text.push_str(content),
                Node::Element(element) => element.collect_text(text),
            }
        }
    }

    /// Serializes the element structure as HTML. Styles are not included.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) {
        let tag = self.tag.as_str();
        html.push('<');
        html.push_str(tag);

        for (name, value) in self.attributes.iter() {
            match value {
                AttrValue::Text(text) => {
                    html.push_str(&format!(" {name}=\"{}\"", escape(text)));
                }
                AttrValue::Bool(flag) if name.starts_with("aria-") => {
                    html.push_str(&format!(" {name}=\"{flag}\""));
                }
                AttrValue::Bool(true) => {
                    html.push(' ');
                    html.push_str(name);
                }
                AttrValue::Bool(false) => {}
            }
        }

        if self.tag.is_void() {
            html.push_str(" />");
            return;
        }

        html.push('>');
        for child in &self.children {
            match child {
                Node::Text(text) => html.push_str(&escape(text)),
                Node::Element(element) => element.write_html(html),
            }
        }
        html.push_str(&format!("</{tag}>"));
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_accepts_attribute() {
        assert!(Tag::Input.accepts_attribute("placeholder"));
        assert!(Tag::Input.accepts_attribute("aria-invalid"));
        assert!(Tag::Div.accepts_attribute("data-testid"));
        assert!(Tag::Label.accepts_attribute("for"));
        assert!(!Tag::Div.accepts_attribute("placeholder"));
        assert!(!Tag::Div.accepts_attribute("variant"));
    }

    #[test]
    fn test_to_html() {
        let element = Element::new(Tag::Label)
            .attr("for", "name")
            .child(Element::new(Tag::Span).child("Name & title"))
            .child(
                Element::new(Tag::Input)
                    .attr("required", true)
                    .attr("disabled", false)
                    .attr("aria-invalid", false),
            );

        assert_eq!(
            element.to_html(),
            "<label for=\"name\"><span>Name &amp; title</span>\
             <input required aria-invalid=\"false\" /></label>"
        );
    }

    #[test]
    fn test_find_and_text_content() {
        let mut inner = Element::new(Tag::Span).child("inner");
        inner.display_name = Some("Inner");
        let element = Element::new(Tag::Div).child("outer ").child(inner);

        assert_eq!(element.text_content(), "outer inner");
        assert_eq!(element.find_by_display_name("Inner").unwrap().tag, Tag::Span);
        assert!(element.find_by_tag(Tag::Input).is_none());
    }

    #[test]
    fn test_dispatch_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let handler_seen = seen.clone();
        let element = Element::new(Tag::Input).on(
            "change",
            Rc::new(move |event: &Event| {
                handler_seen.borrow_mut().push(event.value.clone());
            }),
        );

        assert!(element.dispatch_change("hello"));
        assert!(!element.dispatch(&Event { kind: "click", value: None }));
        assert_eq!(*seen.borrow(), vec![Some("hello".to_string())]);
    }
}
