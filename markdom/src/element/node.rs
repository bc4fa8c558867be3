use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A markup element: tag name, attribute map, and content.
///
/// Elements are built with consuming builder methods and addressed by ID.
/// IDs are auto-generated from the tag name and can be overridden with
/// [`Element::id`] when markup carries an explicit one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub content: Content,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            attributes: HashMap::new(),
            content: Content::None,
        }
    }

    // Builders

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    // Attributes

    /// Get an attribute value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// True when the attribute is present with exactly this value.
    pub fn attr_is(&self, name: &str, value: &str) -> bool {
        self.get_attr(name) == Some(value)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    /// Toggle a string boolean attribute: `"true"` becomes `"false"`,
    /// anything else (including absent) becomes `"true"`.
    pub fn toggle_bool_attr(&mut self, name: &str) {
        let next = if self.attr_is(name, "true") {
            "false"
        } else {
            "true"
        };
        self.set_attr(name, next);
    }

    // Content

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(text) => out.push_str(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Child elements, or an empty slice for text/empty content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> Option<&mut Vec<Element>> {
        match &mut self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    /// Direct children with the given tag, in document order.
    pub fn children_with_tag(&self, tag: &str) -> Vec<&Element> {
        self.child_elements()
            .iter()
            .filter(|c| c.tag == tag)
            .collect()
    }

    /// Remove and return all children, leaving the element empty.
    /// Returns an empty vec for text/empty content (content is untouched).
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::replace(&mut self.content, Content::None) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    /// Replace the element's children wholesale. The reorder primitive:
    /// a pure document-order rewrite with no node mutation.
    pub fn replace_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    /// Insert a child at the given position (index 0 = prepend).
    pub fn insert_child(&mut self, index: usize, child: Element) {
        match &mut self.content {
            Content::Children(children) => {
                let index = index.min(children.len());
                children.insert(index, child);
            }
            _ => self.content = Content::Children(vec![child]),
        }
    }
}
