//! Markup serializer: projects an element tree back into indented markup
//! text. Debug and demo output only; there is no parser.

use crate::element::{Content, Element};

/// Serialize the tree as indented markup.
///
/// Attributes are emitted in sorted name order so output is deterministic.
pub fn to_markup(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, 0, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.tag);
    out.push_str(&format!(" id=\"{}\"", escape_attr(&element.id)));

    let mut names: Vec<&String> = element.attributes.keys().collect();
    names.sort();
    for name in names {
        let value = &element.attributes[name];
        out.push_str(&format!(" {name}=\"{}\"", escape_attr(value)));
    }

    match &element.content {
        Content::None => out.push_str("/>\n"),
        Content::Text(text) => {
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str(&format!("</{}>\n", element.tag));
        }
        Content::Children(children) => {
            out.push_str(">\n");
            for child in children {
                write_element(child, depth + 1, out);
            }
            out.push_str(&indent);
            out.push_str(&format!("</{}>\n", element.tag));
        }
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
