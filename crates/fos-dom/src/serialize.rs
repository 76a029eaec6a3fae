//! HTML serialization
//!
//! `outerHTML` / `innerHTML` for inspecting generated markup.

use crate::{DomTree, NodeData, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "source", "track", "wbr",
];

/// Serialize a node and its subtree
pub fn outer_html(tree: &DomTree, node: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, node, &mut out);
    out
}

/// Serialize the children of a node
pub fn inner_html(tree: &DomTree, node: NodeId) -> String {
    let mut out = String::new();
    for (child, _) in tree.children(node) {
        write_node(tree, child, &mut out);
    }
    out
}

fn write_node(tree: &DomTree, node: NodeId, out: &mut String) {
    let Some(data) = tree.get(node).map(|n| &n.data) else {
        return;
    };
    match data {
        NodeData::Document => {
            for (child, _) in tree.children(node) {
                write_node(tree, child, out);
            }
        }
        NodeData::Text(text) => escape_into(text, false, out),
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeData::Element(elem) => {
            let tag = tree.resolve(elem.name);
            out.push('<');
            out.push_str(tag);
            for (name, value) in tree.attributes(node) {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');
            if VOID_ELEMENTS.contains(&tag) {
                return;
            }
            for (child, _) in tree.children(node) {
                write_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_html() {
        let mut tree = DomTree::new();
        let button = tree.create_element("button");
        let text = tree.create_text("Q & A <1>");
        tree.set_attribute(button, "aria-label", "say \"hi\"").unwrap();
        tree.set_attribute(button, "data-accordion-item-button", "").unwrap();
        tree.append_child(button, text).unwrap();

        assert_eq!(
            outer_html(&tree, button),
            r#"<button aria-label="say &quot;hi&quot;" data-accordion-item-button="">Q &amp; A &lt;1&gt;</button>"#
        );
    }

    #[test]
    fn test_void_and_inner() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let input = tree.create_element("input");
        let comment = tree.create_comment(" note ");
        tree.append_child(div, input).unwrap();
        tree.append_child(div, comment).unwrap();

        assert_eq!(inner_html(&tree, div), "<input><!-- note -->");
    }
}
