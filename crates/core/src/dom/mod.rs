//! Owned element tree built from html5ever's RcDom.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::ParseOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    Element,
    /// Trimmed, never empty.
    Text(String),
}

/// A node in a parsed page. Comments and doctypes are dropped.
#[derive(Debug, Clone)]
pub struct DomNode {
    pub kind: NodeKind,
    /// Lowercase tag name, empty for document and text nodes.
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<DomNode>,
}

impl DomNode {
    fn bare(kind: NodeKind, tag: String) -> Self {
        Self {
            kind,
            tag,
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.kind == NodeKind::Element
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Lowercased `type` attribute of an input, `text` when absent.
    pub fn input_type(&self) -> String {
        self.get_attr("type")
            .map(|t| t.trim().to_lowercase())
            .unwrap_or_else(|| "text".to_string())
    }

    /// What a user reads on the element: `value` for inputs, text otherwise.
    pub fn label(&self) -> String {
        if self.tag == "input" {
            self.get_attr("value").unwrap_or_default().trim().to_string()
        } else {
            self.text_content()
        }
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a DomNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// First element in document order with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        if self.is_element() && self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    /// Number of elements carrying each id.
    pub fn id_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        self.visit(&mut |node| {
            if let (true, Some(id)) = (node.is_element(), node.id()) {
                *counts.entry(id.to_string()).or_insert(0) += 1;
            }
        });
        counts
    }

    /// Descendant text runs joined by single spaces.
    pub fn text_content(&self) -> String {
        let mut runs = Vec::new();
        self.visit(&mut |node| {
            if let NodeKind::Text(text) = &node.kind {
                runs.push(text.as_str());
            }
        });
        runs.join(" ")
    }
}

/// Parse an HTML string into a DomNode tree.
pub fn parse_html(html: &str) -> DomNode {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            ..Default::default()
        },
        ..Default::default()
    };

    // Reading from an in-memory slice cannot fail.
    let dom = parse_document(RcDom::default(), opts)
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .unwrap_or_default();

    build(&dom.document).unwrap_or_else(|| DomNode::bare(NodeKind::Document, String::new()))
}

fn build(handle: &Handle) -> Option<DomNode> {
    match &handle.data {
        NodeData::Document => {
            let mut doc = DomNode::bare(NodeKind::Document, String::new());
            doc.children = build_children(handle);
            Some(doc)
        }
        NodeData::Element { name, attrs, .. } => {
            let mut node = DomNode::bare(NodeKind::Element, name.local.to_string());
            node.attributes = attrs
                .borrow()
                .iter()
                .map(|a| (a.name.local.to_string(), a.value.to_string()))
                .collect();
            // Script and style bodies carry no elements.
            if !matches!(node.tag.as_str(), "script" | "style") {
                node.children = build_children(handle);
            }
            Some(node)
        }
        NodeData::Text { contents } => {
            let text = contents.borrow().trim().to_string();
            (!text.is_empty()).then(|| DomNode::bare(NodeKind::Text(text), String::new()))
        }
        _ => None,
    }
}

fn build_children(handle: &Handle) -> Vec<DomNode> {
    handle.children.borrow().iter().filter_map(build).collect()
}
