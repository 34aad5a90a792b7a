/// Minimal owned XML element tree built from quick-xml events
///
/// Element names are kept exactly as written, prefix included
/// (`ns2:product`), so lookups can distinguish bare and prefixed tags.
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::CatalogError;

#[derive(Debug, Clone)]
enum NodeKind {
    Element { name: String, children: Vec<usize> },
    Text(String),
}

/// A parsed XML document. Node 0 is a synthetic root holding the top-level element.
#[derive(Debug, Clone)]
pub struct XmlDocument {
    nodes: Vec<NodeKind>,
    source: String,
}

/// Borrowed handle to one element of an [`XmlDocument`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'d> {
    doc: &'d XmlDocument,
    id: usize,
}

impl XmlDocument {
    /// Parse XML text. Fails with `CatalogError::Decode` on malformed input
    /// (mismatched or unclosed tags, bad escapes, no root element).
    pub fn parse(xml: &str) -> Result<Self, CatalogError> {
        let mut reader = Reader::from_str(xml);
        let mut nodes = vec![NodeKind::Element { name: String::new(), children: Vec::new() }];
        let mut stack: Vec<usize> = vec![0];

        loop {
            let event = reader
                .read_event()
                .map_err(|e| CatalogError::Decode(format!("invalid XML at byte {}: {}", reader.buffer_position(), e)))?;
            match event {
                Event::Start(start) => {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    let id = push_child(&mut nodes, &stack, NodeKind::Element { name, children: Vec::new() });
                    stack.push(id);
                }
                Event::Empty(start) => {
                    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
                    push_child(&mut nodes, &stack, NodeKind::Element { name, children: Vec::new() });
                }
                Event::End(_) => {
                    if stack.len() <= 1 {
                        return Err(CatalogError::Decode("unexpected closing tag".into()));
                    }
                    stack.pop();
                }
                Event::Text(text) => {
                    let value = text
                        .unescape()
                        .map_err(|e| CatalogError::Decode(format!("invalid text content: {}", e)))?;
                    if stack.len() > 1 {
                        push_child(&mut nodes, &stack, NodeKind::Text(value.into_owned()));
                    }
                }
                Event::CData(data) => {
                    if stack.len() > 1 {
                        push_child(&mut nodes, &stack, NodeKind::Text(String::from_utf8_lossy(&data).into_owned()));
                    }
                }
                Event::Eof => break,
                // declarations, comments, processing instructions, doctype
                _ => {}
            }
        }

        if stack.len() != 1 {
            return Err(CatalogError::Decode("unclosed element at end of document".into()));
        }
        let doc = XmlDocument { nodes, source: xml.to_string() };
        if doc.root().is_none() {
            return Err(CatalogError::Decode("document has no root element".into()));
        }
        Ok(doc)
    }

    /// Raw XML text as received.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The top-level element.
    pub fn root(&self) -> Option<Element<'_>> {
        Element { doc: self, id: 0 }.children().next()
    }

    /// Every element of the document in document order.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        Element { doc: self, id: 0 }.descendants()
    }
}

fn push_child(nodes: &mut Vec<NodeKind>, stack: &[usize], node: NodeKind) -> usize {
    let id = nodes.len();
    nodes.push(node);
    if let Some(&parent) = stack.last() {
        if let NodeKind::Element { children, .. } = &mut nodes[parent] {
            children.push(id);
        }
    }
    id
}

impl<'d> Element<'d> {
    fn child_ids(&self) -> &'d [usize] {
        match &self.doc.nodes[self.id] {
            NodeKind::Element { children, .. } => children,
            NodeKind::Text(_) => &[],
        }
    }

    /// Qualified tag name, e.g. `ns2:product`.
    pub fn name(&self) -> &'d str {
        match &self.doc.nodes[self.id] {
            NodeKind::Element { name, .. } => name,
            NodeKind::Text(_) => "",
        }
    }

    /// Tag name without its prefix.
    pub fn local_name(&self) -> &'d str {
        let name = self.name();
        name.rsplit_once(':').map(|(_, local)| local).unwrap_or(name)
    }

    /// Direct child elements.
    pub fn children(&self) -> impl Iterator<Item = Element<'d>> + 'd {
        let doc = self.doc;
        self.child_ids()
            .iter()
            .copied()
            .filter(move |&id| matches!(doc.nodes[id], NodeKind::Element { .. }))
            .map(move |id| Element { doc, id })
    }

    /// All descendant elements in document order (pre-order), excluding `self`.
    pub fn descendants(&self) -> impl Iterator<Item = Element<'d>> + 'd {
        let doc = self.doc;
        let mut pending: Vec<usize> = self.child_ids().iter().rev().copied().collect();
        std::iter::from_fn(move || {
            while let Some(id) = pending.pop() {
                if let NodeKind::Element { children, .. } = &doc.nodes[id] {
                    pending.extend(children.iter().rev().copied());
                    return Some(Element { doc, id });
                }
            }
            None
        })
    }

    /// Concatenated text of this element and all its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self.doc, self.id, &mut out);
        out
    }
}

fn collect_text(doc: &XmlDocument, id: usize, out: &mut String) {
    match &doc.nodes[id] {
        NodeKind::Text(t) => out.push_str(t),
        NodeKind::Element { children, .. } => {
            for &child in children {
                collect_text(doc, child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_prefixed_names() {
        let doc = XmlDocument::parse(r#"<a:Envelope xmlns:a="urn:x"><a:Body><b/></a:Body></a:Envelope>"#).unwrap();
        let names: Vec<&str> = doc.elements().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a:Envelope", "a:Body", "b"]);
        assert_eq!(doc.root().unwrap().local_name(), "Envelope");
    }

    #[test]
    fn test_text_content_unescapes_and_concatenates() {
        let doc = XmlDocument::parse("<p>Tom &amp; <i>Jerry</i><![CDATA[ <3]]></p>").unwrap();
        assert_eq!(doc.root().unwrap().text_content(), "Tom & Jerry <3");
    }

    #[test]
    fn test_descendants_in_document_order() {
        let doc = XmlDocument::parse("<r><x><y/></x><z/></r>").unwrap();
        let root = doc.root().unwrap();
        let names: Vec<&str> = root.descendants().map(|e| e.name()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
        let children: Vec<&str> = root.children().map(|e| e.name()).collect();
        assert_eq!(children, vec!["x", "z"]);
    }

    #[test]
    fn test_malformed_xml_is_a_decode_error() {
        assert!(matches!(XmlDocument::parse("<a><b></a>"), Err(CatalogError::Decode(_))));
        assert!(matches!(XmlDocument::parse("<a>"), Err(CatalogError::Decode(_))));
        assert!(matches!(XmlDocument::parse("   "), Err(CatalogError::Decode(_))));
    }
}
