//! Owned element tree with resolved namespaces and source positions

use crate::XmlError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

/// A parsed XML document
///
/// Owns both the element tree and the source text, so byte offsets stored
/// on elements can be mapped back to line/column pairs for diagnostics.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Element,
}

/// One element of a parsed document
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
    offset: usize,
}

impl Document {
    /// Parse a UTF-8 XML string into a document
    ///
    /// Fails with a single positioned [`XmlError::Syntax`] on the first
    /// well-formedness problem; callers report it and stop, per the
    /// validation contract.
    pub fn parse(source: &str) -> Result<Self, XmlError> {
        let mut reader = NsReader::from_str(source);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let offset = reader.buffer_position() as usize;
            let (resolve, event) = reader
                .read_resolved_event()
                .map_err(|e| XmlError::syntax_at(source, offset, e.to_string()))?;

            match event {
                Event::Start(start) => {
                    let elem = Element::from_start(source, resolve, &start, offset)?;
                    stack.push(elem);
                }
                Event::Empty(start) => {
                    let elem = Element::from_start(source, resolve, &start, offset)?;
                    attach(&mut stack, &mut root, elem, source)?;
                }
                Event::End(_) => {
                    // The reader rejects unbalanced tags before we get here
                    if let Some(elem) = stack.pop() {
                        attach(&mut stack, &mut root, elem, source)?;
                    }
                }
                Event::Text(t) => {
                    if let Some(top) = stack.last_mut() {
                        let text = t
                            .unescape()
                            .map_err(|e| XmlError::syntax_at(source, offset, e.to_string()))?;
                        top.text.push_str(&text);
                    }
                }
                Event::CData(c) => {
                    if let Some(top) = stack.last_mut() {
                        top.text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                    }
                }
                Event::Eof => {
                    if let Some(open) = stack.last() {
                        return Err(XmlError::syntax_at(
                            source,
                            open.offset,
                            format!("unclosed element '{}'", open.name),
                        ));
                    }
                    break;
                }
                // Declarations, comments, processing instructions, doctypes
                _ => {}
            }
        }

        root.map(|root| Document {
            source: source.to_string(),
            root,
        })
        .ok_or(XmlError::Empty)
    }

    /// The document's root element
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// The raw source text the document was parsed from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Map a byte offset into the source to a 1-based (line, column) pair
    pub fn position(&self, offset: usize) -> (u32, u32) {
        line_col(&self.source, offset)
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    elem: Element,
    source: &str,
) -> Result<(), XmlError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(elem);
        Ok(())
    } else if root.is_none() {
        *root = Some(elem);
        Ok(())
    } else {
        Err(XmlError::syntax_at(
            source,
            elem.offset,
            "document has more than one root element",
        ))
    }
}

impl Element {
    fn from_start(
        source: &str,
        resolve: ResolveResult<'_>,
        start: &BytesStart<'_>,
        offset: usize,
    ) -> Result<Self, XmlError> {
        let namespace = match resolve {
            ResolveResult::Bound(ns) => {
                Some(String::from_utf8_lossy(ns.into_inner()).into_owned())
            }
            ResolveResult::Unbound => None,
            ResolveResult::Unknown(prefix) => {
                return Err(XmlError::syntax_at(
                    source,
                    offset,
                    format!(
                        "unbound namespace prefix '{}'",
                        String::from_utf8_lossy(&prefix)
                    ),
                ));
            }
        };

        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| XmlError::syntax_at(source, offset, e.to_string()))?;
            let key = attr.key.into_inner();
            // Namespace declarations are resolved by the reader, not data
            if key == b"xmlns" || key.starts_with(b"xmlns:") {
                continue;
            }
            let name = String::from_utf8_lossy(attr.key.local_name().into_inner()).into_owned();
            let value = attr
                .unescape_value()
                .map_err(|e| XmlError::syntax_at(source, offset, e.to_string()))?
                .into_owned();
            attributes.push((name, value));
        }

        Ok(Element {
            name: String::from_utf8_lossy(start.local_name().into_inner()).into_owned(),
            namespace,
            attributes,
            children: Vec::new(),
            text: String::new(),
            offset,
        })
    }

    /// Local name of the element (prefix stripped)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved namespace URI, or `None` for elements in no namespace
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Byte offset of the element's start tag in the source
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether this element matches a local name under the expected
    /// namespace URI
    ///
    /// Elements carrying no namespace at all are tolerated and match by
    /// local name alone; elements in a different namespace never match.
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.name == local && self.namespace.as_deref().is_none_or(|ns| ns == namespace)
    }

    /// Value of an (unprefixed) attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All attributes in document order as (name, value) pairs
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Direct text content, surrounding whitespace trimmed
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Direct child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child matching the namespace URI and local name
    pub fn find(&self, namespace: &str, local: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is(namespace, local))
    }

    /// Trimmed text of the first matching direct child
    pub fn find_text(&self, namespace: &str, local: &str) -> Option<&str> {
        self.find(namespace, local).map(Element::text)
    }

    /// All descendant elements in document order (excluding self)
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut pending: Vec<&Element> = self.children.iter().rev().collect();
        std::iter::from_fn(move || {
            let next = pending.pop()?;
            pending.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

/// Map a byte offset into `source` to a 1-based (line, column) pair
pub(crate) fn line_col(source: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut column = 1u32;
    for byte in source.as_bytes().iter().take(offset.min(source.len())) {
        if *byte == b'\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "http://example.com/argument_map";

    #[test]
    fn test_parse_prefixed_namespace() {
        let doc = Document::parse(
            r#"<arg:argument_map xmlns:arg="http://example.com/argument_map">
                 <arg:title>Test Map</arg:title>
               </arg:argument_map>"#,
        )
        .unwrap();

        assert_eq!(doc.root().name(), "argument_map");
        assert_eq!(doc.root().namespace(), Some(NS));
        assert_eq!(doc.root().find_text(NS, "title"), Some("Test Map"));
    }

    #[test]
    fn test_parse_default_namespace() {
        let doc = Document::parse(
            r#"<argument_map xmlns="http://example.com/argument_map">
                 <title>Default NS Map</title>
               </argument_map>"#,
        )
        .unwrap();

        assert_eq!(doc.root().namespace(), Some(NS));
        assert_eq!(doc.root().find_text(NS, "title"), Some("Default NS Map"));
    }

    #[test]
    fn test_elements_without_namespace_are_tolerated() {
        let doc = Document::parse("<argument_map><title>Bare</title></argument_map>").unwrap();

        assert_eq!(doc.root().namespace(), None);
        assert!(doc.root().is(NS, "argument_map"));
        assert_eq!(doc.root().find_text(NS, "title"), Some("Bare"));
    }

    #[test]
    fn test_foreign_namespace_does_not_match() {
        let doc = Document::parse(r#"<map xmlns="urn:other"><title>x</title></map>"#).unwrap();
        assert!(!doc.root().is(NS, "map"));
        assert_eq!(doc.root().find(NS, "title"), None);
    }

    #[test]
    fn test_attributes_and_empty_elements() {
        let doc = Document::parse(r#"<r><support from="p1" to="c1" strength="0.8"/></r>"#).unwrap();
        let support = &doc.root().children()[0];

        assert_eq!(support.attribute("from"), Some("p1"));
        assert_eq!(support.attribute("to"), Some("c1"));
        assert_eq!(support.attribute("strength"), Some("0.8"));
        assert_eq!(support.attribute("group_id"), None);
    }

    #[test]
    fn test_xmlns_declarations_are_not_attributes() {
        let doc =
            Document::parse(r#"<m xmlns="urn:x" xmlns:y="urn:y" id="m1"/>"#).unwrap();
        let attrs: Vec<_> = doc.root().attributes().collect();
        assert_eq!(attrs, vec![("id", "m1")]);
    }

    #[test]
    fn test_text_is_unescaped_and_trimmed() {
        let doc = Document::parse("<t>  Smith &amp; Jones  </t>").unwrap();
        assert_eq!(doc.root().text(), "Smith & Jones");
    }

    #[test]
    fn test_descendants_in_document_order() {
        let doc = Document::parse("<a><b><c/><d/></b><e/></a>").unwrap();
        let names: Vec<_> = doc.root().descendants().map(Element::name).collect();
        assert_eq!(names, vec!["b", "c", "d", "e"]);
    }

    #[test]
    fn test_syntax_error_carries_position() {
        let err = Document::parse("<a>\n  <b></c>\n</a>").unwrap_err();
        match err {
            XmlError::Syntax { line, .. } => assert_eq!(line, 2),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_unbound_prefix_is_rejected() {
        let err = Document::parse("<x:a>text</x:a>").unwrap_err();
        assert!(matches!(err, XmlError::Syntax { .. }));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(Document::parse(""), Err(XmlError::Empty)));
        assert!(matches!(
            Document::parse("<!-- only a comment -->"),
            Err(XmlError::Empty)
        ));
    }

    #[test]
    fn test_line_col() {
        let src = "ab\ncd\nef";
        assert_eq!(line_col(src, 0), (1, 1));
        assert_eq!(line_col(src, 1), (1, 2));
        assert_eq!(line_col(src, 3), (2, 1));
        assert_eq!(line_col(src, 7), (3, 2));
        // Offsets past the end clamp to the last position
        assert_eq!(line_col(src, 100), (3, 3));
    }
}
