mod query;

pub(crate) use query::{find_by_id, select_all};

use crate::error::{AssertError, Result};
use ego_tree::NodeId;
use scraper::{ElementRef, Html};
use std::fmt;

/// Parse a response body. Invalid UTF-8 is replaced rather than rejected.
///
/// The HTML parser recovers from any markup, but an empty or
/// whitespace-only body has no document to recover and is an error.
pub fn parse_body(body: &[u8]) -> Result<Html> {
    let content = String::from_utf8_lossy(body);
    if content.trim().is_empty() {
        return Err(AssertError::Parse("Document is empty".to_string()));
    }

    Ok(Html::parse_document(&content))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// No filter was given; the match is the document's root element.
    Document,
    Selector,
    ElementId,
}

/// The parsed document together with whatever the lookup resolved to.
///
/// Always holds at least one element: an empty selection is reported as
/// [`HtmlNotPresent`](crate::HtmlNotPresent) instead.
#[derive(Debug)]
pub struct HtmlMatch {
    document: Html,
    kind: MatchKind,
    nodes: Vec<NodeId>,
}

impl HtmlMatch {
    pub(crate) fn document_root(document: Html) -> Self {
        let root = document.root_element().id();
        Self {
            document,
            kind: MatchKind::Document,
            nodes: vec![root],
        }
    }

    pub(crate) fn new(document: Html, kind: MatchKind, nodes: Vec<NodeId>) -> Self {
        Self {
            document,
            kind,
            nodes,
        }
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.document.root_element()
    }

    /// Matched elements in document order.
    pub fn elements(&self) -> Vec<ElementRef<'_>> {
        self.nodes
            .iter()
            .filter_map(|id| self.document.tree.get(*id))
            .filter_map(ElementRef::wrap)
            .collect()
    }

    /// The first match; for an element id lookup this is the element.
    ///
    /// Every match holds at least one node id, each taken from an element
    /// of this same document, so the lookups below cannot fail.
    pub fn element(&self) -> ElementRef<'_> {
        let node = self
            .document
            .tree
            .get(self.nodes[0])
            .expect("valid node id");
        ElementRef::wrap(node).expect("matched node is an element")
    }

    /// Bind exactly `N` matches positionally, e.g. `let [a, b] = m.unpack::<2>()?`.
    pub fn unpack<const N: usize>(&self) -> Option<[ElementRef<'_>; N]> {
        self.elements().try_into().ok()
    }

    // Never zero: an empty selection is an error before a match exists
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn text(&self) -> String {
        element_text(&self.element())
    }

    pub fn texts(&self) -> Vec<String> {
        self.elements().iter().map(element_text).collect()
    }
}

pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

impl fmt::Display for HtmlMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements();
        match self.kind {
            MatchKind::Selector => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write_tag(f, element)?;
                }
                write!(f, "]")
            }
            MatchKind::Document | MatchKind::ElementId => match elements.first() {
                Some(element) => write_tag(f, element),
                None => Ok(()),
            },
        }
    }
}

fn write_tag(f: &mut fmt::Formatter<'_>, element: &ElementRef<'_>) -> fmt::Result {
    let value = element.value();
    write!(f, "<{}", value.name())?;
    for (name, attr) in value.attrs() {
        write!(f, " {}=\"{}\"", name, attr)?;
    }
    write!(f, ">")
}
