// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Provides the `Document` type, which owns every node of a parsed tree.

use crate::element::ElementRef;
use crate::error::{Error, Result};
use crate::items::ItemList;
use crate::node::{Node, NodeId, NodeRef};
use crate::tree_builder::TreeBuilder;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter;
use std::path::Path;
use std::str::FromStr;

use rxml::{EventRead, Lexer, PullDriver, RawParser};
use tracing::debug;

/// One arena slot.
#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) parent: Option<NodeId>,
    pub(crate) node: Node,
}

/// A parsed XML document.
///
/// Nodes live in a flat arena and refer to each other by `NodeId`. Elements list their
/// children, and every node knows its parent.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Entry>,
    root: NodeId,
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Document> {
        Document::from_reader(s.as_bytes())
    }
}

impl Document {
    pub(crate) fn from_parts(nodes: Vec<Entry>, root: NodeId) -> Document {
        Document { nodes, root }
    }

    pub(crate) fn entry(&self, id: NodeId) -> &Entry {
        &self.nodes[id.index()]
    }

    /// Parse a document from a `BufRead`.
    ///
    /// The input is read to its end, so anything after the root element must be well-formed
    /// too.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Document> {
        let mut tree_builder = TreeBuilder::new();
        let mut driver = PullDriver::wrap(reader, Lexer::new(), RawParser::new());
        while let Some(event) = driver.read()? {
            tree_builder.process_event(event)?;
        }
        tree_builder.into_document()
    }

    /// Open the file at `path` and parse it.
    ///
    /// The file is closed before this returns, whatever the outcome.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::FileNotFound(path.to_owned()),
            _ => Error::Io(err),
        })?;
        debug!(path = %path.display(), "parsing document");
        let document = Document::from_reader(BufReader::new(file))?;
        debug!(nodes = document.node_count(), "document parsed");
        Ok(document)
    }

    /// The document element.
    pub fn root(&self) -> ElementRef<'_> {
        match ElementRef::new(self, self.root) {
            Some(root) => root,
            None => unreachable!("the root of a document is always an element"),
        }
    }

    /// The node with this id, if it belongs to this document.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        if id.index() < self.nodes.len() {
            Some(NodeRef::new(self, id))
        } else {
            None
        }
    }

    /// Number of nodes, elements and text alike.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every element named `tag`, the document element included, in document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = r#"<item name="outer"><item name="inner"/></item>"#.parse().unwrap();
    /// let items = doc.get_elements_by_tag_name("item");
    ///
    /// assert_eq!(items.len(), 2);
    /// assert_eq!(items.get(0).unwrap().attr("name"), Some("outer"));
    /// ```
    pub fn get_elements_by_tag_name(&self, tag: &str) -> ItemList<'_> {
        let root = self.root();
        let items: ItemList<'_> = iter::once(root.as_node())
            .chain(root.descendants())
            .filter_map(|node| node.as_element())
            .filter(|element| element.name() == tag)
            .collect();
        debug!(tag, count = items.len(), "collected elements");
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_reader_simple() {
        let xml = b"<foo></foo>";
        let doc = Document::from_reader(&xml[..]).unwrap();

        assert_eq!(doc.root().name(), "foo");
        assert_eq!(doc.node_count(), 1);
    }

    #[test]
    fn test_from_reader_nested() {
        let xml = b"<foo><bar baz='qxx' /></foo>";
        let doc = Document::from_reader(&xml[..]).unwrap();

        let bar = doc.root().children().next().unwrap();
        assert_eq!(bar.name(), "bar");
        assert_eq!(bar.attr("baz"), Some("qxx"));
    }

    #[test]
    fn does_not_unescape_cdata() {
        let xml = b"<test><![CDATA[&apos;&gt;blah<blah>]]></test>";
        let doc = Document::from_reader(&xml[..]).unwrap();
        assert_eq!(doc.root().text(), "&apos;&gt;blah<blah>");
    }

    #[test]
    fn unclosed_tag_is_malformed() {
        let err = "<items><item name='a'>X</items>"
            .parse::<Document>()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedXml);

        let err = "<items><item name='a'>X".parse::<Document>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedXml);
    }

    #[test]
    fn empty_input_is_malformed() {
        let err = "".parse::<Document>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedXml);
    }

    #[test]
    fn duplicate_attribute_is_malformed() {
        match "<item name='a' name='b'/>".parse::<Document>() {
            Err(err) => assert_eq!(err.kind(), ErrorKind::MalformedXml),
            Ok(doc) => panic!("was expecting an error, got {:?}", doc),
        }
    }

    #[test]
    fn load_missing_file() {
        match Document::load("this/path/does/not/exist.xml") {
            Err(Error::FileNotFound(path)) => {
                assert_eq!(path, Path::new("this/path/does/not/exist.xml"))
            }
            other => panic!("was expecting Error::FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn node_rejects_foreign_ids() {
        let doc: Document = "<a><b/></a>".parse().unwrap();

        assert!(doc.node(NodeId::new(1)).is_some());
        assert!(doc.node(NodeId::new(2)).is_none());
    }

    #[test]
    fn root_is_only_matched_by_its_own_name() {
        let doc: Document = "<items><item/></items>".parse().unwrap();

        assert_eq!(doc.get_elements_by_tag_name("items").len(), 1);
        assert_eq!(doc.get_elements_by_tag_name("item").len(), 1);
    }
}
