// Copyright (c) 2020 lumi <lumi@pew.im>
// Copyright (c) 2020 Emmanuel Gil Peyrot <linkmauve@linkmauve.fr>
// Copyright (c) 2020 Maxime “pep” Buquet <pep@bouah.net>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Provides the `Node` enum, which represents a node in the DOM, and `NodeRef`, a handle to
//! one node of a `Document`.

use crate::document::Document;
use crate::element::{Element, ElementRef};
use crate::error::{Error, Result};

use std::fmt;

/// Position of a node inside its `Document`'s arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> NodeId {
        NodeId(index)
    }

    /// The arena index. Ids are handed out in document order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in an element tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// An `Element`.
    Element(Element),
    /// A text node.
    Text(String),
}

impl Node {
    /// Turns this into a reference to an `Element` if this is an element node.
    /// Else this returns `None`.
    pub fn as_element(&self) -> Option<&Element> {
        match *self {
            Node::Element(ref e) => Some(e),
            Node::Text(_) => None,
        }
    }

    /// Turns this into an `&str` if this is a text node.
    /// Else this returns `None`.
    pub fn as_text(&self) -> Option<&str> {
        match *self {
            Node::Element(_) => None,
            Node::Text(ref s) => Some(s),
        }
    }
}

/// A borrowed handle to any node of a `Document`.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> NodeRef<'a> {
        NodeRef { doc, id }
    }

    /// The arena id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The underlying node.
    pub fn node(&self) -> &'a Node {
        &self.doc.entry(self.id).node
    }

    /// Returns an element handle if this is an element node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = "<root>meow<child/></root>".parse().unwrap();
    /// let mut nodes = doc.root().child_nodes();
    ///
    /// assert!(nodes.next().unwrap().as_element().is_none());
    /// assert_eq!(nodes.next().unwrap().as_element().unwrap().name(), "child");
    /// ```
    pub fn as_element(&self) -> Option<ElementRef<'a>> {
        ElementRef::new(self.doc, self.id)
    }

    /// Returns the character data if this is a text node.
    pub fn as_text(&self) -> Option<&'a str> {
        self.node().as_text()
    }

    /// Whether this is a text node.
    pub fn is_text(&self) -> bool {
        self.as_text().is_some()
    }

    /// Character data of a text node, or `Error::NotTextNode` for an element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::{Document, ErrorKind};
    ///
    /// let doc: Document = "<root>meow<child/></root>".parse().unwrap();
    /// let root = doc.root();
    ///
    /// assert_eq!(root.child_nodes().get(0).unwrap().data().unwrap(), "meow");
    /// let err = root.child_nodes().get(1).unwrap().data().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::NoChildNode);
    /// ```
    pub fn data(&self) -> Result<&'a str> {
        match self.node() {
            Node::Text(s) => Ok(s),
            Node::Element(e) => Err(Error::NotTextNode {
                element: e.name().to_owned(),
            }),
        }
    }

    /// The element containing this node, `None` for the root element.
    pub fn parent(&self) -> Option<ElementRef<'a>> {
        let parent = self.doc.entry(self.id).parent?;
        ElementRef::new(self.doc, parent)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Element(e) => write!(f, "NodeRef({}, <{}>)", self.id.0, e.name()),
            Node::Text(s) => write!(f, "NodeRef({}, {:?})", self.id.0, s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_of_text_is_its_element() {
        let doc: Document = "<root><item name='a'>X</item></root>".parse().unwrap();
        let item = doc.root().children().next().unwrap();
        let text = item.first_child().unwrap();

        assert!(text.is_text());
        assert_eq!(text.parent(), Some(item));
        assert_eq!(item.parent(), Some(doc.root()));
        assert_eq!(doc.root().parent(), None);
    }

    #[test]
    fn ids_follow_document_order() {
        let doc: Document = "<a><b>t</b><c/></a>".parse().unwrap();
        let ids: Vec<usize> = doc
            .root()
            .descendants()
            .map(|node| node.id().index())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
