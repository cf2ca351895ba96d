// Copyright (c) 2020 lumi <lumi@pew.im>
// Copyright (c) 2020 Emmanuel Gil Peyrot <linkmauve@linkmauve.fr>
// Copyright (c) 2020 Bastien Orivel <eijebong+minidom@bananium.fr>
// Copyright (c) 2020 Maxime “pep” Buquet <pep@bouah.net>
// Copyright (c) 2020 Yue Liu <amznyue@amazon.com>
// Copyright (c) 2020 Matt Bilker <me@mbilker.us>
// Copyright (c) 2020 Xidorn Quan <me@upsuper.org>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Provides an `Element` type, which holds the payload of a DOM element, and `ElementRef`, a
//! handle used to navigate from one element to its relatives.

use crate::document::Document;
use crate::error::{Error, Result};
use crate::items::ItemList;
use crate::node::{Node, NodeId, NodeRef};

use std::collections::{btree_map, BTreeMap};
use std::fmt;
use std::slice;

#[derive(Clone, PartialEq, Eq, Debug)]
/// A struct representing a DOM Element.
pub struct Element {
    name: String,
    attributes: BTreeMap<String, String>,
    children: Vec<NodeId>,
}

impl Element {
    pub(crate) fn new(name: String, attributes: BTreeMap<String, String>) -> Element {
        Element {
            name,
            attributes,
            children: Vec::new(),
        }
    }

    /// Returns a reference to the qualified name of this element, prefix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a reference to the value of the given attribute, if it exists, else `None`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns an iterator over the attributes of this element.
    pub fn attrs(&self) -> Attrs {
        Attrs {
            iter: self.attributes.iter(),
        }
    }

    /// Ids of the child nodes, in document order.
    pub fn child_ids(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, id: NodeId) {
        self.children.push(id);
    }
}

/// A borrowed handle to an element of a `Document`.
#[derive(Clone, Copy)]
pub struct ElementRef<'a> {
    doc: &'a Document,
    id: NodeId,
    element: &'a Element,
}

impl<'a> ElementRef<'a> {
    /// `None` when `id` is a text node.
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Option<ElementRef<'a>> {
        match doc.entry(id).node {
            Node::Element(ref element) => Some(ElementRef { doc, id, element }),
            Node::Text(_) => None,
        }
    }

    /// The arena id of this element.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The element payload.
    pub fn element(&self) -> &'a Element {
        self.element
    }

    /// This element seen as a plain node.
    pub fn as_node(&self) -> NodeRef<'a> {
        NodeRef::new(self.doc, self.id)
    }

    /// Returns the qualified name of this element.
    pub fn name(&self) -> &'a str {
        self.element.name()
    }

    /// Returns the value of the given attribute, if it exists, else `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = r#"<item name="a"/>"#.parse().unwrap();
    ///
    /// assert_eq!(doc.root().attr("name"), Some("a"));
    /// assert_eq!(doc.root().attr("inexistent"), None);
    /// ```
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.attr(name)
    }

    /// Like `attr()`, failing with `Error::MissingAttribute` when the attribute is absent.
    pub fn require_attr(&self, name: &str) -> Result<&'a str> {
        self.attr(name).ok_or_else(|| Error::MissingAttribute {
            element: self.name().to_owned(),
            attribute: name.to_owned(),
        })
    }

    /// Returns an iterator over the attributes of this element.
    ///
    /// # Example
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = "<elem a=\"b\" />".parse().unwrap();
    ///
    /// let mut iter = doc.root().attrs();
    ///
    /// assert_eq!(iter.next().unwrap(), ("a", "b"));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn attrs(&self) -> Attrs<'a> {
        self.element.attrs()
    }

    /// The element containing this one, `None` for the root element.
    pub fn parent(&self) -> Option<ElementRef<'a>> {
        self.as_node().parent()
    }

    /// The first child node, whatever its kind.
    pub fn first_child(&self) -> Option<NodeRef<'a>> {
        self.element
            .children
            .first()
            .map(|&id| NodeRef::new(self.doc, id))
    }

    /// Returns an iterator over every child node of this element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = "<root>a<c1 />b<c2 />c</root>".parse().unwrap();
    ///
    /// let mut iter = doc.root().child_nodes();
    ///
    /// assert_eq!(iter.len(), 5);
    /// assert_eq!(iter.next().unwrap().as_text().unwrap(), "a");
    /// assert_eq!(iter.next().unwrap().as_element().unwrap().name(), "c1");
    /// assert_eq!(iter.next().unwrap().as_text().unwrap(), "b");
    /// assert_eq!(iter.next().unwrap().as_element().unwrap().name(), "c2");
    /// assert_eq!(iter.next().unwrap().as_text().unwrap(), "c");
    /// assert!(iter.next().is_none());
    /// ```
    #[inline]
    pub fn child_nodes(&self) -> ChildNodes<'a> {
        ChildNodes {
            doc: self.doc,
            iter: self.element.children.iter(),
        }
    }

    /// Returns an iterator over every child element of this element.
    #[inline]
    pub fn children(&self) -> Children<'a> {
        Children {
            inner: self.child_nodes(),
        }
    }

    /// Returns an iterator over every direct text node of this element.
    #[inline]
    pub fn texts(&self) -> Texts<'a> {
        Texts {
            inner: self.child_nodes(),
        }
    }

    /// Returns the concatenation of all direct text nodes in the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = "<node>hello,<split /> world!</node>".parse().unwrap();
    ///
    /// assert_eq!(doc.root().text(), "hello, world!");
    /// ```
    pub fn text(&self) -> String {
        self.texts().fold(String::new(), |ret, new| ret + new)
    }

    /// Character data of the first child node.
    ///
    /// Fails with `Error::NoChildNode` for an empty element and `Error::NotTextNode` when the
    /// first child is an element.
    pub fn first_text(&self) -> Result<&'a str> {
        self.first_child().ok_or_else(|| self.no_child())?.data()
    }

    pub(crate) fn no_child(&self) -> Error {
        Error::NoChildNode {
            element: self.name().to_owned(),
        }
    }

    /// Every node below this one, in document order.
    pub fn descendants(&self) -> Descendants<'a> {
        Descendants {
            doc: self.doc,
            stack: self.element.children.iter().rev().copied().collect(),
        }
    }

    /// Every element below this one named `tag`, in document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::Document;
    ///
    /// let doc: Document = "<a><b/><c><b/></c></a>".parse().unwrap();
    /// let c = doc.root().children().nth(1).unwrap();
    ///
    /// assert_eq!(doc.root().get_elements_by_tag_name("b").len(), 2);
    /// assert_eq!(c.get_elements_by_tag_name("b").len(), 1);
    /// assert!(c.get_elements_by_tag_name("c").is_empty());
    /// ```
    pub fn get_elements_by_tag_name(&self, tag: &str) -> ItemList<'a> {
        self.descendants()
            .filter_map(|node| node.as_element())
            .filter(|element| element.name() == tag)
            .collect()
    }
}

impl PartialEq for ElementRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for ElementRef<'_> {}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("id", &self.id.index())
            .field("name", &self.name())
            .field("attributes", &self.element.attributes)
            .finish()
    }
}

/// An iterator over all child nodes of an element.
pub struct ChildNodes<'a> {
    doc: &'a Document,
    iter: slice::Iter<'a, NodeId>,
}

impl<'a> ChildNodes<'a> {
    /// The not yet visited child at position `index`.
    pub fn get(&self, index: usize) -> Option<NodeRef<'a>> {
        self.iter
            .as_slice()
            .get(index)
            .map(|&id| NodeRef::new(self.doc, id))
    }
}

impl<'a> Iterator for ChildNodes<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        self.iter.next().map(|&id| NodeRef::new(self.doc, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl DoubleEndedIterator for ChildNodes<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|&id| NodeRef::new(self.doc, id))
    }
}

impl ExactSizeIterator for ChildNodes<'_> {}

/// An iterator over child elements of an element.
pub struct Children<'a> {
    inner: ChildNodes<'a>,
}

impl<'a> Iterator for Children<'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<ElementRef<'a>> {
        self.inner.by_ref().find_map(|node| node.as_element())
    }
}

/// An iterator over child text nodes of an element.
pub struct Texts<'a> {
    inner: ChildNodes<'a>,
}

impl<'a> Iterator for Texts<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.by_ref().find_map(|node| node.as_text())
    }
}

/// A pre-order walk over the nodes below an element.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let id = self.stack.pop()?;
        if let Node::Element(ref element) = self.doc.entry(id).node {
            self.stack.extend(element.children.iter().rev().copied());
        }
        Some(NodeRef::new(self.doc, id))
    }
}

/// An iterator over the attributes of an `Element`.
pub struct Attrs<'a> {
    iter: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Attrs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(x, y)| (x.as_ref(), y.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_new() {
        let elem = Element::new(
            "name".to_owned(),
            BTreeMap::from_iter(vec![("name".to_string(), "value".to_string())]),
        );

        assert_eq!(elem.name(), "name");
        assert_eq!(elem.attr("name"), Some("value"));
        assert_eq!(elem.attr("inexistent"), None);
        assert!(elem.child_ids().is_empty());
    }

    #[test]
    fn first_child_matches_child_nodes_head() {
        let doc: Document = "<item name='b'>Y<sub/></item>".parse().unwrap();
        let item = doc.root();

        assert_eq!(item.first_child(), item.child_nodes().get(0));
        assert_eq!(item.first_child().unwrap().data().unwrap(), "Y");
        assert_eq!(item.first_text().unwrap(), "Y");
    }

    #[test]
    fn first_text_of_empty_element() {
        let doc: Document = "<item name='x'/>".parse().unwrap();

        match doc.root().first_text() {
            Err(Error::NoChildNode { element }) => assert_eq!(element, "item"),
            other => panic!("was expecting Error::NoChildNode, got {:?}", other),
        }
    }

    #[test]
    fn first_text_of_element_child() {
        let doc: Document = "<item name='x'><sub>Y</sub></item>".parse().unwrap();

        match doc.root().first_text() {
            Err(Error::NotTextNode { element }) => assert_eq!(element, "sub"),
            other => panic!("was expecting Error::NotTextNode, got {:?}", other),
        }
    }

    #[test]
    fn require_attr_reports_element_and_name() {
        let doc: Document = "<item id='1'/>".parse().unwrap();

        match doc.root().require_attr("name") {
            Err(Error::MissingAttribute { element, attribute }) => {
                assert_eq!(element, "item");
                assert_eq!(attribute, "name");
            }
            other => panic!("was expecting Error::MissingAttribute, got {:?}", other),
        }
        assert_eq!(doc.root().require_attr("id").unwrap(), "1");
    }

    #[test]
    fn child_nodes_get_is_relative_to_iteration() {
        let doc: Document = "<root>a<b/>c</root>".parse().unwrap();
        let mut nodes = doc.root().child_nodes();

        assert_eq!(nodes.get(2).unwrap().as_text(), Some("c"));
        nodes.next();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes.get(0).unwrap().as_element().unwrap().name(), "b");
        assert!(nodes.get(2).is_none());
    }

    #[test]
    fn descendants_are_pre_order() {
        let doc: Document = "<a><b><c/>t</b><d/></a>".parse().unwrap();
        let names: Vec<String> = doc
            .root()
            .descendants()
            .map(|node| match node.as_element() {
                Some(element) => element.name().to_owned(),
                None => format!("#{}", node.as_text().unwrap()),
            })
            .collect();

        assert_eq!(names, vec!["b", "c", "#t", "d"]);
    }
}
