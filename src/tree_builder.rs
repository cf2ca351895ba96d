// Copyright (c) 2022 Astro <astro@spaceboyz.net>

//! SAX events to DOM arena conversion

use crate::document::{Document, Entry};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::node::{Node, NodeId};
use rxml::RawEvent;
use std::collections::btree_map::Entry as AttrEntry;
use std::collections::BTreeMap;

/// Tree-building parser state
pub struct TreeBuilder {
    next_tag: Option<(String, BTreeMap<String, String>)>,
    /// Node arena, in document order
    nodes: Vec<Entry>,
    /// Open elements
    stack: Vec<NodeId>,
    /// Document root element if finished
    root: Option<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create a new one
    pub fn new() -> Self {
        TreeBuilder {
            next_tag: None,
            nodes: vec![],
            stack: vec![],
            root: None,
        }
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the root element has been closed
    pub fn is_finished(&self) -> bool {
        self.root.is_some()
    }

    /// Append a node below the top-most open element
    fn push(&mut self, node: Node) -> NodeId {
        let parent = self.stack.last().copied();
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Entry { parent, node });
        if let Some(parent) = parent {
            if let Node::Element(ref mut el) = self.nodes[parent.index()].node {
                el.push_child(id);
            }
        }
        id
    }

    fn process_end_tag(&mut self) {
        if let Some(id) = self.stack.pop() {
            if self.stack.is_empty() {
                self.root = Some(id);
            }
        }
    }

    fn process_text(&mut self, text: &str) {
        let Some(&top) = self.stack.last() else {
            return;
        };
        let last = match self.nodes[top.index()].node {
            Node::Element(ref el) => el.child_ids().last().copied(),
            Node::Text(_) => None,
        };
        if let Some(last) = last {
            if let Node::Text(ref mut data) = self.nodes[last.index()].node {
                data.push_str(text);
                return;
            }
        }
        self.push(Node::Text(text.to_owned()));
    }

    /// Process a Event that you got out of a RawParser
    pub fn process_event(&mut self, event: RawEvent) -> Result<()> {
        match event {
            RawEvent::XmlDeclaration(_, _) => {}

            RawEvent::ElementHeadOpen(_, (prefix, name)) => {
                let name = match prefix {
                    Some(prefix) => format!("{}:{}", prefix, name),
                    None => name.as_str().to_owned(),
                };
                self.next_tag = Some((name, BTreeMap::new()));
            }

            RawEvent::Attribute(_, (prefix, name), value) => {
                if let Some((_, ref mut attrs)) = self.next_tag.as_mut() {
                    let name = match prefix {
                        Some(prefix) => format!("{}:{}", prefix, name),
                        None => name.as_str().to_owned(),
                    };
                    match attrs.entry(name) {
                        AttrEntry::Occupied(entry) => {
                            return Err(Error::DuplicateAttribute(entry.key().clone()));
                        }
                        AttrEntry::Vacant(entry) => {
                            entry.insert(value.as_str().to_owned());
                        }
                    }
                }
            }

            RawEvent::ElementHeadClose(_) => {
                if let Some((name, attrs)) = self.next_tag.take() {
                    if self.root.is_some() {
                        return Err(Error::TrailingElement(name));
                    }
                    let id = self.push(Node::Element(Element::new(name, attrs)));
                    self.stack.push(id);
                }
            }

            RawEvent::ElementFoot(_) => self.process_end_tag(),

            RawEvent::Text(_, text) => self.process_text(text.as_str()),
        }

        Ok(())
    }

    /// Hand the finished tree over as a `Document`
    pub fn into_document(self) -> Result<Document> {
        match self.root {
            Some(root) => Ok(Document::from_parts(self.nodes, root)),
            None => Err(Error::EndOfDocument),
        }
    }
}
