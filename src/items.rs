// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ordered collections of elements sharing a tag name.

use crate::element::ElementRef;
use crate::error::{Error, Result};

use std::slice;

/// Elements gathered by `get_elements_by_tag_name`, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemList<'a> {
    items: Vec<ElementRef<'a>>,
}

impl<'a> ItemList<'a> {
    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no element matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at zero-based `index`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::{Document, Error};
    ///
    /// let doc: Document = r#"<items><item name="a"/></items>"#.parse().unwrap();
    /// let items = doc.get_elements_by_tag_name("item");
    ///
    /// assert_eq!(items.get(0).unwrap().attr("name"), Some("a"));
    /// assert!(matches!(items.get(1), Err(Error::IndexOutOfRange { index: 1, len: 1 })));
    /// ```
    pub fn get(&self, index: usize) -> Result<ElementRef<'a>> {
        self.items
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            iter: self.items.iter(),
        }
    }
}

impl<'a> FromIterator<ElementRef<'a>> for ItemList<'a> {
    fn from_iter<I: IntoIterator<Item = ElementRef<'a>>>(iter: I) -> Self {
        ItemList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'l, 'a> IntoIterator for &'l ItemList<'a> {
    type Item = ElementRef<'a>;
    type IntoIter = Iter<'l, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the elements of an `ItemList`.
pub struct Iter<'l, 'a> {
    iter: slice::Iter<'l, ElementRef<'a>>,
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = ElementRef<'a>;

    fn next(&mut self) -> Option<ElementRef<'a>> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}
