// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Line-oriented report over a list of `item` elements.

use crate::error::Result;
use crate::items::ItemList;

use std::io::Write;

/// Tag name of the reported elements.
pub const ITEM_TAG: &str = "item";

/// Attribute printed for each item.
pub const NAME_ATTR: &str = "name";

/// Zero-based position of the item reported on its own.
pub const SELECTED_INDEX: usize = 1;

/// Writes the report, one value per line.
///
/// Lines are written as they are produced: when a step fails, the lines of the steps before
/// it have already been emitted.
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Report into `out`.
    pub fn new(out: W) -> Self {
        Reporter { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, value: &str) -> Result<()> {
        writeln!(self.out, "{}", value)?;
        Ok(())
    }

    /// Run every step, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use itemdom::{Document, Reporter};
    ///
    /// let doc: Document = r#"<items><item name="a">X</item><item name="b">Y</item></items>"#
    ///     .parse()
    ///     .unwrap();
    /// let mut reporter = Reporter::new(Vec::new());
    /// reporter.report(&doc.get_elements_by_tag_name("item")).unwrap();
    ///
    /// let out = String::from_utf8(reporter.into_inner()).unwrap();
    /// assert_eq!(out, "2\nb\na\nb\nY\nY\nX\nY\n");
    /// ```
    pub fn report(&mut self, items: &ItemList<'_>) -> Result<()> {
        self.count(items)?;
        self.selected_name(items)?;
        self.all_names(items)?;
        self.selected_data(items)?;
        self.all_data(items)?;
        self.out.flush()?;
        Ok(())
    }

    /// Number of items.
    pub fn count(&mut self, items: &ItemList<'_>) -> Result<()> {
        writeln!(self.out, "{}", items.len())?;
        Ok(())
    }

    /// `name` of the selected item.
    pub fn selected_name(&mut self, items: &ItemList<'_>) -> Result<()> {
        let item = items.get(SELECTED_INDEX)?;
        self.line(item.require_attr(NAME_ATTR)?)
    }

    /// `name` of every item.
    pub fn all_names(&mut self, items: &ItemList<'_>) -> Result<()> {
        for item in items {
            self.line(item.require_attr(NAME_ATTR)?)?;
        }
        Ok(())
    }

    /// First text of the selected item, once through its first child and once through the
    /// head of its child node list.
    pub fn selected_data(&mut self, items: &ItemList<'_>) -> Result<()> {
        let item = items.get(SELECTED_INDEX)?;

        let first_child = item.first_child().ok_or_else(|| item.no_child())?;
        self.line(first_child.data()?)?;

        let head = item.child_nodes().get(0).ok_or_else(|| item.no_child())?;
        self.line(head.data()?)
    }

    /// First text of every item.
    pub fn all_data(&mut self, items: &ItemList<'_>) -> Result<()> {
        for item in items {
            self.line(item.first_text()?)?;
        }
        Ok(())
    }
}
