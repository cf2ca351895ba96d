// Copyright (c) 2020 lumi <lumi@pew.im>
// Copyright (c) 2020 Emmanuel Gil Peyrot <linkmauve@linkmauve.fr>
// Copyright (c) 2020 Bastien Orivel <eijebong+minidom@bananium.fr>
// Copyright (c) 2020 Astro <astro@spaceboyz.net>
// Copyright (c) 2020 Maxime “pep” Buquet <pep@bouah.net>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#![deny(missing_docs)]

//! A minimal arena DOM built on top of rxml, and the report printed by the `itemdom` binary.
//!
//! This library exports a `Document` struct which owns a parsed DOM tree, and `ElementRef` /
//! `NodeRef` handles to walk it.
//!
//! # Example
//!
//! ```rust
//! use itemdom::Document;
//!
//! const DATA: &'static str = r#"<data>
//!     <items>
//!         <item name="item1">item1abc</item>
//!         <item name="item2">item2abc</item>
//!     </items>
//! </data>"#;
//!
//! let doc: Document = DATA.parse().unwrap();
//! let items = doc.get_elements_by_tag_name("item");
//!
//! assert_eq!(items.len(), 2);
//! assert_eq!(items.get(1).unwrap().attr("name"), Some("item2"));
//!
//! let data: Vec<&str> = items
//!     .iter()
//!     .map(|item| item.first_text().unwrap())
//!     .collect();
//! assert_eq!(data, vec!["item1abc", "item2abc"]);
//! ```

pub mod document;
pub mod element;
pub mod error;
pub mod items;
pub mod node;
pub mod report;
pub mod tree_builder;


pub use document::Document;
pub use element::{ChildNodes, Children, Element, ElementRef};
pub use error::{Error, ErrorKind, Result};
pub use items::ItemList;
pub use node::{Node, NodeId, NodeRef};
pub use report::Reporter;

use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

/// Load `path`, collect its `item` elements and write the report to `out`.
#[instrument(skip(out))]
pub fn run<W: Write>(path: &Path, out: W) -> Result<()> {
    let document = Document::load(path)?;
    let items = document.get_elements_by_tag_name(report::ITEM_TAG);
    debug!(count = items.len(), "reporting");
    Reporter::new(out).report(&items)
}
