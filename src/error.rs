// Copyright (c) 2020 lumi <lumi@pew.im>
// Copyright (c) 2020 Emmanuel Gil Peyrot <linkmauve@linkmauve.fr>
// Copyright (c) 2020 Bastien Orivel <eijebong+minidom@bananium.fr>
// Copyright (c) 2020 Astro <astro@spaceboyz.net>
// Copyright (c) 2020 Maxime “pep” Buquet <pep@bouah.net>
// Copyright (c) 2020 Matt Bilker <me@mbilker.us>
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Provides an error type for this crate.

use std::convert::From;
use std::error::Error as StdError;
use std::io;
use std::path::PathBuf;

/// Our main error type.
#[derive(Debug)]
pub enum Error {
    /// The input file does not exist.
    FileNotFound(PathBuf),

    /// Any other I/O failure, while reading the input or writing the report.
    Io(io::Error),

    /// Error from rxml parsing
    XmlError(rxml::Error),

    /// An error which is returned when the end of the document was reached prematurely.
    EndOfDocument,

    /// An element carries the same attribute name twice.
    DuplicateAttribute(String),

    /// An element follows the closed document element.
    TrailingElement(String),

    /// A collection was indexed past its end.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the collection.
        len: usize,
    },

    /// An element lacks a required attribute.
    MissingAttribute {
        /// Tag name of the element.
        element: String,
        /// Name of the missing attribute.
        attribute: String,
    },

    /// An element has no child node at all.
    NoChildNode {
        /// Tag name of the element.
        element: String,
    },

    /// A node expected to be text turned out to be an element.
    NotTextNode {
        /// Tag name of the element found instead.
        element: String,
    },
}

/// The kind of fault behind an [`Error`], coarser than the variants themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input path does not exist.
    FileNotFound,
    /// The input is not well-formed XML.
    MalformedXml,
    /// An index past the end of the item collection.
    IndexOutOfRange,
    /// An item without the looked-up attribute.
    MissingAttribute,
    /// An item whose first child is absent or not text.
    NoChildNode,
    /// Other I/O failures.
    Io,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FileNotFound(_) => ErrorKind::FileNotFound,
            Error::Io(_) => ErrorKind::Io,
            Error::XmlError(_)
            | Error::EndOfDocument
            | Error::DuplicateAttribute(_)
            | Error::TrailingElement(_) => ErrorKind::MalformedXml,
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::MissingAttribute { .. } => ErrorKind::MissingAttribute,
            Error::NoChildNode { .. } | Error::NotTextNode { .. } => ErrorKind::NoChildNode,
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::XmlError(e) => Some(e),
            Error::FileNotFound(_) => None,
            Error::EndOfDocument => None,
            Error::DuplicateAttribute(_) => None,
            Error::TrailingElement(_) => None,
            Error::IndexOutOfRange { .. } => None,
            Error::MissingAttribute { .. } => None,
            Error::NoChildNode { .. } => None,
            Error::NotTextNode { .. } => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FileNotFound(path) => write!(fmt, "no such file: {}", path.display()),
            Error::Io(e) => write!(fmt, "I/O error: {}", e),
            Error::XmlError(e) => write!(fmt, "XML error: {}", e),
            Error::EndOfDocument => {
                write!(fmt, "the end of the document has been reached prematurely")
            }
            Error::DuplicateAttribute(name) => {
                write!(fmt, "the attribute {:?} is defined twice", name)
            }
            Error::TrailingElement(name) => {
                write!(fmt, "the <{}> element follows the document element", name)
            }
            Error::IndexOutOfRange { index, len } => {
                write!(fmt, "index {} is out of range for {} item(s)", index, len)
            }
            Error::MissingAttribute { element, attribute } => write!(
                fmt,
                "the <{}> element has no {:?} attribute",
                element, attribute
            ),
            Error::NoChildNode { element } => {
                write!(fmt, "the <{}> element has no child node", element)
            }
            Error::NotTextNode { element } => write!(
                fmt,
                "expected a text node, found the <{}> element",
                element
            ),
        }
    }
}

impl From<rxml::Error> for Error {
    fn from(err: rxml::Error) -> Error {
        Error::XmlError(err)
    }
}

impl From<rxml::error::XmlError> for Error {
    fn from(err: rxml::error::XmlError) -> Error {
        Error::XmlError(err.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

/// Our simplified Result type.
pub type Result<T> = ::std::result::Result<T, Error>;
