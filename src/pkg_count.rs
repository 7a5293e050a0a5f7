use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::document::{Depth, Document};
use crate::errors::MalformedInputError;

/// Which of the three counts disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mismatch {
    /// The `packages` attribute lies about the records the document holds.
    Inconsistent,
    /// The document agrees with itself, but not with the caller.
    Unexpected,
    /// All three counts differ.
    Both,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub found: u64,
    pub declared: u64,
    pub expected: u64,
}

impl Verdict {
    pub fn matches(&self) -> bool {
        self.mismatch().is_none()
    }

    pub fn mismatch(&self) -> Option<Mismatch> {
        if self.declared == self.found {
            if self.found == self.expected {
                None
            } else {
                Some(Mismatch::Unexpected)
            }
        } else if self.expected == self.found || self.expected == self.declared {
            Some(Mismatch::Inconsistent)
        } else {
            Some(Mismatch::Both)
        }
    }

    pub fn description(&self) -> Option<String> {
        if self.matches() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{} packages found, `packages` attribute value is {}, expected {} package count",
            self.found, self.declared, self.expected)
    }
}

/// Checks that a document declares, and holds, the expected number of packages.
#[derive(Clone, Debug)]
pub struct PkgCount {
    expected: u64,
    tag: String,
    depth: Depth,
    attribute: String,
}

impl PkgCount {
    pub fn new(expected: u64, tag: &str) -> Self {
        PkgCount {
            expected,
            tag: tag.to_owned(),
            depth: Depth::default(),
            attribute: "packages".to_owned(),
        }
    }

    pub fn depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn attribute(mut self, attribute: &str) -> Self {
        self.attribute = attribute.to_owned();
        self
    }

    fn declared(&self, doc: &Document) -> Result<u64, MalformedInputError> {
        let root = doc.root.name.to_string();
        let value = doc.root.attribute(&self.attribute)
            .ok_or_else(|| MalformedInputError::MissingAttribute {
                root: root.clone(),
                attribute: self.attribute.clone(),
            })?;
        let digits = value.trim();
        let not_a_number = || MalformedInputError::NotANumber {
            root: root.clone(),
            attribute: self.attribute.clone(),
            value: value.to_owned(),
        };
        // u64::from_str would also take a leading `+`
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_a_number());
        }
        digits.parse::<u64>().map_err(|_| not_a_number())
    }

    pub fn verify(&self, doc: &Document) -> Result<Verdict, MalformedInputError> {
        if self.tag.is_empty() {
            return Err(MalformedInputError::EmptyTag);
        }
        let declared = self.declared(doc)?;
        let found = doc.count(&self.tag, self.depth);
        debug!("<{}>: {} <{}> elements found ({:?}), {}={}, expected {}",
               doc.root.name, found, self.tag, self.depth, self.attribute, declared,
               self.expected);
        Ok(Verdict {
            found,
            declared,
            expected: self.expected,
        })
    }
}

pub fn verify(doc: &Document, tag: &str, expected: u64) -> Result<Verdict, MalformedInputError> {
    PkgCount::new(expected, tag).verify(doc)
}
