use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use failure::{Error, format_err};

use crate::document::Document;

/// Kinds of package listings found under `repodata/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XmlPackage {
    Primary,
    Other,
    Filelists,
}

impl XmlPackage {
    pub const ALL: [XmlPackage; 3] = [XmlPackage::Primary, XmlPackage::Other, XmlPackage::Filelists];

    pub fn name(self) -> &'static str {
        match self {
            XmlPackage::Primary => "primary",
            XmlPackage::Other => "other",
            XmlPackage::Filelists => "filelists",
        }
    }

    pub fn root(self) -> &'static str {
        match self {
            XmlPackage::Primary => "metadata",
            XmlPackage::Other => "otherdata",
            XmlPackage::Filelists => "filelists",
        }
    }

    pub fn namespace(self) -> &'static str {
        match self {
            XmlPackage::Primary => "http://linux.duke.edu/metadata/common",
            XmlPackage::Other => "http://linux.duke.edu/metadata/other",
            XmlPackage::Filelists => "http://linux.duke.edu/metadata/filelists",
        }
    }

    /// Tag of a single package record.
    pub fn tag(self) -> &'static str {
        "package"
    }

    /// Identifies a listing by its root element and namespace.
    pub fn detect(doc: &Document) -> Option<XmlPackage> {
        let name = &doc.root.name;
        XmlPackage::ALL
            .iter()
            .cloned()
            .find(|kind| name.local == kind.root()
                && name.namespace.as_ref().map(String::as_str) == Some(kind.namespace()))
    }
}

impl FromStr for XmlPackage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        XmlPackage::ALL
            .iter()
            .cloned()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format_err!("Unsupported metadata kind: {}", s))
    }
}

impl Display for XmlPackage {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
