use std::fmt::{self, Display, Formatter};
use std::io::Read;

use failure::{bail, Error, format_err, ResultExt};
use xml::name::OwnedName;
use xml::reader::{EventReader, XmlEvent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Name {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub local: String,
}

impl Name {
    /// `package` matches any prefix, `rpm:entry` only the `rpm` one.
    pub fn matches(&self, selector: &str) -> bool {
        let mut parts = selector.splitn(2, ':');
        match (parts.next(), parts.next()) {
            (Some(prefix), Some(local)) =>
                self.prefix.as_ref().map(String::as_str) == Some(prefix) && self.local == local,
            _ => self.local == selector,
        }
    }
}

impl From<OwnedName> for Name {
    fn from(name: OwnedName) -> Self {
        Name {
            namespace: name.namespace,
            prefix: name.prefix,
            local: name.local_name,
        }
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: Name,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: Name,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: Name) -> Self {
        Element {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Looks up an unprefixed attribute.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.prefix.is_none() && a.name.local == local)
            .map(|a| a.value.as_str())
    }
}

/// How far below the root package records are looked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Depth {
    Children,
    Descendants,
}

impl Default for Depth {
    fn default() -> Self {
        Depth::Descendants
    }
}

impl std::str::FromStr for Depth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "children" => Ok(Depth::Children),
            "descendants" => Ok(Depth::Descendants),
            _ => Err(format_err!("Unsupported depth: {}", s)),
        }
    }
}

/// Repodata is a few levels deep; anything past this is rejected.
pub const MAX_DEPTH: usize = 256;

/// Parsed metadata document. Only elements and attributes are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn parse<R: Read>(r: R) -> Result<Document, Error> {
        let mut stack: Vec<Element> = Vec::new();
        for event in EventReader::new(r) {
            match event.context("Malformed XML document")? {
                XmlEvent::StartElement { name, attributes, .. } => {
                    let mut element = Element::new(name.into());
                    element.attributes = attributes
                        .into_iter()
                        .map(|a| Attribute { name: a.name.into(), value: a.value })
                        .collect();
                    if stack.len() >= MAX_DEPTH {
                        bail!("XML document nests deeper than {} elements", MAX_DEPTH);
                    }
                    stack.push(element);
                }
                XmlEvent::EndElement { .. } => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| format_err!("Unbalanced XML document"))?;
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(element),
                        None => return Ok(Document { root: element }),
                    }
                }
                _ => {}
            }
        }
        Err(format_err!("XML document has no root element"))
    }

    /// Counts elements below the root matching `selector`.
    pub fn count(&self, selector: &str, depth: Depth) -> u64 {
        match depth {
            Depth::Children => self.root.children
                .iter()
                .filter(|e| e.name.matches(selector))
                .count() as u64,
            Depth::Descendants => {
                let mut n = 0;
                let mut pending: Vec<&Element> = self.root.children.iter().collect();
                while let Some(element) = pending.pop() {
                    if element.name.matches(selector) {
                        n += 1;
                    }
                    pending.extend(element.children.iter());
                }
                n
            }
        }
    }
}
