use std::path::{Path, PathBuf};

use failure::{Error, ResultExt};
use log::{info, warn};

use crate::decoders::Decoder;
use crate::document::{Depth, Document};
use crate::pkg_count::{Mismatch, PkgCount, Verdict};
use crate::xml_package::XmlPackage;

/// Settings shared by every file of a batch.
#[derive(Clone, Debug)]
pub struct Check {
    pub expected: u64,
    pub kind: Option<XmlPackage>,
    pub tag: Option<String>,
    pub depth: Depth,
    pub attribute: String,
}

impl Check {
    pub fn new(expected: u64) -> Self {
        Check {
            expected,
            kind: None,
            tag: None,
            depth: Depth::default(),
            attribute: "packages".to_owned(),
        }
    }

    /// Without an explicit tag the kind's record tag is used, detected if need be.
    pub fn check_file(&self, path: &Path) -> Result<(Option<XmlPackage>, Verdict), Error> {
        let decoder = <dyn Decoder>::from_href(path);
        info!("Checking {:?}...", decoder.path());
        let doc = Document::parse(decoder.open()?)
            .with_context(|_| format!("Failed to parse {:?}", path))?;
        let kind = self.kind.or_else(|| XmlPackage::detect(&doc));
        let tag = self.tag
            .as_ref()
            .map(String::as_str)
            .or_else(|| kind.map(XmlPackage::tag))
            .unwrap_or("package");
        let verdict = PkgCount::new(self.expected, tag)
            .depth(self.depth)
            .attribute(&self.attribute)
            .verify(&doc)
            .with_context(|_| format!("Cannot check {:?}", path))?;
        Ok((kind, verdict))
    }

    /// Checks every file; a broken file does not stop the rest.
    pub fn run<'a, I>(&self, files: I) -> Vec<Outcome> where
        I: IntoIterator<Item=&'a Path>,
    {
        files.into_iter().map(|path| {
            let (kind, result) = match self.check_file(path) {
                Ok((kind, verdict)) => {
                    if let Some(description) = verdict.description() {
                        warn!("{}: {}", path.to_string_lossy(), description);
                    }
                    (kind, Ok(verdict))
                }
                Err(e) => {
                    warn!("{}", e);
                    (None, Err(e))
                }
            };
            Outcome {
                file: path.to_owned(),
                kind,
                result,
            }
        }).collect()
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub file: PathBuf,
    pub kind: Option<XmlPackage>,
    pub result: Result<Verdict, Error>,
}

impl Outcome {
    pub fn failed(&self) -> bool {
        match &self.result {
            Ok(verdict) => !verdict.matches(),
            Err(_) => true,
        }
    }

    pub fn status(&self) -> &'static str {
        match &self.result {
            Ok(verdict) => status(verdict),
            Err(_) => "malformed",
        }
    }
}

pub fn status(verdict: &Verdict) -> &'static str {
    match verdict.mismatch() {
        None => "ok",
        Some(Mismatch::Inconsistent) => "inconsistent",
        Some(Mismatch::Unexpected) => "unexpected",
        Some(Mismatch::Both) => "inconsistent, unexpected",
    }
}
