use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use failure::{Error, ResultExt};

pub trait Decoder {
    /// Name of the file once decoded, e.g. `primary.xml` for `primary.xml.xz`.
    fn path(&self) -> &Path;
    fn open(&self) -> Result<Box<dyn Read>, Error>;
}

impl dyn Decoder {
    pub fn from_href(href: &Path) -> Box<dyn Decoder + Send> {
        match href.extension() {
            Some(ext) if ext == "xz" => Box::new(XzDecoder {
                href: href.to_owned(),
                path: href.with_extension(""),
            }),
            _ => Box::new(PlainDecoder { path: href.to_owned() }),
        }
    }
}

fn open_file(path: &Path) -> Result<BufReader<File>, Error> {
    let file = File::open(path)
        .with_context(|_| format!("File::open({:?}) failed", path))?;
    Ok(BufReader::new(file))
}

struct PlainDecoder {
    path: PathBuf,
}

impl Decoder for PlainDecoder {
    fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Box<dyn Read>, Error> {
        Ok(Box::new(open_file(&self.path)?))
    }
}

struct XzDecoder {
    href: PathBuf,
    path: PathBuf,
}

impl Decoder for XzDecoder {
    fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<Box<dyn Read>, Error> {
        Ok(Box::new(xz2::read::XzDecoder::new(open_file(&self.href)?)))
    }
}
