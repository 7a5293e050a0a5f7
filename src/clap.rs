use std::env;

use clap::{Arg, ArgMatches};
use failure::{Error, ResultExt};

use crate::document::Depth;

pub fn depth_arg() -> Arg<'static, 'static> {
    Arg::with_name("DEPTH")
        .long("depth")
        .takes_value(true)
        .possible_values(&["children", "descendants"])
}

pub fn depth_value(matches: &ArgMatches) -> Result<Depth, Error> {
    match matches
        .value_of("DEPTH")
        .map(std::borrow::ToOwned::to_owned)
        .or_else(|| { env::var("PKG_COUNT_DEPTH").ok() }) {
        Some(depth) => Ok(depth.parse::<Depth>()
            .context("Malformed --depth/PKG_COUNT_DEPTH value")?),
        None => Ok(Depth::default()),
    }
}

pub fn attribute_arg() -> Arg<'static, 'static> {
    Arg::with_name("ATTRIBUTE")
        .long("attribute")
        .takes_value(true)
}

pub fn attribute_value(matches: &ArgMatches) -> String {
    matches
        .value_of("ATTRIBUTE")
        .map(std::borrow::ToOwned::to_owned)
        .or_else(|| { env::var("PKG_COUNT_ATTRIBUTE").ok() })
        .unwrap_or_else(|| "packages".to_owned())
}
