pub mod batch;
pub mod clap;
pub mod decoders;
pub mod document;
pub mod errors;
pub mod pkg_count;
pub mod xml_package;
