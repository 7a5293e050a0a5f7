use failure::Fail;

/// The document cannot be checked at all: there is no count to compare.
#[derive(Clone, Debug, Fail, PartialEq)]
pub enum MalformedInputError {
    #[fail(display = "<{}> has no `{}` attribute", root, attribute)]
    MissingAttribute {
        root: String,
        attribute: String,
    },
    #[fail(display = "<{}> attribute `{}` is not a package count: {:?}", root, attribute, value)]
    NotANumber {
        root: String,
        attribute: String,
        value: String,
    },
    #[fail(display = "Empty package tag")]
    EmptyTag,
}
