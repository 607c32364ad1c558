use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A node that is not a well-formed formula, e.g. an atom without a name
    #[error("unrecognized formula: {0}")]
    UnrecognizedFormula(String),
}

pub type Result<T> = std::result::Result<T, Error>;
