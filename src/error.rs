use thiserror::Error;

/// Invalid sample input.
///
/// Both conditions share one error kind; callers that need to tell them
/// apart can match on the variant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("sample must contain at least one value")]
    Empty,

    #[error("sample must contain only numeric values, but found {0}")]
    NonNumeric(String),
}
