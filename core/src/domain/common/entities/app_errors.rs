use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The model output handed to a reconciler is not a JSON object.
    #[error("Malformed analysis input: {0}")]
    MalformedInput(String),

    #[error("Model response is not valid JSON: {0}")]
    UnparseableResponse(String),

    #[error("Invalid conflict rule table: {0}")]
    InvalidRuleTable(String),
}
