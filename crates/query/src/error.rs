use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// No translation rule produced a criterion. This is an expected outcome
    /// for text the rule set does not cover, not a malformed-value error.
    #[error("unable to parse natural language query")]
    Unparseable,
}
