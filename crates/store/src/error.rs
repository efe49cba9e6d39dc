use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record with the same content identity already exists. Because the id
    /// is the content hash, this doubles as value-level deduplication.
    #[error("record already exists for content identity {id}")]
    DuplicateIdentity { id: String },

    /// No record found for the given value.
    #[error("no record found for the given value")]
    NotFound,
}
