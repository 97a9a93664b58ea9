use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by consignment creation.
#[derive(Debug, Error)]
pub enum Error {
    /// The vessel lookup errored or returned no candidate.
    #[error("vessel allocation failed: {0}")]
    AllocationFailed(#[source] BoxError),
    /// The record is missing a vessel assignment.
    #[error("consignment has no vessel assigned")]
    InvalidRecord,
    /// The store could not append the record.
    #[error("store failed: {0}")]
    StoreFailed(String),
}
