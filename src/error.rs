use thiserror::Error;

/// Convenience result type for fallible query entry points.
pub type QueryResult<T> = Result<T, QueryError>;

/// Error type returned by configurable query entry points.
///
/// The queries themselves never fail; only the knobs that parameterise them can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A [`crate::queries::QueryOptions`] (or one of its parts) holds a value the queries cannot use.
    #[error("invalid query options: {message}")]
    InvalidOptions { message: String },
}

impl QueryError {
    pub(crate) fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }
}
