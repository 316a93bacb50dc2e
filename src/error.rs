//! Error types for html-query.
//!
//! This module defines the error types returned by selection and
//! extraction operations.

/// Error type for selection and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An element-only operation was invoked on a query whose text does
    /// not begin with `<`.
    #[error("operation requires a query holding an element")]
    NotAnElement,

    /// The selector string is malformed.
    #[error("malformed selector: {0}")]
    SelectorFormat(String),

    /// Span resolution started at a position holding no tag at all.
    /// Indicates a broken anchor offset, not bad markup.
    #[error("no tag found at the given position")]
    NoTagFound,

    /// The requested attribute is not present on the element.
    #[error("attribute `{0}` not found")]
    AttributeMissing(String),
}

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, Error>;
