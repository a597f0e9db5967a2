//! Error types for the bidi display path.

use thiserror::Error;

/// Result type for bidi operations that can fail.
pub type Result<T> = std::result::Result<T, BidiError>;

/// Errors surfaced by the encoding-aware entry points.
///
/// The reordering algorithm itself never fails; these only come from
/// turning input into Unicode scalar values and back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BidiError {
    /// The encoding label is not one we recognise.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Input bytes are malformed for the named encoding.
    #[error("input is not valid {encoding}")]
    Decode { encoding: String },

    /// Reordered text contains characters the encoding cannot represent.
    #[error("output cannot be represented in {encoding}")]
    Encode { encoding: String },

    /// A UTF-16 code unit that is not part of a surrogate pair.
    #[error("unpaired surrogate at code unit {index}")]
    UnpairedSurrogate { index: usize },

    /// A base direction string other than L or R.
    #[error("invalid base direction: {0:?} (expected L or R)")]
    InvalidDirection(String),
}
