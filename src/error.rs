use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the loader.
///
/// Loading is all-or-nothing: any of these discards the partially built
/// document. Lookup misses on a loaded [`crate::types::CsvDocument`] are
/// expressed as `None`, never as a `LoadError`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The caller supplied an argument the engine cannot work with
    /// (e.g. a delimiter the tokenizer could never produce).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The input has no header line: zero bytes, or nothing but line
    /// terminators. An empty file is not modeled as zero columns.
    #[error("malformed csv: empty file")]
    EmptyFile,

    /// A data line's field count differs from the header's.
    ///
    /// `line` is 1-based, counting the header as line 1.
    #[error("malformed csv: line {line} has {found} fields, expected {expected}")]
    RowCountMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
}
