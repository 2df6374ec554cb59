//! Ingestion entrypoints and the parsing pipeline.
//!
//! Most callers should use [`load_from_path`] (from [`loader`]) which:
//!
//! - reads logical lines via [`line::LineReader`]
//! - splits each into fields via [`fields::split_fields`]
//! - validates every line's field count against the header's
//! - optionally reports success/failure/alerts to a [`LoadObserver`]
//!
//! The pipeline stages are also available individually under:
//! - [`line`]
//! - [`fields`]

pub mod fields;
pub mod line;
pub mod loader;
pub mod observability;

pub use fields::split_fields;
pub use line::LineReader;
pub use loader::{DEFAULT_DELIMITER, LoadOptions, load_from_path, load_from_reader};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats,
    StdErrObserver,
};
