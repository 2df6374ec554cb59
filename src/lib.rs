//! `csv-ingest` is a small library for ingesting delimited text files into an
//! in-memory [`types::CsvDocument`], with strict structural validation: every
//! data line must have the same field count as the header, or the whole load
//! fails.
//!
//! The primary entrypoint is [`ingestion::load_from_path`]; use
//! [`ingestion::load_from_reader`] to load from any byte stream.
//!
//! ## The parsing pipeline
//!
//! - [`ingestion::line::LineReader`] reads one logical line at a time,
//!   normalizing `\n`/`\r`/`\r\n` terminators and honoring backspace bytes as
//!   a delete-previous-character edit.
//! - [`ingestion::fields::split_fields`] splits a line on a single-character
//!   delimiter. Zero-length fields are dropped, not kept: `"a,,b"` splits to
//!   `["a", "b"]`, which feeds directly into the field-count validation.
//! - [`ingestion::loader`] orchestrates the two across the whole input. The
//!   first logical line establishes the column names and the required field
//!   count; the first line violating it fails the load with its 1-based line
//!   number, and no partially built document is ever exposed.
//!
//! Values are not typed or inferred; every cell is text. Quoting and
//! delimiter escaping are not supported.
//!
//! ## Quick example
//!
//! ```
//! use csv_ingest::ingestion::{load_from_reader, LoadOptions};
//!
//! # fn main() -> Result<(), csv_ingest::LoadError> {
//! let mut input = "id,name\n1,alice\n2,bob\n".as_bytes();
//! let doc = load_from_reader(&mut input, &LoadOptions::default())?;
//!
//! assert_eq!(doc.row_count(), 2);
//! assert_eq!(doc.value_at("name", 1), Some("bob"));
//! # Ok(())
//! # }
//! ```
//!
//! Path-based loads keep the backing file handle inside the document until
//! [`types::CsvDocument::close`] (idempotent) or drop:
//!
//! ```no_run
//! use csv_ingest::ingestion::{load_from_path, LoadOptions};
//!
//! # fn main() -> Result<(), csv_ingest::LoadError> {
//! let mut doc = load_from_path("people.csv", &LoadOptions::default())?;
//! println!("rows={}", doc.row_count());
//! doc.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: loading entrypoints and the line/field parsing pipeline
//! - [`types`]: the in-memory document model (columns, rows, lookup)
//! - [`error`]: error types used across loading
//!
//! Loading is fully synchronous and single-threaded, and out-of-memory while
//! growing a line buffer aborts the process; there is no recovery path for
//! memory exhaustion.

pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{LoadError, LoadResult};
