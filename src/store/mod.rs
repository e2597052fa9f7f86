//! Store Module
//!
//! Append-only persistence of form records in a single JSON file.
//!
//! ## Responsibilities
//! - Load the full record sequence (missing or empty file = no records)
//! - Append one record with a whole-file read-modify-write
//! - Project stored records for callers
//!
//! ## Write Path
//! ```text
//!   append(record)
//!        │  lock (in-process only)
//!        ▼
//!   create parent dir ──► load file ──► push record
//!                                            │
//!                                            ▼
//!                  rename tmp → file ◄── write {file}.tmp (+ fsync)
//! ```
//!
//! There is no file locking: two processes appending to the same file can
//! lose updates.

mod record_store;

pub use record_store::RecordStore;
