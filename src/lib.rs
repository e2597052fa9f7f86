//! # FormStore
//!
//! A small form record store for UI hosts:
//! - Append-only persistence of form records to one JSON file
//! - Whole-file read-modify-write with rename-over replacement
//! - C ABI exports returning JSON envelopes in caller-owned buffers
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      UI Host                                 │
//! │           (loads the shared library by name)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ char* in / char* out
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   FFI Boundary                               │
//! │     (decode args, catch failures, JSON envelope)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │  RecordStore  │
//!               │ (append/list) │
//!               └───────┬───────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │  JSON file    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;
pub mod ffi;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FormStoreError, Result};
pub use config::Config;
pub use record::{FormRecord, RecordMap};
pub use store::RecordStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FormStore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
