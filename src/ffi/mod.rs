//! FFI Module
//!
//! C-compatible entry points for the UI host.
//!
//! ## Exports
//! - `SaveFormData(name, fullName, location, dateOfBirth) -> char*`
//! - `GetFormData() -> char*`
//! - `FreeFormString(char*)` - releases either of the above
//! - `FormStoreSetDataPath(path) -> bool`
//! - `FormStoreVersion() -> const char*` - static, never freed
//!
//! ## Ownership
//! Returned `char*` buffers are allocated here and owned by the caller until
//! handed back to `FreeFormString`. Freeing them any other way is undefined.
//!
//! ## Failures
//! No error or panic crosses the boundary; every failure becomes
//! `{"success":false,"error":"..."}`.

mod exports;
mod response;
mod state;
mod strings;

pub use exports::{FormStoreSetDataPath, FormStoreVersion, FreeFormString, GetFormData, SaveFormData};
pub use response::{OperationResponse, SAVE_OK_MESSAGE};
