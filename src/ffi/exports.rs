//! C ABI exports
//!
//! Entry point names match what the UI host looks up by name, hence the
//! PascalCase.

#![allow(non_snake_case)]

use std::ffi::c_char;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::response::OperationResponse;
use super::state::{self, guard, init_tracing};
use super::strings::{cstr_arg, free_c_string};
use crate::record::FormRecord;

/// Append one form record
///
/// # Parameters
/// * `name`, `full_name`, `location`, `date_of_birth` - UTF-8, NUL-terminated
///
/// # Returns
/// * JSON `{"success":bool,"message":string,"error":string}`; never NULL.
///   The caller must release it with `FreeFormString`.
/// * A NULL or non-UTF-8 argument yields `success: false` and nothing is saved.
///
/// # Safety
/// Each argument must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn SaveFormData(
    name: *const c_char,
    full_name: *const c_char,
    location: *const c_char,
    date_of_birth: *const c_char,
) -> *mut c_char {
    init_tracing();

    let result = guard(|| {
        let record = FormRecord::new(
            unsafe { cstr_arg(name, "name") }?,
            unsafe { cstr_arg(full_name, "fullName") }?,
            unsafe { cstr_arg(location, "location") }?,
            unsafe { cstr_arg(date_of_birth, "dateOfBirth") }?,
        );
        state::store()?.append(record)
    });

    let response = match result {
        Ok(()) => OperationResponse::saved(),
        Err(e) => {
            warn!(error = %e, "SaveFormData failed");
            OperationResponse::save_failed(&e)
        }
    };
    response.into_raw()
}

/// List every stored record
///
/// # Returns
/// * JSON `{"success":bool,"error":string,"data":[{...}]}`; never NULL.
///   The caller must release it with `FreeFormString`.
#[no_mangle]
pub extern "C" fn GetFormData() -> *mut c_char {
    init_tracing();

    let response = match guard(|| state::store()?.list_all()) {
        Ok(data) => {
            debug!(count = data.len(), "GetFormData listed records");
            OperationResponse::listed(data)
        }
        Err(e) => {
            warn!(error = %e, "GetFormData failed");
            OperationResponse::list_failed(&e)
        }
    };
    response.into_raw()
}

/// Release a string returned by `SaveFormData` or `GetFormData`
///
/// # Safety
/// * `string` must be NULL or a pointer returned by this library
/// * Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn FreeFormString(string: *mut c_char) {
    unsafe { free_c_string(string) }
}

/// Set the record file used by subsequent calls
///
/// Returns false if `path` is NULL or not UTF-8.
///
/// # Safety
/// `path` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn FormStoreSetDataPath(path: *const c_char) -> bool {
    init_tracing();

    match unsafe { cstr_arg(path, "path") } {
        Ok(p) if !p.is_empty() => {
            state::set_data_file(PathBuf::from(p));
            true
        }
        Ok(_) => {
            warn!("FormStoreSetDataPath called with empty path");
            false
        }
        Err(e) => {
            warn!(error = %e, "FormStoreSetDataPath rejected");
            false
        }
    }
}

/// Library version; valid for the program lifetime, do not free
#[no_mangle]
pub extern "C" fn FormStoreVersion() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
