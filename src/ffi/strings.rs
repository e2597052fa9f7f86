//! C string marshaling
//!
//! Decoding of caller-supplied arguments and release of returned buffers.

use std::ffi::{c_char, CStr, CString};

use crate::error::{FormStoreError, Result};

/// Decode a caller-supplied C string
///
/// NULL and non-UTF-8 input are both reported as `InvalidArgument`, naming
/// the argument.
///
/// # Safety
/// `ptr` must be NULL or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn cstr_arg(ptr: *const c_char, field: &str) -> Result<String> {
    if ptr.is_null() {
        return Err(FormStoreError::InvalidArgument(format!("{} pointer is null", field)));
    }

    CStr::from_ptr(ptr)
        .to_str()
        .map(str::to_owned)
        .map_err(|e| FormStoreError::InvalidArgument(format!("{} is not valid UTF-8: {}", field, e)))
}

/// Release a buffer produced by `CString::into_raw`
///
/// # Safety
/// `ptr` must be NULL or a pointer handed out by this library that has not
/// been released yet.
pub unsafe fn free_c_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}
