use crate::error::{with_last_error_mut, CarbonError, CarbonErrorCode, DefaultCarbonError};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
pub(crate) fn set_last_error(error: &impl CarbonError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl CarbonError) -> CarbonErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations so stale messages don't leak through.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = CarbonErrorCode::Ok;
    });
}

/// Record the outcome of an operation: clear the last error on success,
/// track it on failure.
pub(crate) fn track_result<T>(result: Result<T, DefaultCarbonError>) -> Result<T, CarbonErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(error) => Err(track_error(&error)),
    }
}

/// Write `value` through `out` and report success, or track the error.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_out<T>(
    out: *mut T,
    out_name: &str,
    result: Result<T, DefaultCarbonError>,
) -> CarbonErrorCode {
    if out.is_null() {
        return track_error(&DefaultCarbonError::null_pointer(out_name));
    }
    match track_result(result) {
        Ok(value) => {
            // SAFETY: non-null checked above, validity is the caller's contract.
            unsafe {
                out.write(value);
            }
            CarbonErrorCode::Ok
        }
        Err(code) => code,
    }
}

/// Borrow a required record from a raw pointer.
///
/// # Safety
/// `ptr` must be null or point to a valid, initialised `T` for `'a`.
pub(crate) unsafe fn ref_from_ptr<'a, T>(
    ptr: *const T,
    param_name: &str,
) -> Result<&'a T, DefaultCarbonError> {
    // SAFETY: `as_ref` handles null; validity is the caller's contract.
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultCarbonError::null_pointer(param_name))
}

/// Copy a survey answer out of a C string.
///
/// A null pointer reads as the empty answer and invalid UTF-8 is replaced
/// lossily; both then resolve to the lookup table default like any other
/// unrecognised answer.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string.
pub(crate) unsafe fn answer_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: non-null checked above, termination is the caller's contract.
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
}
