use carbon_footprint_core::BreakdownError;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
///
/// # Example
/// ```rust,ignore
/// let err = DefaultCarbonError::null_pointer("personal");
/// assert_eq!(err.code(), CarbonErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'personal' cannot be null");
/// ```
pub(crate) trait CarbonError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> CarbonErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `CarbonError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultCarbonError {
    code: CarbonErrorCode,
    msg: String,
}

impl DefaultCarbonError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"input"`, `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: CarbonErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a breakdown that violates the caller contract.
    pub fn invalid_breakdown(message: &str) -> Self {
        Self {
            code: CarbonErrorCode::InvalidBreakdown,
            msg: format!("Invalid breakdown: {message}"),
        }
    }
}

impl CarbonError for DefaultCarbonError {
    fn code(&self) -> CarbonErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<BreakdownError> for DefaultCarbonError {
    fn from(error: BreakdownError) -> Self {
        Self::invalid_breakdown(&error.to_string())
    }
}

/// FFI error codes returned by carbon footprint functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbonErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Category results handed to the aggregator do not form a valid
    /// breakdown (a total is NaN or infinite).
    InvalidBreakdown = 2,
}

impl From<DefaultCarbonError> for CarbonErrorCode {
    fn from(error: DefaultCarbonError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is kept here so the pointer handed out stays valid.
    static LAST_ERROR: RefCell<(Option<CString>, CarbonErrorCode)> = const { RefCell::new((None, CarbonErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, CarbonErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, CarbonErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded or the message cannot be converted to a C string.
///
/// The pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// CarbonBreakdown breakdown;
/// if (carbon_compute_breakdown(&p, &t, &w, &e, &c, &breakdown) != Ok) {
///     const char* error = carbon_get_last_error();
///     if (error) {
///         printf("Breakdown failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn carbon_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
#[no_mangle]
pub extern "C" fn carbon_get_last_error_code() -> CarbonErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
