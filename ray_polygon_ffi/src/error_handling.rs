use std::{any::Any, cell::RefCell, ffi::CString};

/// Holds last error information data.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that reported the error.
    pub function_name: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, function_name: CString) -> Self {
        LastErrorData {
            error_msg,
            function_name,
        }
    }
}

// Storage for last error set
thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = RefCell::new(None));

fn to_c_string<T: Into<Vec<u8>>>(value: T, fallback: &str) -> CString {
    CString::new(value).unwrap_or_else(|_| CString::new(fallback).unwrap_or_default())
}

/// Set last error information.
///
/// `error_msg` and `function_name` are turned into CStrings from bytes, if they contain an interior
/// null then a fixed placeholder message is stored instead.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, function_name: &str) {
    let msg = to_c_string(error_msg, "failed to create error message string");
    let name = to_c_string(function_name, "unknown function");

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData::new(msg, name));
    });
}

/// Clear any last error set on this thread.
pub fn clear_last_error() {
    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = None;
    });
}

/// Record a null argument error and return the error code for it (1).
pub fn null_argument(function_name: &str, argument: &str) -> i32 {
    set_last_error(format!("`{argument}` is null"), function_name);
    1
}

/// Record the payload of a caught panic and return the error code for it (-1).
pub fn caught_panic(function_name: &str, payload: Box<dyn Any + Send>) -> i32 {
    let msg = if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {s}")
    } else {
        "panic with non string payload".to_string()
    };
    set_last_error(msg, function_name);
    -1
}
