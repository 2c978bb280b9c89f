//! C ABI exported to the Lua host.
//!
//! Symbol names match what the plugin's Lua layer declares via
//! `ffi.cdef`: `init`, `update_presence`, `set_cwd`, `disconnect`,
//! plus `free_string` for reclaiming returned error messages.
//!
//! Boundary rules: fallible operations return a NUL-terminated error
//! message (caller frees it with `free_string`) or null on success;
//! nothing panics or unwinds across the boundary; null string
//! arguments are treated as empty. The process-wide engine is guarded
//! by a single mutex because the host may call in from more than one
//! thread of control.

use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, MutexGuard};

use libc::c_char;
use once_cell::sync::Lazy;

use crate::engine::PresenceEngine;
use crate::error::Result;
use crate::types::{EditorSignal, TemplateSet};

static ENGINE: Lazy<Mutex<PresenceEngine>> = Lazy::new(|| Mutex::new(PresenceEngine::new()));

fn engine() -> MutexGuard<'static, PresenceEngine> {
    // A poisoned lock means a previous call panicked mid-operation;
    // the engine's state is still coherent enough to keep serving.
    ENGINE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Copies a C string argument; null is treated as empty.
///
/// # Safety
/// `ptr` must be null or point to a valid NUL-terminated string.
unsafe fn string_arg(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

/// Flattens a result to the boundary convention: null on success, an
/// owned message string on failure.
fn into_message(result: Result<()>) -> *mut c_char {
    match result {
        Ok(()) => ptr::null_mut(),
        Err(err) => message(&err.to_string()),
    }
}

fn message(text: &str) -> *mut c_char {
    // NUL bytes inside the message would truncate it anyway; strip them
    // rather than fail to report.
    let sanitized: String = text.chars().filter(|&c| c != '\0').collect();
    match CString::new(sanitized) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Runs a fallible boundary operation, converting panics into error
/// messages so they never unwind into the host.
fn guarded(op: &str, f: impl FnOnce() -> Result<()>) -> *mut c_char {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => into_message(result),
        Err(_) => message(&format!("internal error in {op}")),
    }
}

/// Establishes the presence session.
///
/// `editor` is a known editor name or a numeric Discord application id;
/// the remaining arguments are the user's text templates. Returns null
/// on success or an error message the caller must `free_string`.
///
/// # Safety
/// Every pointer must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn init(
    editor: *const c_char,
    small_text: *const c_char,
    idle_text: *const c_char,
    viewing_text: *const c_char,
    editing_text: *const c_char,
    file_browser_text: *const c_char,
    plugin_manager_text: *const c_char,
    workspace_text: *const c_char,
) -> *mut c_char {
    let editor = string_arg(editor);
    let templates = TemplateSet {
        small_text: string_arg(small_text),
        idle: string_arg(idle_text),
        viewing: string_arg(viewing_text),
        editing: string_arg(editing_text),
        file_browser: string_arg(file_browser_text),
        plugin_manager: string_arg(plugin_manager_text),
        workspace: string_arg(workspace_text),
    };
    guarded("init", || engine().initialize(&editor, templates))
}

/// Reports the current buffer. Returns null on success (including the
/// not-connected and suppressed cases) or an error message.
///
/// # Safety
/// `filename` and `filetype` must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn update_presence(
    filename: *const c_char,
    filetype: *const c_char,
    is_read_only: bool,
) -> *mut c_char {
    let signal = EditorSignal::new(string_arg(filename), string_arg(filetype), is_read_only);
    guarded("update_presence", || engine().update(&signal))
}

/// Records the host's working directory.
///
/// # Safety
/// `value` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn set_cwd(value: *const c_char) {
    let dir = string_arg(value);
    let _ = catch_unwind(AssertUnwindSafe(|| engine().set_workspace(&dir)));
}

/// Closes the presence session. Safe to call repeatedly.
#[no_mangle]
pub extern "C" fn disconnect() {
    let _ = catch_unwind(AssertUnwindSafe(|| engine().shutdown()));
}

/// Reclaims a string previously returned by `init` or
/// `update_presence`. Null is accepted and ignored.
///
/// # Safety
/// `ptr` must be null or a pointer obtained from this library.
#[no_mangle]
pub unsafe extern "C" fn free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    // These exercise the exported symbols in-process. None of them may
    // reach a live Discord client: the engine in this test binary is
    // only ever driven through paths that fail or no-op before
    // connecting.

    #[test]
    fn test_init_with_invalid_identity_returns_message() {
        let editor = c("not-an-editor");
        let blank = c("");
        let err = unsafe {
            init(
                editor.as_ptr(),
                blank.as_ptr(),
                blank.as_ptr(),
                blank.as_ptr(),
                blank.as_ptr(),
                blank.as_ptr(),
                blank.as_ptr(),
                blank.as_ptr(),
            )
        };
        assert!(!err.is_null());
        let text = unsafe { CStr::from_ptr(err) }.to_string_lossy().into_owned();
        assert!(text.contains("not-an-editor"));
        unsafe { free_string(err) };
    }

    #[test]
    fn test_update_without_session_succeeds() {
        let filename = c("main.rs");
        let filetype = c("rust");
        let err = unsafe { update_presence(filename.as_ptr(), filetype.as_ptr(), false) };
        assert!(err.is_null());
    }

    #[test]
    fn test_null_arguments_are_treated_as_empty() {
        let err = unsafe { update_presence(ptr::null(), ptr::null(), true) };
        assert!(err.is_null());
        unsafe { set_cwd(ptr::null()) };
    }

    #[test]
    fn test_disconnect_is_idempotent_across_the_boundary() {
        disconnect();
        disconnect();
    }

    #[test]
    fn test_free_string_accepts_null() {
        unsafe { free_string(ptr::null_mut()) };
    }
}
