//! Core types shared across the presence pipeline.
//!
//! `EditorSignal` comes in from the host on every update call,
//! `ActivityRecord` goes out to the transport, and `TemplateSet` /
//! `SessionContext` sit in between as per-session configuration and
//! context. All of them are plain serde-derived data.

use serde::{Deserialize, Serialize};

/// Raw editor state for one update call.
///
/// Constructed fresh per call from whatever the host hands over; fields
/// may be empty and the filetype tag is not guaranteed to be meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EditorSignal {
    /// Name of the file in the current buffer (may be empty).
    pub filename: String,
    /// Filetype tag as reported by the editor (may be empty).
    pub filetype: String,
    /// Whether the buffer is read-only.
    pub is_read_only: bool,
}

impl EditorSignal {
    pub fn new(filename: impl Into<String>, filetype: impl Into<String>, is_read_only: bool) -> Self {
        Self {
            filename: filename.into(),
            filetype: filetype.into(),
            is_read_only,
        }
    }
}

/// User-supplied text templates, fixed at initialize time.
///
/// Each detail template may contain the `$s` placeholder at most once;
/// only the first occurrence is ever substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TemplateSet {
    /// Tooltip for the small (editor) image.
    pub small_text: String,
    /// Details line while idle; used verbatim, no substitution.
    pub idle: String,
    /// Details line for read-only buffers ("Viewing $s").
    pub viewing: String,
    /// Details line for writable buffers ("Editing $s").
    pub editing: String,
    /// Details line on a file-browser screen ("Browsing $s").
    pub file_browser: String,
    /// Details line on a plugin-manager screen ("Managing $s").
    pub plugin_manager: String,
    /// State line naming the workspace ("Working on $s"); blank disables
    /// the state line entirely.
    pub workspace: String,
}

/// Process-wide session context.
///
/// `editor` and `started_at_ms` are fixed when a session is established;
/// `workspace` is the only field mutated afterwards (by `set_workspace`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SessionContext {
    /// Editor identity, also the small-image asset id.
    pub editor: String,
    /// Current working directory reported by the host; may be blank.
    pub workspace: String,
    /// Session start, unix epoch milliseconds.
    pub started_at_ms: i64,
}

/// A finished activity payload, handed to the transport and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// First line: what the user is doing.
    pub details: String,
    /// Optional second line: the workspace. `None` means no state line
    /// at all, not an empty one.
    pub state: Option<String>,
    /// URL of the large (mode) image.
    pub large_image: String,
    /// Tooltip for the large image.
    pub large_text: String,
    /// URL of the small (editor) image.
    pub small_image: String,
    /// Tooltip for the small image.
    pub small_text: String,
    /// Elapsed-time anchor, unix epoch milliseconds.
    pub start_timestamp_ms: i64,
}

/// Kotlin-style blankness: empty or whitespace-only.
///
/// The host passes strings through from VimL/Lua, where "  " and ""
/// are equally meaningless, so every emptiness check in the pipeline
/// goes through this.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
