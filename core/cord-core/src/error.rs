//! Error types for cord-core operations.
//!
//! Internally everything is a typed `CordError`; the FFI boundary in
//! `ffi.rs` flattens it to a plain message string so the Lua host never
//! sees a Rust error type (or a panic).

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CordError>;

/// All errors that can occur in cord-core operations.
///
/// The set is deliberately small: classification misses are not errors
/// (they suppress the update instead), so only configuration and
/// transport problems remain.
#[derive(Debug, thiserror::Error)]
pub enum CordError {
    /// The editor identity passed to `init` is neither a known editor
    /// name nor a numeric Discord application id.
    #[error("unrecognized editor identity: {0:?}")]
    InvalidEditorIdentity(String),

    /// The underlying Rich Presence transport failed. Surfaced the same
    /// way whether it happens while connecting or while pushing an
    /// activity update.
    #[error("presence transport error while {op}: {details}")]
    Transport {
        /// What the transport was doing ("connecting", "updating activity", ...).
        op: &'static str,
        details: String,
    },
}

impl CordError {
    /// Wraps an opaque transport-level error with the operation that failed.
    pub fn transport(op: &'static str, source: impl std::fmt::Display) -> Self {
        CordError::Transport {
            op,
            details: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_identity_message_names_the_input() {
        let err = CordError::InvalidEditorIdentity("emacs".to_string());
        assert!(err.to_string().contains("emacs"));
    }

    #[test]
    fn test_transport_message_includes_operation() {
        let err = CordError::transport("connecting", "pipe not found");
        let msg = err.to_string();
        assert!(msg.contains("connecting"));
        assert!(msg.contains("pipe not found"));
    }
}
