//! `PresenceEngine` - the lifecycle manager around the single presence
//! connection.
//!
//! States: uninitialized → connected → disconnected, with re-initialize
//! allowed from any state (it fully replaces prior session and context
//! state). The engine is synchronous and not internally locked; the FFI
//! layer guards the process-wide instance with one mutex, and any other
//! embedder must provide equivalent serialization, since interleaved
//! `update`/`shutdown` calls would race on the connection's liveness.

use chrono::Utc;

use crate::activity::synthesize;
use crate::classify::classify;
use crate::error::Result;
use crate::transport::{application_id, DiscordPresence, PresenceClient};
use crate::types::{EditorSignal, SessionContext, TemplateSet};

/// The main engine for presence operations.
///
/// Owns the optionally-absent connection handle together with the
/// templates and session context, so there is exactly one of each per
/// engine and their lifetimes are tied to explicit lifecycle calls.
pub struct PresenceEngine {
    client: Option<Box<dyn PresenceClient>>,
    templates: TemplateSet,
    ctx: SessionContext,
}

impl PresenceEngine {
    /// Creates an inert engine; nothing connects until `initialize`.
    pub fn new() -> Self {
        PresenceEngine {
            client: None,
            templates: TemplateSet::default(),
            ctx: SessionContext::default(),
        }
    }

    /// Resolves the editor identity, connects to Discord, and starts a
    /// fresh session.
    ///
    /// On failure the engine is left exactly as it was (a failed
    /// initialize is inert and safe to retry). On success any prior
    /// session is closed first and all session state is replaced,
    /// including the working directory and start timestamp.
    pub fn initialize(&mut self, editor: &str, templates: TemplateSet) -> Result<()> {
        let app_id = application_id(editor)?;
        let client = DiscordPresence::connect(app_id)?;
        self.install(Box::new(client), editor, templates);
        Ok(())
    }

    /// Starts a session over a caller-supplied client.
    ///
    /// Used by tests and by embedders with their own transport; the
    /// client is assumed to be already connected. Not exposed to FFI.
    pub fn initialize_with(
        &mut self,
        client: Box<dyn PresenceClient>,
        editor: &str,
        templates: TemplateSet,
    ) {
        self.install(client, editor, templates);
    }

    fn install(&mut self, client: Box<dyn PresenceClient>, editor: &str, templates: TemplateSet) {
        self.shutdown();
        self.templates = templates;
        self.ctx = SessionContext {
            editor: editor.to_string(),
            workspace: String::new(),
            started_at_ms: Utc::now().timestamp_millis(),
        };
        self.client = Some(client);
        tracing::info!(editor, "presence session started");
    }

    /// Classifies the signal and pushes the synthesized activity.
    ///
    /// Succeeds without pushing when there is no live session (the host
    /// may keep firing events after shutdown) or when classification
    /// suppresses the update. A push failure is returned to the caller
    /// but leaves the session connected; the next host-triggered update
    /// is the retry.
    pub fn update(&mut self, signal: &EditorSignal) -> Result<()> {
        let Some(client) = self.client.as_mut() else {
            return Ok(());
        };
        let mode = classify(signal);
        match synthesize(&mode, signal.is_read_only, &self.templates, &self.ctx) {
            Some(record) => client.push(&record),
            None => {
                tracing::debug!(
                    filename = %signal.filename,
                    filetype = %signal.filetype,
                    "update suppressed"
                );
                Ok(())
            }
        }
    }

    /// Records the host's working directory. Infallible; independent of
    /// connection state.
    pub fn set_workspace(&mut self, dir: &str) {
        self.ctx.workspace = dir.to_string();
    }

    /// Closes the session if one exists. Idempotent; close errors are
    /// logged and swallowed because there is nothing left to retry.
    pub fn shutdown(&mut self) {
        if let Some(mut client) = self.client.take() {
            if let Err(e) = client.close() {
                tracing::warn!(error = %e, "presence shutdown reported an error");
            }
            tracing::info!("presence session closed");
        }
    }

    /// Whether a live session exists.
    pub fn is_connected(&self) -> bool {
        self.client.is_some()
    }

    /// The current session context (test/diagnostic visibility).
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }
}

impl Default for PresenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PresenceEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
