//! Presence transport: application identity resolution and the client
//! seam over the Discord Rich Presence IPC connection.
//!
//! The wire protocol (handshake, pipe framing, serialization) is the
//! `discord-rich-presence` crate's job; this module only adapts it.
//! `PresenceClient` exists so the engine and the tests never depend on
//! a live Discord client.

use discord_rich_presence::activity::{Activity, Assets, Timestamps};
use discord_rich_presence::{DiscordIpc, DiscordIpcClient};

use crate::error::{CordError, Result};
use crate::types::ActivityRecord;

/// Known editor identities and their registered Discord application ids.
/// Each id owns the editor icon assets uploaded for that application.
pub const EDITOR_APP_IDS: &[(&str, u64)] = &[
    ("vim", 1219918645770059796),
    ("neovim", 1219918880005165137),
    ("lunarvim", 1220295374087000104),
    ("nvchad", 1220296082861326378),
];

/// Resolves an editor identity to a Discord application id.
///
/// Known editor names map to their registered ids; any other string is
/// parsed as a numeric id directly, letting users bring their own
/// application. Anything else is a configuration error.
pub fn application_id(editor: &str) -> Result<u64> {
    if let Some((_, id)) = EDITOR_APP_IDS.iter().find(|(name, _)| *name == editor) {
        return Ok(*id);
    }
    editor
        .parse::<u64>()
        .map_err(|_| CordError::InvalidEditorIdentity(editor.to_string()))
}

/// Outbound presence connection.
///
/// Implementors should fail with `CordError::Transport` and leave retry
/// policy to the caller; a failed push must not poison the connection
/// object for subsequent calls.
pub trait PresenceClient: Send {
    /// Pushes one activity record, overwriting whatever is displayed.
    fn push(&mut self, record: &ActivityRecord) -> Result<()>;

    /// Closes the connection. Called exactly once, at shutdown.
    fn close(&mut self) -> Result<()>;
}

/// `PresenceClient` backed by the local Discord client's IPC socket.
pub struct DiscordPresence {
    client: DiscordIpcClient,
}

impl DiscordPresence {
    /// Opens a connection for the given application id.
    pub fn connect(app_id: u64) -> Result<Self> {
        let mut client = DiscordIpcClient::new(&app_id.to_string())
            .map_err(|e| CordError::transport("creating client", e))?;
        client
            .connect()
            .map_err(|e| CordError::transport("connecting", e))?;
        tracing::info!(app_id, "connected to Discord");
        Ok(DiscordPresence { client })
    }
}

impl PresenceClient for DiscordPresence {
    fn push(&mut self, record: &ActivityRecord) -> Result<()> {
        let assets = Assets::new()
            .large_image(&record.large_image)
            .large_text(&record.large_text)
            .small_image(&record.small_image)
            .small_text(&record.small_text);
        let mut activity = Activity::new()
            .details(&record.details)
            .assets(assets)
            .timestamps(Timestamps::new().start(record.start_timestamp_ms));
        if let Some(state) = record.state.as_deref() {
            activity = activity.state(state);
        }
        self.client
            .set_activity(activity)
            .map_err(|e| CordError::transport("updating activity", e))
    }

    fn close(&mut self) -> Result<()> {
        self.client
            .close()
            .map_err(|e| CordError::transport("closing", e))
    }
}
