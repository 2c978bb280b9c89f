//! # cord-core
//!
//! Native presence core for cord.nvim. Classifies what the editor is
//! doing (file being edited, idle, file-browser or plugin-manager
//! screen), synthesizes a Rich Presence activity record from
//! user-configured templates, and pushes it over the local Discord IPC
//! connection.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime; every operation returns or
//!   fails in the calling thread. Scheduling (debounce, autocmds) is
//!   the host's job.
//! - **Best-effort**: Nothing here may take the editor down. Boundary
//!   operations flatten every failure into an error message, and a
//!   failed push leaves the session connected for the next call to
//!   retry.
//! - **Suppression over guesswork**: An unrecognized special-purpose
//!   screen pushes nothing rather than a misleading activity; the
//!   previously displayed one simply persists.
//! - **FFI-ready**: The `ffi` module exports the C ABI the plugin's
//!   Lua layer loads; the plain Rust API below is what tests and any
//!   Rust embedder use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cord::{PresenceEngine, EditorSignal, TemplateSet};
//!
//! let mut engine = PresenceEngine::new();
//! engine.initialize("neovim", templates)?;
//! engine.set_workspace("/proj");
//! engine.update(&EditorSignal::new("main.rs", "rust", false))?;
//! engine.shutdown();
//! ```

pub mod activity;
pub mod assets;
pub mod classify;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod transport;
pub mod types;

pub use activity::{apply_template, synthesize};
pub use assets::{asset_url, AssetCategory, AssetEntry, ASSETS_BASE_URL};
pub use classify::{classify, Mode, ResolvedAsset, IDLE_FILETYPE};
pub use engine::PresenceEngine;
pub use error::{CordError, Result};
pub use transport::{application_id, DiscordPresence, PresenceClient};
pub use types::{ActivityRecord, EditorSignal, SessionContext, TemplateSet};
