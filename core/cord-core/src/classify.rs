//! Presence classification: one total function from an `EditorSignal`
//! to a `Mode`.
//!
//! The precedence order below is a contract, not an implementation
//! detail. Filetype tags are not guaranteed disjoint across categories
//! by the host, so the first matching rule wins:
//!
//! 1. the idle sentinel tag
//! 2. file-browser tags
//! 3. plugin-manager tags
//! 4. empty filename (new buffer, or nothing worth reporting)
//! 5. everything else is a file being edited
//!
//! Keeping all of it in one `match` means the precedence cannot drift
//! across call sites.

use crate::assets::{self, AssetEntry, FALLBACK_LANGUAGE_ASSET};
use crate::types::{is_blank, EditorSignal};

/// Sentinel filetype tag the Lua side sets when the user has gone idle.
pub const IDLE_FILETYPE: &str = "cord.idle";

/// Tags routed to the file-browser table. Keep in sync with
/// `assets::FILE_BROWSER_ENTRIES`; a tag listed here but missing from
/// the table suppresses the update instead of falling through.
pub const FILE_BROWSER_TAGS: &[&str] = &["netrw", "dirvish", "TelescopePrompt"];

/// Tags routed to the plugin-manager table. Same sync rule as above.
pub const PLUGIN_MANAGER_TAGS: &[&str] = &["lazy", "packer"];

/// Asset resolved for a classified mode.
///
/// The label is owned because the language fallback uses the raw
/// filetype tag as its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub asset_id: &'static str,
    pub label: String,
}

impl From<AssetEntry> for ResolvedAsset {
    fn from(entry: AssetEntry) -> Self {
        ResolvedAsset {
            asset_id: entry.asset_id,
            label: entry.label.to_string(),
        }
    }
}

/// The editor's classified situation. Mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The user has gone idle.
    Idle,
    /// A recognized file-browser screen.
    FileBrowser(ResolvedAsset),
    /// A recognized plugin-manager screen.
    PluginManager(ResolvedAsset),
    /// An unnamed, untyped buffer.
    NewBuffer,
    /// A named file; carries the resolved language asset.
    EditingFile {
        filename: String,
        language: ResolvedAsset,
    },
    /// Nothing worth reporting this call. Not an error: the previously
    /// pushed activity stays on display until overwritten.
    Suppressed,
}

/// Classifies one editor signal. Total: every input maps to a mode.
pub fn classify(signal: &EditorSignal) -> Mode {
    match signal.filetype.as_str() {
        IDLE_FILETYPE => Mode::Idle,
        ft if FILE_BROWSER_TAGS.contains(&ft) => match assets::file_browser(ft) {
            Some(entry) => Mode::FileBrowser(entry.into()),
            None => Mode::Suppressed,
        },
        ft if PLUGIN_MANAGER_TAGS.contains(&ft) => match assets::plugin_manager(ft) {
            Some(entry) => Mode::PluginManager(entry.into()),
            None => Mode::Suppressed,
        },
        ft => {
            if is_blank(&signal.filename) {
                if is_blank(ft) {
                    Mode::NewBuffer
                } else {
                    // An unrecognized filetype with no filename is not
                    // a new buffer; say nothing.
                    Mode::Suppressed
                }
            } else {
                let language = assets::language(ft)
                    .map(ResolvedAsset::from)
                    .unwrap_or_else(|| ResolvedAsset {
                        asset_id: FALLBACK_LANGUAGE_ASSET,
                        label: ft.to_string(),
                    });
                Mode::EditingFile {
                    filename: signal.filename.clone(),
                    language,
                }
            }
        }
    }
}
