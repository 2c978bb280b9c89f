//! Activity synthesis: turns a classified `Mode` into a finished
//! `ActivityRecord`, applying the user's templates and the session
//! context.

use crate::assets::{asset_url, AssetCategory, FALLBACK_LANGUAGE_ASSET};
use crate::classify::Mode;
use crate::types::{is_blank, ActivityRecord, SessionContext, TemplateSet};

/// Placeholder token in detail templates; substituted at most once.
pub const PLACEHOLDER: &str = "$s";

/// Substitution value for an unnamed buffer.
const NEW_BUFFER_SUBSTITUTE: &str = "a new file";

/// Large-image tooltip for an unnamed buffer.
const NEW_BUFFER_LABEL: &str = "New buffer";

/// Asset id of the idle image (lives in the editor category).
const IDLE_ASSET: &str = "idle";

/// Large-image tooltip while idle.
const IDLE_LABEL: &str = "💤";

/// Replaces the first `$s` in `template` with `value`, leaving any
/// further occurrences untouched. Template authors must not rely on
/// repeated substitution.
pub fn apply_template(template: &str, value: &str) -> String {
    template.replacen(PLACEHOLDER, value, 1)
}

/// Builds the activity record for a mode, or `None` for `Suppressed`.
///
/// The small image is always the editor icon; only the details line,
/// the large image, and its tooltip vary by mode. The state line is
/// included only when both the workspace template and the stored
/// working directory are non-blank.
pub fn synthesize(
    mode: &Mode,
    read_only: bool,
    templates: &TemplateSet,
    ctx: &SessionContext,
) -> Option<ActivityRecord> {
    let (details, large_image, large_text) = match mode {
        Mode::Suppressed => return None,
        Mode::Idle => (
            templates.idle.clone(),
            asset_url(AssetCategory::Editor, IDLE_ASSET),
            IDLE_LABEL.to_string(),
        ),
        Mode::FileBrowser(asset) => (
            apply_template(&templates.file_browser, &asset.label),
            asset_url(AssetCategory::FileBrowser, asset.asset_id),
            asset.label.clone(),
        ),
        Mode::PluginManager(asset) => (
            apply_template(&templates.plugin_manager, &asset.label),
            asset_url(AssetCategory::PluginManager, asset.asset_id),
            asset.label.clone(),
        ),
        Mode::NewBuffer => (
            apply_template(verb_template(templates, read_only), NEW_BUFFER_SUBSTITUTE),
            asset_url(AssetCategory::Language, FALLBACK_LANGUAGE_ASSET),
            NEW_BUFFER_LABEL.to_string(),
        ),
        Mode::EditingFile { filename, language } => (
            apply_template(verb_template(templates, read_only), filename),
            asset_url(AssetCategory::Language, language.asset_id),
            language.label.clone(),
        ),
    };

    let state = if !is_blank(&ctx.workspace) && !is_blank(&templates.workspace) {
        Some(apply_template(&templates.workspace, &ctx.workspace))
    } else {
        None
    };

    Some(ActivityRecord {
        details,
        state,
        large_image,
        large_text,
        small_image: asset_url(AssetCategory::Editor, &ctx.editor),
        small_text: templates.small_text.clone(),
        start_timestamp_ms: ctx.started_at_ms,
    })
}

fn verb_template(templates: &TemplateSet, read_only: bool) -> &str {
    if read_only {
        &templates.viewing
    } else {
        &templates.editing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ResolvedAsset;

    fn templates() -> TemplateSet {
        TemplateSet {
            small_text: "Neovim".to_string(),
            idle: "💤".to_string(),
            viewing: "Viewing $s".to_string(),
            editing: "Editing $s".to_string(),
            file_browser: "Browsing in $s".to_string(),
            plugin_manager: "Managing plugins in $s".to_string(),
            workspace: "Working on $s".to_string(),
        }
    }

    fn ctx() -> SessionContext {
        SessionContext {
            editor: "neovim".to_string(),
            workspace: "/proj".to_string(),
            started_at_ms: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_apply_template_replaces_only_first_occurrence() {
        assert_eq!(apply_template("$s and $s", "x"), "x and $s");
        assert_eq!(apply_template("no placeholder", "x"), "no placeholder");
        assert_eq!(apply_template("", "x"), "");
    }

    #[test]
    fn test_suppressed_produces_nothing() {
        assert!(synthesize(&Mode::Suppressed, false, &templates(), &ctx()).is_none());
    }

    #[test]
    fn test_editing_file_record() {
        let mode = Mode::EditingFile {
            filename: "main.rs".to_string(),
            language: ResolvedAsset {
                asset_id: "rust",
                label: "Rust".to_string(),
            },
        };
        let record = synthesize(&mode, false, &templates(), &ctx()).unwrap();
        assert_eq!(record.details, "Editing main.rs");
        assert_eq!(record.state.as_deref(), Some("Working on /proj"));
        assert!(record.large_image.ends_with("/language/rust.png"));
        assert_eq!(record.large_text, "Rust");
        assert!(record.small_image.ends_with("/editor/neovim.png"));
        assert_eq!(record.small_text, "Neovim");
        assert_eq!(record.start_timestamp_ms, 1_700_000_000_000);
    }

    #[test]
    fn test_read_only_picks_viewing_template() {
        let mode = Mode::EditingFile {
            filename: "notes.md".to_string(),
            language: ResolvedAsset {
                asset_id: "markdown",
                label: "Markdown".to_string(),
            },
        };
        let record = synthesize(&mode, true, &templates(), &ctx()).unwrap();
        assert_eq!(record.details, "Viewing notes.md");
    }

    #[test]
    fn test_new_buffer_substitutes_fixed_phrase() {
        let record = synthesize(&Mode::NewBuffer, false, &templates(), &ctx()).unwrap();
        assert_eq!(record.details, "Editing a new file");
        assert!(!record.details.contains(PLACEHOLDER));
        assert!(record.large_image.ends_with("/language/text.png"));
        assert_eq!(record.large_text, "New buffer");
    }

    #[test]
    fn test_idle_uses_template_verbatim_and_editor_idle_asset() {
        let mut t = templates();
        t.idle = "zzz $s".to_string();
        let record = synthesize(&Mode::Idle, false, &t, &ctx()).unwrap();
        // Idle details are not a substitution template.
        assert_eq!(record.details, "zzz $s");
        assert!(record.large_image.ends_with("/editor/idle.png"));
        assert_eq!(record.large_text, "💤");
    }

    #[test]
    fn test_state_line_requires_both_workspace_and_template() {
        let mode = Mode::NewBuffer;

        let mut no_dir = ctx();
        no_dir.workspace = String::new();
        let record = synthesize(&mode, false, &templates(), &no_dir).unwrap();
        assert_eq!(record.state, None);

        let mut no_template = templates();
        no_template.workspace = "  ".to_string();
        let record = synthesize(&mode, false, &no_template, &ctx()).unwrap();
        assert_eq!(record.state, None);
    }

    #[test]
    fn test_file_browser_record_uses_browser_category() {
        let mode = Mode::FileBrowser(ResolvedAsset {
            asset_id: "netrw",
            label: "Netrw".to_string(),
        });
        let record = synthesize(&mode, false, &templates(), &ctx()).unwrap();
        assert_eq!(record.details, "Browsing in Netrw");
        assert!(record.large_image.ends_with("/file_browser/netrw.png"));
    }
}
