//! Static asset lookup tables and asset URL construction.
//!
//! Three disjoint namespaces map filetype tags to `(asset id, label)`
//! pairs: programming languages, file browsers, and plugin managers.
//! Lookup is exact string match on the tag. The language table is the
//! only one with a fallback (`("text", tag)`); a miss in either of the
//! other two tables means the caller must suppress the update rather
//! than show a misleading asset.
//!
//! The tables are built once, lazily, and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Remote base path all asset URLs are built from.
pub const ASSETS_BASE_URL: &str =
    "https://raw.githubusercontent.com/reblast/cord.nvim/master/assets";

/// Image extension appended to every asset id.
const ASSET_EXTENSION: &str = "png";

/// Asset id of the language-table fallback entry.
pub const FALLBACK_LANGUAGE_ASSET: &str = "text";

/// One entry in a lookup table: the asset id (image name without
/// extension) and the human-readable label shown as the image tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    pub asset_id: &'static str,
    pub label: &'static str,
}

/// Remote directory an asset lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Editor,
    Language,
    FileBrowser,
    PluginManager,
}

impl AssetCategory {
    pub fn dir(self) -> &'static str {
        match self {
            AssetCategory::Editor => "editor",
            AssetCategory::Language => "language",
            AssetCategory::FileBrowser => "file_browser",
            AssetCategory::PluginManager => "plugin_manager",
        }
    }
}

/// Builds the full remote URL for an asset.
pub fn asset_url(category: AssetCategory, asset_id: &str) -> String {
    format!(
        "{ASSETS_BASE_URL}/{}/{asset_id}.{ASSET_EXTENSION}",
        category.dir()
    )
}

const fn entry(asset_id: &'static str, label: &'static str) -> AssetEntry {
    AssetEntry { asset_id, label }
}

/// Language table, keyed by Neovim filetype tag.
///
/// Several tags intentionally share an asset (`javascriptreact` /
/// `typescriptreact` both render the React logo, shells share `shell`).
const LANGUAGE_ENTRIES: &[(&str, AssetEntry)] = &[
    ("asm", entry("assembly", "Assembly")),
    ("astro", entry("astro", "Astro")),
    ("autohotkey", entry("autohotkey", "AutoHotkey")),
    ("c", entry("c", "C")),
    ("clojure", entry("clojure", "Clojure")),
    ("cmake", entry("cmake", "CMake")),
    ("cpp", entry("cpp", "C++")),
    ("cs", entry("csharp", "C#")),
    ("css", entry("css", "CSS")),
    ("dart", entry("dart", "Dart")),
    ("dockerfile", entry("docker", "Docker")),
    ("elixir", entry("elixir", "Elixir")),
    ("erlang", entry("erlang", "Erlang")),
    ("fish", entry("shell", "Fish")),
    ("fsharp", entry("fsharp", "F#")),
    ("gdscript", entry("gdscript", "GDScript")),
    ("gitcommit", entry("git", "Git")),
    ("gitrebase", entry("git", "Git")),
    ("go", entry("go", "Go")),
    ("groovy", entry("groovy", "Groovy")),
    ("haskell", entry("haskell", "Haskell")),
    ("html", entry("html", "HTML")),
    ("java", entry("java", "Java")),
    ("javascript", entry("javascript", "JavaScript")),
    ("javascriptreact", entry("react", "JSX")),
    ("json", entry("json", "JSON")),
    ("julia", entry("julia", "Julia")),
    ("kotlin", entry("kotlin", "Kotlin")),
    ("lisp", entry("lisp", "Lisp")),
    ("lua", entry("lua", "Lua")),
    ("markdown", entry("markdown", "Markdown")),
    ("nim", entry("nim", "Nim")),
    ("nix", entry("nix", "Nix")),
    ("ocaml", entry("ocaml", "OCaml")),
    ("perl", entry("perl", "Perl")),
    ("php", entry("php", "PHP")),
    ("ps1", entry("powershell", "PowerShell")),
    ("python", entry("python", "Python")),
    ("r", entry("r", "R")),
    ("ruby", entry("ruby", "Ruby")),
    ("rust", entry("rust", "Rust")),
    ("sass", entry("sass", "Sass")),
    ("scala", entry("scala", "Scala")),
    ("scss", entry("scss", "SCSS")),
    ("sh", entry("shell", "Shell script")),
    ("sql", entry("sql", "SQL")),
    ("svelte", entry("svelte", "Svelte")),
    ("swift", entry("swift", "Swift")),
    ("tex", entry("latex", "LaTeX")),
    ("text", entry("text", "Plain Text")),
    ("toml", entry("toml", "TOML")),
    ("typescript", entry("typescript", "TypeScript")),
    ("typescriptreact", entry("react", "TSX")),
    ("v", entry("v", "V")),
    ("vim", entry("viml", "VimL")),
    ("vue", entry("vue", "Vue")),
    ("xml", entry("xml", "XML")),
    ("yaml", entry("yaml", "YAML")),
    ("zig", entry("zig", "Zig")),
    ("zsh", entry("shell", "Shell script")),
];

/// File-browser table. Keep in sync with `classify::FILE_BROWSER_TAGS`.
const FILE_BROWSER_ENTRIES: &[(&str, AssetEntry)] = &[
    ("netrw", entry("netrw", "Netrw")),
    ("dirvish", entry("dirvish", "Dirvish")),
    ("TelescopePrompt", entry("telescope", "Telescope")),
];

/// Plugin-manager table. Keep in sync with `classify::PLUGIN_MANAGER_TAGS`.
const PLUGIN_MANAGER_ENTRIES: &[(&str, AssetEntry)] = &[
    ("lazy", entry("lazy", "Lazy")),
    ("packer", entry("packer", "Packer")),
];

static LANGUAGES: Lazy<HashMap<&'static str, AssetEntry>> =
    Lazy::new(|| LANGUAGE_ENTRIES.iter().copied().collect());

static FILE_BROWSERS: Lazy<HashMap<&'static str, AssetEntry>> =
    Lazy::new(|| FILE_BROWSER_ENTRIES.iter().copied().collect());

static PLUGIN_MANAGERS: Lazy<HashMap<&'static str, AssetEntry>> =
    Lazy::new(|| PLUGIN_MANAGER_ENTRIES.iter().copied().collect());

/// Exact-match language lookup; `None` for unknown tags (callers that
/// want the `("text", tag)` default go through the classifier).
pub fn language(tag: &str) -> Option<AssetEntry> {
    LANGUAGES.get(tag).copied()
}

/// Exact-match file-browser lookup; `None` means suppress.
pub fn file_browser(tag: &str) -> Option<AssetEntry> {
    FILE_BROWSERS.get(tag).copied()
}

/// Exact-match plugin-manager lookup; `None` means suppress.
pub fn plugin_manager(tag: &str) -> Option<AssetEntry> {
    PLUGIN_MANAGERS.get(tag).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_url_shape() {
        assert_eq!(
            asset_url(AssetCategory::Language, "rust"),
            format!("{ASSETS_BASE_URL}/language/rust.png")
        );
        assert_eq!(
            asset_url(AssetCategory::FileBrowser, "netrw"),
            format!("{ASSETS_BASE_URL}/file_browser/netrw.png")
        );
        assert_eq!(
            asset_url(AssetCategory::Editor, "neovim"),
            format!("{ASSETS_BASE_URL}/editor/neovim.png")
        );
    }

    #[test]
    fn test_language_lookup_is_exact_match() {
        assert_eq!(language("rust"), Some(entry("rust", "Rust")));
        // No normalization: case and whitespace matter.
        assert_eq!(language("Rust"), None);
        assert_eq!(language("rust "), None);
        assert_eq!(language("brainfuck"), None);
    }

    #[test]
    fn test_non_language_tables_have_no_fallback() {
        assert!(file_browser("oil").is_none());
        assert!(plugin_manager("vim-plug").is_none());
    }

    #[test]
    fn test_namespaces_resolve_independently() {
        // "lazy" is a plugin manager, not a language or file browser.
        assert!(plugin_manager("lazy").is_some());
        assert!(language("lazy").is_none());
        assert!(file_browser("lazy").is_none());
    }

    #[test]
    fn test_no_duplicate_tags_within_a_table() {
        for entries in [LANGUAGE_ENTRIES, FILE_BROWSER_ENTRIES, PLUGIN_MANAGER_ENTRIES] {
            let mut tags: Vec<&str> = entries.iter().map(|(tag, _)| *tag).collect();
            tags.sort_unstable();
            let before = tags.len();
            tags.dedup();
            assert_eq!(before, tags.len());
        }
    }
}
