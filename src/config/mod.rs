//! Site descriptor management for `docfig.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] info, head, footer
//! │   ├── theme      # [theme]
//! │   ├── nav        # [[nav]]
//! │   ├── sidebar    # [[sidebar]]
//! │   ├── locale     # [locales.*]
//! │   ├── build      # [build]
//! │   └── check      # [check]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── status     # FieldStatus
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `[site.info]`   | Site metadata (title, description, url)       |
//! | `[site.head]`   | Head tags (favicon, theme color)              |
//! | `[site.footer]` | Footer text and social links                  |
//! | `[theme]`       | Appearance, accent color, logo                |
//! | `[[nav]]`       | Top-level navigation entries                  |
//! | `[[sidebar]]`   | Sidebar groups keyed by route prefix          |
//! | `[locales.*]`   | Language variants with nav/sidebar overrides  |
//! | `[build]`       | Descriptor output path, deployment base       |
//! | `[check]`       | Check command settings                        |

pub mod section;
pub mod types;
pub mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{CheckConfig, CheckLevel, LocaleConfig, NavItem, NavItemKind, SidebarGroup};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

// Internal imports from section/
use section::{BuildSectionConfig, SiteSectionConfig, ThemeSectionConfig};

use crate::{
    cli::{CheckArgs, Cli, Commands, EmitArgs},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docfig.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, head, footer)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Theme settings (appearance, accent, logo)
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Top-level navigation entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,

    /// Sidebar groups keyed by route prefix
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarGroup>,

    /// Language variants
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub locales: BTreeMap<String, LocaleConfig>,

    /// Descriptor output settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Check command settings
    #[serde(default)]
    pub check: CheckConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            site: SiteSectionConfig::default(),
            theme: ThemeSectionConfig::default(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            locales: BTreeMap::new(),
            build: BuildSectionConfig::default(),
            check: CheckConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        // Validate config existence (skip for init)
        if !cli.is_init() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'docfig init' to create a new project.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        // Load or create default config
        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Set paths and apply CLI options
        config.config_path = config_path;
        config.finalize(cli);

        debug!("config"; "using config file {}", config.config_path.display());
        debug!("config"; "project root {}", config.root.display());

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None, .. } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name), .. } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None, .. } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        self.set_root(&root);
        self.normalize_paths(&root);
        self.migrate_deprecated_base();
        self.apply_command_options(cli);

        // Extract path_prefix from site.info.url
        // This ensures production base works for both:
        // - CLI: --site-url "https://example.github.io/my-docs"
        // - Config: [site.info] url = "https://example.github.io/my-docs"
        self.sync_path_prefix_from_url();
    }

    /// Derive path_prefix from site.info.url.
    ///
    /// This extracts the URL path component, enabling proper base path
    /// resolution for subdirectory deployments (e.g. GitHub Pages project
    /// sites).
    fn sync_path_prefix_from_url(&mut self) {
        if let Some(ref url) = self.site.info.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.build.path_prefix = path;
        }
    }

    /// Honor the deprecated `site.info.base` field until it is removed.
    fn migrate_deprecated_base(&mut self) {
        if let Some(base) = self.site.info.base.take()
            && self.build.base == "/"
        {
            self.build.base = base;
        }
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (docfig.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Check { args } => self.apply_check_args(args),
            Commands::Emit { args } => self.apply_emit_args(args),
            Commands::Init { .. } => {}
            // Query command doesn't modify config
            Commands::Query { .. } => {}
        }
    }

    /// Apply check arguments from CLI.
    fn apply_check_args(&mut self, args: &CheckArgs) {
        // CLI flags override config enable settings
        Self::update_option(&mut self.check.nav.enable, args.nav.as_ref());
        Self::update_option(&mut self.check.sidebar.enable, args.sidebar.as_ref());
        Self::update_option(&mut self.check.locales.enable, args.locales.as_ref());

        // --warn-only sets all levels to Warn
        if args.warn_only {
            self.check.nav.level = CheckLevel::Warn;
            self.check.sidebar.level = CheckLevel::Warn;
            self.check.locales.level = CheckLevel::Warn;
        }
    }

    /// Apply emit arguments from CLI.
    ///
    /// Overriding the site URL avoids modifying docfig.toml in CI/CD,
    /// keeping the source file clean. The path component is extracted as
    /// the production base prefix in `sync_path_prefix_from_url()`.
    fn apply_emit_args(&mut self, args: &EmitArgs) {
        if let Some(ref url) = args.site_url {
            self.site.info.url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        // Normalize root to absolute path
        let root = crate::utils::path::normalize_path(root);
        self.set_root(&root);

        // Normalize config path (already set in load, just canonicalize)
        self.config_path = crate::utils::path::normalize_path(&self.config_path);

        // Descriptor output resolves against the project root
        self.build.output = crate::utils::path::normalize_path(&root.join(&self.build.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        // Validate field status (experimental, deprecated, not_implemented)
        self.site.validate_field_status(&mut diag);
        self.theme.validate_field_status(&mut diag);

        // Validate each section
        self.site.info.validate(&mut diag);
        self.site.head.validate(&mut diag);
        self.site.footer.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.build.validate(&mut diag);

        // Print collected hints and warnings (grouped display)
        diag.print_hints_and_warnings();

        // Return all collected errors
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    // Skip the preamble when the caller opens [site.info] itself
    // (TOML forbids defining the same table twice)
    let preamble = if extra.contains("[site.info]") {
        ""
    } else {
        "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n"
    };
    let config = format!("{preamble}{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"My Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        // Default root is empty PathBuf, set during config loading
        assert_eq!(config.get_root(), Path::new(""));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert_eq!(config.build.base, "/");
        assert!(config.nav.is_empty());
        assert!(config.check.nav.enable);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.info.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_roundtrip_identity() {
        // Serializing and re-parsing the descriptor yields an identical object
        let original = test_parse_config(
            r##"[site.head]
theme_color = "#3eaf7c"

[theme]
appearance = "dark"
accent = "#10b981"

[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "More"
items = [{ text = "Team", link = "/team/" }]

[[sidebar]]
route = "/guide/"
items = [{ text = "Intro", link = "/guide/intro" }]

[locales.root]
label = "English"
lang = "en-US"
link = "/"

[locales.fr]
label = "Français"
lang = "fr-FR"
link = "/fr/"

[[locales.fr.nav]]
text = "Guide"
link = "/fr/guide/""##,
        );

        let serialized = toml::to_string(&original).unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();

        let a = serde_json::to_value(&original).unwrap();
        let b = serde_json::to_value(&reparsed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_migrate_deprecated_base() {
        let mut config = test_parse_config("[site.info]\nbase = \"/legacy/\"");
        config.migrate_deprecated_base();
        assert_eq!(config.build.base, "/legacy/");
        assert!(config.site.info.base.is_none());

        // Explicit [build] base wins over the deprecated field
        let mut config =
            test_parse_config("[site.info]\nbase = \"/legacy/\"\n[build]\nbase = \"/new/\"");
        config.migrate_deprecated_base();
        assert_eq!(config.build.base, "/new/");
    }

    #[test]
    fn test_sync_path_prefix_from_url() {
        let mut config =
            test_parse_config("[site.info]\nurl = \"https://example.github.io/my-docs\"");
        config.sync_path_prefix_from_url();
        assert_eq!(config.build.path_prefix, "my-docs");
        assert_eq!(config.build.resolved_base(true), "/my-docs/");
        assert_eq!(config.build.resolved_base(false), "/");
    }
}
