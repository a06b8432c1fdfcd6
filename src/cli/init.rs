//! Project initialization.
//!
//! Creates a new docfig.toml from the section templates, plus ignore
//! files for the emitted descriptor.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::SiteConfig;
use crate::config::section::{
    BuildSectionConfig, LocalesCheckConfig, NavCheckConfig, SidebarCheckConfig,
    ThemeSectionConfig,
    site::{FooterConfig, HeadConfig, SiteInfoConfig},
};
use crate::log;

/// Default config filename
const CONFIG_FILE: &str = "docfig.toml";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Sample nav, sidebar and locale entries.
///
/// Array-of-tables sections cannot be derived from struct defaults,
/// so the starter entries are spelled out here.
const STARTER_ENTRIES: &str = r#"# Top-level navigation. Each entry is either a leaf (with `link`)
# or a group (with `items`), never both.
[[nav]]
text = "Guide"
link = "/guide/"

# Sidebar groups are keyed by route prefix. Every item link must
# start with the group's route.
[[sidebar]]
route = "/guide/"
text = "Guide"
items = [
    { text = "Getting Started", link = "/guide/getting-started" },
]

# The root locale serves "/". Additional locales use "/<code>/" links,
# e.g. [locales.fr] with link = "/fr/".
[locales.root]
label = "English"
lang = "en-US"
link = "/"
"#;

/// Create a new project with a default docfig.toml
///
/// # Steps
/// 1. Validate the target (docfig.toml must not already exist)
/// 2. Create the project directory if needed
/// 3. Write docfig.toml and ignore files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template());
        return Ok(());
    }

    let root = config.get_root();

    if let Err(e) = validate_target(root, has_name) {
        log!("error"; "{}", e);
        std::process::exit(1);
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    write_config(root)?;
    write_ignore_files(root, &config.root_relative(&config.build.output))?;

    log!("init"; "Project initialized successfully");
    Ok(())
}

/// Validate the initialization target.
///
/// # Rules
/// - docfig.toml must not already exist at the target
/// - `docfig init <name>`: the directory must not exist
fn validate_target(root: &Path, has_name: bool) -> Result<()> {
    if has_name && root.exists() {
        bail!(
            "Directory '{}' already exists.\n\
             Choose a different name or remove the existing directory.",
            root.display()
        );
    }
    if root.join(CONFIG_FILE).exists() {
        bail!(
            "'{CONFIG_FILE}' already exists in '{}'.\n\
             Remove it first or run docfig from a different directory.",
            root.display()
        );
    }
    Ok(())
}

/// Generate docfig.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Docfig site descriptor (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/docfig/docfig\n\n");

    // [site.info] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [site.head] section
    out.push_str(&HeadConfig::template_with_header());
    out.push('\n');

    // [site.footer] section
    out.push_str(&FooterConfig::template_with_header());
    out.push('\n');

    // [theme] section
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');

    // nav, sidebar and locales starter entries
    out.push_str(STARTER_ENTRIES);
    out.push('\n');

    // [build] section
    out.push_str(&BuildSectionConfig::template_with_header());
    out.push('\n');

    // [check.nav] section
    out.push_str(&NavCheckConfig::template_with_header());
    out.push('\n');

    // [check.sidebar] section
    out.push_str(&SidebarCheckConfig::template_with_header());
    out.push('\n');

    // [check.locales] section
    out.push_str(&LocalesCheckConfig::template_with_header());

    out
}

/// Write default docfig.toml configuration
fn write_config(root: &Path) -> Result<()> {
    let content = generate_config_template();

    let path = root.join(CONFIG_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write .gitignore and .ignore files with standard patterns
///
/// Only creates files that don't exist (never overwrites user's ignore files).
fn write_ignore_files(root: &Path, output: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output);
    let patterns = [
        output_pattern.to_string_lossy().into_owned(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}
