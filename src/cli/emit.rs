//! Descriptor emission command.
//!
//! Resolves the configuration into the JSON document a generator or
//! theme consumes. The only computed value is the deployment base path;
//! everything else is the descriptor as written.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::EmitArgs;
use crate::config::section::{SiteSectionConfig, ThemeSectionConfig};
use crate::config::{LocaleConfig, NavItem, SidebarGroup, SiteConfig};
use crate::{debug, log};

/// The emitted descriptor document.
#[derive(Debug, Serialize)]
struct Descriptor<'a> {
    /// Resolved deployment base path.
    base: String,
    site: &'a SiteSectionConfig,
    theme: &'a ThemeSectionConfig,
    nav: &'a [NavItem],
    sidebar: &'a [SidebarGroup],
    locales: &'a BTreeMap<String, LocaleConfig>,
}

/// Emit the resolved descriptor as JSON
pub fn emit_descriptor(args: &EmitArgs, config: &SiteConfig) -> Result<()> {
    let descriptor = Descriptor {
        base: config.build.resolved_base(args.production),
        site: &config.site,
        theme: &config.theme,
        nav: &config.nav,
        sidebar: &config.sidebar,
        locales: &config.locales,
    };
    debug!("emit"; "resolved base: {}", descriptor.base);

    let json = if args.pretty {
        serde_json::to_string_pretty(&descriptor)?
    } else {
        serde_json::to_string(&descriptor)?
    };

    let output = output_path(args, config);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&output, json)
        .with_context(|| format!("Failed to write descriptor '{}'", output.display()))?;

    log!(
        "emit";
        "wrote descriptor to {}",
        config.root_relative(&output).display()
    );
    Ok(())
}

/// Resolve the output path: `--output` wins over `[build] output`.
fn output_path(args: &EmitArgs, config: &SiteConfig) -> PathBuf {
    match &args.output {
        Some(path) => crate::utils::path::expand_user_path(path),
        None => config.build.output.clone(),
    }
}
