//! `[check]` section configuration.
//!
//! Settings for the `docfig check` command, one category per descriptor
//! area. Each category can be disabled or demoted to warnings.
//!
//! # Example
//!
//! ```toml
//! [check.nav]
//! enable = true               # Verify nav entry shape and links
//! level = "error"             # Failure level: error | warn
//!
//! [check.sidebar]
//! enable = true               # Verify route prefixes cover their links
//! level = "error"
//!
//! [check.locales]
//! enable = true               # Verify root locale and prefix uniqueness
//! level = "error"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

// ============================================================================
// Main CheckConfig
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check")]
pub struct CheckConfig {
    /// Nav entry checks (leaf/group shape, link format).
    #[config(sub)]
    pub nav: NavCheckConfig,

    /// Sidebar checks (route prefix covers every link).
    #[config(sub)]
    pub sidebar: SidebarCheckConfig,

    /// Locale checks (single root, unique prefixes).
    #[config(sub)]
    pub locales: LocalesCheckConfig,
}

// ============================================================================
// Per-category settings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check.nav")]
pub struct NavCheckConfig {
    /// Enable nav checks.
    #[config(default = "true")]
    pub enable: bool,

    /// How to treat failures: "error" or "warn".
    #[config(default = "error")]
    pub level: CheckLevel,
}

impl Default for NavCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: CheckLevel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check.sidebar")]
pub struct SidebarCheckConfig {
    /// Enable sidebar checks.
    #[config(default = "true")]
    pub enable: bool,

    /// How to treat failures: "error" or "warn".
    #[config(default = "error")]
    pub level: CheckLevel,
}

impl Default for SidebarCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: CheckLevel::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "check.locales")]
pub struct LocalesCheckConfig {
    /// Enable locale checks.
    #[config(default = "true")]
    pub enable: bool,

    /// How to treat failures: "error" or "warn".
    #[config(default = "error")]
    pub level: CheckLevel,
}

impl Default for LocalesCheckConfig {
    fn default() -> Self {
        Self {
            enable: true,
            level: CheckLevel::default(),
        }
    }
}

/// Check failure level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Treat failures as errors (command exits non-zero).
    #[default]
    Error,
    /// Treat failures as warnings (command succeeds).
    Warn,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_check_config_defaults() {
        let config = test_parse_config("");
        assert!(config.check.nav.enable);
        assert!(config.check.sidebar.enable);
        assert!(config.check.locales.enable);
        assert_eq!(config.check.nav.level, CheckLevel::Error);
    }

    #[test]
    fn test_check_config_custom() {
        let config = test_parse_config(
            r#"[check.nav]
enable = true
level = "warn"

[check.sidebar]
enable = false

[check.locales]
level = "warn""#,
        );
        assert_eq!(config.check.nav.level, CheckLevel::Warn);
        assert!(!config.check.sidebar.enable);
        assert_eq!(config.check.locales.level, CheckLevel::Warn);
    }
}
