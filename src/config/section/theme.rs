//! `[theme]` appearance settings passed to the generator's theme.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! appearance = "auto"
//! accent = "#3eaf7c"
//! logo = "images/logo.svg"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::config::util::is_hex_color;

/// Theme settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Color scheme: "auto", "light" or "dark".
    #[config(default = "auto")]
    pub appearance: Appearance,

    /// Accent color (`#rgb` or `#rrggbb`).
    pub accent: Option<String>,

    /// Logo path (site-relative).
    pub logo: Option<PathBuf>,

    /// Logo variant used when dark appearance is active.
    #[config(status = experimental)]
    pub logo_dark: Option<PathBuf>,
}

/// Color scheme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    /// Follow the reader's OS preference.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeSectionConfig {
    /// Validate theme settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(accent) = &self.accent
            && !is_hex_color(accent)
        {
            diag.error_with_hint(
                Self::FIELDS.accent,
                format!("'{}' is not a hex color", accent),
                "use format like \"#3eaf7c\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.appearance, Appearance::Auto);
        assert!(config.theme.accent.is_none());
        assert!(config.theme.logo.is_none());
    }

    #[test]
    fn test_appearance_parsing() {
        let config = test_parse_config("[theme]\nappearance = \"dark\"");
        assert_eq!(config.theme.appearance, Appearance::Dark);
    }

    #[test]
    fn test_accent_validation() {
        let config = test_parse_config("[theme]\naccent = \"#10b981\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(!diag.has_errors());

        let config = test_parse_config("[theme]\naccent = \"teal\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_logo_dark_is_experimental_hint() {
        let config = test_parse_config("[theme]\nlogo_dark = \"images/logo-dark.svg\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate_field_status(&mut diag);
        // Experimental fields hint, they do not error
        assert!(!diag.has_errors());
    }
}
