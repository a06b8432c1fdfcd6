//! `[site.head]` custom head tag configuration.

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::config::util::is_hex_color;

/// Head tags emitted for every page: favicon, theme color, raw elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.head")]
pub struct HeadConfig {
    /// Favicon path (site-relative).
    pub icon: Option<PathBuf>,

    /// Browser theme color (`#rgb` or `#rrggbb`).
    pub theme_color: Option<String>,

    /// Raw HTML elements inserted into head.
    pub elements: Vec<String>,
}

impl HeadConfig {
    /// Validate head settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(color) = &self.theme_color
            && !is_hex_color(color)
        {
            diag.error_with_hint(
                Self::FIELDS.theme_color,
                format!("'{}' is not a hex color", color),
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
        assert!(config.site.head.icon.is_none());
        assert!(config.site.head.theme_color.is_none());
        assert!(config.site.head.elements.is_empty());
    }

    #[test]
    fn test_icon_and_theme_color() {
        let config = test_parse_config(
            "[site.head]\nicon = \"images/favicon.ico\"\ntheme_color = \"#3eaf7c\"",
        );
        assert_eq!(
            config.site.head.icon,
            Some(PathBuf::from("images/favicon.ico"))
        );

        let mut diag = ConfigDiagnostics::new();
        config.site.head.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_bad_theme_color() {
        let config = test_parse_config("[site.head]\ntheme_color = \"green\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.head.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_elements() {
        let config = test_parse_config(
            r#"[site.head]
elements = ['<meta name="darkreader-lock">']"#,
        );
        assert_eq!(config.site.head.elements.len(), 1);
        assert_eq!(
            config.site.head.elements[0],
            "<meta name=\"darkreader-lock\">"
        );
    }
}
