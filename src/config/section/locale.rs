//! `[locales.<code>]` language variants of the documentation.
//!
//! One locale is the root locale (`link = "/"`); every other locale lives
//! under its own `/<code>/` prefix. Per-locale `nav` and `sidebar` are
//! stored verbatim as overrides - merging them with the root locale is the
//! consuming i18n plugin's job, never docfig's.
//!
//! # Example
//!
//! ```toml
//! [locales.root]
//! label = "English"
//! lang = "en-US"
//! link = "/"
//!
//! [locales.fr]
//! label = "Français"
//! lang = "fr-FR"
//! link = "/fr/"
//!
//! [[locales.fr.nav]]
//! text = "Guide"
//! link = "/fr/guide/"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::nav::NavItem;
use super::sidebar::SidebarGroup;

/// Route root of the distinguished root locale.
pub const ROOT_LINK: &str = "/";

/// One supported language/region variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Human-readable name shown in the language picker.
    pub label: String,

    /// Language tag (BCP 47, e.g. `en-US`, `zh-Hans`).
    pub lang: String,

    /// Route root for this locale: `/` for the root locale, `/<code>/` otherwise.
    pub link: String,

    /// Navigation override for this locale, stored verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,

    /// Sidebar override for this locale, stored verbatim.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarGroup>,
}

impl LocaleConfig {
    /// Whether this is the root locale (empty path prefix).
    pub fn is_root(&self) -> bool {
        self.link == ROOT_LINK
    }
}

/// Find the root locale, if any.
pub fn root_locale(
    locales: &BTreeMap<String, LocaleConfig>,
) -> Option<(&String, &LocaleConfig)> {
    locales.iter().find(|(_, locale)| locale.is_root())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_locales_default_empty() {
        let config = test_parse_config("");
        assert!(config.locales.is_empty());
    }

    #[test]
    fn test_root_and_nested_locale() {
        let config = test_parse_config(
            r#"[locales.root]
label = "English"
lang = "en-US"
link = "/"

[locales.fr]
label = "Français"
lang = "fr-FR"
link = "/fr/""#,
        );
        assert_eq!(config.locales.len(), 2);

        let (key, root) = root_locale(&config.locales).unwrap();
        assert_eq!(key, "root");
        assert!(root.is_root());

        let fr = &config.locales["fr"];
        assert!(!fr.is_root());
        assert_eq!(fr.link, "/fr/");
        assert_eq!(fr.lang, "fr-FR");
    }

    #[test]
    fn test_locale_nav_override_kept_verbatim() {
        let config = test_parse_config(
            r#"[locales.root]
label = "English"
lang = "en-US"
link = "/"

[locales.fr]
label = "Français"
lang = "fr-FR"
link = "/fr/"

[[locales.fr.nav]]
text = "Guide"
link = "/fr/guide/""#,
        );
        let fr = &config.locales["fr"];
        assert_eq!(fr.nav.len(), 1);
        assert_eq!(fr.nav[0].link.as_deref(), Some("/fr/guide/"));
        // Root locale keeps no override
        assert!(config.locales["root"].nav.is_empty());
    }

    #[test]
    fn test_no_root_locale() {
        let config = test_parse_config(
            r#"[locales.fr]
label = "Français"
lang = "fr-FR"
link = "/fr/""#,
        );
        assert!(root_locale(&config.locales).is_none());
    }
}
