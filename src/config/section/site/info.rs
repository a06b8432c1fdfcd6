//! `[site.info]` configuration.
//!
//! Basic site metadata: title, description, deployment URL, language.
//! These values are passed through to the consuming generator unchanged.

use macros::Config;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Site metadata injected into the emitted descriptor.
/// For custom fields, use `[site.info.extra]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Site description.
    #[config(inline_doc)]
    pub description: String,

    /// Deployment URL, path used as base prefix (e.g., "https://example.github.io/my-docs").
    #[config(inline_doc)]
    pub url: Option<String>,

    /// Default language tag (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc)]
    pub language: String,

    /// Old location of the deployment base path; use `[build] base` instead.
    #[config(status = deprecated)]
    pub base: Option<String>,

    /// Custom fields forwarded verbatim to the generator.
    #[serde(default)]
    #[config(skip)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            language: "en".into(),
            base: None,
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.language, "en");
        assert!(config.site.info.url.is_none());
        assert!(config.site.info.extra.is_empty());
    }

    #[test]
    fn test_valid_url() {
        let config =
            test_parse_config("[site.info]\nurl = \"https://example.github.io/my-docs\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_invalid_url_scheme() {
        let config = test_parse_config("[site.info]\nurl = \"ftp://example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_unparseable_url() {
        let config = test_parse_config("[site.info]\nurl = \"not a url\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_extra_fields() {
        let config = test_parse_config("[site.info.extra]\nrepo = \"docfig/docfig\"");
        assert_eq!(
            config.site.info.extra.get("repo").and_then(|v| v.as_str()),
            Some("docfig/docfig")
        );
    }

    #[test]
    fn test_deprecated_base_warns() {
        let config = test_parse_config("[site.info]\nbase = \"/docs/\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate_field_status(&mut diag);
        // Deprecated fields warn, they do not error
        assert!(!diag.has_errors());
    }
}
