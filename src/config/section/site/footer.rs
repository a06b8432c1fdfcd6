//! `[site.footer]` footer text and social links.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Footer content shown on every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.footer")]
pub struct FooterConfig {
    /// Footer message.
    #[config(inline_doc)]
    pub message: String,

    /// Copyright notice.
    #[config(inline_doc)]
    pub copyright: String,

    /// Social links shown in the footer/nav bar.
    #[config(skip)]
    pub social: Vec<SocialLink>,
}

/// A social link: icon name plus target URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon identifier the generator's theme understands (e.g. "github").
    pub icon: String,

    /// Absolute URL of the profile/page.
    pub link: String,
}

impl FooterConfig {
    /// Validate footer settings.
    ///
    /// # Checks
    /// - Each social link must be a valid http(s) URL
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, social) in self.social.iter().enumerate() {
            let valid = url::Url::parse(&social.link)
                .is_ok_and(|u| matches!(u.scheme(), "http" | "https"));
            if !valid {
                diag.error_with_hint(
                    FieldPath::dynamic(format!("site.footer.social[{i}].link")),
                    format!("'{}' is not a valid http(s) URL", social.link),
                    "use format like https://github.com/your-org",
                );
            }
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
        assert!(config.site.footer.message.is_empty());
        assert!(config.site.footer.social.is_empty());
    }

    #[test]
    fn test_social_links() {
        let config = test_parse_config(
            r#"[site.footer]
message = "Released under the MIT License."
copyright = "Copyright © 2026"
social = [
    { icon = "github", link = "https://github.com/docfig/docfig" },
    { icon = "discord", link = "https://discord.example.com" },
]"#,
        );
        assert_eq!(config.site.footer.social.len(), 2);

        let mut diag = ConfigDiagnostics::new();
        config.site.footer.validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_social_link_must_be_http() {
        let config = test_parse_config(
            r#"[site.footer]
social = [{ icon = "github", link = "/not-a-url" }]"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.site.footer.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
