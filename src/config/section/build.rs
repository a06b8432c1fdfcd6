//! `[build]` descriptor output and base path settings.
//!
//! The base path is environment-dependent: development uses `base`
//! (defaults to `/`), production derives the prefix from the path
//! component of `site.info.url` (e.g. GitHub Pages project sites).
//!
//! # Example
//!
//! ```toml
//! [build]
//! base = "/"
//! output = "descriptor.json"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::utils::route::is_route_prefix;

/// Build settings for descriptor emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Base public path during development (slash-wrapped).
    #[config(default = "/")]
    pub base: String,

    /// Output path for the emitted descriptor (relative to project root).
    #[config(default = "descriptor.json")]
    pub output: PathBuf,

    /// URL path prefix extracted from site.info.url (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub path_prefix: String,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            base: "/".into(),
            output: PathBuf::from("descriptor.json"),
            path_prefix: String::new(),
        }
    }
}

impl BuildSectionConfig {
    /// Resolve the deployment base path for the selected environment.
    ///
    /// Production prefers the prefix derived from `site.info.url`;
    /// development always uses `base`.
    pub fn resolved_base(&self, production: bool) -> String {
        if production && !self.path_prefix.is_empty() {
            format!("/{}/", self.path_prefix.trim_matches('/'))
        } else {
            self.base.clone()
        }
    }

    /// Validate build settings.
    ///
    /// # Checks
    /// - `base` must be slash-wrapped (`/` or `/prefix/`)
    /// - `output` must not be empty
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_route_prefix(&self.base) {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("'{}' must start and end with '/'", self.base),
                "use format like \"/\" or \"/docs/\"",
            );
        }

        if self.output.as_os_str().is_empty() {
            diag.error(Self::FIELDS.output, "output path must not be empty");
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
        assert_eq!(config.build.base, "/");
        assert_eq!(config.build.output, PathBuf::from("descriptor.json"));
        assert!(config.build.path_prefix.is_empty());
    }

    #[test]
    fn test_resolved_base_development() {
        let mut build = BuildSectionConfig::default();
        build.path_prefix = "my-docs".into();
        // Development ignores the derived prefix
        assert_eq!(build.resolved_base(false), "/");
        assert_eq!(build.resolved_base(true), "/my-docs/");
    }

    #[test]
    fn test_resolved_base_without_prefix() {
        let build = BuildSectionConfig::default();
        assert_eq!(build.resolved_base(true), "/");
    }

    #[test]
    fn test_base_must_be_slash_wrapped() {
        let config = test_parse_config("[build]\nbase = \"/docs\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
