//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Docs"
//! description = "Project documentation"
//! url = "https://example.github.io/my-docs"
//!
//! [site.head]
//! icon = "images/favicon.ico"
//! theme_color = "#3eaf7c"
//!
//! [site.footer]
//! message = "Released under the MIT License."
//! social = [{ icon = "github", link = "https://github.com/my-org/my-docs" }]
//! ```

mod footer;
mod head;
mod info;

pub use footer::FooterConfig;
pub use head::HeadConfig;
pub use info::SiteInfoConfig;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration: metadata, head tags, footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, description, url, language).
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Custom `<head>` elements (favicon, theme color).
    #[config(sub)]
    pub head: HeadConfig,

    /// Footer text and social links.
    #[config(sub)]
    pub footer: FooterConfig,
}
