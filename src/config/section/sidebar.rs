//! `[[sidebar]]` sidebar groups keyed by route prefix.
//!
//! Each group declares the route prefix it is shown under and an ordered
//! list of sections. Declaration order is preserved through serialization,
//! which is why this is an array of tables rather than a TOML table keyed
//! by route.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! route = "/guide/"
//! text = "Guide"
//! items = [
//!     { text = "Getting Started", link = "/guide/getting-started" },
//!     { text = "Configuration", link = "/guide/configuration" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// Sidebar sections shown under one route prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Route prefix this group applies to (slash-wrapped, e.g. `/guide/`).
    pub route: String,

    /// Optional group heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Ordered sections. Every link must start with `route`.
    #[serde(default)]
    pub items: Vec<SidebarSection>,
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarSection {
    /// Label shown in the sidebar.
    pub text: String,

    /// Site-absolute link, prefixed by the group's route.
    pub link: String,
}

/// Look up the sections declared for an exact route prefix.
pub fn sections_for<'a>(groups: &'a [SidebarGroup], route: &str) -> Option<&'a [SidebarSection]> {
    groups
        .iter()
        .find(|g| g.route == route)
        .map(|g| g.items.as_slice())
}

/// Find the group whose route is the longest prefix of `path`.
///
/// This is the lookup a generator performs per page: `/guide/install`
/// matches `/guide/` over `/`.
pub fn group_for<'a>(groups: &'a [SidebarGroup], path: &str) -> Option<&'a SidebarGroup> {
    groups
        .iter()
        .filter(|g| path.starts_with(g.route.as_str()))
        .max_by_key(|g| g.route.len())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn sample() -> Vec<SidebarGroup> {
        let config = test_parse_config(
            r#"[[sidebar]]
route = "/guide/"
items = [
    { text = "Intro", link = "/guide/intro" },
    { text = "Setup", link = "/guide/setup" },
]

[[sidebar]]
route = "/guide/advanced/"
items = [{ text = "Plugins", link = "/guide/advanced/plugins" }]

[[sidebar]]
route = "/reference/"
items = [{ text = "CLI", link = "/reference/cli" }]"#,
        );
        config.sidebar
    }

    #[test]
    fn test_sections_for_exact_route() {
        let groups = sample();
        let sections = sections_for(&groups, "/guide/").unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "Intro");
        assert!(sections_for(&groups, "/missing/").is_none());
    }

    #[test]
    fn test_group_for_longest_prefix() {
        let groups = sample();

        let group = group_for(&groups, "/guide/setup").unwrap();
        assert_eq!(group.route, "/guide/");

        // Deeper prefix wins over the shorter one
        let group = group_for(&groups, "/guide/advanced/plugins").unwrap();
        assert_eq!(group.route, "/guide/advanced/");

        assert!(group_for(&groups, "/blog/post").is_none());
    }

    #[test]
    fn test_group_heading_optional() {
        let config = test_parse_config(
            "[[sidebar]]\nroute = \"/guide/\"\ntext = \"Guide\"\nitems = []",
        );
        assert_eq!(config.sidebar[0].text.as_deref(), Some("Guide"));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let groups = sample();
        let routes: Vec<&str> = groups.iter().map(|g| g.route.as_str()).collect();
        assert_eq!(routes, ["/guide/", "/guide/advanced/", "/reference/"]);
    }
}
