//! `[[nav]]` top-level navigation entries.
//!
//! A nav entry is either a leaf (has `link`) or a dropdown group
//! (has nested `items`). Groups may nest further groups.
//!
//! # Example
//!
//! ```toml
//! [[nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[nav]]
//! text = "Community"
//! items = [
//!     { text = "Chat", link = "https://discord.example.com" },
//!     { text = "Contributing", link = "/contributing" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// A single navigation entry: leaf link or dropdown group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    /// Label shown in the navigation bar.
    pub text: String,

    /// Target for a leaf entry. Site-absolute (`/guide/`) or external URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Child entries for a dropdown group. A group has no `link`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavItem>,
}

/// Structural classification of a nav entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavItemKind<'a> {
    /// Entry with a `link` and no children.
    Leaf(&'a str),
    /// Entry with children and no `link`.
    Group(&'a [NavItem]),
    /// Entry violating the leaf/group invariant.
    Malformed,
}

impl NavItem {
    /// Classify this entry as leaf, group, or malformed.
    ///
    /// Leaf: `link` set, `items` empty. Group: `items` non-empty, no `link`.
    /// Anything else (both set, neither set) is malformed.
    pub fn kind(&self) -> NavItemKind<'_> {
        match (&self.link, self.items.is_empty()) {
            (Some(link), true) => NavItemKind::Leaf(link),
            (None, false) => NavItemKind::Group(&self.items),
            _ => NavItemKind::Malformed,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind(), NavItemKind::Leaf(_))
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind(), NavItemKind::Group(_))
    }
}

/// Count all leaf entries in a nav tree (groups descend).
pub fn leaf_count(items: &[NavItem]) -> usize {
    items
        .iter()
        .map(|item| match item.kind() {
            NavItemKind::Leaf(_) => 1,
            NavItemKind::Group(children) => leaf_count(children),
            NavItemKind::Malformed => 0,
        })
        .sum()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_nav_default_empty() {
        let config = test_parse_config("");
        assert!(config.nav.is_empty());
    }

    #[test]
    fn test_nav_leaf() {
        let config = test_parse_config("[[nav]]\ntext = \"Guide\"\nlink = \"/guide/\"");
        assert_eq!(config.nav.len(), 1);
        assert!(config.nav[0].is_leaf());
        assert_eq!(config.nav[0].kind(), NavItemKind::Leaf("/guide/"));
    }

    #[test]
    fn test_nav_group() {
        let config = test_parse_config(
            r#"[[nav]]
text = "Community"
items = [
    { text = "Chat", link = "https://chat.example.com" },
    { text = "Team", link = "/team/" },
]"#,
        );
        assert_eq!(config.nav.len(), 1);
        assert!(config.nav[0].is_group());
        match config.nav[0].kind() {
            NavItemKind::Group(items) => assert_eq!(items.len(), 2),
            other => panic!("expected group, got {other:?}"),
        }
    }

    #[test]
    fn test_nav_malformed_both() {
        // Both link and items set: malformed
        let config = test_parse_config(
            r#"[[nav]]
text = "Broken"
link = "/broken/"
items = [{ text = "Child", link = "/child/" }]"#,
        );
        assert_eq!(config.nav[0].kind(), NavItemKind::Malformed);
    }

    #[test]
    fn test_nav_malformed_neither() {
        let config = test_parse_config("[[nav]]\ntext = \"Empty\"");
        assert_eq!(config.nav[0].kind(), NavItemKind::Malformed);
        assert!(!config.nav[0].is_leaf());
        assert!(!config.nav[0].is_group());
    }

    #[test]
    fn test_leaf_count_nested() {
        let config = test_parse_config(
            r#"[[nav]]
text = "Guide"
link = "/guide/"

[[nav]]
text = "More"
items = [
    { text = "A", link = "/a/" },
    { text = "Sub", items = [{ text = "B", link = "/b/" }] },
]"#,
        );
        assert_eq!(leaf_count(&config.nav), 3);
    }
}
