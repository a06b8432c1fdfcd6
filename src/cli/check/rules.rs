//! Structural rules for nav, sidebar and locale entries.
//!
//! Each rule walks one descriptor area and returns findings addressed
//! by index path (e.g. `nav[1].items[0].link`). The caller decides the
//! level each finding is reported at.

use std::collections::BTreeMap;

use crate::config::section::locale::{LocaleConfig, ROOT_LINK};
use crate::config::{NavItem, NavItemKind, SidebarGroup};
use crate::utils::route::{is_external_link, is_route_prefix};

use super::report::CheckFinding;

fn finding(target: impl Into<String>, reason: impl Into<String>) -> CheckFinding {
    CheckFinding {
        target: target.into(),
        reason: reason.into(),
    }
}

// ============================================================================
// nav
// ============================================================================

/// Check a nav tree: entry shape and link format.
///
/// # Rules
/// - `text` must not be empty
/// - every entry is a leaf (`link`) or a group (`items`), never both or neither
/// - leaf links are site-absolute (start with `/`) or parseable URLs
pub fn check_nav(items: &[NavItem]) -> Vec<CheckFinding> {
    let mut findings = Vec::new();
    walk_nav(items, "nav", &mut findings);
    findings
}

fn walk_nav(items: &[NavItem], prefix: &str, findings: &mut Vec<CheckFinding>) {
    for (i, item) in items.iter().enumerate() {
        let target = format!("{prefix}[{i}]");

        if item.text.is_empty() {
            findings.push(finding(format!("{target}.text"), "must not be empty"));
        }

        match item.kind() {
            NavItemKind::Leaf(link) => check_link(&format!("{target}.link"), link, findings),
            NavItemKind::Group(children) => {
                walk_nav(children, &format!("{target}.items"), findings);
            }
            NavItemKind::Malformed => {
                findings.push(finding(
                    target,
                    "must set exactly one of `link` or `items`",
                ));
            }
        }
    }
}

/// A nav link is site-absolute or a parseable external URL.
fn check_link(target: &str, link: &str, findings: &mut Vec<CheckFinding>) {
    if link.is_empty() {
        findings.push(finding(target, "must not be empty"));
    } else if is_external_link(link) {
        if url::Url::parse(link).is_err() {
            findings.push(finding(target, format!("`{link}` is not a valid URL")));
        }
    } else if !link.starts_with('/') {
        findings.push(finding(
            target,
            format!("`{link}` must start with '/' or be a full URL"),
        ));
    }
}

// ============================================================================
// sidebar
// ============================================================================

/// Check sidebar groups: route shape and link coverage.
///
/// # Rules
/// - `route` must be slash-wrapped
/// - routes must be unique within one sidebar
/// - item `text` must not be empty
/// - every item link must start with the group's route
pub fn check_sidebar(groups: &[SidebarGroup]) -> Vec<CheckFinding> {
    let mut findings = Vec::new();
    let mut seen_routes: BTreeMap<&str, usize> = BTreeMap::new();

    for (i, group) in groups.iter().enumerate() {
        let target = format!("sidebar[{i}]");

        if !is_route_prefix(&group.route) {
            findings.push(finding(
                format!("{target}.route"),
                format!("`{}` must start and end with '/'", group.route),
            ));
        }

        if let Some(first) = seen_routes.insert(&group.route, i) {
            findings.push(finding(
                format!("{target}.route"),
                format!("`{}` already declared at sidebar[{first}]", group.route),
            ));
        }

        for (j, section) in group.items.iter().enumerate() {
            let target = format!("{target}.items[{j}]");

            if section.text.is_empty() {
                findings.push(finding(format!("{target}.text"), "must not be empty"));
            }

            if !section.link.starts_with(group.route.as_str()) {
                findings.push(finding(
                    format!("{target}.link"),
                    format!("`{}` is outside route `{}`", section.link, group.route),
                ));
            }
        }
    }

    findings
}

// ============================================================================
// locales
// ============================================================================

/// Check locale definitions.
///
/// Locales are optional: an empty map is valid and checks nothing.
///
/// # Rules
/// - `label` and `lang` must not be empty
/// - `link` must be slash-wrapped
/// - exactly one locale is the root locale (`link = "/"`)
/// - non-root locales use their own unique `/<code>/` prefix
pub fn check_locales(locales: &BTreeMap<String, LocaleConfig>) -> Vec<CheckFinding> {
    if locales.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();
    let mut roots = Vec::new();
    let mut seen_links: BTreeMap<&str, &str> = BTreeMap::new();

    for (key, locale) in locales {
        let target = format!("locales.{key}");

        if locale.label.is_empty() {
            findings.push(finding(format!("{target}.label"), "must not be empty"));
        }
        if locale.lang.is_empty() {
            findings.push(finding(format!("{target}.lang"), "must not be empty"));
        }

        if !is_route_prefix(&locale.link) {
            findings.push(finding(
                format!("{target}.link"),
                format!("`{}` must start and end with '/'", locale.link),
            ));
            continue;
        }

        if locale.is_root() {
            roots.push(key.as_str());
            continue;
        }

        // Non-root locales claim /<code>/
        let expected = format!("/{key}/");
        if locale.link != expected {
            findings.push(finding(
                format!("{target}.link"),
                format!("`{}` must be `{expected}` for this locale", locale.link),
            ));
        }

        if let Some(other) = seen_links.insert(locale.link.as_str(), key.as_str()) {
            findings.push(finding(
                format!("{target}.link"),
                format!("`{}` already used by locales.{other}", locale.link),
            ));
        }
    }

    match roots.len() {
        0 => findings.push(finding(
            "locales".to_string(),
            format!("no root locale: exactly one locale must use link = \"{ROOT_LINK}\""),
        )),
        1 => {}
        _ => {
            for key in &roots[1..] {
                findings.push(finding(
                    format!("locales.{key}.link"),
                    format!("root locale already declared as locales.{}", roots[0]),
                ));
            }
        }
    }

    findings
}

// ============================================================================
// Tests
// ============================================================================
