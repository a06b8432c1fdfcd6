//! Descriptor check command.

mod report;
mod rules;

use anyhow::Result;

use crate::config::{CheckLevel, SiteConfig};
use crate::log;
use crate::utils::{plural_count, plural_s};

use report::CheckReport;

/// Check the descriptor for structural problems
///
/// Runs the enabled check categories over the top-level nav, sidebar and
/// locales, plus every per-locale nav/sidebar override. Error-level
/// findings fail the command; warn-level findings are reported only.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    let settings = &config.check;

    if !settings.nav.enable && !settings.sidebar.enable && !settings.locales.enable {
        log!("check"; "no checks enabled");
        return Ok(());
    }

    let mut report = CheckReport::default();

    if settings.nav.enable {
        check_nav_everywhere(config, settings.nav.level, &mut report);
    }

    if settings.sidebar.enable {
        check_sidebar_everywhere(config, settings.sidebar.level, &mut report);
    }

    if settings.locales.enable {
        report.add(
            settings.locales.level,
            "locales",
            rules::check_locales(&config.locales),
        );
        log_result("locales", config.locales.len(), "locale", &report);
    }

    report.print();

    eprintln!("\n{report}");

    if report.has_errors() {
        let count = report.error_count();
        anyhow::bail!("check failed: {} error{}", count, plural_s(count));
    }
    Ok(())
}

/// Check the top-level nav and every per-locale nav override.
fn check_nav_everywhere(config: &SiteConfig, level: CheckLevel, report: &mut CheckReport) {
    let entry_count = crate::config::section::nav::leaf_count(&config.nav);

    report.add(level, "nav", rules::check_nav(&config.nav));

    for (key, locale) in &config.locales {
        if !locale.nav.is_empty() {
            report.add(
                level,
                &format!("locales.{key}.nav"),
                rules::check_nav(&locale.nav),
            );
        }
    }

    log_result("nav", entry_count, "item", report);
}

/// Check the top-level sidebar and every per-locale sidebar override.
fn check_sidebar_everywhere(config: &SiteConfig, level: CheckLevel, report: &mut CheckReport) {
    report.add(level, "sidebar", rules::check_sidebar(&config.sidebar));

    for (key, locale) in &config.locales {
        if !locale.sidebar.is_empty() {
            report.add(
                level,
                &format!("locales.{key}.sidebar"),
                rules::check_sidebar(&locale.sidebar),
            );
        }
    }

    log_result("sidebar", config.sidebar.len(), "group", report);
}

/// Log a per-category result line.
fn log_result(category: &str, count: usize, noun: &str, report: &CheckReport) {
    let failed: usize = report
        .errors
        .iter()
        .chain(report.warnings.iter())
        .filter(|(scope, _)| scope.as_str() == category || scope.ends_with(&format!(".{category}")))
        .map(|(_, v)| v.len())
        .sum();

    if failed > 0 {
        log!("check"; "{category}: found {} finding{}", failed, plural_s(failed));
    } else {
        log!("check"; "{category}: checked {}", plural_count(count, noun));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_check_site_clean_config() {
        let config = test_parse_config(
            r#"[[nav]]
text = "Guide"
link = "/guide/"

[[sidebar]]
route = "/guide/"
items = [{ text = "Intro", link = "/guide/intro" }]

[locales.root]
label = "English"
lang = "en-US"
link = "/""#,
        );
        assert!(check_site(&config).is_ok());
    }

    #[test]
    fn test_check_site_error_fails() {
        let config = test_parse_config("[[nav]]\ntext = \"Broken\"");
        assert!(check_site(&config).is_err());
    }

    #[test]
    fn test_warn_level_does_not_fail() {
        let config = test_parse_config(
            r#"[check.nav]
level = "warn"

[[nav]]
text = "Broken""#,
        );
        assert!(check_site(&config).is_ok());
    }

    #[test]
    fn test_disabled_category_skipped() {
        let config = test_parse_config(
            r#"[check.nav]
enable = false

[[nav]]
text = "Broken""#,
        );
        assert!(check_site(&config).is_ok());
    }

    #[test]
    fn test_locale_override_checked() {
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
text = "Broken""#,
        );
        assert!(check_site(&config).is_err());
    }
}
