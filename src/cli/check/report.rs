//! Check report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::config::CheckLevel;
use crate::utils::plural_s;

/// A single check finding
#[derive(Debug, Clone)]
pub struct CheckFinding {
    /// The entry that failed (e.g. `nav[0].link`).
    pub target: String,
    /// Failure reason/message.
    pub reason: String,
}

/// Unified check report, findings grouped by descriptor scope.
///
/// The scope is the TOML location the findings belong to: `nav`,
/// `sidebar`, `locales`, or a per-locale override like `locales.fr.nav`.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Error-level findings, grouped by scope.
    pub errors: BTreeMap<String, Vec<CheckFinding>>,
    /// Warning-level findings, grouped by scope.
    pub warnings: BTreeMap<String, Vec<CheckFinding>>,
}

impl CheckReport {
    /// Add findings under a scope at the given level.
    pub fn add(&mut self, level: CheckLevel, scope: &str, findings: Vec<CheckFinding>) {
        if findings.is_empty() {
            return;
        }
        let group = match level {
            CheckLevel::Error => &mut self.errors,
            CheckLevel::Warn => &mut self.warnings,
        };
        group.entry(scope.to_string()).or_default().extend(findings);
    }

    /// Total error-level finding count.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(|v| v.len()).sum()
    }

    /// Total warning-level finding count.
    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(|v| v.len()).sum()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Print the full report to stderr (errors -> warnings).
    pub fn print(&self) {
        self.print_section("errors", &self.errors, true);
        self.print_section("warnings", &self.warnings, false);
    }

    fn print_section(
        &self,
        name: &str,
        findings: &BTreeMap<String, Vec<CheckFinding>>,
        is_error: bool,
    ) {
        if findings.is_empty() {
            return;
        }
        eprintln!();

        let count: usize = findings.values().map(|v| v.len()).sum();
        let header = if is_error {
            name.red().bold().to_string()
        } else {
            name.yellow().bold().to_string()
        };
        eprintln!(
            "{} {}",
            header,
            format!("({count} finding{})", plural_s(count)).dimmed()
        );

        for (scope, entries) in findings {
            // Descriptor scope
            eprintln!("{}{}{}", "[".dimmed(), scope.cyan(), "]".dimmed());
            for e in entries {
                if e.reason.is_empty() {
                    eprintln!("{} {}", "→".red(), e.target);
                } else {
                    eprintln!("{} {} {}", "→".red(), e.target, e.reason);
                }
            }
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.error_count();
        let warnings = self.warning_count();

        if errors + warnings == 0 {
            write!(f, "{}", "all checks passed".green())
        } else if errors == 0 {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                warnings.to_string().yellow().bold(),
                format!("warning{}", plural_s(warnings)).dimmed()
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                errors.to_string().red().bold(),
                format!("error{}", plural_s(errors)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(target: &str) -> Vec<CheckFinding> {
        vec![CheckFinding {
            target: target.to_string(),
            reason: "broken".to_string(),
        }]
    }

    #[test]
    fn test_empty_findings_not_recorded() {
        let mut report = CheckReport::default();
        report.add(CheckLevel::Error, "nav", Vec::new());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_level_routing() {
        let mut report = CheckReport::default();
        report.add(CheckLevel::Error, "nav", finding("nav[0]"));
        report.add(CheckLevel::Warn, "sidebar", finding("sidebar[1]"));

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn test_findings_grouped_by_scope() {
        let mut report = CheckReport::default();
        report.add(CheckLevel::Error, "locales.fr.nav", finding("nav[0]"));
        report.add(CheckLevel::Error, "locales.fr.nav", finding("nav[1]"));

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.error_count(), 2);
    }
}
