//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Docfig site descriptor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docfig.toml)
    #[arg(short = 'C', long, default_value = "docfig.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new docfig.toml from template
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Check the descriptor for structural problems
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Query descriptor values as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Emit the resolved descriptor as JSON
    #[command(visible_alias = "e")]
    Emit {
        #[command(flatten)]
        args: EmitArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Check nav entries (leaf/group shape, link format)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub nav: Option<bool>,

    /// Check sidebar groups (route prefix covers every link)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sidebar: Option<bool>,

    /// Check locales (single root, unique prefixes)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub locales: Option<bool>,

    /// Treat check failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Dot paths to query (e.g. site.info.title, nav[0].link).
    /// If omitted, prints the whole descriptor.
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter out null/empty values from output
    #[arg(short = 'E', long)]
    pub filter_empty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Emit command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EmitArgs {
    /// Resolve the base path for production deployment.
    ///
    /// Uses the path component of `site.info.url` as the base prefix
    /// (e.g. GitHub Pages project sites).
    #[arg(short = 'P', long)]
    pub production: bool,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from local development.
    /// This avoids modifying docfig.toml, keeping the source file clean.
    ///
    /// Example: Deploying to GitHub Pages project site (example.github.io/my-docs):
    ///   docfig emit --production --site-url "https://example.github.io/my-docs"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of `build.output`
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
    pub const fn is_emit(&self) -> bool {
        matches!(self.command, Commands::Emit { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        // Catches flag collisions (e.g. a short that clashes with the
        // auto-generated -V/--version) at test time instead of first run
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_long_only() {
        let cli = Cli::try_parse_from(["docfig", "check", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.is_check());

        // -V stays reserved for the version flag
        assert!(Cli::try_parse_from(["docfig", "-V", "check"]).is_err());
    }

    #[test]
    fn test_check_flag_overrides() {
        let cli = Cli::try_parse_from(["docfig", "check", "--nav", "false", "-w"]).unwrap();
        match cli.command {
            Commands::Check { args } => {
                assert_eq!(args.nav, Some(false));
                assert!(args.warn_only);
                assert!(args.sidebar.is_none());
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }
}
