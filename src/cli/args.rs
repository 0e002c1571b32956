//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. `depstrap <OS>` is shorthand
//! for `depstrap install <OS>`.

use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// depstrap - Install native build dependencies for a CI agent.
#[derive(Debug, Parser)]
#[command(name = "depstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(flatten)]
    pub target: InstallArgs,

    #[command(flatten)]
    pub install: InstallFlags,

    /// Show each command before it runs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
///
/// Subcommand names are reserved words, never OS identifiers.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install native packages for an OS identifier
    Install(InstallArgs),

    /// List recognized OS identifiers and their packages
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// The OS to install for, on the top level or on `install`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// OS identifier from the CI job matrix (ubuntu-latest, macos-latest)
    #[arg(value_name = "OS")]
    pub os: Option<String>,
}

impl InstallArgs {
    /// The OS token, with a missing argument read as the empty token.
    pub fn token(&self) -> &str {
        self.os.as_deref().unwrap_or("")
    }
}

/// Install behavior flags.
///
/// Global, so they apply wherever they appear on the command line. The
/// environment fallbacks accept `1`/`0`, `true`/`false`, `yes`/`no` and
/// `on`/`off`.
#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct InstallFlags {
    /// Print the commands without running them
    #[arg(
        long,
        global = true,
        env = "DEPSTRAP_DRY_RUN",
        value_parser = BoolishValueParser::new()
    )]
    pub dry_run: bool,

    /// Refresh the package index before installing
    #[arg(
        long,
        global = true,
        env = "DEPSTRAP_UPDATE",
        value_parser = BoolishValueParser::new()
    )]
    pub update: bool,

    /// Never prefix package manager commands with sudo
    #[arg(
        long,
        global = true,
        env = "DEPSTRAP_NO_SUDO",
        value_parser = BoolishValueParser::new()
    )]
    pub no_sudo: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_os_argument() {
        let cli = Cli::parse_from(["depstrap", "ubuntu-latest"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.target.token(), "ubuntu-latest");
        assert!(!cli.install.dry_run);
    }

    #[test]
    fn bare_os_with_flags() {
        let cli = Cli::parse_from(["depstrap", "--dry-run", "--update", "macos-latest"]);
        assert_eq!(cli.target.token(), "macos-latest");
        assert!(cli.install.dry_run);
        assert!(cli.install.update);
    }

    #[test]
    fn missing_os_is_empty_token() {
        let cli = Cli::parse_from(["depstrap"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.target.token(), "");
    }

    #[test]
    fn empty_os_argument_is_accepted() {
        let cli = Cli::parse_from(["depstrap", ""]);
        assert_eq!(cli.target.os.as_deref(), Some(""));
    }

    #[test]
    fn install_subcommand() {
        let cli = Cli::parse_from(["depstrap", "install", "ubuntu-latest", "--no-sudo"]);
        match cli.command {
            Some(Commands::Install(args)) => assert_eq!(args.token(), "ubuntu-latest"),
            other => panic!("Expected Install command, got {other:?}"),
        }
        assert!(cli.install.no_sudo);
    }

    #[test]
    fn flags_before_install_subcommand_apply() {
        let cli = Cli::parse_from([
            "depstrap",
            "--dry-run",
            "--update",
            "install",
            "ubuntu-latest",
        ]);
        assert!(matches!(cli.command, Some(Commands::Install(_))));
        assert!(cli.install.dry_run);
        assert!(cli.install.update);
    }

    #[test]
    fn flags_after_install_subcommand_apply() {
        let cli = Cli::parse_from(["depstrap", "install", "--dry-run", "ubuntu-latest"]);
        assert!(cli.install.dry_run);
        assert!(!cli.install.update);
    }

    #[test]
    fn list_subcommand_with_json() {
        let cli = Cli::parse_from(["depstrap", "list", "--json"]);
        match cli.command {
            Some(Commands::List(args)) => assert!(args.json),
            other => panic!("Expected List command, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["depstrap", "list", "--quiet", "--debug"]);
        assert!(cli.quiet);
        assert!(cli.debug);
    }

    #[test]
    fn help_is_an_os_token_not_a_subcommand() {
        let cli = Cli::parse_from(["depstrap", "help"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.target.token(), "help");
    }

    #[test]
    fn reserved_subcommand_names() {
        let cli = Cli::parse_from(["depstrap", "list"]);
        assert!(matches!(cli.command, Some(Commands::List(_))));

        let cli = Cli::parse_from(["depstrap", "install"]);
        match cli.command {
            Some(Commands::Install(args)) => assert_eq!(args.token(), ""),
            other => panic!("Expected Install command, got {other:?}"),
        }

        let err = Cli::try_parse_from(["depstrap", "completions"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["depstrap", "ubuntu-latest", "macos-latest"]).is_err());
    }
}
