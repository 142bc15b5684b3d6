use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{build_command, init_command, log_command, sessions_command};

#[derive(Parser, Debug)]
#[command(name = "buildpanel")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize buildpanel configuration
    Init {
        /// Specify the current working directory
        #[arg(short, long)]
        cwd: Option<String>,

        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Build the solution and record the build session
    #[command(visible_alias = "b")]
    Build {
        /// Build configuration (defaults to the configured default, e.g. Debug)
        #[arg(short, long)]
        configuration: Option<String>,
    },
    /// List recorded build sessions, most recent first
    #[command(visible_alias = "ls")]
    Sessions {
        /// Show the warnings and errors of the session at this index
        #[arg(short, long)]
        show: Option<usize>,

        /// Hide warnings in the shown session (remembered per session)
        #[arg(long, requires = "show", conflicts_with = "show_warnings")]
        hide_warnings: bool,

        /// Show warnings in the shown session again
        #[arg(long, requires = "show")]
        show_warnings: bool,

        /// Hide errors in the shown session (remembered per session)
        #[arg(long, requires = "show", conflicts_with = "show_errors")]
        hide_errors: bool,

        /// Show errors in the shown session again
        #[arg(long, requires = "show")]
        show_errors: bool,

        /// Forget all recorded sessions
        #[arg(long, conflicts_with = "show")]
        clear: bool,
    },
    /// Open the build log of a session
    Log {
        /// Session index as listed by `sessions` (defaults to the most recent)
        index: Option<usize>,

        /// Print the log instead of opening it
        #[arg(short, long)]
        print: bool,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
            Commands::Build { configuration } => build_command(configuration.as_deref()),
            Commands::Sessions {
                show,
                hide_warnings,
                show_warnings,
                hide_errors,
                show_errors,
                clear,
            } => sessions_command(
                show,
                toggle(show_warnings, hide_warnings),
                toggle(show_errors, hide_errors),
                clear,
            ),
            Commands::Log { index, print } => log_command(index, print),
        }
    }
}

/// Requested visibility for a show/hide flag pair; `None` leaves it unchanged
fn toggle(show: bool, hide: bool) -> Option<bool> {
    match (show, hide) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
