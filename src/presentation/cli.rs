//! CLI Argument Parsing
//!
//! `deploy [APP_NAME] [RESOURCE_GROUP]`: both positionals are optional and
//! fall back to the configured target when absent or empty.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Set the runtime, publish and restart a Python Azure Function app
#[derive(Parser, Debug)]
#[command(name = "deploy")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Publishes the current working directory. A failed restart is reported as a warning and does not fail the deploy."
)]
pub struct Cli {
    /// Function app name [default: az-ss-sync]
    pub app_name: Option<String>,

    /// Resource group containing the app [default: phx-sh-automation-us-1]
    pub resource_group: Option<String>,

    /// Emit NDJSON events instead of status lines
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Print the platform commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Config file to use instead of ./funcship.toml or the user config
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v echoes each platform command)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
