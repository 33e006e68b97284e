use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "doclint", version, about = "Documentation lint rules for parsed schema files")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Directory holding doclint.json
    #[arg(long, global = true, env = "DOCLINT_CONFIG_DIR", default_value = ".doclint")]
    pub config_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Lint parsed-file descriptors (files or directories of *.json)
    Lint {
        /// Descriptor files or directories to lint
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Do not run a lint ID (repeatable)
        #[arg(long)]
        disable: Vec<String>,
        /// Report a lint ID as suppressed INFO (repeatable)
        #[arg(long)]
        suppress: Vec<String>,
        /// Report a lint ID as WARNING instead of ERROR (repeatable)
        #[arg(long)]
        warn: Vec<String>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },

    /// List every registered lint rule
    Rules,
}
