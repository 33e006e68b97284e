//! doclint CLI: documentation lint rules for parsed schema files.
//!
//! This binary provides the `doclint` command with subcommands for linting
//! descriptor files and listing rules. See `doclint --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;
mod logging;

use cli_args::{Cli, Commands};
use commands::lint::RuleFlags;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let formatter: Box<dyn doclint_output::OutputFormatter> = if cli.json {
        Box::new(doclint_output::json::JsonFormatter)
    } else {
        Box::new(doclint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Lint {
            paths,
            disable,
            suppress,
            warn,
            strict,
        } => commands::lint::run(
            &*formatter,
            &cli.config_dir,
            paths,
            RuleFlags {
                disable,
                suppress,
                warn,
            },
            strict,
        ),
        Commands::Rules => commands::rules::run(&*formatter, &cli.config_dir),
    };

    std::process::exit(exit_code);
}
