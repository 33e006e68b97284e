//! Tracing setup for the doclint binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map `-v` occurrences to a default filter. `RUST_LOG` takes precedence.
pub(crate) fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,doclint_core=debug,doclint_enforce=debug,doclint_cli=debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. Logs never go to stdout, which carries results.
pub(crate) fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
