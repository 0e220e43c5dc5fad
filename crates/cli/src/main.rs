// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_check;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use laggard::ExitCode;
use laggard::cli::Cli;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cmd_check::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("laggard: {e:#}");
            ExitCode::Error.into()
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "laggard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
