//! template-tools: inspect HTML tag rules and encode template source maps.

mod cli;
mod commands;
mod config;
mod output;
mod plan;

use clap::Parser;
use cli::Args;
use miette::Result;

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=html_tags=debug,source_map=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let summary = commands::run(&args)?;
    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
