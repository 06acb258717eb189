use anyhow::Context;
use astgen::codegen::{generate_from_entries, generate_from_file};
use astgen::dargon;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `--stdout` output stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.options().context("invalid generator options")?;

    let document = match &cli.defs {
        Some(path) => {
            tracing::info!("Generating {} from {}", options.base(), path.display());
            generate_from_file(path, &options)
                .with_context(|| format!("failed to generate from {}", path.display()))?
        }
        None => {
            tracing::info!("Generating {} from the built-in Dargon table", options.base());
            generate_from_entries(dargon::EXPR_ENTRIES, &options)
                .context("failed to generate the built-in table")?
        }
    };

    if cli.stdout {
        print!("{document}");
    } else {
        document
            .write_to(&cli.out)
            .with_context(|| format!("failed to write {}", cli.out.display()))?;
    }

    Ok(())
}
