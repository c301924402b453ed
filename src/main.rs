use anyhow::{Context, Result};
use calcline::{CalculatorConfig, Repl};
use clap::Parser;
use rustyline::DefaultEditor;
use std::io;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = CalculatorConfig::parse();

    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log level: {}", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let editor = DefaultEditor::new().context("failed to initialize line editor")?;
    let mut repl = Repl::new(editor, io::stdout(), config);
    repl.run().context("calculator session failed")?;

    Ok(())
}
