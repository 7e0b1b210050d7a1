use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

pub mod app;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    if cli.table {
        print!("{}", app::format_table());
        return Ok(());
    }

    // 3. Charger la config, puis appliquer les overrides CLI
    let config = app::resolve_config(&cli, Path::new(app::DEFAULT_CONFIG))?;
    let config = app::apply_overrides(&cli, config)?;

    // 4. Texte : arguments, sinon stdin
    let input = match cli.inline_text() {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Lecture de stdin impossible")?;
            app::prepare_input(&cli, buf)
        }
    };
    log::debug!("{} caractères en entrée", input.chars().count());

    // 5. Encoder
    let output = app::run(&cli, &config, &input)?;
    println!("{output}");
    Ok(())
}
