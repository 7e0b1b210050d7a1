use std::path::Path;

use anyhow::{Context, Result};
use sd_core::config::{
    EncoderConfig, OutputFormat, PolicyName, UnsupportedPolicy, load_config, single_char,
};
use sd_core::table;
use sd_encode::Encoder;
use sd_encode::batch::encode_lines;

use crate::cli::Cli;

/// Fichier de config cherché dans le répertoire courant quand --config est absent.
pub const DEFAULT_CONFIG: &str = "sixdot.toml";

/// Resolve config: explicit --config must exist, else sixdot.toml if present, else defaults.
///
/// # Errors
/// Returns an error if the explicit file is missing or any file fails to load.
pub fn resolve_config(cli: &Cli, default_path: &Path) -> Result<EncoderConfig> {
    if let Some(ref path) = cli.config {
        if !path.exists() {
            anyhow::bail!("Config introuvable : {}", path.display());
        }
        load_config(path)
    } else if default_path.exists() {
        load_config(default_path)
    } else {
        log::debug!(
            "Pas de {}, utilisation des défauts.",
            default_path.display()
        );
        Ok(EncoderConfig::default())
    }
}

/// Appliquer les overrides CLI par-dessus la config fichier.
///
/// # Errors
/// Returns an error if `--substitute` is not a single character or the result
/// does not validate.
pub fn apply_overrides(cli: &Cli, mut config: EncoderConfig) -> Result<EncoderConfig> {
    if let Some(ref s) = cli.substitute {
        config.substitute = single_char(s).context("--substitute")?;
    }

    if let Some(ref name) = cli.on_unsupported {
        match PolicyName::parse(name) {
            Some(policy) => config.policy = policy.with_substitute(config.substitute),
            None => log::warn!("Politique inconnue '{name}', utilisation de {:?}.", config.policy),
        }
    }
    match config.policy {
        UnsupportedPolicy::Substitute(_) => {
            config.policy = UnsupportedPolicy::Substitute(config.substitute);
        }
        UnsupportedPolicy::Error | UnsupportedPolicy::Skip => {
            if let Some(ref s) = cli.substitute {
                log::warn!(
                    "--substitute {s:?} ignoré : politique active {:?}.",
                    config.policy
                );
            }
        }
    }

    if let Some(ref format) = cli.format {
        match OutputFormat::parse(format) {
            Some(v) => config.output = v,
            None => log::warn!("Format inconnu '{format}', utilisation de {:?}.", config.output),
        }
    }
    if let Some(ref separator) = cli.separator {
        config.separator.clone_from(separator);
    }

    config.validate()?;
    Ok(config)
}

/// Normalise le texte lu sur stdin.
///
/// Without `--lines` the trailing line ending (`\n` or `\r\n`, repeated) is
/// dropped; interior newlines are kept and still go through the encoder.
/// With `--lines` the text is returned as is and split later.
#[must_use]
pub fn prepare_input(cli: &Cli, mut buf: String) -> String {
    if !cli.lines {
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
    }
    buf
}

/// Encode `input` per the resolved config, one output line per input line with --lines.
///
/// # Errors
/// Returns an error if the config is invalid or the text contains an
/// unsupported character under the strict policy.
pub fn run(cli: &Cli, config: &EncoderConfig, input: &str) -> Result<String> {
    let encoder = Encoder::from_config(config)?;
    log::info!("Encodage avec {:?}", encoder.policy());

    if cli.lines {
        let lines = encode_lines(input, &encoder)?;
        return Ok(lines.join("\n"));
    }
    Ok(encoder.render(input)?)
}

/// Render the mapping table, one `char<TAB>bits<TAB>unicode` row per entry.
#[must_use]
pub fn format_table() -> String {
    table::entries()
        .map(|(ch, cell)| {
            let label = if ch == ' ' { "space".to_owned() } else { ch.to_string() };
            (label, cell)
        })
        .chain(std::iter::once(("capital".to_owned(), table::CAPITALIZE_MARKER)))
        .map(|(label, cell)| format!("{label}\t{cell}\t{}\n", cell.to_unicode()))
        .collect()
}
