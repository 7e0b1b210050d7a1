use std::path::PathBuf;

use clap::Parser;

/// sixdot — encodeur Braille six points pour texte ASCII.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Texte à encoder. Les mots sont joints par une espace. Sans texte : lecture de stdin.
    pub text: Vec<String>,

    /// Fichier de configuration TOML. Défaut : sixdot.toml s'il existe.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Caractère hors table : error, skip, substitute.
    #[arg(long)]
    pub on_unsupported: Option<String>,

    /// Caractère de remplacement pour --on-unsupported substitute.
    #[arg(long)]
    pub substitute: Option<String>,

    /// Format de sortie : bits, unicode.
    #[arg(long)]
    pub format: Option<String>,

    /// Séparateur entre cellules.
    #[arg(long)]
    pub separator: Option<String>,

    /// Encoder chaque ligne séparément (une ligne de sortie par ligne d'entrée).
    #[arg(long, default_value_t = false)]
    pub lines: bool,

    /// Afficher la table de correspondance et quitter.
    #[arg(long, default_value_t = false)]
    pub table: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Text given on the command line, if any.
    #[must_use]
    pub fn inline_text(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.join(" "))
        }
    }
}
