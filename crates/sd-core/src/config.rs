use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;
use crate::table;

/// Configuration de l'encodeur, chargeable depuis TOML.
///
/// Chaque champ a une valeur par défaut saine : le comportement par défaut
/// est l'encodage strict (erreur sur caractère inconnu), sortie binaire,
/// cellules concaténées sans séparateur.
///
/// # Example
/// ```
/// use sd_core::config::{EncoderConfig, OutputFormat, UnsupportedPolicy};
/// let config = EncoderConfig::default();
/// assert_eq!(config.policy, UnsupportedPolicy::Error);
/// assert_eq!(config.output, OutputFormat::Bits);
/// assert!(config.separator.is_empty());
/// assert_eq!(config.substitute, ' ');
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    /// What to do with characters missing from the table.
    pub policy: UnsupportedPolicy,
    /// Replacement character, used when the policy is (or becomes) `substitute`.
    pub substitute: char,
    /// Output representation of each cell.
    pub output: OutputFormat,
    /// Inserted between cells (never before the first or after the last).
    pub separator: String,
}

/// Behavior on a character absent from the table.
///
/// # Example
/// ```
/// use sd_core::config::UnsupportedPolicy;
/// assert_eq!(UnsupportedPolicy::default(), UnsupportedPolicy::Error);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnsupportedPolicy {
    /// Abort the whole call with `CoreError::UnsupportedCharacter`.
    #[default]
    Error,
    /// Drop the character.
    Skip,
    /// Encode this character instead. Must itself be encodable.
    Substitute(char),
}

/// Name of a policy as written in TOML and on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyName {
    /// Strict.
    #[default]
    Error,
    /// Drop unknown characters.
    Skip,
    /// Replace unknown characters.
    Substitute,
}

impl PolicyName {
    /// Parse a CLI value ("error", "skip", "substitute"), case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "skip" => Some(Self::Skip),
            "substitute" => Some(Self::Substitute),
            _ => None,
        }
    }

    /// Combine with the substitute character into a concrete policy.
    #[must_use]
    pub fn with_substitute(self, substitute: char) -> UnsupportedPolicy {
        match self {
            Self::Error => UnsupportedPolicy::Error,
            Self::Skip => UnsupportedPolicy::Skip,
            Self::Substitute => UnsupportedPolicy::Substitute(substitute),
        }
    }
}

/// Output representation.
///
/// # Example
/// ```
/// use sd_core::config::OutputFormat;
/// assert_eq!(OutputFormat::parse("unicode"), Some(OutputFormat::Unicode));
/// assert_eq!(OutputFormat::parse("morse"), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Six '0'/'1' characters per cell.
    #[default]
    Bits,
    /// One Unicode Braille Pattern character per cell (U+2800 block).
    Unicode,
}

impl OutputFormat {
    /// Parse a CLI value ("bits", "unicode"), case-insensitive.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "bits" => Some(Self::Bits),
            "unicode" => Some(Self::Unicode),
            _ => None,
        }
    }
}

/// Caractère de substitution par défaut.
pub const DEFAULT_SUBSTITUTE: char = ' ';

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            policy: UnsupportedPolicy::default(),
            substitute: DEFAULT_SUBSTITUTE,
            output: OutputFormat::default(),
            separator: String::new(),
        }
    }
}

/// Whether `ch` can stand in for an unknown character.
fn encodable(ch: char) -> bool {
    table::lookup(ch.to_ascii_lowercase()).is_some()
}

impl EncoderConfig {
    /// Check that the configuration can actually be applied.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the `substitute` field, or the character
    /// carried by a `Substitute` policy, is not in the table (after lowercasing).
    /// The field is checked even when the policy does not use it.
    ///
    /// # Example
    /// ```
    /// use sd_core::config::{EncoderConfig, UnsupportedPolicy};
    /// let mut config = EncoderConfig::default();
    /// config.policy = UnsupportedPolicy::Substitute('#');
    /// assert!(config.validate().is_err());
    /// config.policy = UnsupportedPolicy::Substitute('X');
    /// assert!(config.validate().is_ok());
    /// config.substitute = '!';
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), CoreError> {
        let in_policy = match self.policy {
            UnsupportedPolicy::Substitute(ch) => Some(ch),
            UnsupportedPolicy::Error | UnsupportedPolicy::Skip => None,
        };
        for ch in std::iter::once(self.substitute).chain(in_policy) {
            if !encodable(ch) {
                return Err(CoreError::Config(format!(
                    "caractère de substitution non encodable : {ch:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    encoder: Option<EncoderSection>,
}

/// Encoder section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct EncoderSection {
    on_unsupported: Option<PolicyName>,
    substitute: Option<String>,
    output: Option<OutputFormat>,
    separator: Option<String>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error on malformed TOML, on a `substitute` that is not exactly
/// one character, or when the merged config fails [`EncoderConfig::validate`].
///
/// # Example
/// ```
/// use sd_core::config::{parse_config, OutputFormat, UnsupportedPolicy};
/// let config = parse_config("[encoder]\non_unsupported = \"skip\"\noutput = \"unicode\"\n").unwrap();
/// assert_eq!(config.policy, UnsupportedPolicy::Skip);
/// assert_eq!(config.output, OutputFormat::Unicode);
/// ```
pub fn parse_config(content: &str) -> Result<EncoderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = EncoderConfig::default();
    let Some(e) = file.encoder else {
        log::debug!("Pas de section [encoder], valeurs par défaut");
        return Ok(config);
    };

    if let Some(s) = e.substitute {
        config.substitute = single_char(&s)?;
    }
    if let Some(name) = e.on_unsupported {
        config.policy = name.with_substitute(config.substitute);
    }
    if let Some(v) = e.output {
        config.output = v;
    }
    if let Some(v) = e.separator {
        config.separator = v;
    }

    config.validate()?;
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use sd_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("sixdot.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<EncoderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let config = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Config chargée depuis {} : {config:?}", path.display());
    Ok(config)
}

/// Extract the only character of `s`.
///
/// # Errors
/// Returns `CoreError::Config` if `s` is empty or has more than one character.
pub fn single_char(s: &str) -> Result<char, CoreError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(CoreError::Config(format!(
            "un seul caractère attendu, reçu {s:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), EncoderConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = parse_config("[encoder]\nseparator = \" \"\n").unwrap();
        assert_eq!(config.separator, " ");
        assert_eq!(config.policy, UnsupportedPolicy::Error);
        assert_eq!(config.output, OutputFormat::Bits);
    }

    #[test]
    fn substitute_policy_reads_character() {
        let config =
            parse_config("[encoder]\non_unsupported = \"substitute\"\nsubstitute = \"x\"\n")
                .unwrap();
        assert_eq!(config.policy, UnsupportedPolicy::Substitute('x'));
    }

    #[test]
    fn substitute_policy_defaults_to_space() {
        let config = parse_config("[encoder]\non_unsupported = \"substitute\"\n").unwrap();
        assert_eq!(config.policy, UnsupportedPolicy::Substitute(' '));
    }

    #[test]
    fn unencodable_substitute_rejected() {
        let result = parse_config("[encoder]\non_unsupported = \"substitute\"\nsubstitute = \"?\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn substitute_kept_without_substitute_policy() {
        let config = parse_config("[encoder]\nsubstitute = \"x\"\n").unwrap();
        assert_eq!(config.substitute, 'x');
        assert_eq!(config.policy, UnsupportedPolicy::Error);
    }

    #[test]
    fn unencodable_substitute_rejected_under_any_policy() {
        assert!(parse_config("[encoder]\nsubstitute = \"?\"\n").is_err());
        assert!(parse_config("[encoder]\non_unsupported = \"skip\"\nsubstitute = \"1\"\n").is_err());
    }

    #[test]
    fn multi_char_substitute_rejected() {
        assert!(parse_config("[encoder]\nsubstitute = \"ab\"\n").is_err());
        assert!(parse_config("[encoder]\nsubstitute = \"\"\n").is_err());
    }

    #[test]
    fn unknown_policy_name_rejected() {
        assert!(parse_config("[encoder]\non_unsupported = \"ignore\"\n").is_err());
    }

    #[test]
    fn policy_name_parse_is_case_insensitive() {
        assert_eq!(PolicyName::parse("SKIP"), Some(PolicyName::Skip));
        assert_eq!(PolicyName::parse("nope"), None);
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[encoder]\noutput = \"unicode\"\nseparator = \"|\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Unicode);
        assert_eq!(config.separator, "|");
    }

    #[test]
    fn load_config_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Impossible de lire"));
    }
}
