use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Character absent from the table, after case normalization.
    #[error("Caractère non supporté : {ch:?} (position {position})")]
    UnsupportedCharacter {
        /// The offending character, as it appeared in the input.
        ch: char,
        /// Index of the character in the input, counted in chars.
        position: usize,
    },

    /// Bit-string that is not six characters of '0' and '1'.
    #[error("Cellule invalide : {cell:?}")]
    InvalidCell {
        /// The rejected bit-string.
        cell: String,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Failure while encoding one line of a multi-line input.
    #[error("Ligne {line} : {source}")]
    Line {
        /// Zero-based line index.
        line: usize,
        /// Underlying error, positions relative to the line.
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Offending character, if this error (or the wrapped one) is a lookup miss.
    ///
    /// # Example
    /// ```
    /// use sd_core::CoreError;
    /// let err = CoreError::UnsupportedCharacter { ch: '1', position: 0 };
    /// assert_eq!(err.unsupported_char(), Some('1'));
    /// ```
    #[must_use]
    pub fn unsupported_char(&self) -> Option<char> {
        match self {
            Self::UnsupportedCharacter { ch, .. } => Some(*ch),
            Self::Line { source, .. } => source.unsupported_char(),
            Self::InvalidCell { .. } | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_error_exposes_inner_character() {
        let err = CoreError::Line {
            line: 3,
            source: Box::new(CoreError::UnsupportedCharacter { ch: '?', position: 7 }),
        };
        assert_eq!(err.unsupported_char(), Some('?'));
        assert!(err.to_string().starts_with("Ligne 3"));
    }

    #[test]
    fn config_error_has_no_character() {
        assert_eq!(CoreError::Config("x".into()).unsupported_char(), None);
    }
}
