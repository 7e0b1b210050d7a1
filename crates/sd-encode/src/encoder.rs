use std::iter::{Enumerate, FusedIterator};
use std::str::Chars;

use sd_core::cell::{BrailleCell, CELL_WIDTH};
use sd_core::config::{EncoderConfig, OutputFormat, UnsupportedPolicy};
use sd_core::error::CoreError;
use sd_core::table::{self, CAPITALIZE_MARKER};

use crate::render;

/// Encode `text` into concatenated six-character Braille bit-strings.
///
/// Each uppercase ASCII letter becomes the capitalize marker `000001`
/// followed by its lowercase cell. Strict: the first character missing from
/// the table aborts the call and nothing is returned for the rest.
///
/// # Errors
/// Returns `CoreError::UnsupportedCharacter` on digits, punctuation or any
/// other character outside `a..=z`, `A..=Z` and space.
///
/// # Example
/// ```
/// use sd_encode::encode;
/// assert_eq!(encode("a b").unwrap(), "100000000000110000");
/// assert_eq!(encode("A").unwrap(), "000001100000");
/// assert!(encode("1").is_err());
/// ```
pub fn encode(text: &str) -> Result<String, CoreError> {
    Encoder::default().encode(text)
}

/// Lazy cell sequence over `text`, strict policy.
///
/// # Example
/// ```
/// use sd_encode::cells;
/// assert_eq!(cells("Ab").count(), 3);
/// ```
#[must_use]
pub fn cells(text: &str) -> Cells<'_> {
    Cells::new(text, UnsupportedPolicy::Error)
}

/// Encodeur configurable : politique sur caractère inconnu + rendu.
///
/// `Encoder::default()` is the strict bit-string encoder. The struct holds no
/// mutable state, a single instance can be shared across threads.
///
/// # Example
/// ```
/// use sd_encode::Encoder;
/// use sd_core::config::UnsupportedPolicy;
/// let encoder = Encoder::new(UnsupportedPolicy::Skip).unwrap();
/// assert_eq!(encoder.encode("a!").unwrap(), "100000");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    policy: UnsupportedPolicy,
    output: OutputFormat,
    separator: String,
}

impl Encoder {
    /// Encoder with the given policy, bit output and no separator.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if a substitute character is not encodable.
    pub fn new(policy: UnsupportedPolicy) -> Result<Self, CoreError> {
        Self::from_config(&EncoderConfig {
            policy,
            ..EncoderConfig::default()
        })
    }

    /// Build from a loaded configuration.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if the configuration does not validate.
    pub fn from_config(config: &EncoderConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            policy: config.policy,
            output: config.output,
            separator: config.separator.clone(),
        })
    }

    /// Active policy.
    #[must_use]
    pub fn policy(&self) -> UnsupportedPolicy {
        self.policy
    }

    /// Lazy cell sequence over `text` under this encoder's policy.
    #[must_use]
    pub fn cells<'a>(&self, text: &'a str) -> Cells<'a> {
        Cells::new(text, self.policy)
    }

    /// Concatenated bit-strings, ignoring the output format and separator.
    ///
    /// # Errors
    /// Returns `CoreError::UnsupportedCharacter` under the `Error` policy.
    pub fn encode(&self, text: &str) -> Result<String, CoreError> {
        let mut out = String::with_capacity(text.len() * CELL_WIDTH);
        for cell in self.cells(text) {
            cell?.write_bits(&mut out);
        }
        Ok(out)
    }

    /// Collect the cells of `text`.
    ///
    /// # Errors
    /// Same as [`Encoder::encode`].
    pub fn encode_cells(&self, text: &str) -> Result<Vec<BrailleCell>, CoreError> {
        self.cells(text).collect()
    }

    /// Encode then render with the configured format and separator.
    ///
    /// # Errors
    /// Same as [`Encoder::encode`].
    ///
    /// # Example
    /// ```
    /// use sd_encode::Encoder;
    /// use sd_core::config::{EncoderConfig, OutputFormat};
    /// let config = EncoderConfig { output: OutputFormat::Unicode, ..EncoderConfig::default() };
    /// let encoder = Encoder::from_config(&config).unwrap();
    /// assert_eq!(encoder.render("Hi").unwrap(), "\u{2820}\u{2813}\u{280A}");
    /// ```
    pub fn render(&self, text: &str) -> Result<String, CoreError> {
        let cells = self.encode_cells(text)?;
        Ok(render::render(cells, self.output, &self.separator))
    }
}

/// Lazy, finite, non-restartable sequence of cells for one input.
///
/// Yields one cell per character, two for an uppercase letter (marker then
/// letter). After an error it yields nothing more.
pub struct Cells<'a> {
    chars: Enumerate<Chars<'a>>,
    policy: UnsupportedPolicy,
    pending: Option<BrailleCell>,
    failed: bool,
}

impl<'a> Cells<'a> {
    fn new(text: &'a str, policy: UnsupportedPolicy) -> Self {
        Self {
            chars: text.chars().enumerate(),
            policy,
            pending: None,
            failed: false,
        }
    }

    /// Emit the cell(s) of a character already known to be in the table.
    fn emit(&mut self, uppercase: bool, cell: BrailleCell) -> BrailleCell {
        if uppercase {
            self.pending = Some(cell);
            CAPITALIZE_MARKER
        } else {
            cell
        }
    }
}

/// Case split + lookup. Only ASCII uppercase letters take the marker.
#[inline(always)]
fn resolve(ch: char) -> (bool, Option<BrailleCell>) {
    if ch.is_ascii_uppercase() {
        (true, table::lookup(ch.to_ascii_lowercase()))
    } else {
        (false, table::lookup(ch))
    }
}

impl Iterator for Cells<'_> {
    type Item = Result<BrailleCell, CoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(cell) = self.pending.take() {
            return Some(Ok(cell));
        }
        if self.failed {
            return None;
        }
        loop {
            let (position, ch) = self.chars.next()?;
            if let (upper, Some(cell)) = resolve(ch) {
                return Some(Ok(self.emit(upper, cell)));
            }
            match self.policy {
                UnsupportedPolicy::Error => {}
                UnsupportedPolicy::Skip => {
                    log::debug!("Caractère ignoré : {ch:?} (position {position})");
                    continue;
                }
                UnsupportedPolicy::Substitute(sub) => {
                    if let (upper, Some(cell)) = resolve(sub) {
                        log::debug!("Caractère {ch:?} remplacé par {sub:?} (position {position})");
                        return Some(Ok(self.emit(upper, cell)));
                    }
                }
            }
            self.failed = true;
            return Some(Err(CoreError::UnsupportedCharacter { ch, position }));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        if self.failed {
            return (pending, Some(pending));
        }
        let (_, upper) = self.chars.size_hint();
        let lower = match self.policy {
            UnsupportedPolicy::Skip => pending,
            UnsupportedPolicy::Error | UnsupportedPolicy::Substitute(_) => {
                pending + usize::from(upper != Some(0))
            }
        };
        (lower, upper.map(|u| u * 2 + pending))
    }
}

impl FusedIterator for Cells<'_> {}
