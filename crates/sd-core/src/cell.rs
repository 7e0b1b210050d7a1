//! Cellule Braille six points.
//!
//! Numérotation des points (colonne par colonne) :
//! +---+---+
//! | 1 | 4 |
//! +---+---+
//! | 2 | 5 |
//! +---+---+
//! | 3 | 6 |
//! +---+---+
//!
//! Point `n` ↔ bit `n - 1` du masque, ce qui colle au bloc Unicode U+2800.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Nombre de points d'une cellule, donc longueur de sa forme binaire.
pub const CELL_WIDTH: usize = 6;

/// Braille base codepoint (U+2800).
const BRAILLE_BASE: u32 = 0x2800;

/// Masque des six points valides.
const DOT_MASK: u8 = 0b0011_1111;

/// One six-dot Braille cell, stored as a 6-bit dot mask.
///
/// Textual form: six characters, character `i` is `'1'` when dot `i + 1` is raised.
///
/// # Example
/// ```
/// use sd_core::BrailleCell;
/// let a: BrailleCell = "100000".parse().unwrap();
/// assert_eq!(a.mask(), 0b00_0001);
/// assert_eq!(a.to_string(), "100000");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrailleCell(u8);

impl BrailleCell {
    /// Cellule vide (aucun point levé), utilisée pour l'espace.
    pub const BLANK: Self = Self(0);

    /// Build a cell from a dot mask. Bits above dot 6 are dropped.
    #[inline(always)]
    #[must_use]
    pub const fn from_mask(mask: u8) -> Self {
        Self(mask & DOT_MASK)
    }

    /// Build a cell from a six-byte `b"010110"` pattern at compile time.
    ///
    /// # Panics
    /// Panics (at compile time in const context) if a byte is not `b'0'` or `b'1'`.
    #[must_use]
    pub const fn from_pattern(pattern: &[u8; CELL_WIDTH]) -> Self {
        let mut mask = 0u8;
        let mut i = 0;
        while i < CELL_WIDTH {
            match pattern[i] {
                b'1' => mask |= 1 << i,
                b'0' => {}
                _ => panic!("pattern Braille invalide"),
            }
            i += 1;
        }
        Self(mask)
    }

    /// Raw dot mask (bit 0 = dot 1).
    #[inline(always)]
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.0
    }

    /// Whether dot `dot` (1..=6) is raised. Out-of-range dots are never raised.
    ///
    /// # Example
    /// ```
    /// use sd_core::BrailleCell;
    /// let cell = BrailleCell::from_mask(0b10_0000);
    /// assert!(cell.is_raised(6));
    /// assert!(!cell.is_raised(1));
    /// assert!(!cell.is_raised(7));
    /// ```
    #[must_use]
    pub const fn is_raised(self, dot: u8) -> bool {
        dot >= 1 && dot as usize <= CELL_WIDTH && self.0 & (1 << (dot - 1)) != 0
    }

    /// Append the six-character bit-string to `out`.
    pub fn write_bits(self, out: &mut String) {
        for i in 0..CELL_WIDTH {
            out.push(if self.0 & (1 << i) == 0 { '0' } else { '1' });
        }
    }

    /// Caractère Unicode Braille correspondant (`U+2800 + masque`).
    ///
    /// # Example
    /// ```
    /// use sd_core::BrailleCell;
    /// assert_eq!(BrailleCell::BLANK.to_unicode(), '\u{2800}');
    /// assert_eq!(BrailleCell::from_mask(0b11_1111).to_unicode(), '\u{283F}');
    /// ```
    #[inline(always)]
    #[must_use]
    pub const fn to_unicode(self) -> char {
        match char::from_u32(BRAILLE_BASE + self.0 as u32) {
            Some(c) => c,
            None => ' ',
        }
    }
}

impl fmt::Display for BrailleCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bits = String::with_capacity(CELL_WIDTH);
        self.write_bits(&mut bits);
        f.write_str(&bits)
    }
}

impl FromStr for BrailleCell {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidCell { cell: s.to_owned() };
        if s.len() != CELL_WIDTH {
            return Err(invalid());
        }
        let mut mask = 0u8;
        for (i, b) in s.bytes().enumerate() {
            match b {
                b'1' => mask |= 1 << i,
                b'0' => {}
                _ => return Err(invalid()),
            }
        }
        Ok(Self(mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_and_parse_agree() {
        let from_const = BrailleCell::from_pattern(b"101011");
        let parsed: BrailleCell = "101011".parse().unwrap();
        assert_eq!(from_const, parsed);
        assert_eq!(parsed.to_string(), "101011");
    }

    #[test]
    fn dot_one_is_leftmost_character() {
        let cell = BrailleCell::from_pattern(b"100000");
        assert!(cell.is_raised(1));
        assert_eq!(cell.mask(), 1);
    }

    #[test]
    fn from_mask_drops_high_bits() {
        assert_eq!(BrailleCell::from_mask(0xFF).mask(), 0b11_1111);
    }

    #[test]
    fn parse_rejects_bad_length() {
        let err = "10000".parse::<BrailleCell>().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidCell {
                cell: "10000".into()
            }
        );
        assert!("1000000".parse::<BrailleCell>().is_err());
    }

    #[test]
    fn parse_rejects_bad_alphabet() {
        assert!("10000x".parse::<BrailleCell>().is_err());
        assert!("1000é".parse::<BrailleCell>().is_err());
    }

    #[test]
    fn unicode_stays_in_six_dot_range() {
        for mask in 0..=u8::MAX {
            let ch = BrailleCell::from_mask(mask).to_unicode();
            assert!(('\u{2800}'..='\u{283F}').contains(&ch), "hors plage : {ch:?}");
        }
    }
}
