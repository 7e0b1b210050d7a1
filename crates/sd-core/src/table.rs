use crate::cell::BrailleCell;

/// Cellule de contrôle « la lettre suivante est une majuscule » (point 6).
///
/// Ce n'est pas l'encodage d'une lettre : elle précède toujours la cellule
/// de la minuscule correspondante.
pub const CAPITALIZE_MARKER: BrailleCell = BrailleCell::from_pattern(b"000001");

/// Cellule de l'espace.
pub const SPACE: BrailleCell = BrailleCell::BLANK;

/// Lettres `a..=z`, indexées par `ch - 'a'`.
const LETTERS: [BrailleCell; 26] = [
    BrailleCell::from_pattern(b"100000"), // a
    BrailleCell::from_pattern(b"110000"), // b
    BrailleCell::from_pattern(b"100100"), // c
    BrailleCell::from_pattern(b"100110"), // d
    BrailleCell::from_pattern(b"100010"), // e
    BrailleCell::from_pattern(b"110100"), // f
    BrailleCell::from_pattern(b"110110"), // g
    BrailleCell::from_pattern(b"110010"), // h
    BrailleCell::from_pattern(b"010100"), // i
    BrailleCell::from_pattern(b"010110"), // j
    BrailleCell::from_pattern(b"101000"), // k
    BrailleCell::from_pattern(b"111000"), // l
    BrailleCell::from_pattern(b"101100"), // m
    BrailleCell::from_pattern(b"101110"), // n
    BrailleCell::from_pattern(b"101010"), // o
    BrailleCell::from_pattern(b"111100"), // p
    BrailleCell::from_pattern(b"111110"), // q
    BrailleCell::from_pattern(b"111010"), // r
    BrailleCell::from_pattern(b"011100"), // s
    BrailleCell::from_pattern(b"011110"), // t
    BrailleCell::from_pattern(b"101001"), // u
    BrailleCell::from_pattern(b"111001"), // v
    BrailleCell::from_pattern(b"010111"), // w
    BrailleCell::from_pattern(b"101101"), // x
    BrailleCell::from_pattern(b"101111"), // y
    BrailleCell::from_pattern(b"101011"), // z
];

/// Number of entries in the table (26 letters + space).
pub const TABLE_LEN: usize = LETTERS.len() + 1;

/// Look up the cell of a lowercase letter or space.
///
/// Uppercase letters are NOT folded here; the encoder handles case.
///
/// # Example
/// ```
/// use sd_core::table::lookup;
/// assert_eq!(lookup('a').unwrap().to_string(), "100000");
/// assert_eq!(lookup(' ').unwrap().to_string(), "000000");
/// assert!(lookup('A').is_none());
/// assert!(lookup('1').is_none());
/// ```
#[inline(always)]
#[must_use]
pub fn lookup(ch: char) -> Option<BrailleCell> {
    match ch {
        ' ' => Some(SPACE),
        'a'..='z' => Some(LETTERS[ch as usize - 'a' as usize]),
        _ => None,
    }
}

/// Iterate over the 27 `(char, cell)` entries: `a..=z` then space.
///
/// # Example
/// ```
/// use sd_core::table::entries;
/// assert_eq!(entries().count(), 27);
/// ```
pub fn entries() -> impl Iterator<Item = (char, BrailleCell)> {
    ('a'..='z')
        .zip(LETTERS)
        .chain(std::iter::once((' ', SPACE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_27_entries() {
        assert_eq!(entries().count(), TABLE_LEN);
        assert_eq!(TABLE_LEN, 27);
    }

    #[test]
    fn entries_agree_with_lookup() {
        for (ch, cell) in entries() {
            assert_eq!(lookup(ch), Some(cell), "désaccord pour {ch:?}");
        }
    }

    #[test]
    fn letter_cells_are_distinct() {
        let cells: HashSet<_> = entries().map(|(_, c)| c).collect();
        assert_eq!(cells.len(), TABLE_LEN);
    }

    #[test]
    fn marker_is_not_a_table_value() {
        assert!(entries().all(|(_, c)| c != CAPITALIZE_MARKER));
        assert_eq!(CAPITALIZE_MARKER.to_string(), "000001");
    }

    #[test]
    fn spot_check_values() {
        assert_eq!(lookup('z').map(|c| c.to_string()).as_deref(), Some("101011"));
        assert_eq!(lookup('w').map(|c| c.to_string()).as_deref(), Some("010111"));
    }

    #[test]
    fn outside_table_misses() {
        for ch in ['A', 'Z', '0', '9', '.', ',', '\n', 'é', '\u{2800}'] {
            assert!(lookup(ch).is_none(), "{ch:?} ne devrait pas être mappé");
        }
    }
}
