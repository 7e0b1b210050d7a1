use rayon::prelude::*;
use sd_core::error::CoreError;

use crate::encoder::Encoder;

/// Encode each line of `text` independently, in parallel, keeping line order.
///
/// Each line goes through [`Encoder::render`]. On failure the error of the
/// lowest failing line is returned, wrapped in `CoreError::Line` with its
/// zero-based index; the inner position is relative to that line.
///
/// # Errors
/// Returns `CoreError::Line` if any line fails to encode.
///
/// # Example
/// ```
/// use sd_encode::{Encoder, batch::encode_lines};
/// let lines = encode_lines("a\nB", &Encoder::default()).unwrap();
/// assert_eq!(lines, ["100000", "000001110000"]);
/// ```
pub fn encode_lines(text: &str, encoder: &Encoder) -> Result<Vec<String>, CoreError> {
    let lines: Vec<&str> = text.lines().collect();
    log::debug!("Encodage de {} lignes", lines.len());

    let results: Vec<Result<String, CoreError>> = lines
        .par_iter()
        .enumerate()
        .map(|(line, s)| {
            encoder.render(s).map_err(|e| CoreError::Line {
                line,
                source: Box::new(e),
            })
        })
        .collect();

    // Collecte séquentielle : garantit que l'erreur remontée est la première ligne en échec.
    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn empty_text_has_no_lines() {
        assert!(encode_lines("", &Encoder::default()).unwrap().is_empty());
    }

    #[test]
    fn lines_match_single_encodes() {
        let text = "Hello\nbraille world\n\nZ";
        let lines = encode_lines(text, &Encoder::default()).unwrap();
        let expected: Vec<String> = text.lines().map(|l| encode(l).unwrap()).collect();
        assert_eq!(lines, expected);
        assert_eq!(lines[2], "");
    }

    #[test]
    fn crlf_is_stripped() {
        let lines = encode_lines("a\r\nb\r\n", &Encoder::default()).unwrap();
        assert_eq!(lines, ["100000", "110000"]);
    }

    #[test]
    fn first_failing_line_wins() {
        let text: String = (0..200)
            .map(|i| if i == 40 || i == 150 { "ab1\n" } else { "ab\n" })
            .collect();
        let err = encode_lines(&text, &Encoder::default()).unwrap_err();
        match err {
            CoreError::Line { line, source } => {
                assert_eq!(line, 40);
                assert_eq!(*source, CoreError::UnsupportedCharacter { ch: '1', position: 2 });
            }
            other => panic!("erreur inattendue : {other:?}"),
        }
    }
}
