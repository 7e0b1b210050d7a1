use sd_core::cell::{BrailleCell, CELL_WIDTH};
use sd_core::config::OutputFormat;

/// Render cells as text, `separator` between consecutive cells only.
///
/// # Example
/// ```
/// use sd_core::BrailleCell;
/// use sd_core::config::OutputFormat;
/// use sd_encode::render::render;
///
/// let cells = [BrailleCell::from_pattern(b"100000"), BrailleCell::BLANK];
/// assert_eq!(render(cells, OutputFormat::Bits, "-"), "100000-000000");
/// assert_eq!(render(cells, OutputFormat::Unicode, ""), "\u{2801}\u{2800}");
/// ```
#[must_use]
pub fn render<I>(cells: I, format: OutputFormat, separator: &str) -> String
where
    I: IntoIterator<Item = BrailleCell>,
{
    let cells = cells.into_iter();
    let per_cell = match format {
        OutputFormat::Bits => CELL_WIDTH,
        // U+2800..U+283F : 3 octets en UTF-8
        OutputFormat::Unicode => 3,
    } + separator.len();
    let mut out = String::with_capacity(cells.size_hint().0 * per_cell);

    for (i, cell) in cells.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        match format {
            OutputFormat::Bits => cell.write_bits(&mut out),
            OutputFormat::Unicode => out.push(cell.to_unicode()),
        }
    }
    out
}
