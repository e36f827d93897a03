use pgs_core::models::PayoffGrid;
use std::borrow::Cow;
use std::io::Write;

/// The header row of the CSV export
pub const CSV_HEADER: &str = "Category,Barilla Disc (€),Private Label Disc (€),Barilla Profit (€),Private Label Profit (€)";

/// Write every cell of `grid` as delimited text.
///
/// The output is a header row followed by one row per cell, brand discount in
/// the outer loop and private label discount in the inner loop. Every row is
/// tagged with `category` so exports from several categories can be
/// concatenated. Numbers are written in their shortest round-trip form with
/// at least one decimal place, so a zero discount reads `0.0`.
pub fn export_csv(
    category: &str,
    grid: &PayoffGrid,
    buffer: &mut impl Write,
) -> Result<(), std::io::Error> {
    writeln!(buffer, "{CSV_HEADER}")?;

    let category = escape(category);
    for cell in grid.cells() {
        writeln!(
            buffer,
            "{category},{:?},{:?},{:?},{:?}",
            cell.barilla_discount, cell.pl_discount, cell.barilla_profit, cell.pl_profit
        )?;
    }

    Ok(())
}

// Quote a field if it would otherwise break the row structure
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
