//! Example: Build a small report with merged headers, styles and links

use sheetwright::prelude::*;

fn main() -> Result<()> {
    let mut workbook = Workbook::new();

    // Title across A1:C1
    workbook
        .merged_range(0, 0, 0, 0, 2)?
        .string("Inventory")
        .style(StyleConfig::new().bold(true).font_size(14.0))?;

    // Header row
    for (col, header) in ["Item", "Count", "Source"].into_iter().enumerate() {
        workbook
            .cell(0, 1, col as u16)?
            .string(header)
            .style(StyleConfig::new().bold(true).fill_color(Color::LIGHT_GRAY))?;
    }

    // Data rows
    workbook.cell(0, 2, 0)?.string("Bolts");
    workbook.cell(0, 2, 1)?.number(120)?;
    workbook
        .cell(0, 2, 2)?
        .link("https://example.com/bolts", Some("catalog"), None)?;

    workbook.cell(0, 3, 0)?.string("Nuts");
    workbook.cell(0, 3, 1)?.number("75")?;

    // Total
    workbook.cell(0, 4, 0)?.string("Total");
    workbook.cell(0, 4, 1)?.formula("SUM(B3:B4)")?;

    let sheet = workbook.worksheet(0).unwrap();
    println!(
        "{}: {} cells, used range {}",
        sheet.name(),
        sheet.cell_count(),
        sheet
            .used_range()
            .map(|r| r.to_string())
            .unwrap_or_default()
    );
    println!("merged: {:?}", sheet.merged_cells());
    println!("styles registered: {}", workbook.styles().len());

    for diagnostic in workbook.take_diagnostics() {
        println!("{}: {}", diagnostic.level, diagnostic.message);
    }

    Ok(())
}
