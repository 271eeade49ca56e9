use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shelfwatch_cli::pipeline::{CheckReport, ExportReport, ListingRow};
use shelfwatch_model::{FieldMap, FillStyle, Severity};

pub fn print_check_report(report: &CheckReport) {
    println!("Source: {}", report.source.display());
    println!("Reference date: {}", report.reference);
    println!();

    if report.alerts.is_empty() {
        println!("No reagents need urgent attention.");
    } else {
        let mut table = Table::new();
        table.set_header(vec![header_cell("Severity"), header_cell("Notice")]);
        apply_table_style(&mut table);
        for alert in &report.alerts {
            table.add_row(vec![
                severity_cell(alert.severity),
                Cell::new(&alert.message),
            ]);
        }
        println!("Alerts:");
        println!("{table}");
    }

    println!();
    println!("Full listing:");
    println!("{}", listing_table(report));
    println!(
        "{} records, {} expired, {} without a parsable expiry date",
        report.total_records, report.expired, report.unknown_dates
    );

    if !report.errors.is_empty() {
        eprintln!("Errors:");
        for error in &report.errors {
            eprintln!("- {error}");
        }
    }
}

fn listing_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    let mut header: Vec<Cell> = report
        .columns
        .iter()
        .map(|column| header_cell(column))
        .collect();
    header.push(header_cell("Remaining"));
    header.push(header_cell("Status"));
    table.set_header(header);
    apply_table_style(&mut table);
    let remaining_index = report.columns.len();
    align_column(&mut table, remaining_index, CellAlignment::Right);
    align_column(&mut table, remaining_index + 1, CellAlignment::Center);
    for row in &report.listing {
        table.add_row(listing_cells(row));
    }
    table
}

fn listing_cells(row: &ListingRow) -> Vec<Cell> {
    let color = fill_color(row.fill);
    let mut cells: Vec<Cell> = row
        .cells
        .iter()
        .map(|value| tinted_cell(value, color))
        .collect();
    cells.push(tinted_cell(&row.remaining, color));
    cells.push(tinted_cell(&row.status, color));
    cells
}

fn tinted_cell(value: &str, color: Option<Color>) -> Cell {
    match color {
        Some(color) => Cell::new(value).fg(color),
        None => Cell::new(value),
    }
}

pub fn print_export_report(report: &ExportReport) {
    println!("Export: {}", report.destination.display());
    println!("Rows: {}", report.rows);
    println!(
        "Fills: {} red (expired), {} yellow (attention window)",
        report.expired_fills, report.attention_fills
    );
}

pub fn print_field_map(map: &FieldMap) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column header"),
        header_cell("Required"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    for (field, header) in map.iter() {
        let required = if field.is_required() {
            Cell::new("yes").fg(Color::Red)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![Cell::new(field.as_str()), Cell::new(header), required]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Expired => Cell::new("EXPIRED")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Imminent => Cell::new("IMMINENT").fg(Color::Yellow),
        Severity::Attention => Cell::new("ATTENTION").fg(Color::Blue),
        Severity::Safe => Cell::new("SAFE").fg(Color::Green),
    }
}

fn fill_color(fill: FillStyle) -> Option<Color> {
    match fill {
        FillStyle::Expired => Some(Color::Red),
        FillStyle::Attention => Some(Color::Yellow),
        FillStyle::None => None,
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
