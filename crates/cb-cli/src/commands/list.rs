use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use cb_core::render::{COLUMNS, GroupTable};
use cb_core::{BrowserScreen, CountryBrowser, HighlightColor};
use cb_tui::Source;

pub fn run(source: Source, input: &str, clicks: &[String]) -> Result<(), String> {
    let mut browser = CountryBrowser::new();
    browser.set_input(input);

    let fetched = super::fetch(source);
    let failure = fetched.as_ref().err().cloned();
    browser.on_query_complete(fetched);

    for name in clicks {
        browser.click(name);
    }

    let screen = browser.screen();
    if let Some(text) = screen.placeholder() {
        println!("{text}");
        return Err(failure.unwrap_or_else(|| text.to_string()));
    }

    let BrowserScreen::Tables {
        tables,
        active_color,
    } = screen
    else {
        return Ok(());
    };

    for table in &tables {
        println!("{}", table.label.bold());
        println!("{}", render_table(table, active_color));
        println!();
    }

    let count: usize = tables.iter().map(|t| t.rows.len()).sum();
    let summary = format!(
        "  {count} countries in {} group{}",
        tables.len(),
        if tables.len() == 1 { "" } else { "s" }
    );
    println!("{}", summary.dimmed());
    match (browser.selected_record(), browser.selection().selected_name()) {
        (Some(record), _) => println!("  selected: {record} ({active_color})"),
        (None, Some(name)) => println!("  selected: {name} ({active_color})"),
        (None, None) => println!("  selected: none ({active_color})"),
    }

    Ok(())
}

fn render_table(table: &GroupTable, active_color: HighlightColor) -> Table {
    let mut out = Table::new();
    out.set_content_arrangement(ContentArrangement::Dynamic);
    out.set_header(COLUMNS.to_vec());

    for row in &table.rows {
        let cells: Vec<Cell> = row
            .cells()
            .iter()
            .map(|text| {
                let cell = Cell::new(text);
                if row.active {
                    cell.fg(table_color(active_color))
                        .add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        out.add_row(cells);
    }
    out
}

fn table_color(color: HighlightColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb { r, g, b }
}
