//! Grouped country tables, drawn as one scrollable list.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use cb_core::render::{COLUMNS, GroupTable, TableRow};
use cb_core::{BrowserScreen, HighlightColor};

use crate::app::TuiApp;
use crate::shared::palette_color;

/// One line of the flattened table list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayLine {
    /// Group label above a table.
    Heading(String),
    /// Column headings.
    Columns,
    /// A country row.
    Row(TableRow),
    /// Spacer between tables.
    Blank,
}

/// Flatten group tables into display lines: heading, columns, rows, spacer.
pub fn flatten(tables: &[GroupTable]) -> Vec<DisplayLine> {
    let mut lines = Vec::new();
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            lines.push(DisplayLine::Blank);
        }
        lines.push(DisplayLine::Heading(table.label.clone()));
        lines.push(DisplayLine::Columns);
        lines.extend(table.rows.iter().cloned().map(DisplayLine::Row));
    }
    lines
}

/// Index of the country row at display line `line`, if that line is a row.
pub fn row_index_at(lines: &[DisplayLine], line: usize) -> Option<usize> {
    match lines.get(line)? {
        DisplayLine::Row(_) => Some(
            lines[..line]
                .iter()
                .filter(|l| matches!(l, DisplayLine::Row(_)))
                .count(),
        ),
        _ => None,
    }
}

/// Display line holding the `row`-th country row.
pub fn line_of_row(lines: &[DisplayLine], row: usize) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, l)| matches!(l, DisplayLine::Row(_)))
        .nth(row)
        .map(|(i, _)| i)
}

/// Pick a scroll offset that keeps `focus` inside a window of `height` lines.
pub fn adjust_scroll(scroll: usize, focus: usize, height: usize) -> usize {
    if height == 0 {
        return scroll;
    }
    if focus < scroll {
        focus
    } else if focus >= scroll + height {
        focus + 1 - height
    } else {
        scroll
    }
}

/// Draw the tables or the loading/error placeholder.
pub fn draw(frame: &mut Frame, app: &mut TuiApp, area: Rect) {
    let screen = app.browser.screen();

    if let Some(text) = screen.placeholder() {
        app.table_area = None;
        let color = if matches!(screen, BrowserScreen::Error) {
            Color::Red
        } else {
            Color::Yellow
        };
        let msg = Paragraph::new(format!("  {text}"))
            .style(Style::default().fg(color))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(msg, area);
        return;
    }

    let BrowserScreen::Tables {
        tables,
        active_color,
    } = screen
    else {
        return;
    };

    let lines = flatten(&tables);
    let count: usize = tables.iter().map(|t| t.rows.len()).sum();
    let block = Block::default()
        .title(format!(" Countries ({count}) "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    app.table_area = Some(inner);

    let height = usize::from(inner.height);
    let focus_line = line_of_row(&lines, app.row_cursor);
    if let Some(focus) = focus_line {
        app.scroll = adjust_scroll(app.scroll, focus, height);
    }
    app.scroll = app.scroll.min(lines.len().saturating_sub(1));

    let widths = column_widths(&lines, inner.width);
    let rendered: Vec<Line<'static>> = lines
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, line)| render_line(line, &widths, active_color, Some(i) == focus_line))
        .collect();

    frame.render_widget(Paragraph::new(rendered), inner);
}

/// Column widths sized to content, shrunk to fit the area.
fn column_widths(lines: &[DisplayLine], total: u16) -> [usize; 3] {
    let mut widths = COLUMNS.map(str::len);
    for line in lines {
        if let DisplayLine::Row(row) = line {
            for (w, cell) in widths.iter_mut().zip(row.cells()) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }
    // Two-space marker plus two-space gaps between columns.
    let budget = usize::from(total).saturating_sub(2 + 4);
    while widths.iter().sum::<usize>() > budget && widths[0] > COLUMNS[0].len() {
        widths[0] -= 1;
    }
    widths
}

fn pad(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:<width$}")
}

fn render_line(
    line: &DisplayLine,
    widths: &[usize; 3],
    active_color: HighlightColor,
    focused: bool,
) -> Line<'static> {
    match line {
        DisplayLine::Heading(label) => Line::from(Span::styled(
            label.clone(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        DisplayLine::Columns => {
            let text = COLUMNS
                .iter()
                .zip(widths)
                .map(|(c, w)| pad(c, *w))
                .collect::<Vec<_>>()
                .join("  ");
            Line::from(Span::styled(
                format!("  {text}"),
                Style::default().fg(Color::DarkGray).underlined(),
            ))
        }
        DisplayLine::Row(row) => {
            let text = row
                .cells()
                .iter()
                .zip(widths)
                .map(|(c, w)| pad(c, *w))
                .collect::<Vec<_>>()
                .join("  ");
            let marker = if focused { "\u{25b6} " } else { "  " };
            let style = if row.active {
                Style::default()
                    .fg(Color::White)
                    .bg(palette_color(active_color))
                    .bold()
            } else if focused {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(text, style),
            ])
        }
        DisplayLine::Blank => Line::from(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> TableRow {
        TableRow {
            name: name.into(),
            language: String::new(),
            currency: String::new(),
            active: false,
        }
    }

    fn two_tables() -> Vec<GroupTable> {
        vec![
            GroupTable {
                label: "EUR".into(),
                rows: vec![row("France"), row("Germany")],
            },
            GroupTable {
                label: "CHF".into(),
                rows: vec![row("Switzerland")],
            },
        ]
    }

    #[test]
    fn flatten_layout() {
        let lines = flatten(&two_tables());
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], DisplayLine::Heading("EUR".into()));
        assert_eq!(lines[1], DisplayLine::Columns);
        assert_eq!(lines[4], DisplayLine::Blank);
        assert_eq!(lines[5], DisplayLine::Heading("CHF".into()));
        assert_eq!(lines[7], DisplayLine::Row(row("Switzerland")));
    }

    #[test]
    fn row_lookup_both_ways() {
        let lines = flatten(&two_tables());
        assert_eq!(row_index_at(&lines, 2), Some(0));
        assert_eq!(row_index_at(&lines, 3), Some(1));
        assert_eq!(row_index_at(&lines, 7), Some(2));
        assert_eq!(row_index_at(&lines, 5), None);
        assert_eq!(row_index_at(&lines, 99), None);
        assert_eq!(line_of_row(&lines, 2), Some(7));
        assert_eq!(line_of_row(&lines, 3), None);
    }

    #[test]
    fn scroll_follows_focus() {
        assert_eq!(adjust_scroll(0, 3, 5), 0);
        assert_eq!(adjust_scroll(0, 7, 5), 3);
        assert_eq!(adjust_scroll(6, 2, 5), 2);
        assert_eq!(adjust_scroll(4, 4, 0), 4);
    }

    #[test]
    fn pad_truncates_and_fills() {
        assert_eq!(pad("France", 3), "Fra");
        assert_eq!(pad("Chad", 6), "Chad  ");
    }
}
