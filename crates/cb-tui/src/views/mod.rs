//! Views composing the browser screen.

pub mod input;
pub mod tables;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use cb_core::BrowserScreen;

use crate::app::TuiApp;
use crate::shared::palette_color;

/// Draw the one-line title bar.
pub fn draw_title_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Countryboard", Style::default().fg(Color::White).bold()),
        Span::styled("  \u{2502}  ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.source.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar: counts, active search/group, and color.
pub fn draw_status_bar(frame: &mut Frame, app: &TuiApp, area: Rect) {
    let browser = &app.browser;
    let mut spans = Vec::new();

    if let BrowserScreen::Tables { tables, .. } = browser.screen() {
        let count: usize = tables.iter().map(|t| t.rows.len()).sum();
        spans.push(Span::raw(format!(
            " {count} countries in {} group{}  ",
            tables.len(),
            if tables.len() == 1 { "" } else { "s" }
        )));
    }
    if !browser.search_term().is_empty() {
        spans.push(Span::styled(
            format!("search:{}  ", browser.search_term()),
            Style::default().fg(Color::Yellow),
        ));
    }
    if !browser.group_by().is_empty() {
        spans.push(Span::styled(
            format!("group:{}  ", browser.group_by()),
            Style::default().fg(Color::Yellow),
        ));
    }
    let color = browser.active_color();
    spans.push(Span::styled(
        format!("\u{25a0} {color}"),
        Style::default().fg(palette_color(color)),
    ));
    spans.push(Span::raw("  Enter:select  F1:help  Ctrl+C:quit"));

    let status =
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, area);
}
