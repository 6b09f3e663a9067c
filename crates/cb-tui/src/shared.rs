//! Shared helpers for TUI views: palette mapping, layout, and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use cb_core::HighlightColor;

/// Terminal color for a palette entry.
pub fn palette_color(color: HighlightColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Input:"),
        Line::from("  search:<text>  Filter by lower-case country name"),
        Line::from("  group:<field>  Group by name, native, capital,"),
        Line::from("                 emoji, currency, or languages"),
        Line::from("  group:         Stop grouping"),
        Line::from("  Esc            Clear input"),
        Line::from(""),
        Line::from("Rows:"),
        Line::from("  \u{2191} / \u{2193}          Move cursor"),
        Line::from("  PgUp / PgDn    Move one page"),
        Line::from("  Home / End     First / last row"),
        Line::from("  Enter / click  Select or deselect"),
        Line::from(""),
        Line::from("  F1             Toggle this help"),
        Line::from("  Ctrl+C         Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_color_uses_rgb() {
        assert_eq!(palette_color(HighlightColor::Orange), Color::Rgb(255, 165, 0));
        assert_eq!(palette_color(HighlightColor::Blue), Color::Rgb(0, 0, 255));
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
    }
}
