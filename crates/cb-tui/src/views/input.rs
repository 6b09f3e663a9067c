//! Input line with cursor and placeholder.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::TuiApp;

/// Hint shown while the input is empty.
pub const PLACEHOLDER: &str = "search:xxx group:xxx";

const PROMPT: &str = "> ";

/// First character to show so that `cursor` fits in a field `width` cells wide.
pub fn visible_offset(cursor: usize, width: usize) -> usize {
    cursor.saturating_sub(width.saturating_sub(1))
}

/// Draw the input field and place the terminal cursor.
pub fn draw(frame: &mut Frame, app: &TuiApp, area: Rect) {
    // Left and right border plus the prompt.
    let width = usize::from(area.width).saturating_sub(2 + PROMPT.len());
    let offset = visible_offset(app.input_cursor, width);

    let line = if app.input_text().is_empty() {
        Line::from(vec![
            Span::raw(PROMPT),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let visible: String = app.input_text().chars().skip(offset).take(width).collect();
        Line::from(format!("{PROMPT}{visible}"))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(input, area);

    let right_edge = area.x.saturating_add(area.width.saturating_sub(1));
    let cursor_x = u16::try_from(app.input_cursor - offset)
        .ok()
        .and_then(|dx| dx.checked_add(area.x))
        .and_then(|x| x.checked_add(1 + PROMPT.len() as u16))
        .filter(|x| *x < right_edge);
    if let Some(x) = cursor_x {
        frame.set_cursor_position(Position::new(x, area.y.saturating_add(1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_cursor_in_view() {
        assert_eq!(visible_offset(0, 10), 0);
        assert_eq!(visible_offset(9, 10), 0);
        assert_eq!(visible_offset(10, 10), 1);
        assert_eq!(visible_offset(65_533, 74), 65_460);
        assert_eq!(visible_offset(3, 0), 3);
    }
}
