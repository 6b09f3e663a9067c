//! Application state for the country browser TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use cb_core::{BrowserScreen, CountryBrowser};

use crate::loader::{LoadResult, Loader};
use crate::views::tables::{self, DisplayLine};

/// Rows moved by PageUp/PageDown before the first draw.
const DEFAULT_PAGE: usize = 10;

/// Main application state.
pub struct TuiApp {
    /// Query, input, and selection state.
    pub browser: CountryBrowser,
    /// Cursor position in the input field, in characters.
    pub input_cursor: usize,
    /// Index of the focused country row (counting only country rows).
    pub row_cursor: usize,
    /// First display line shown in the table area.
    pub scroll: usize,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Where records come from, shown in the title bar.
    pub source: String,
    /// Inner area of the tables block at the last draw, for mouse hit tests.
    pub table_area: Option<Rect>,
    loader: Option<Loader>,
}

impl TuiApp {
    /// Create an app waiting on `loader`.
    pub fn new(source: impl Into<String>, loader: Option<Loader>) -> Self {
        Self {
            browser: CountryBrowser::new(),
            input_cursor: 0,
            row_cursor: 0,
            scroll: 0,
            show_help: false,
            should_quit: false,
            source: source.into(),
            table_area: None,
            loader,
        }
    }

    /// Seed the input field, as if typed.
    pub fn with_input(mut self, text: &str) -> Self {
        self.input_cursor = text.chars().count();
        self.browser.set_input(text);
        self
    }

    /// Text in the input field.
    pub fn input_text(&self) -> &str {
        self.browser.raw_input()
    }

    /// Check whether the background query finished; returns true if state changed.
    pub fn tick(&mut self) -> bool {
        let Some(result) = self.loader.as_ref().and_then(Loader::poll) else {
            return false;
        };
        self.loader = None;
        self.finish_load(result);
        true
    }

    /// Apply a query result to the browser.
    pub fn finish_load(&mut self, result: LoadResult) {
        self.browser.on_query_complete(result);
        self.focus_selected();
    }

    /// Current display lines, empty unless tables are showing.
    pub fn display_lines(&self) -> Vec<DisplayLine> {
        match self.browser.screen() {
            BrowserScreen::Tables { tables, .. } => tables::flatten(&tables),
            _ => Vec::new(),
        }
    }

    /// Names of the country rows in display order.
    fn row_names(&self) -> Vec<String> {
        self.display_lines()
            .into_iter()
            .filter_map(|l| match l {
                DisplayLine::Row(row) => Some(row.name),
                _ => None,
            })
            .collect()
    }

    /// Move the row cursor onto the selected country, if it is visible.
    fn focus_selected(&mut self) {
        let Some(selected) = self.browser.selection().selected_name() else {
            return;
        };
        if let Some(idx) = self.row_names().iter().position(|n| n == selected) {
            self.row_cursor = idx;
        }
    }

    fn clamp_row_cursor(&mut self) {
        let count = self.row_names().len();
        if count == 0 {
            self.row_cursor = 0;
        } else if self.row_cursor >= count {
            self.row_cursor = count - 1;
        }
    }

    fn page_size(&self) -> usize {
        self.table_area
            .map(|a| usize::from(a.height).max(1))
            .unwrap_or(DEFAULT_PAGE)
    }

    fn move_rows(&mut self, delta: isize) {
        let count = self.row_names().len();
        if count == 0 {
            return;
        }
        let next = self.row_cursor.saturating_add_signed(delta);
        self.row_cursor = next.min(count - 1);
    }

    /// Click the row under the cursor.
    pub fn click_cursor_row(&mut self) {
        if let Some(name) = self.row_names().get(self.row_cursor).cloned() {
            self.browser.click(&name);
        }
    }

    fn input_changed(&mut self, text: String) {
        self.browser.set_input(text);
        self.row_cursor = 0;
        self.scroll = 0;
        self.focus_selected();
        self.clamp_row_cursor();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        let text = self.input_text();
        text.char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.input_cursor);
        let mut text = self.input_text().to_string();
        text.insert(at, c);
        self.input_cursor += 1;
        self.input_changed(text);
    }

    fn backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        self.input_cursor -= 1;
        let at = self.byte_index(self.input_cursor);
        let mut text = self.input_text().to_string();
        text.remove(at);
        self.input_changed(text);
    }

    fn clear_input(&mut self) {
        self.input_cursor = 0;
        self.input_changed(String::new());
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::F(1) => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Esc => self.clear_input(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Left => self.input_cursor = self.input_cursor.saturating_sub(1),
            KeyCode::Right => {
                self.input_cursor = (self.input_cursor + 1).min(self.input_text().chars().count());
            }
            KeyCode::Up => self.move_rows(-1),
            KeyCode::Down => self.move_rows(1),
            KeyCode::PageUp => self.move_rows(-(self.page_size() as isize)),
            KeyCode::PageDown => self.move_rows(self.page_size() as isize),
            KeyCode::Home => self.row_cursor = 0,
            KeyCode::End => self.move_rows(isize::MAX),
            KeyCode::Enter => self.click_cursor_row(),
            _ => {}
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = self.hit_test(mouse.column, mouse.row) {
                    self.row_cursor = idx;
                    self.click_cursor_row();
                }
            }
            MouseEventKind::ScrollUp => self.move_rows(-1),
            MouseEventKind::ScrollDown => self.move_rows(1),
            _ => {}
        }
    }

    /// Map a screen cell to a country row index.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.table_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        let line = self.scroll + usize::from(row - area.y);
        tables::row_index_at(&self.display_lines(), line)
    }
}
