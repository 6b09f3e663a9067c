use std::fmt;

use crate::country::CountryRecord;

/// Position (1-based) of the record picked by the bootstrap selection.
pub const BOOTSTRAP_POSITION: usize = 10;

/// A highlight color from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightColor {
    /// Blue.
    Blue,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Purple.
    Purple,
    /// Orange.
    Orange,
}

impl HighlightColor {
    /// Lower-case color name.
    pub fn name(self) -> &'static str {
        match self {
            HighlightColor::Blue => "blue",
            HighlightColor::Red => "red",
            HighlightColor::Green => "green",
            HighlightColor::Purple => "purple",
            HighlightColor::Orange => "orange",
        }
    }

    /// The CSS color of the same name, as `(r, g, b)`.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            HighlightColor::Blue => (0, 0, 255),
            HighlightColor::Red => (255, 0, 0),
            HighlightColor::Green => (0, 128, 0),
            HighlightColor::Purple => (128, 0, 128),
            HighlightColor::Orange => (255, 165, 0),
        }
    }
}

impl fmt::Display for HighlightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The highlight colors cycled through on each row click, in order.
pub const PALETTE: [HighlightColor; 5] = [
    HighlightColor::Blue,
    HighlightColor::Red,
    HighlightColor::Green,
    HighlightColor::Purple,
    HighlightColor::Orange,
];

/// Which country, if any, is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// The country with this name is selected.
    Selected(String),
}

impl Selection {
    /// Name of the selected country, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Selected(name) => Some(name),
        }
    }
}

/// Inputs to the selection state machine.
#[derive(Debug, Clone, Copy)]
pub enum SelectionEvent<'a> {
    /// Data finished loading with these records.
    Loaded(&'a [CountryRecord]),
    /// The user clicked the row of the named country.
    Click(&'a str),
}

/// Selection and highlight color, updated together through [`SelectionState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selection: Selection,
    color_index: usize,
    user_clicked: bool,
    bootstrapped: bool,
}

impl SelectionState {
    /// Fresh state: nothing selected, first palette color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Name of the selected country, if any.
    pub fn selected_name(&self) -> Option<&str> {
        self.selection.name()
    }

    /// Index into [`PALETTE`]; always in range.
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// The active highlight color.
    pub fn color(&self) -> HighlightColor {
        PALETTE[self.color_index]
    }

    /// Returns true if `name` is the selected country.
    pub fn is_selected(&self, name: &str) -> bool {
        self.selection.name() == Some(name)
    }

    /// Apply one event to the state machine.
    pub fn apply(&mut self, event: SelectionEvent<'_>) {
        match event {
            SelectionEvent::Loaded(records) => {
                if self.bootstrapped || self.user_clicked {
                    return;
                }
                if let Some(name) = bootstrap_pick(records) {
                    tracing::debug!(country = name, "bootstrap selection");
                    self.selection = Selection::Selected(name.to_string());
                    self.bootstrapped = true;
                }
            }
            SelectionEvent::Click(name) => {
                self.user_clicked = true;
                self.selection = if self.is_selected(name) {
                    Selection::None
                } else {
                    Selection::Selected(name.to_string())
                };
                self.color_index = (self.color_index + 1) % PALETTE.len();
                tracing::debug!(
                    selected = self.selection.name(),
                    color = %self.color(),
                    "row click"
                );
            }
        }
    }
}

/// Name picked by the bootstrap rule: the 10th record, or the last when fewer exist.
pub fn bootstrap_pick(records: &[CountryRecord]) -> Option<&str> {
    let idx = if records.len() >= BOOTSTRAP_POSITION {
        BOOTSTRAP_POSITION - 1
    } else {
        records.len().checked_sub(1)?
    };
    records.get(idx).map(|r| r.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn numbered(n: usize) -> Vec<CountryRecord> {
        (1..=n).map(|i| CountryRecord::new(format!("C{i}"))).collect()
    }

    #[test]
    fn palette_colors_are_distinct() {
        let mut seen: Vec<(u8, u8, u8)> = PALETTE.iter().map(|c| c.rgb()).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), PALETTE.len());
        assert_eq!(HighlightColor::Orange.rgb(), (255, 165, 0));
        assert_eq!(HighlightColor::Purple.to_string(), "purple");
    }

    #[test]
    fn bootstrap_twelve_picks_tenth() {
        let data = numbered(12);
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Loaded(&data));
        assert_eq!(s.selected_name(), Some("C10"));
    }

    #[test]
    fn bootstrap_five_picks_last() {
        let data = numbered(5);
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Loaded(&data));
        assert_eq!(s.selected_name(), Some("C5"));
    }

    #[test]
    fn bootstrap_exactly_ten_picks_tenth() {
        assert_eq!(bootstrap_pick(&numbered(10)), Some("C10"));
    }

    #[test]
    fn bootstrap_empty_does_nothing() {
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Loaded(&[]));
        assert_eq!(s.selection(), &Selection::None);

        // A later non-empty load may still bootstrap.
        let data = numbered(3);
        s.apply(SelectionEvent::Loaded(&data));
        assert_eq!(s.selected_name(), Some("C3"));
    }

    #[test]
    fn bootstrap_fires_once() {
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Loaded(&numbered(3)));
        s.apply(SelectionEvent::Loaded(&numbered(12)));
        assert_eq!(s.selected_name(), Some("C3"));
    }

    #[test]
    fn bootstrap_skipped_after_user_click() {
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Click("C1"));
        s.apply(SelectionEvent::Click("C1"));
        s.apply(SelectionEvent::Loaded(&numbered(12)));
        assert_eq!(s.selection(), &Selection::None);
    }

    #[test]
    fn bootstrap_does_not_touch_color() {
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Loaded(&numbered(12)));
        assert_eq!(s.color(), HighlightColor::Blue);
    }

    #[test]
    fn click_selects_other_country_and_advances_color() {
        let data = numbered(12);
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Loaded(&data));
        s.apply(SelectionEvent::Click("C2"));
        assert_eq!(s.selected_name(), Some("C2"));
        assert_eq!(s.color(), HighlightColor::Red);
    }

    #[test]
    fn double_click_deselects_and_advances_twice() {
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Click("France"));
        s.apply(SelectionEvent::Click("France"));
        assert_eq!(s.selection(), &Selection::None);
        assert_eq!(s.color_index(), 2);
        assert_eq!(s.color(), HighlightColor::Green);
    }

    #[test]
    fn stale_selection_is_tolerated() {
        let mut s = SelectionState::new();
        s.apply(SelectionEvent::Click("Atlantis"));
        assert!(s.is_selected("Atlantis"));
        assert!(!s.is_selected("France"));
    }

    proptest! {
        #[test]
        fn palette_len_clicks_return_to_start(
            names in proptest::collection::vec("[A-C]", PALETTE.len()),
            warmup in 0usize..7,
        ) {
            let mut s = SelectionState::new();
            for _ in 0..warmup {
                s.apply(SelectionEvent::Click("X"));
            }
            let start = s.color_index();
            for n in &names {
                s.apply(SelectionEvent::Click(n));
            }
            prop_assert_eq!(s.color_index(), start);
            prop_assert!(s.color_index() < PALETTE.len());
        }
    }
}
