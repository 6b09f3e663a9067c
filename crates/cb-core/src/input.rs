/// Token prefix that sets the search term.
pub const SEARCH_PREFIX: &str = "search:";

/// Token prefix that sets the group-by field.
pub const GROUP_PREFIX: &str = "group:";

/// Structured form of one line of browser input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Text to match against country names; empty matches everything.
    pub search_term: String,
    /// Field to group by; empty means a single `All` bucket.
    pub group_by: String,
}

/// Parse a raw input line into a [`Command`].
///
/// Tokens are split on single spaces, so runs of spaces produce empty tokens
/// that match nothing. The first `search:` and the first `group:` token win.
/// Without a `group:` token the previous group-by field carries over; a bare
/// `group:` clears it.
pub fn parse(raw_input: &str, previous_group_by: &str) -> Command {
    let tokens: Vec<&str> = raw_input.split(' ').collect();

    let search_term = tokens
        .iter()
        .find_map(|t| t.strip_prefix(SEARCH_PREFIX))
        .unwrap_or("")
        .to_string();

    let group_by = tokens
        .iter()
        .find_map(|t| t.strip_prefix(GROUP_PREFIX))
        .unwrap_or(previous_group_by)
        .to_string();

    Command {
        search_term,
        group_by,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_search_and_group() {
        let cmd = parse("search:fra group:currency", "");
        assert_eq!(cmd.search_term, "fra");
        assert_eq!(cmd.group_by, "currency");
    }

    #[test]
    fn parse_is_order_independent() {
        let cmd = parse("group:capital search:Ger", "");
        assert_eq!(cmd.search_term, "Ger");
        assert_eq!(cmd.group_by, "capital");
    }

    #[test]
    fn first_occurrence_wins() {
        let cmd = parse("search:a search:b group:x group:y", "");
        assert_eq!(cmd.search_term, "a");
        assert_eq!(cmd.group_by, "x");
    }

    #[test]
    fn group_persists_without_token() {
        let cmd = parse("search:ice", "currency");
        assert_eq!(cmd.group_by, "currency");
    }

    #[test]
    fn empty_group_token_clears() {
        let cmd = parse("group:", "currency");
        assert_eq!(cmd.group_by, "");
    }

    #[test]
    fn plain_words_are_ignored() {
        let cmd = parse("france", "emoji");
        assert_eq!(cmd.search_term, "");
        assert_eq!(cmd.group_by, "emoji");
    }

    #[test]
    fn prefix_must_start_token() {
        let cmd = parse("xsearch:fra", "");
        assert_eq!(cmd.search_term, "");
    }

    #[test]
    fn double_space_yields_empty_token() {
        let cmd = parse("  search:fr", "");
        assert_eq!(cmd.search_term, "fr");
    }

    proptest! {
        #[test]
        fn no_search_token_means_empty_term(
            input in "[a-z :]{0,40}",
            prev in "[a-z]{0,8}",
        ) {
            prop_assume!(!input.split(' ').any(|t| t.starts_with(SEARCH_PREFIX)));
            prop_assert_eq!(parse(&input, &prev).search_term, "");
        }

        #[test]
        fn no_group_token_keeps_previous(
            input in "[a-z :]{0,40}",
            prev in "[a-z]{0,8}",
        ) {
            prop_assume!(!input.split(' ').any(|t| t.starts_with(GROUP_PREFIX)));
            prop_assert_eq!(parse(&input, &prev).group_by, prev);
        }
    }
}
