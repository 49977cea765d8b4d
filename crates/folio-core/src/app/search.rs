//! Search over rendered project cards

use super::App;
use crate::host::{Display, Host, Slot, Target};
use crate::search::{matches, normalize_query};

impl<H: Host> App<H> {
    /// Show the cards whose index contains the query, hide the rest
    pub fn apply_search(&mut self, query: &str) {
        let query = normalize_query(query);
        for card in &self.cards {
            let display = if matches(&card.search_index, &query) {
                Display::Block
            } else {
                Display::None
            };
            self.host
                .set_display(Target::Element(&card.element_id), display);
        }
        self.state.search_query = query;
    }

    pub fn clear_search(&mut self) {
        self.host
            .set_input_value(Target::Slot(Slot::SearchInput), "");
        self.apply_search("");
        self.show_toast("Search cleared");
    }

    /// Element ids of the cards currently shown
    pub fn visible_cards(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| {
                self.host
                    .display(Target::Element(&c.element_id))
                    .map_or(true, |d| d.is_visible())
            })
            .map(|c| c.element_id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::loaded_app;
    use crate::UiEvent;

    #[test]
    fn test_search_hides_non_matching_cards() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::SearchInput("dashboard".into()));
        assert_eq!(app.visible_cards(), ["card-excel-0"]);
        assert_eq!(
            app.host().display(Target::Element("card-excel-1")),
            Some(Display::None)
        );
        assert_eq!(app.state().search_query, "dashboard");
    }

    #[test]
    fn test_search_casing_is_irrelevant() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::SearchInput("SQL".into()));
        let upper: Vec<String> = app.visible_cards().into_iter().map(String::from).collect();
        app.dispatch(UiEvent::SearchInput("sql".into()));
        assert_eq!(app.visible_cards(), upper);
        assert_eq!(upper, ["card-sql-0"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let mut app = loaded_app();
        app.dispatch(UiEvent::SearchInput("excel".into()));
        let first: Vec<String> = app.visible_cards().into_iter().map(String::from).collect();
        app.dispatch(UiEvent::SearchInput("excel".into()));
        assert_eq!(app.visible_cards(), first);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_clear_restores_all_cards() {
        let mut app = loaded_app();
        app.host_mut()
            .set_input_value(Target::Slot(Slot::SearchInput), "zzz");
        app.dispatch(UiEvent::SearchInput("zzz".into()));
        assert!(app.visible_cards().is_empty());

        app.dispatch(UiEvent::ClearSearch);
        assert_eq!(app.visible_cards().len(), 3);
        assert_eq!(
            app.host().input_value(Target::Slot(Slot::SearchInput)),
            Some("")
        );
        assert_eq!(app.state().toast.as_deref(), Some("Search cleared"));
    }
}
