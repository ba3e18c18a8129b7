// Primer catalog view
//
// Categories stacked top to bottom, each with a row of concept cards. The
// cursor is (category, card); sections and cards fade in on a stagger after
// the view is shown.

use std::time::Duration;

use log::debug;
use primer_utils::catalog::{catalog, Catalog, Concept};
use tokio::time::Instant;

pub const TITLE: &str = "Learn AI Concepts";
pub const TAGLINE: &str = "Discover the world of Artificial Intelligence through fun, interactive animations! Press Enter on any concept to begin learning.";
pub const FOOTER: &str = "Made with 💙 for curious minds learning AI";

const CATEGORY_STAGGER: Duration = Duration::from_millis(200);
const CARD_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

pub struct CatalogView {
    catalog: &'static Catalog,
    category: usize,
    card: usize,
    shown_at: Instant,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::with_catalog(catalog())
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            category: 0,
            card: 0,
            shown_at: Instant::now(),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.category, self.card)
    }

    pub fn is_selected(&self, category: usize, card: usize) -> bool {
        self.category == category && self.card == card
    }

    /// Concept under the cursor
    pub fn selected(&self) -> Option<&'static Concept> {
        self.catalog
            .categories()
            .get(self.category)
            .and_then(|c| c.concepts.get(self.card))
            .copied()
    }

    fn cards_in(&self, category: usize) -> usize {
        self.catalog
            .categories()
            .get(category)
            .map_or(0, |c| c.concepts.len())
    }

    /// Move the cursor, clamped to the grid
    pub fn move_cursor(&mut self, direction: Direction) {
        let categories = self.catalog.categories().len();
        match direction {
            Direction::Up => self.category = self.category.saturating_sub(1),
            Direction::Down => {
                if self.category + 1 < categories {
                    self.category += 1;
                }
            }
            Direction::Left => self.card = self.card.saturating_sub(1),
            Direction::Right => self.card += 1,
        }
        self.card = self.card.min(self.cards_in(self.category).saturating_sub(1));
    }

    /// Hand the selected concept to `on_start`
    pub fn activate<F>(&self, on_start: F)
    where
        F: FnOnce(&'static Concept),
    {
        if let Some(concept) = self.selected() {
            debug!("Starting concept {}", concept.id);
            on_start(concept);
        }
    }

    /// Restart the entrance stagger, e.g. when coming back to this view
    pub fn restart_reveal(&mut self) {
        self.shown_at = Instant::now();
    }

    pub fn since_shown(&self) -> Duration {
        self.shown_at.elapsed()
    }

    /// Delay before card `card` of category `category` appears
    pub fn reveal_delay(category: usize, card: usize) -> Duration {
        CATEGORY_STAGGER * category as u32 + CARD_STAGGER * card as u32
    }

    pub fn is_revealed(&self, category: usize, card: usize, elapsed: Duration) -> bool {
        elapsed >= Self::reveal_delay(category, card)
    }

    pub fn is_category_revealed(&self, category: usize, elapsed: Duration) -> bool {
        self.is_revealed(category, 0, elapsed)
    }

    /// Whether every card has appeared
    pub fn reveal_complete(&self, elapsed: Duration) -> bool {
        let last = self
            .catalog
            .categories()
            .iter()
            .enumerate()
            .map(|(i, c)| Self::reveal_delay(i, c.concepts.len().saturating_sub(1)))
            .max()
            .unwrap_or_default();
        elapsed >= last
    }

    pub fn stats(&self) -> String {
        format!(
            "📚 {} concepts to explore   🎯 {} categories",
            self.catalog.len(),
            self.catalog.categories().len()
        )
    }
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_utils::catalog::ConceptId;

    #[test]
    fn test_cursor_starts_on_first_card() {
        let view = CatalogView::new();
        assert_eq!(view.cursor(), (0, 0));
        let first = &catalog().categories()[0].concepts[0];
        assert_eq!(view.selected().map(|c| c.id), Some(first.id));
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut view = CatalogView::new();
        view.move_cursor(Direction::Up);
        view.move_cursor(Direction::Left);
        assert_eq!(view.cursor(), (0, 0));

        for _ in 0..20 {
            view.move_cursor(Direction::Right);
        }
        let last_card = catalog().categories()[0].concepts.len() - 1;
        assert_eq!(view.cursor(), (0, last_card));

        for _ in 0..20 {
            view.move_cursor(Direction::Down);
        }
        let categories = catalog().categories();
        let last = categories.len() - 1;
        assert_eq!(view.cursor().0, last);
        assert!(view.cursor().1 < categories[last].concepts.len());
        assert!(view.selected().is_some());
    }

    #[test]
    fn test_activate_hands_over_selection() {
        let mut view = CatalogView::new();
        view.move_cursor(Direction::Down);
        let expected = view.selected().map(|c| c.id);

        let mut started: Option<ConceptId> = None;
        view.activate(|concept| started = Some(concept.id));
        assert_eq!(started, expected);
    }

    #[test]
    fn test_reveal_stagger() {
        let view = CatalogView::new();
        assert_eq!(CatalogView::reveal_delay(0, 0), Duration::ZERO);
        assert_eq!(CatalogView::reveal_delay(2, 3), Duration::from_millis(700));

        assert!(view.is_revealed(0, 0, Duration::ZERO));
        assert!(!view.is_revealed(1, 0, Duration::from_millis(199)));
        assert!(view.is_category_revealed(1, Duration::from_millis(200)));
        assert!(!view.reveal_complete(Duration::from_millis(500)));
        assert!(view.reveal_complete(Duration::from_secs(5)));
    }

    #[test]
    fn test_stats_line() {
        let view = CatalogView::new();
        assert_eq!(
            view.stats(),
            "📚 15 concepts to explore   🎯 5 categories"
        );
    }
}
