//! Project filter: category buttons showing and hiding project cards.
//!
//! Cards never pop in or out. A card being shown is put back into layout
//! first and faded/scaled in a moment later; a card being hidden fades/scales
//! out first and leaves layout once the transition is over. Every click bumps
//! a generation number, and deferred steps carry the generation they were
//! planned under, so a slow hide from an earlier click cannot remove a card a
//! later click has just shown.

use crate::config::FilterConfig;
use std::time::Duration;

pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    Category(String),
}

impl Filter {
    /// Parse a button's `data-filter` value. A missing value shows everything.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some(ALL) => Filter::All,
            Some(category) => Filter::Category(category.to_string()),
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => category == Some(wanted.as_str()),
        }
    }
}

/// Immediate and deferred style changes for one card.
#[derive(Debug, Clone, PartialEq)]
pub enum CardTransition {
    /// `display: block` now; opacity 1 and `scale(1)` after `delay`.
    Show { delay: Duration },
    /// Opacity 0 and `scale(hidden_scale)` now; `display: none` after `delay`.
    Hide { delay: Duration, scale: f64 },
}

impl CardTransition {
    pub fn is_shown(&self) -> bool {
        matches!(self, CardTransition::Show { .. })
    }
}

/// One click's worth of work.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPlan {
    pub generation: u64,
    pub active_button: usize,
    pub cards: Vec<CardTransition>,
}

/// Which button is active, and which click is the latest.
#[derive(Debug, Clone, Default)]
pub struct FilterBoard {
    generation: u64,
    active_button: Option<usize>,
}

impl FilterBoard {
    pub fn active_button(&self) -> Option<usize> {
        self.active_button
    }

    /// Deferred steps planned under `generation` may still run.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Handle a click on button `button` whose filter is `filter`, given each
    /// card's `data-category` in document order.
    pub fn select(
        &mut self,
        button: usize,
        filter: &Filter,
        categories: &[Option<&str>],
        config: &FilterConfig,
    ) -> FilterPlan {
        self.generation += 1;
        self.active_button = Some(button);
        let cards = categories
            .iter()
            .map(|&category| {
                if filter.matches(category) {
                    CardTransition::Show {
                        delay: Duration::from_millis(config.show_delay_ms.into()),
                    }
                } else {
                    CardTransition::Hide {
                        delay: Duration::from_millis(config.hide_delay_ms.into()),
                        scale: config.hidden_scale,
                    }
                }
            })
            .collect();
        FilterPlan {
            generation: self.generation,
            active_button: button,
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: [Option<&str>; 5] = [Some("web"), Some("ai"), Some("web"), None, Some("mobile")];

    fn shown(plan: &FilterPlan) -> Vec<bool> {
        plan.cards.iter().map(CardTransition::is_shown).collect()
    }

    #[test]
    fn parse_all_sentinel() {
        assert_eq!(Filter::parse(Some("all")), Filter::All);
        assert_eq!(Filter::parse(None), Filter::All);
        assert_eq!(Filter::parse(Some("web")), Filter::Category("web".into()));
    }

    #[test]
    fn all_shows_every_card() {
        let mut board = FilterBoard::default();
        let plan = board.select(0, &Filter::All, &CARDS, &FilterConfig::default());
        assert_eq!(shown(&plan), [true; 5]);
    }

    #[test]
    fn category_shows_only_matching_cards() {
        let mut board = FilterBoard::default();
        let plan = board.select(
            1,
            &Filter::Category("web".into()),
            &CARDS,
            &FilterConfig::default(),
        );
        assert_eq!(shown(&plan), [true, false, true, false, false]);
        assert_eq!(board.active_button(), Some(1));
    }

    #[test]
    fn transitions_carry_configured_timing() {
        let mut board = FilterBoard::default();
        let plan = board.select(
            2,
            &Filter::Category("ai".into()),
            &[Some("ai"), Some("web")],
            &FilterConfig::default(),
        );
        assert_eq!(
            plan.cards,
            vec![
                CardTransition::Show {
                    delay: Duration::from_millis(100)
                },
                CardTransition::Hide {
                    delay: Duration::from_millis(300),
                    scale: 0.8
                },
            ]
        );
    }

    #[test]
    fn later_click_supersedes_deferred_steps() {
        let mut board = FilterBoard::default();
        let config = FilterConfig::default();
        let first = board.select(1, &Filter::Category("ai".into()), &CARDS, &config);
        assert!(board.is_current(first.generation));
        let second = board.select(0, &Filter::All, &CARDS, &config);
        assert!(!board.is_current(first.generation));
        assert!(board.is_current(second.generation));
        assert_eq!(board.active_button(), Some(0));
    }
}
