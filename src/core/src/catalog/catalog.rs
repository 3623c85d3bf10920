use crate::catalog::criteria::Criteria;
use crate::catalog::evaluator::evaluate;
use crate::catalog::manager::Manager;
use crate::catalog::options::derive_booster_options;
use crate::catalog::presentation::{ManagerCard, present};
use crate::catalog::ranking::rank;
use log::debug;

/// Owns the loaded dataset and its derived filter vocabulary. The dataset
/// is never mutated after construction; every query recomputes from it.
pub struct ManagerCatalog {
    managers: Vec<Manager>,
    booster_options: Vec<String>,
}

impl ManagerCatalog {
    pub fn new(managers: Vec<Manager>) -> Self {
        let booster_options = derive_booster_options(&managers);

        ManagerCatalog {
            managers,
            booster_options,
        }
    }

    pub fn managers(&self) -> &[Manager] {
        &self.managers
    }

    pub fn booster_options(&self) -> &[String] {
        &self.booster_options
    }

    /// Runs the full pipeline: evaluate, rank, present.
    pub fn query(&self, criteria: &Criteria) -> Vec<ManagerCard> {
        let filtered = evaluate(&self.managers, criteria);
        let ranked = rank(filtered, criteria.sort_mode);

        debug!(
            "catalog query: {} of {} managers match",
            ranked.len(),
            self.managers.len()
        );

        ranked.into_iter().map(present).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::criteria::SortMode;
    use crate::catalog::manager::{BoosterEffect, PlaystyleKey, PlaystyleProficiency};
    use chrono::NaiveDate;

    fn manager(name: &str, release: Option<(i32, u32, u32)>, possession_game: u8) -> Manager {
        Manager {
            name: name.to_string(),
            photo: String::new(),
            release_date: release.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            proficiency: PlaystyleProficiency {
                possession_game,
                long_ball_counter: 55,
                quick_counter: 55,
                long_ball: 55,
                out_wide: 55,
            },
            booster_effects: vec![BoosterEffect {
                stat: "Passing".to_string(),
                value: 1.5,
            }],
            link_up_play: None,
        }
    }

    fn catalog() -> ManagerCatalog {
        ManagerCatalog::new(vec![
            manager("Alice", None, 85),
            manager("Bob", Some((2020, 1, 1)), 60),
            manager("Carol", Some((2023, 8, 10)), 90),
        ])
    }

    #[test]
    fn test_query_runs_full_pipeline() {
        let cards = catalog().query(&Criteria::default());

        // Default sort: newest release first, missing dates last.
        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
        assert_eq!(cards[2].release_date, "Unknown");
    }

    #[test]
    fn test_query_applies_criteria() {
        let criteria = Criteria {
            required_playstyles: vec![PlaystyleKey::PossessionGame],
            sort_mode: SortMode::Name,
            ..Criteria::default()
        };

        let cards = catalog().query(&criteria);

        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_reset_criteria_reproduces_default_results() {
        let catalog = catalog();

        let narrowed = Criteria {
            search_text: "car".to_string(),
            required_playstyles: vec![PlaystyleKey::PossessionGame],
            booster_category: Some("Passing".to_string()),
            require_link_up: false,
            sort_mode: SortMode::Name,
        };
        assert_eq!(catalog.query(&narrowed).len(), 1);

        let after_reset = catalog.query(&Criteria::default());
        let default_run = catalog.query(&Criteria::default());

        let names =
            |cards: &[ManagerCard]| cards.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&after_reset), names(&default_run));
        assert_eq!(after_reset.len(), 3);
    }

    #[test]
    fn test_booster_options_derived_once_from_dataset() {
        assert_eq!(catalog().booster_options(), ["Passing"]);
    }
}
