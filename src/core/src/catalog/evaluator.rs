use crate::catalog::criteria::Criteria;
use crate::catalog::manager::Manager;

/// Minimum proficiency a required playstyle must reach to pass the filter.
pub const PLAYSTYLE_THRESHOLD: u8 = 80;

/// Returns the sub-sequence of `dataset` satisfying every active criterion,
/// in dataset order. Inactive criteria (blank search, empty playstyle set,
/// no booster, link-up unset) impose no constraint.
pub fn evaluate<'d>(dataset: &'d [Manager], criteria: &Criteria) -> Vec<&'d Manager> {
    let search = criteria.search_text.trim().to_lowercase();

    dataset
        .iter()
        .filter(|manager| {
            if !search.is_empty() && !manager.name.to_lowercase().contains(&search) {
                return false;
            }

            let meets_playstyles = criteria
                .required_playstyles
                .iter()
                .all(|key| manager.proficiency.get(*key) >= PLAYSTYLE_THRESHOLD);

            if !meets_playstyles {
                return false;
            }

            if let Some(stat) = &criteria.booster_category {
                if !manager.booster_effects.iter().any(|effect| &effect.stat == stat) {
                    return false;
                }
            }

            if criteria.require_link_up && manager.link_up_play.is_none() {
                return false;
            }

            true
        })
        .collect()
}
