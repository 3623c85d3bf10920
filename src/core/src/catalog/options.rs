use crate::catalog::manager::Manager;
use itertools::Itertools;

/// Collects the booster-stat vocabulary of the dataset: every distinct
/// `stat` name across all records, lexicographically sorted. Populates the
/// booster filter control, so the result is independent of record order.
pub fn derive_booster_options(managers: &[Manager]) -> Vec<String> {
    managers
        .iter()
        .flat_map(|manager| manager.booster_effects.iter())
        .map(|effect| effect.stat.clone())
        .sorted()
        .dedup()
        .collect()
}
