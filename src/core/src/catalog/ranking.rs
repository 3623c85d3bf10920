use crate::catalog::criteria::SortMode;
use crate::catalog::manager::Manager;
use chrono::NaiveDate;

/// Orders the filtered records by the requested mode and returns them.
/// All comparisons go through a stable sort, so records with equal keys
/// keep their relative dataset order.
pub fn rank<'d>(mut records: Vec<&'d Manager>, mode: SortMode) -> Vec<&'d Manager> {
    match mode {
        SortMode::Name => {
            records.sort_by_key(|manager| name_key(manager));
        }
        SortMode::NameDesc => {
            records.sort_by(|a, b| name_key(b).cmp(&name_key(a)));
        }
        SortMode::ReleaseDate => {
            records.sort_by_key(|manager| release_key(manager));
        }
        SortMode::ReleaseDateDesc => {
            records.sort_by(|a, b| release_key(b).cmp(&release_key(a)));
        }
        SortMode::Playstyle(key) => {
            records.sort_by(|a, b| b.proficiency.get(key).cmp(&a.proficiency.get(key)));
        }
    }

    records
}

fn name_key(manager: &Manager) -> String {
    manager.name.to_lowercase()
}

/// A record without a release date sorts as the earliest possible date:
/// first ascending, last descending. Never a fault.
fn release_key(manager: &Manager) -> NaiveDate {
    manager.release_date.unwrap_or(NaiveDate::MIN)
}
