use crate::catalog::manager::PlaystyleKey;

/// How the filtered result set is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    Name,
    NameDesc,
    ReleaseDate,
    #[default]
    ReleaseDateDesc,
    /// Descending by one playstyle's proficiency. The only mode where the
    /// selector picks a field instead of a direction.
    Playstyle(PlaystyleKey),
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::NameDesc => "name-desc",
            SortMode::ReleaseDate => "releaseDate",
            SortMode::ReleaseDateDesc => "releaseDate-desc",
            SortMode::Playstyle(key) => key.as_str(),
        }
    }

    pub fn from_str(value: &str) -> Option<SortMode> {
        match value {
            "name" => Some(SortMode::Name),
            "name-desc" => Some(SortMode::NameDesc),
            "releaseDate" => Some(SortMode::ReleaseDate),
            "releaseDate-desc" => Some(SortMode::ReleaseDateDesc),
            other => PlaystyleKey::from_str(other).map(SortMode::Playstyle),
        }
    }
}

/// A snapshot of the filter form, rebuilt on every evaluation. The default
/// value is the reset state: no filters, newest release first.
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Case-insensitive substring match on the manager name. Blank means
    /// inactive.
    pub search_text: String,
    /// Every listed playstyle must score at or above the 80 threshold.
    pub required_playstyles: Vec<PlaystyleKey>,
    /// Exact booster stat name, drawn from the derived options vocabulary.
    pub booster_category: Option<String>,
    pub require_link_up: bool,
    pub sort_mode: SortMode,
}
