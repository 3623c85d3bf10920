pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use core::{PlaystyleKey, SortMode};
use serde::Serialize;

/// Vocabulary the filter form controls are populated from: the derived
/// booster options plus the fixed playstyle and sort enumerations.
#[derive(Serialize)]
pub struct FilterOptionsResponse {
    pub boosters: Vec<String>,
    pub playstyles: Vec<PlaystyleOption>,
    pub sort_modes: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct PlaystyleOption {
    pub key: PlaystyleKey,
    pub label: &'static str,
}

pub async fn filters_get_action(
    State(state): State<AppData>,
) -> ApiResult<Json<FilterOptionsResponse>> {
    let catalog = state.catalog.catalog()?;

    Ok(Json(FilterOptionsResponse {
        boosters: catalog.booster_options().to_vec(),
        playstyles: playstyle_options(),
        sort_modes: sort_mode_options(),
    }))
}

fn playstyle_options() -> Vec<PlaystyleOption> {
    PlaystyleKey::ALL
        .into_iter()
        .map(|key| PlaystyleOption {
            key,
            label: key.label(),
        })
        .collect()
}

fn sort_mode_options() -> Vec<&'static str> {
    let mut modes = vec![
        SortMode::Name.as_str(),
        SortMode::NameDesc.as_str(),
        SortMode::ReleaseDate.as_str(),
        SortMode::ReleaseDateDesc.as_str(),
    ];

    modes.extend(PlaystyleKey::ALL.into_iter().map(|key| key.as_str()));

    modes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_modes_cover_every_wire_form() {
        let modes = sort_mode_options();

        assert_eq!(modes.len(), 9);

        for mode in modes {
            assert!(SortMode::from_str(mode).is_some(), "unparseable: {}", mode);
        }
    }

    #[test]
    fn test_playstyle_options_carry_labels() {
        let options = playstyle_options();

        assert_eq!(options.len(), 5);
        assert_eq!(options[0].label, "Possession Game");
    }
}
