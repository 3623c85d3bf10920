pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use core::{Criteria, ManagerCard, PlaystyleKey, SortMode};
use serde::{Deserialize, Serialize};

/// Query-string form of the filter controls. Every parameter is optional;
/// an absent parameter leaves its criterion at the reset default.
#[derive(Deserialize, Default)]
pub struct ManagerListRequest {
    pub search: Option<String>,
    pub sort: Option<String>,
    /// Comma-separated playstyle keys, e.g. `possessionGame,outWide`.
    pub playstyles: Option<String>,
    pub booster: Option<String>,
    pub linkup: Option<bool>,
}

impl ManagerListRequest {
    pub fn into_criteria(self) -> Result<Criteria, ApiError> {
        let sort_mode = match self.sort.as_deref() {
            None | Some("") => SortMode::default(),
            Some(value) => SortMode::from_str(value)
                .ok_or_else(|| ApiError::BadRequest(format!("unknown sort mode '{}'", value)))?,
        };

        let mut required_playstyles = Vec::new();

        if let Some(keys) = &self.playstyles {
            for key in keys.split(',').filter(|key| !key.is_empty()) {
                let parsed = PlaystyleKey::from_str(key).ok_or_else(|| {
                    ApiError::BadRequest(format!("unknown playstyle key '{}'", key))
                })?;

                required_playstyles.push(parsed);
            }
        }

        // An empty booster value is the "all" sentinel from the select control.
        let booster_category = self.booster.filter(|stat| !stat.is_empty());

        Ok(Criteria {
            search_text: self.search.unwrap_or_default(),
            required_playstyles,
            booster_category,
            require_link_up: self.linkup.unwrap_or(false),
            sort_mode,
        })
    }
}

#[derive(Serialize)]
pub struct ManagerListResponse {
    pub count: usize,
    pub count_label: String,
    pub managers: Vec<ManagerCard>,
}

pub async fn manager_list_action(
    State(state): State<AppData>,
    Query(params): Query<ManagerListRequest>,
) -> ApiResult<Json<ManagerListResponse>> {
    let catalog = state.catalog.catalog()?;

    let criteria = params.into_criteria()?;
    let managers = catalog.query(&criteria);

    Ok(Json(ManagerListResponse {
        count: managers.len(),
        count_label: count_label(managers.len()),
        managers,
    }))
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 manager".to_string()
    } else {
        format!("{} managers", count)
    }
}
