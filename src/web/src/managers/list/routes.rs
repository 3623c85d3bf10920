use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/managers", get(super::manager_list_action))
}
