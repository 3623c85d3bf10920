use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/filters", get(super::filters_get_action))
}
