use crate::AppData;
use crate::ApiError;
use crate::filters::filter_routes;
use crate::managers::manager_routes;
use axum::Router;
use axum::response::IntoResponse;

async fn fallback_handler() -> impl IntoResponse {
    ApiError::NotFound("no such catalog resource".to_string())
}

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(manager_routes())
            .merge(filter_routes())
            .fallback(fallback_handler)
    }
}
