pub mod list;

use crate::AppData;
use axum::Router;

pub fn manager_routes() -> Router<AppData> {
    Router::new().merge(list::routes::routes())
}
