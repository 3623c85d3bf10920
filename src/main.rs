use catalog_core::ManagerCatalog;
use database::CatalogLoader;
use env_logger::Env;
use log::{error, info};
use std::sync::Arc;
use std::time::Instant;
use web::{AppData, CatalogState, ManagerCatalogServer};

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let started = Instant::now();

    // A failed load is non-fatal: the server starts and reports the failed
    // state on every request until the process is restarted.
    let catalog = match CatalogLoader::load() {
        Ok(managers) => {
            info!(
                "managers dataset loaded: {} records, {} ms",
                managers.len(),
                started.elapsed().as_millis()
            );

            CatalogState::Loaded(ManagerCatalog::new(managers))
        }
        Err(err) => {
            error!("failed to load managers dataset: {}", err);

            CatalogState::Failed(err.to_string())
        }
    };

    let data = AppData {
        catalog: Arc::new(catalog),
    };

    ManagerCatalogServer::new(data).run().await;
}
