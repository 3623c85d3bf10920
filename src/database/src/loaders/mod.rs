pub mod managers;

pub use managers::{CatalogLoader, LoadError};
