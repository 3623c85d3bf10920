pub mod loaders;

pub use loaders::{CatalogLoader, LoadError};
