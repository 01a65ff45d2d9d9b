pub mod config;
pub mod database;
pub mod errors;

pub use config::Config;
pub use database::StoreClient;
pub use errors::{StoreError, StoreResult};
