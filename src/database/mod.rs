// MongoDB modules
pub mod models;
pub mod mongodb;
pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use mongodb::{MongoDbClient, FILES_COLLECTION, USERS_COLLECTION};
pub use seed::SeedReport;
pub use service::{Connection, ConnectionState, StoreClient};
