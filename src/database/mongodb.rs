use crate::config::MongoDbConfig;
use crate::errors::StoreResult;
use log::{error, info};
use mongodb::{bson::doc, options::ClientOptions, Client, Collection, Database as MongoDatabase};
use std::sync::Arc;
use std::time::Duration;

pub const USERS_COLLECTION: &str = "users";
pub const FILES_COLLECTION: &str = "files";

/// MongoDB client wrapper holding the open session for one database
#[derive(Debug, Clone)]
pub struct MongoDbClient {
    _client: Client,
    database: MongoDatabase,
}

impl MongoDbClient {
    /// Open a connection and verify it with a ping
    pub async fn init(config: &MongoDbConfig) -> StoreResult<Arc<Self>> {
        let connection_string = config.uri();
        let database_name = config.database.clone();

        info!(
            "Connecting to MongoDB at {} with database {}",
            connection_string, database_name
        );

        let mut client_options = ClientOptions::parse(&connection_string).await?;

        let timeout = Duration::from_millis(config.connection_timeout_ms);
        client_options.connect_timeout = Some(timeout);
        client_options.server_selection_timeout = Some(timeout);
        client_options.max_pool_size = config.max_pool_size;
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)?;
        let database = client.database(&database_name);

        // The driver connects lazily, so force a round trip here
        if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
            error!("Failed to connect to MongoDB: {}", e);
            return Err(e.into());
        }
        info!(
            "Successfully connected to MongoDB database: {}",
            database_name
        );

        Ok(Arc::new(Self {
            _client: client,
            database,
        }))
    }

    /// Get a collection with the given name
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Get database reference
    pub fn database(&self) -> MongoDatabase {
        self.database.clone()
    }

    /// Create `users` and `files` if they do not exist yet.
    /// Returns the names of the collections that were created.
    pub async fn ensure_collections(&self) -> StoreResult<Vec<&'static str>> {
        let existing = self.database.list_collection_names().await?;
        let mut created = Vec::new();

        for name in [USERS_COLLECTION, FILES_COLLECTION] {
            if existing.iter().any(|c| c == name) {
                continue;
            }
            self.database.create_collection(name).await?;
            info!("Created collection {}", name);
            created.push(name);
        }

        Ok(created)
    }
}
