use bson::Document;
use log::{error, info};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

use super::models::{FileRecord, User};
use super::mongodb::MongoDbClient;
use super::repositories::{FileRepository, UserRepository};
use super::seed::{self, SeedReport};
use crate::config::{MongoDbConfig, SeedConfig};
use crate::errors::{StoreError, StoreResult};

/// Open session plus the repositories bound to it
#[derive(Debug, Clone)]
pub struct Connection {
    client: Arc<MongoDbClient>,
    user_repo: UserRepository,
    file_repo: FileRepository,
}

impl Connection {
    fn new(client: Arc<MongoDbClient>) -> Self {
        Self {
            user_repo: UserRepository::new(client.clone()),
            file_repo: FileRepository::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &MongoDbClient {
        &self.client
    }
}

#[derive(Debug, Clone, Default)]
pub enum ConnectionState {
    #[default]
    Uninitialized,
    Connected(Connection),
}

/// Data access object for the files service.
///
/// Built uninitialized; `connect` moves it to `Connected` exactly once and
/// there is no way back. Clones share the same state, so a single instance can
/// be handed to every consumer.
///
/// Every operation other than `is_alive` fails with
/// [`StoreError::NotConnected`] until `connect` has succeeded.
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: Arc<MongoDbConfig>,
    seed_config: Arc<SeedConfig>,
    state: Arc<RwLock<ConnectionState>>,
    connecting: Arc<Mutex<()>>,
}

impl StoreClient {
    pub fn new(config: MongoDbConfig, seed_config: SeedConfig) -> Self {
        Self {
            config: Arc::new(config),
            seed_config: Arc::new(seed_config),
            state: Arc::new(RwLock::new(ConnectionState::Uninitialized)),
            connecting: Arc::new(Mutex::new(())),
        }
    }

    pub fn database_name(&self) -> &str {
        &self.config.database
    }

    /// Open the connection, then create and seed the collections.
    ///
    /// A connection failure is logged and returned, leaving the client not
    /// ready. Seeding failures are logged and swallowed since the connection
    /// itself is already usable at that point.
    pub async fn connect(&self) -> StoreResult<()> {
        let _guard = self.connecting.lock().await;
        if self.is_alive() {
            return Ok(());
        }

        self.config.validate().map_err(|e| {
            error!("Database client stays offline: {}", e);
            StoreError::from(e)
        })?;
        let client = MongoDbClient::init(&self.config).await.map_err(|e| {
            error!("Database client stays offline: {}", e);
            e
        })?;

        let connection = Connection::new(client);
        *self.state.write().unwrap_or_else(|e| e.into_inner()) =
            ConnectionState::Connected(connection.clone());
        info!("Store client connected to {}", self.database_name());

        if let Err(e) = connection.client.ensure_collections().await {
            error!("Failed to create collections: {}", e);
            return Ok(());
        }

        if self.seed_config.enabled {
            if let Err(e) =
                seed::seed(&connection.user_repo, &connection.file_repo, &self.seed_config).await
            {
                error!("Failed to insert placeholder documents: {}", e);
            }
        }

        Ok(())
    }

    /// Whether the connection handle is set
    pub fn is_alive(&self) -> bool {
        matches!(
            *self.state.read().unwrap_or_else(|e| e.into_inner()),
            ConnectionState::Connected(_)
        )
    }

    /// Current connection, or `NotConnected`
    pub fn connection(&self) -> StoreResult<Connection> {
        match &*self.state.read().unwrap_or_else(|e| e.into_inner()) {
            ConnectionState::Connected(connection) => Ok(connection.clone()),
            ConnectionState::Uninitialized => Err(StoreError::NotConnected),
        }
    }

    /// Run a seeding pass against the configured minimums
    pub async fn seed(&self) -> StoreResult<SeedReport> {
        let connection = self.connection()?;
        connection.client.ensure_collections().await?;
        seed::seed(&connection.user_repo, &connection.file_repo, &self.seed_config).await
    }

    pub async fn nb_users(&self) -> StoreResult<u64> {
        self.connection()?.user_repo.count().await
    }

    pub async fn nb_files(&self) -> StoreResult<u64> {
        self.connection()?.file_repo.count().await
    }

    /// First user matching `query`, if any
    pub async fn get_user(&self, query: Document) -> StoreResult<Option<User>> {
        self.connection()?.user_repo.find_one(query).await
    }

    /// Store `data` as-is and return it with the assigned `_id`
    pub async fn save_file(&self, data: FileRecord) -> StoreResult<FileRecord> {
        self.connection()?.file_repo.insert(data).await
    }
}
