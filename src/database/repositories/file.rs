use crate::database::models::{with_inserted_id, FileRecord};
use crate::database::mongodb::{MongoDbClient, FILES_COLLECTION};
use crate::errors::StoreResult;
use bson::doc;
use log::{debug, info};
use std::sync::Arc;

/// File repository for MongoDB operations
#[derive(Debug, Clone)]
pub struct FileRepository {
    client: Arc<MongoDbClient>,
}

impl FileRepository {
    /// Create a new FileRepository instance
    pub fn new(client: Arc<MongoDbClient>) -> Self {
        Self { client }
    }

    /// Count all files
    pub async fn count(&self) -> StoreResult<u64> {
        let collection = self.client.collection::<FileRecord>(FILES_COLLECTION);
        Ok(collection.count_documents(doc! {}).await?)
    }

    /// Insert a file record verbatim and return it with its `_id`
    pub async fn insert(&self, data: FileRecord) -> StoreResult<FileRecord> {
        let collection = self.client.collection::<FileRecord>(FILES_COLLECTION);
        let result = collection.insert_one(&data).await?;
        debug!("Inserted file {}", result.inserted_id);

        Ok(with_inserted_id(result.inserted_id, data))
    }

    /// Bulk insert files, returning how many were written
    pub async fn insert_many(&self, files: Vec<FileRecord>) -> StoreResult<usize> {
        if files.is_empty() {
            return Ok(0);
        }

        let collection = self.client.collection::<FileRecord>(FILES_COLLECTION);
        let result = collection.insert_many(files).await?;
        info!("Inserted {} files", result.inserted_ids.len());

        Ok(result.inserted_ids.len())
    }
}
