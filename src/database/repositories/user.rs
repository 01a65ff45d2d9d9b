use crate::database::models::User;
use crate::database::mongodb::{MongoDbClient, USERS_COLLECTION};
use crate::errors::StoreResult;
use bson::{doc, Document};
use log::{debug, info};
use std::sync::Arc;

/// User repository for MongoDB operations
#[derive(Debug, Clone)]
pub struct UserRepository {
    client: Arc<MongoDbClient>,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(client: Arc<MongoDbClient>) -> Self {
        Self { client }
    }

    /// Count all users
    pub async fn count(&self) -> StoreResult<u64> {
        let collection = self.client.collection::<User>(USERS_COLLECTION);
        Ok(collection.count_documents(doc! {}).await?)
    }

    /// Find the first user matching a field-equality query
    pub async fn find_one(&self, query: Document) -> StoreResult<Option<User>> {
        let collection = self.client.collection::<User>(USERS_COLLECTION);
        debug!("Looking up user with query {}", query);
        let user = collection.find_one(query).await?;
        debug!("User lookup returned {:?}", user);

        Ok(user)
    }

    /// Bulk insert users, returning how many were written
    pub async fn insert_many(&self, users: Vec<User>) -> StoreResult<usize> {
        if users.is_empty() {
            return Ok(0);
        }

        let collection = self.client.collection::<User>(USERS_COLLECTION);
        let result = collection.insert_many(users).await?;
        info!("Inserted {} users", result.inserted_ids.len());

        Ok(result.inserted_ids.len())
    }
}
