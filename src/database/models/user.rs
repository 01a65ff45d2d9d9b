use bson::{Bson, Document};
use serde::{Deserialize, Serialize};

/// User model for MongoDB.
///
/// The `users` collection has no schema, so `_id` may be any BSON value and
/// `name` may be missing on documents written by other services.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Bson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Any other stored fields, returned as-is
    #[serde(flatten)]
    pub extra: Document,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            extra: Document::new(),
        }
    }

    /// Numbered placeholder used when seeding, `User1`, `User2`, ...
    pub fn placeholder(n: u64) -> Self {
        Self::new(format!("User{}", n))
    }
}
