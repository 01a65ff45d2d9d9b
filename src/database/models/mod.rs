pub mod file;
pub mod user;

pub use file::{placeholder_file, with_inserted_id, FileRecord};
pub use user::User;
