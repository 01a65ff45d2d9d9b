use crate::config::SeedConfig;
use crate::database::models::{placeholder_file, FileRecord, User};
use crate::database::repositories::{FileRepository, UserRepository};
use crate::errors::StoreResult;
use log::{debug, info};

/// Documents inserted by one seeding pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users_inserted: usize,
    pub files_inserted: usize,
}

/// How many documents are missing to reach `minimum`
pub fn shortfall(current: u64, minimum: u64) -> u64 {
    minimum.saturating_sub(current)
}

/// Placeholders are numbered from 1 regardless of what is already stored.
pub fn placeholder_users(count: u64) -> Vec<User> {
    (1..=count).map(User::placeholder).collect()
}

pub fn placeholder_files(count: u64) -> Vec<FileRecord> {
    (1..=count).map(placeholder_file).collect()
}

/// Top up both collections to the configured minimums.
pub async fn seed(
    users: &UserRepository,
    files: &FileRepository,
    config: &SeedConfig,
) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();

    let user_count = users.count().await?;
    let missing_users = shortfall(user_count, config.min_users);
    debug!(
        "users: {} present, {} required, {} missing",
        user_count, config.min_users, missing_users
    );
    if missing_users > 0 {
        report.users_inserted = users.insert_many(placeholder_users(missing_users)).await?;
    }

    let file_count = files.count().await?;
    let missing_files = shortfall(file_count, config.min_files);
    debug!(
        "files: {} present, {} required, {} missing",
        file_count, config.min_files, missing_files
    );
    if missing_files > 0 {
        report.files_inserted = files.insert_many(placeholder_files(missing_files)).await?;
    }

    info!(
        "Seeding complete: {} users and {} files inserted",
        report.users_inserted, report.files_inserted
    );
    Ok(report)
}
