use bson::{doc, Bson, Document};

/// File records are schema-less, stored exactly as the caller supplies them.
pub type FileRecord = Document;

/// Numbered placeholder used when seeding, `File1`, `File2`, ...
pub fn placeholder_file(n: u64) -> FileRecord {
    doc! { "filename": format!("File{}", n) }
}

/// Shape an inserted record as `{ _id, ...data }`.
pub fn with_inserted_id(inserted_id: Bson, data: FileRecord) -> FileRecord {
    let mut record = doc! { "_id": inserted_id };
    for (key, value) in data {
        if key != "_id" {
            record.insert(key, value);
        }
    }
    record
}
