/// Catalog entry ids are UUIDs assigned by the remote store.
pub type EntryId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
