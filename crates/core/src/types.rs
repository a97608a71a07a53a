/// Database primary keys are PostgreSQL BIGSERIAL values.
///
/// User ids share this type even though users live in the external
/// authentication provider, not in our database.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
