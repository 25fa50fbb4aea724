//! Project entity - the single record type served by the API.

use chrono::{DateTime, SubsecRound, Utc};

/// A stored project.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// Names are not unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Current time truncated to whole seconds, the precision timestamps are stored with.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}
