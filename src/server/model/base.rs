use chrono::{DateTime, Utc};

/// Identity and audit timestamps shared by every persisted record.
///
/// Embedded by value in each domain model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFields {
    pub id: i32,
    pub create_date: DateTime<Utc>,
    pub modify_date: DateTime<Utc>,
}

impl BaseFields {
    pub fn new(id: i32, create_date: DateTime<Utc>, modify_date: DateTime<Utc>) -> Self {
        Self {
            id,
            create_date,
            modify_date,
        }
    }
}
