//! Entity lifecycle base: columns shared by every table

use serde::Serialize;

/// Lifecycle columns every persisted record carries.
///
/// `version` is incremented on every mutation but is not used as an
/// optimistic-concurrency guard. A soft-deleted row keeps its data and
/// stays in the table; it just stops matching the live filter.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct EntityMeta {
    pub id: String,
    pub created_at: i64,
    pub updated_at: Option<i64>,
    pub is_deleted: bool,
    pub deleted_at: Option<i64>,
    pub version: i32,
}

impl EntityMeta {
    /// Fresh metadata for a new row
    pub fn new(now: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: None,
            is_deleted: false,
            deleted_at: None,
            version: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_meta_defaults() {
        let meta = EntityMeta::new(1_700_000_000_000);
        assert_eq!(meta.created_at, 1_700_000_000_000);
        assert!(meta.updated_at.is_none());
        assert!(!meta.is_deleted);
        assert!(meta.deleted_at.is_none());
        assert_eq!(meta.version, 1);
    }

    #[test]
    fn test_new_meta_ids_are_unique() {
        let a = EntityMeta::new(0);
        let b = EntityMeta::new(0);
        assert_ne!(a.id, b.id);
    }
}
