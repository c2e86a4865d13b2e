use crate::db::connection::DbPool;
use crate::error::StoreError;
use crate::models::ping_event::{self, PingEvent};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read/write access to the append-only check-in record.
///
/// `latest` and `append` are deliberately independent operations with no
/// transactional coupling; concurrent requests may observe the same latest
/// event before either append commits.
#[async_trait]
pub trait PingStore: Send + Sync {
    /// The most recently recorded check-in, or `None` on a cold start.
    async fn latest(&self) -> Result<Option<PingEvent>, StoreError>;

    /// Durably records a check-in; the event id is assigned by the store.
    async fn append(&self, occurred_at: DateTime<Utc>) -> Result<(), StoreError>;
}

pub struct SqlitePingStore {
    db: DbPool,
}

impl SqlitePingStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PingStore for SqlitePingStore {
    async fn latest(&self) -> Result<Option<PingEvent>, StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let conn = db.get().map_err(StoreError::unavailable)?;
            ping_event::find_latest(&conn).map_err(StoreError::unavailable)
        })
        .await
        .map_err(StoreError::unavailable)?
    }

    async fn append(&self, occurred_at: DateTime<Utc>) -> Result<(), StoreError> {
        let db = self.db.clone();
        tokio::task::spawn_blocking(move || {
            let conn = db.get().map_err(StoreError::unavailable)?;
            ping_event::insert(&conn, occurred_at).map_err(StoreError::unavailable)
        })
        .await
        .map_err(StoreError::unavailable)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::create_pool;
    use crate::db::migrate::migrate;
    use chrono::Duration;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> SqlitePingStore {
        let db_path = dir.path().join("pings.db");
        let pool = create_pool(db_path.to_str().unwrap()).unwrap();
        migrate(&pool).unwrap();
        SqlitePingStore::new(pool)
    }

    #[tokio::test]
    async fn test_latest_is_none_on_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.latest().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_append_then_latest_keeps_subsecond_precision() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let at = Utc::now();

        store.append(at).await.unwrap();

        let latest = store.latest().await.unwrap().unwrap();
        assert_eq!(latest.occurred_at, at);
    }

    #[tokio::test]
    async fn test_ids_increase_in_append_order() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        let first = Utc::now();
        let second = first + Duration::seconds(1);

        store.append(first).await.unwrap();
        let a = store.latest().await.unwrap().unwrap();
        store.append(second).await.unwrap();
        let b = store.latest().await.unwrap().unwrap();

        assert!(b.id > a.id);
        assert_eq!(b.occurred_at, second);
    }
}
