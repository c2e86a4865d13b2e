use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = Pool<SqliteConnectionManager>;

/// Builds the process-wide connection pool. Pragmas are applied per
/// connection via the manager's init hook; an unreachable database path
/// fails pool construction and aborts startup.
pub fn create_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA journal_mode = DELETE;
             PRAGMA synchronous = FULL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    let pool = Pool::builder().max_size(4).build(manager)?;
    Ok(pool)
}
