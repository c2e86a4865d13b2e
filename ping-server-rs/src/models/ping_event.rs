use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

/// One recorded check-in. Rows are append-only; `id` is assigned by the
/// store and strictly increasing, so the maximum `id` is the latest event.
#[derive(Debug, Clone, PartialEq)]
pub struct PingEvent {
    pub id: i64,
    pub occurred_at: DateTime<Utc>,
}

fn row_to_event(row: &Row) -> rusqlite::Result<PingEvent> {
    let occurred_at: String = row.get("occurred_at")?;
    let occurred_at = DateTime::parse_from_rfc3339(&occurred_at)
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?
        .with_timezone(&Utc);
    Ok(PingEvent {
        id: row.get("id")?,
        occurred_at,
    })
}

pub fn find_latest(conn: &Connection) -> anyhow::Result<Option<PingEvent>> {
    let mut stmt =
        conn.prepare("SELECT id, occurred_at FROM ping_events ORDER BY id DESC LIMIT 1")?;
    let mut rows = stmt.query_map([], |row| row_to_event(row))?;
    Ok(rows.next().and_then(|r| r.ok()))
}

pub fn insert(conn: &Connection, occurred_at: DateTime<Utc>) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO ping_events (occurred_at) VALUES (?1)",
        params![occurred_at.to_rfc3339()],
    )?;
    Ok(())
}
