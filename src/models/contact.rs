use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct ContactMessageForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let read_raw: i64 = row.get("read")?;
        Ok(ContactMessage {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            message: row.get("message")?,
            read: read_raw != 0,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM contact_messages WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    /// Inbox order: newest first.
    pub fn list(pool: &DbPool) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn
            .prepare("SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC")
        {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        stmt.query_map([], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM contact_messages", [], |row| {
            row.get(0)
        })
        .unwrap_or(0)
    }

    pub fn count_unread(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row(
            "SELECT COUNT(*) FROM contact_messages WHERE read = 0",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0)
    }

    /// New messages always arrive unread.
    pub fn create(pool: &DbPool, form: &ContactMessageForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO contact_messages (name, email, message, read)
             VALUES (?1, ?2, ?3, 0)",
            params![form.name, form.email, form.message],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    /// Flips only the read flag. Last write wins.
    pub fn set_read(pool: &DbPool, id: i64, read: bool) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE contact_messages SET read = ?1, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?2",
            params![read as i64, id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM contact_messages WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
