use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Award {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub date_awarded: Option<String>,
    pub certificate_url: Option<String>,
    pub image_id: Option<String>,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct AwardForm {
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub date_awarded: Option<String>,
    pub certificate_url: Option<String>,
    pub image_id: Option<String>,
    pub sort_order: i64,
}

impl Award {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Award {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            issuer: row.get("issuer")?,
            date_awarded: row.get("date_awarded")?,
            certificate_url: row.get("certificate_url")?,
            image_id: row.get("image_id")?,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM awards_and_achievements WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    /// All awards, display order: sort_order ascending, ties by arrival.
    pub fn list(pool: &DbPool) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn
            .prepare("SELECT * FROM awards_and_achievements ORDER BY sort_order, id")
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
        conn.query_row("SELECT COUNT(*) FROM awards_and_achievements", [], |row| {
            row.get(0)
        })
        .unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &AwardForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO awards_and_achievements
             (title, description, issuer, date_awarded, certificate_url, image_id, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                form.title,
                form.description,
                form.issuer,
                form.date_awarded,
                form.certificate_url,
                form.image_id,
                form.sort_order,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &AwardForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE awards_and_achievements SET
             title = ?1, description = ?2, issuer = ?3, date_awarded = ?4,
             certificate_url = ?5, image_id = ?6, sort_order = ?7,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?8",
            params![
                form.title,
                form.description,
                form.issuer,
                form.date_awarded,
                form.certificate_url,
                form.image_id,
                form.sort_order,
                id,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "DELETE FROM awards_and_achievements WHERE id = ?1",
            params![id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }
}
