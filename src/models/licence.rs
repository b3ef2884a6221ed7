use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Licence {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image_id: Option<String>,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct LicenceForm {
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image_id: Option<String>,
    pub sort_order: i64,
}

impl Licence {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Licence {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            issuer: row.get("issuer")?,
            issue_date: row.get("issue_date")?,
            expiry_date: row.get("expiry_date")?,
            credential_id: row.get("credential_id")?,
            credential_url: row.get("credential_url")?,
            image_id: row.get("image_id")?,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM licences_and_certifications WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn list(pool: &DbPool) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn
            .prepare("SELECT * FROM licences_and_certifications ORDER BY sort_order, id")
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
        conn.query_row(
            "SELECT COUNT(*) FROM licences_and_certifications",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &LicenceForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO licences_and_certifications
             (title, description, issuer, issue_date, expiry_date,
              credential_id, credential_url, image_id, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                form.title,
                form.description,
                form.issuer,
                form.issue_date,
                form.expiry_date,
                form.credential_id,
                form.credential_url,
                form.image_id,
                form.sort_order,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &LicenceForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE licences_and_certifications SET
             title = ?1, description = ?2, issuer = ?3, issue_date = ?4,
             expiry_date = ?5, credential_id = ?6, credential_url = ?7,
             image_id = ?8, sort_order = ?9,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?10",
            params![
                form.title,
                form.description,
                form.issuer,
                form.issue_date,
                form.expiry_date,
                form.credential_id,
                form.credential_url,
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
            "DELETE FROM licences_and_certifications WHERE id = ?1",
            params![id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }
}
