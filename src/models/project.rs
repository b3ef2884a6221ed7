use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

/// `tech_stack` is stored as a JSON string array in a single column.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub tech_stack: String,
    pub image_id: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub image_id: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub sort_order: i64,
}

impl Project {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Project {
            id: row.get("id")?,
            title: row.get("title")?,
            description: row.get("description")?,
            tech_stack: row.get("tech_stack")?,
            image_id: row.get("image_id")?,
            github_url: row.get("github_url")?,
            live_url: row.get("live_url")?,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM projects WHERE id = ?1",
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
        let mut stmt = match conn.prepare("SELECT * FROM projects ORDER BY sort_order, id") {
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
        conn.query_row("SELECT COUNT(*) FROM projects", [], |row| row.get(0))
            .unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &ProjectForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let tech_stack =
            serde_json::to_string(&form.tech_stack).map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO projects
             (title, description, tech_stack, image_id, github_url, live_url, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                form.title,
                form.description,
                tech_stack,
                form.image_id,
                form.github_url,
                form.live_url,
                form.sort_order,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &ProjectForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let tech_stack =
            serde_json::to_string(&form.tech_stack).map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE projects SET
             title = ?1, description = ?2, tech_stack = ?3, image_id = ?4,
             github_url = ?5, live_url = ?6, sort_order = ?7,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?8",
            params![
                form.title,
                form.description,
                tech_stack,
                form.image_id,
                form.github_url,
                form.live_url,
                form.sort_order,
                id,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM projects WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Parsed tech-stack entries for rendering.
    pub fn tech_list(&self) -> Vec<String> {
        serde_json::from_str(&self.tech_stack).unwrap_or_default()
    }
}
