use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SocialLink {
    pub id: i64,
    pub platform: String,
    pub url: String,
    pub display_name: String,
    pub icon: String,
    pub active: bool,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct SocialLinkForm {
    pub platform: String,
    pub url: String,
    pub display_name: String,
    pub icon: String,
    pub active: bool,
    pub sort_order: i64,
}

impl SocialLink {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let active_raw: i64 = row.get("active")?;
        Ok(SocialLink {
            id: row.get("id")?,
            platform: row.get("platform")?,
            url: row.get("url")?,
            display_name: row.get("display_name")?,
            icon: row.get("icon")?,
            active: active_raw != 0,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM social_links WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    /// Every link, for the admin list.
    pub fn list(pool: &DbPool) -> Vec<Self> {
        Self::query_list(pool, "SELECT * FROM social_links ORDER BY sort_order, id")
    }

    /// Active links only, for the public footer.
    pub fn active(pool: &DbPool) -> Vec<Self> {
        Self::query_list(
            pool,
            "SELECT * FROM social_links WHERE active = 1 ORDER BY sort_order, id",
        )
    }

    fn query_list(pool: &DbPool, sql: &str) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn.prepare(sql) {
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
        conn.query_row("SELECT COUNT(*) FROM social_links", [], |row| row.get(0))
            .unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &SocialLinkForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO social_links (platform, url, display_name, icon, active, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                form.platform,
                form.url,
                form.display_name,
                form.icon,
                form.active as i64,
                form.sort_order,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &SocialLinkForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE social_links SET platform = ?1, url = ?2, display_name = ?3,
             icon = ?4, active = ?5, sort_order = ?6,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?7",
            params![
                form.platform,
                form.url,
                form.display_name,
                form.icon,
                form.active as i64,
                form.sort_order,
                id,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Flips the active flag in place. Last write wins.
    pub fn toggle_active(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE social_links SET active = NOT active,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?1",
            params![id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM social_links WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
