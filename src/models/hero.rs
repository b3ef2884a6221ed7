use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

/// The hero banner. The table is singleton-like: writes upsert against the
/// fixed `slot` key, reads take the most recently created row so databases
/// migrated from older installs with duplicate rows still resolve.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HeroSection {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub tagline: Option<String>,
    pub cta_primary_label: Option<String>,
    pub cta_primary_url: Option<String>,
    pub cta_secondary_label: Option<String>,
    pub cta_secondary_url: Option<String>,
    pub hero_image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct HeroForm {
    pub title: String,
    pub subtitle: Option<String>,
    pub tagline: Option<String>,
    pub cta_primary_label: Option<String>,
    pub cta_primary_url: Option<String>,
    pub cta_secondary_label: Option<String>,
    pub cta_secondary_url: Option<String>,
    pub hero_image_url: Option<String>,
}

impl HeroSection {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(HeroSection {
            id: row.get("id")?,
            title: row.get("title")?,
            subtitle: row.get("subtitle")?,
            tagline: row.get("tagline")?,
            cta_primary_label: row.get("cta_primary_label")?,
            cta_primary_url: row.get("cta_primary_url")?,
            cta_secondary_label: row.get("cta_secondary_label")?,
            cta_secondary_url: row.get("cta_secondary_url")?,
            hero_image_url: row.get("hero_image_url")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn get(pool: &DbPool) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM hero_sections ORDER BY created_at DESC, id DESC LIMIT 1",
            [],
            Self::from_row,
        )
        .ok()
    }

    pub fn save(pool: &DbPool, form: &HeroForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO hero_sections
             (slot, title, subtitle, tagline, cta_primary_label, cta_primary_url,
              cta_secondary_label, cta_secondary_url, hero_image_url)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(slot) DO UPDATE SET
              title = ?1, subtitle = ?2, tagline = ?3,
              cta_primary_label = ?4, cta_primary_url = ?5,
              cta_secondary_label = ?6, cta_secondary_url = ?7,
              hero_image_url = ?8, updated_at = CURRENT_TIMESTAMP",
            params![
                form.title,
                form.subtitle,
                form.tagline,
                form.cta_primary_label,
                form.cta_primary_url,
                form.cta_secondary_label,
                form.cta_secondary_url,
                form.hero_image_url,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM hero_sections", [], |row| row.get(0))
            .unwrap_or(0)
    }
}
