use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

/// About-me section. Singleton-like, same upsert scheme as the hero section.
/// `highlights` is stored as a JSON string array.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AboutMe {
    pub id: i64,
    pub headline: String,
    pub bio: String,
    pub highlights: String,
    pub profile_image: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct AboutMeForm {
    pub headline: String,
    pub bio: String,
    pub highlights: Vec<String>,
    pub profile_image: Option<String>,
}

impl AboutMe {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(AboutMe {
            id: row.get("id")?,
            headline: row.get("headline")?,
            bio: row.get("bio")?,
            highlights: row.get("highlights")?,
            profile_image: row.get("profile_image")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn get(pool: &DbPool) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM about_me_sections ORDER BY created_at DESC, id DESC LIMIT 1",
            [],
            Self::from_row,
        )
        .ok()
    }

    pub fn save(pool: &DbPool, form: &AboutMeForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        let highlights =
            serde_json::to_string(&form.highlights).map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO about_me_sections (slot, headline, bio, highlights, profile_image)
             VALUES (1, ?1, ?2, ?3, ?4)
             ON CONFLICT(slot) DO UPDATE SET
              headline = ?1, bio = ?2, highlights = ?3, profile_image = ?4,
              updated_at = CURRENT_TIMESTAMP",
            params![form.headline, form.bio, highlights, form.profile_image],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM about_me_sections", [], |row| {
            row.get(0)
        })
        .unwrap_or(0)
    }

    /// Parsed highlight lines for rendering.
    pub fn highlight_list(&self) -> Vec<String> {
        serde_json::from_str(&self.highlights).unwrap_or_default()
    }
}
