use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub external_url: Option<String>,
    pub image_id: Option<String>,
    pub published: bool,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Default)]
pub struct BlogPostForm {
    pub title: String,
    /// Empty means: derive from the title.
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub external_url: Option<String>,
    pub image_id: Option<String>,
    pub published: bool,
    pub sort_order: i64,
}

impl BlogPostForm {
    fn resolved_slug(&self) -> String {
        if self.slug.trim().is_empty() {
            slug::slugify(&self.title)
        } else {
            slug::slugify(&self.slug)
        }
    }
}

impl BlogPost {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let published_raw: i64 = row.get("published")?;
        Ok(BlogPost {
            id: row.get("id")?,
            title: row.get("title")?,
            slug: row.get("slug")?,
            excerpt: row.get("excerpt")?,
            content: row.get("content")?,
            external_url: row.get("external_url")?,
            image_id: row.get("image_id")?,
            published: published_raw != 0,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM blog_posts WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn find_by_slug(pool: &DbPool, slug: &str) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM blog_posts WHERE slug = ?1",
            params![slug],
            Self::from_row,
        )
        .ok()
    }

    /// Every post, drafts included, for the admin list.
    pub fn list(pool: &DbPool) -> Vec<Self> {
        Self::query_list(pool, "SELECT * FROM blog_posts ORDER BY sort_order, id")
    }

    /// Published posts only, for the public site and the feed.
    pub fn published(pool: &DbPool) -> Vec<Self> {
        Self::query_list(
            pool,
            "SELECT * FROM blog_posts WHERE published = 1 ORDER BY sort_order, id",
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

    pub fn count(pool: &DbPool, published_only: bool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        let sql = if published_only {
            "SELECT COUNT(*) FROM blog_posts WHERE published = 1"
        } else {
            "SELECT COUNT(*) FROM blog_posts"
        };
        conn.query_row(sql, [], |row| row.get(0)).unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &BlogPostForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO blog_posts
             (title, slug, excerpt, content, external_url, image_id, published, sort_order)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                form.title,
                form.resolved_slug(),
                form.excerpt,
                form.content,
                form.external_url,
                form.image_id,
                form.published as i64,
                form.sort_order,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &BlogPostForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE blog_posts SET
             title = ?1, slug = ?2, excerpt = ?3, content = ?4, external_url = ?5,
             image_id = ?6, published = ?7, sort_order = ?8,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?9",
            params![
                form.title,
                form.resolved_slug(),
                form.excerpt,
                form.content,
                form.external_url,
                form.image_id,
                form.published as i64,
                form.sort_order,
                id,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Flips only the published flag. Last write wins.
    pub fn set_published(pool: &DbPool, id: i64, published: bool) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE blog_posts SET published = ?1, updated_at = CURRENT_TIMESTAMP
             WHERE id = ?2",
            params![published as i64, id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM blog_posts WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
