use chrono::NaiveDateTime;
use rusqlite::{params, Row};
use serde::{Deserialize, Serialize};

use crate::db::DbPool;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SkillCategory {
    pub id: i64,
    pub category: String,
    pub icon: String,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Skill {
    pub id: i64,
    pub category_id: i64,
    pub name: String,
    pub proficiency: i64,
    pub sort_order: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A category joined with its skills, as the skills page consumes it.
#[derive(Debug, Serialize, Clone)]
pub struct CategoryWithSkills {
    #[serde(flatten)]
    pub category: SkillCategory,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SkillCategoryForm {
    pub category: String,
    pub icon: String,
    pub sort_order: i64,
}

#[derive(Debug, Deserialize, Default)]
pub struct SkillForm {
    pub category_id: i64,
    pub name: String,
    pub proficiency: i64,
    pub sort_order: i64,
}

impl SkillCategory {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(SkillCategory {
            id: row.get("id")?,
            category: row.get("category")?,
            icon: row.get("icon")?,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM skill_categories WHERE id = ?1",
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
        let mut stmt =
            match conn.prepare("SELECT * FROM skill_categories ORDER BY sort_order, id") {
                Ok(s) => s,
                Err(_) => return vec![],
            };
        stmt.query_map([], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    /// Categories with their skills, both in display order.
    pub fn list_with_skills(pool: &DbPool) -> Vec<CategoryWithSkills> {
        Self::list(pool)
            .into_iter()
            .map(|category| {
                let skills = Skill::for_category(pool, category.id);
                CategoryWithSkills { category, skills }
            })
            .collect()
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM skill_categories", [], |row| {
            row.get(0)
        })
        .unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &SkillCategoryForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO skill_categories (category, icon, sort_order) VALUES (?1, ?2, ?3)",
            params![form.category, form.icon, form.sort_order],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &SkillCategoryForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE skill_categories SET category = ?1, icon = ?2, sort_order = ?3,
             updated_at = CURRENT_TIMESTAMP WHERE id = ?4",
            params![form.category, form.icon, form.sort_order, id],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Deletes the category's skills first, then the category itself.
    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM skills WHERE category_id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM skill_categories WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

impl Skill {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Skill {
            id: row.get("id")?,
            category_id: row.get("category_id")?,
            name: row.get("name")?,
            proficiency: row.get("proficiency")?,
            sort_order: row.get("sort_order")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }

    pub fn find_by_id(pool: &DbPool, id: i64) -> Option<Self> {
        let conn = pool.get().ok()?;
        conn.query_row(
            "SELECT * FROM skills WHERE id = ?1",
            params![id],
            Self::from_row,
        )
        .ok()
    }

    pub fn for_category(pool: &DbPool, category_id: i64) -> Vec<Self> {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return vec![],
        };
        let mut stmt = match conn
            .prepare("SELECT * FROM skills WHERE category_id = ?1 ORDER BY sort_order, id")
        {
            Ok(s) => s,
            Err(_) => return vec![],
        };
        stmt.query_map(params![category_id], Self::from_row)
            .map(|rows| rows.filter_map(|r| r.ok()).collect())
            .unwrap_or_default()
    }

    pub fn count(pool: &DbPool) -> i64 {
        let conn = match pool.get() {
            Ok(c) => c,
            Err(_) => return 0,
        };
        conn.query_row("SELECT COUNT(*) FROM skills", [], |row| row.get(0))
            .unwrap_or(0)
    }

    pub fn create(pool: &DbPool, form: &SkillForm) -> Result<i64, String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "INSERT INTO skills (category_id, name, proficiency, sort_order)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                form.category_id,
                form.name,
                form.proficiency,
                form.sort_order
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(conn.last_insert_rowid())
    }

    pub fn update(pool: &DbPool, id: i64, form: &SkillForm) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute(
            "UPDATE skills SET category_id = ?1, name = ?2, proficiency = ?3,
             sort_order = ?4, updated_at = CURRENT_TIMESTAMP WHERE id = ?5",
            params![
                form.category_id,
                form.name,
                form.proficiency,
                form.sort_order,
                id,
            ],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn delete(pool: &DbPool, id: i64) -> Result<(), String> {
        let conn = pool.get().map_err(|e| e.to_string())?;
        conn.execute("DELETE FROM skills WHERE id = ?1", params![id])
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}
