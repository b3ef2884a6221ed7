use rocket::form::Form;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::skill::{Skill, SkillCategory, SkillCategoryForm, SkillForm};
use crate::AdminSlug;

#[derive(FromForm)]
pub struct CategoryFormData {
    pub category: String,
    pub icon: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(FromForm)]
pub struct SkillFormData {
    pub category_id: i64,
    pub name: String,
    pub proficiency: Option<i64>,
    pub sort_order: Option<i64>,
}

// ── Categories ─────────────────────────────────────────

#[get("/skills")]
pub fn skills_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Skills",
        "admin_slug": slug.0,
        "categories": SkillCategory::list_with_skills(pool),
    });
    Template::render("admin/skills/list", &context)
}

#[get("/skills/category/new")]
pub fn category_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Skill Category",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/skills/category_edit", &context)
}

#[get("/skills/category/<id>/edit")]
pub fn category_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = SkillCategory::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Skill Category",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/skills/category_edit", &context))
}

#[post("/skills/category/new", data = "<form>")]
pub fn category_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    form: Form<CategoryFormData>,
) -> Redirect {
    let cf = SkillCategoryForm {
        category: form.category.clone(),
        icon: form.icon.clone().unwrap_or_default(),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = SkillCategory::create(pool, &cf) {
        log::error!("Failed to create skill category: {}", e);
    }
    Redirect::to(format!("{}/skills", admin_base(slug)))
}

#[post("/skills/category/<id>/edit", data = "<form>")]
pub fn category_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    form: Form<CategoryFormData>,
) -> Redirect {
    let cf = SkillCategoryForm {
        category: form.category.clone(),
        icon: form.icon.clone().unwrap_or_default(),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = SkillCategory::update(pool, id, &cf) {
        log::error!("Failed to update skill category {}: {}", id, e);
    }
    Redirect::to(format!("{}/skills", admin_base(slug)))
}

/// Deletes the category and, first, every skill in it.
#[post("/skills/category/<id>/delete")]
pub fn category_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = SkillCategory::delete(pool, id) {
        log::error!("Failed to delete skill category {}: {}", id, e);
    }
    Redirect::to(format!("{}/skills", admin_base(slug)))
}

// ── Skills ─────────────────────────────────────────────

#[get("/skills/category/<category_id>/skills/new")]
pub fn skill_new(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    category_id: i64,
) -> Option<Template> {
    let category = SkillCategory::find_by_id(pool, category_id)?;
    let context = json!({
        "page_title": "New Skill",
        "admin_slug": slug.0,
        "item": null,
        "category": category,
    });
    Some(Template::render("admin/skills/skill_edit", &context))
}

#[get("/skills/<id>/edit")]
pub fn skill_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = Skill::find_by_id(pool, id)?;
    let category = SkillCategory::find_by_id(pool, item.category_id)?;
    let context = json!({
        "page_title": "Edit Skill",
        "admin_slug": slug.0,
        "item": item,
        "category": category,
    });
    Some(Template::render("admin/skills/skill_edit", &context))
}

#[post("/skills/new", data = "<form>")]
pub fn skill_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    form: Form<SkillFormData>,
) -> Redirect {
    let sf = SkillForm {
        category_id: form.category_id,
        name: form.name.clone(),
        proficiency: form.proficiency.unwrap_or(0).clamp(0, 100),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = Skill::create(pool, &sf) {
        log::error!("Failed to create skill: {}", e);
    }
    Redirect::to(format!("{}/skills", admin_base(slug)))
}

#[post("/skills/<id>/edit", data = "<form>")]
pub fn skill_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    form: Form<SkillFormData>,
) -> Redirect {
    let sf = SkillForm {
        category_id: form.category_id,
        name: form.name.clone(),
        proficiency: form.proficiency.unwrap_or(0).clamp(0, 100),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = Skill::update(pool, id, &sf) {
        log::error!("Failed to update skill {}: {}", id, e);
    }
    Redirect::to(format!("{}/skills", admin_base(slug)))
}

#[post("/skills/<id>/delete")]
pub fn skill_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = Skill::delete(pool, id) {
        log::error!("Failed to delete skill {}: {}", id, e);
    }
    Redirect::to(format!("{}/skills", admin_base(slug)))
}
