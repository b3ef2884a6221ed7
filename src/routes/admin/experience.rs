use rocket::form::Form;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::education::{Education, EducationForm};
use crate::models::experience::{Experience, ExperienceForm};
use crate::AdminSlug;

#[derive(FromForm)]
pub struct ExperienceFormData {
    pub role: String,
    pub company: String,
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

#[derive(FromForm)]
pub struct EducationFormData {
    pub degree: String,
    pub institution: String,
    pub period: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

/// Experience and education share one admin screen, two parallel lists.
#[get("/experience")]
pub fn experience_list(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
) -> Template {
    let context = json!({
        "page_title": "Experience & Education",
        "admin_slug": slug.0,
        "experience": Experience::list(pool),
        "education": Education::list(pool),
    });
    Template::render("admin/experience/list", &context)
}

// ── Experience ─────────────────────────────────────────

#[get("/experience/new")]
pub fn experience_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Experience",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/experience/edit", &context)
}

#[get("/experience/<id>/edit")]
pub fn experience_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = Experience::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Experience",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/experience/edit", &context))
}

#[post("/experience/new", data = "<form>")]
pub fn experience_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    form: Form<ExperienceFormData>,
) -> Redirect {
    let ef = ExperienceForm {
        role: form.role.clone(),
        company: form.company.clone(),
        period: form.period.clone().unwrap_or_default(),
        description: form.description.clone().unwrap_or_default(),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = Experience::create(pool, &ef) {
        log::error!("Failed to create experience entry: {}", e);
    }
    Redirect::to(format!("{}/experience", admin_base(slug)))
}

#[post("/experience/<id>/edit", data = "<form>")]
pub fn experience_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    form: Form<ExperienceFormData>,
) -> Redirect {
    let ef = ExperienceForm {
        role: form.role.clone(),
        company: form.company.clone(),
        period: form.period.clone().unwrap_or_default(),
        description: form.description.clone().unwrap_or_default(),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = Experience::update(pool, id, &ef) {
        log::error!("Failed to update experience entry {}: {}", id, e);
    }
    Redirect::to(format!("{}/experience", admin_base(slug)))
}

#[post("/experience/<id>/delete")]
pub fn experience_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = Experience::delete(pool, id) {
        log::error!("Failed to delete experience entry {}: {}", id, e);
    }
    Redirect::to(format!("{}/experience", admin_base(slug)))
}

// ── Education ──────────────────────────────────────────

#[get("/experience/education/new")]
pub fn education_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Education",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/experience/education_edit", &context)
}

#[get("/experience/education/<id>/edit")]
pub fn education_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = Education::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Education",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/experience/education_edit", &context))
}

#[post("/experience/education/new", data = "<form>")]
pub fn education_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    form: Form<EducationFormData>,
) -> Redirect {
    let ef = EducationForm {
        degree: form.degree.clone(),
        institution: form.institution.clone(),
        period: form.period.clone().unwrap_or_default(),
        description: form.description.clone().unwrap_or_default(),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = Education::create(pool, &ef) {
        log::error!("Failed to create education entry: {}", e);
    }
    Redirect::to(format!("{}/experience", admin_base(slug)))
}

#[post("/experience/education/<id>/edit", data = "<form>")]
pub fn education_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    form: Form<EducationFormData>,
) -> Redirect {
    let ef = EducationForm {
        degree: form.degree.clone(),
        institution: form.institution.clone(),
        period: form.period.clone().unwrap_or_default(),
        description: form.description.clone().unwrap_or_default(),
        sort_order: form.sort_order.unwrap_or(0),
    };
    if let Err(e) = Education::update(pool, id, &ef) {
        log::error!("Failed to update education entry {}: {}", id, e);
    }
    Redirect::to(format!("{}/experience", admin_base(slug)))
}

#[post("/experience/education/<id>/delete")]
pub fn education_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = Education::delete(pool, id) {
        log::error!("Failed to delete education entry {}: {}", id, e);
    }
    Redirect::to(format!("{}/experience", admin_base(slug)))
}
