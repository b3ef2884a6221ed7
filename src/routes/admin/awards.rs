use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::award::{Award, AwardForm};
use crate::uploads;
use crate::AdminSlug;

#[derive(FromForm)]
pub struct AwardFormData<'f> {
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub date_awarded: Option<String>,
    pub certificate_url: Option<String>,
    pub sort_order: Option<i64>,
    pub image: Option<TempFile<'f>>,
}

#[get("/awards")]
pub fn awards_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Awards",
        "admin_slug": slug.0,
        "items": Award::list(pool),
    });
    Template::render("admin/awards/list", &context)
}

#[get("/awards/new")]
pub fn award_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Award",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/awards/edit", &context)
}

#[get("/awards/<id>/edit")]
pub fn award_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = Award::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Award",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/awards/edit", &context))
}

#[post("/awards/new", data = "<form>")]
pub async fn award_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    mut form: Form<AwardFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/awards/new", admin_base(slug)));
            }
            uploads::save_upload(f, uploads::PREFIX_AWARDS, pool).await
        }
        // No image is fine: the public page falls back to the placeholder
        _ => None,
    };

    let af = AwardForm {
        title: form.title.clone(),
        description: form.description.clone(),
        issuer: form.issuer.clone(),
        date_awarded: form.date_awarded.clone(),
        certificate_url: form.certificate_url.clone(),
        image_id,
        sort_order: form.sort_order.unwrap_or(0),
    };

    if let Err(e) = Award::create(pool, &af) {
        log::error!("Failed to create award: {}", e);
    }
    Redirect::to(format!("{}/awards", admin_base(slug)))
}

#[post("/awards/<id>/edit", data = "<form>")]
pub async fn award_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    mut form: Form<AwardFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/awards/{}/edit", admin_base(slug), id));
            }
            uploads::save_upload(f, uploads::PREFIX_AWARDS, pool).await
        }
        _ => Award::find_by_id(pool, id).and_then(|a| a.image_id),
    };

    let af = AwardForm {
        title: form.title.clone(),
        description: form.description.clone(),
        issuer: form.issuer.clone(),
        date_awarded: form.date_awarded.clone(),
        certificate_url: form.certificate_url.clone(),
        image_id,
        sort_order: form.sort_order.unwrap_or(0),
    };

    if let Err(e) = Award::update(pool, id, &af) {
        log::error!("Failed to update award {}: {}", id, e);
    }
    Redirect::to(format!("{}/awards", admin_base(slug)))
}

#[post("/awards/<id>/delete")]
pub fn award_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = Award::delete(pool, id) {
        log::error!("Failed to delete award {}: {}", id, e);
    }
    Redirect::to(format!("{}/awards", admin_base(slug)))
}
