use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::licence::{Licence, LicenceForm};
use crate::uploads;
use crate::AdminSlug;

#[derive(FromForm)]
pub struct LicenceFormData<'f> {
    pub title: String,
    pub description: String,
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub sort_order: Option<i64>,
    pub image: Option<TempFile<'f>>,
}

impl LicenceFormData<'_> {
    fn to_form(&self, image_id: Option<String>) -> LicenceForm {
        LicenceForm {
            title: self.title.clone(),
            description: self.description.clone(),
            issuer: self.issuer.clone(),
            issue_date: self.issue_date.clone(),
            expiry_date: self.expiry_date.clone(),
            credential_id: self.credential_id.clone(),
            credential_url: self.credential_url.clone(),
            image_id,
            sort_order: self.sort_order.unwrap_or(0),
        }
    }
}

#[get("/licences")]
pub fn licences_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Licences & Certifications",
        "admin_slug": slug.0,
        "items": Licence::list(pool),
    });
    Template::render("admin/licences/list", &context)
}

#[get("/licences/new")]
pub fn licence_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Licence",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/licences/edit", &context)
}

#[get("/licences/<id>/edit")]
pub fn licence_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = Licence::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Licence",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/licences/edit", &context))
}

#[post("/licences/new", data = "<form>")]
pub async fn licence_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    mut form: Form<LicenceFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/licences/new", admin_base(slug)));
            }
            uploads::save_upload(f, uploads::PREFIX_LICENCES, pool).await
        }
        _ => None,
    };

    if let Err(e) = Licence::create(pool, &form.to_form(image_id)) {
        log::error!("Failed to create licence: {}", e);
    }
    Redirect::to(format!("{}/licences", admin_base(slug)))
}

#[post("/licences/<id>/edit", data = "<form>")]
pub async fn licence_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    mut form: Form<LicenceFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/licences/{}/edit", admin_base(slug), id));
            }
            uploads::save_upload(f, uploads::PREFIX_LICENCES, pool).await
        }
        _ => Licence::find_by_id(pool, id).and_then(|l| l.image_id),
    };

    if let Err(e) = Licence::update(pool, id, &form.to_form(image_id)) {
        log::error!("Failed to update licence {}: {}", id, e);
    }
    Redirect::to(format!("{}/licences", admin_base(slug)))
}

#[post("/licences/<id>/delete")]
pub fn licence_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = Licence::delete(pool, id) {
        log::error!("Failed to delete licence {}: {}", id, e);
    }
    Redirect::to(format!("{}/licences", admin_base(slug)))
}
