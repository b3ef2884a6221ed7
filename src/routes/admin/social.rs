use rocket::form::Form;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::social::{SocialLink, SocialLinkForm};
use crate::validation;
use crate::AdminSlug;

#[derive(FromForm)]
pub struct SocialFormData {
    pub platform: String,
    pub url: String,
    pub display_name: Option<String>,
    pub icon: Option<String>,
    pub active: Option<String>,
    pub sort_order: Option<i64>,
}

impl SocialFormData {
    fn to_form(&self) -> SocialLinkForm {
        SocialLinkForm {
            platform: self.platform.clone(),
            url: self.url.clone(),
            display_name: self.display_name.clone().unwrap_or_default(),
            icon: self.icon.clone().unwrap_or_default(),
            active: self.active.is_some(),
            sort_order: self.sort_order.unwrap_or(0),
        }
    }
}

#[get("/social")]
pub fn social_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Social Links",
        "admin_slug": slug.0,
        "items": SocialLink::list(pool),
    });
    Template::render("admin/social/list", &context)
}

#[get("/social/new")]
pub fn social_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Social Link",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/social/edit", &context)
}

#[get("/social/<id>/edit")]
pub fn social_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = SocialLink::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Social Link",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/social/edit", &context))
}

#[post("/social/new", data = "<form>")]
pub fn social_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    form: Form<SocialFormData>,
) -> Redirect {
    if !validation::is_valid_url(&form.url) {
        return Redirect::to(format!("{}/social/new", admin_base(slug)));
    }
    if let Err(e) = SocialLink::create(pool, &form.to_form()) {
        log::error!("Failed to create social link: {}", e);
    }
    Redirect::to(format!("{}/social", admin_base(slug)))
}

#[post("/social/<id>/edit", data = "<form>")]
pub fn social_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    form: Form<SocialFormData>,
) -> Redirect {
    if !validation::is_valid_url(&form.url) {
        return Redirect::to(format!("{}/social/{}/edit", admin_base(slug), id));
    }
    if let Err(e) = SocialLink::update(pool, id, &form.to_form()) {
        log::error!("Failed to update social link {}: {}", id, e);
    }
    Redirect::to(format!("{}/social", admin_base(slug)))
}

/// Flip visibility from the list screen without touching other fields.
#[post("/social/<id>/toggle")]
pub fn social_toggle_active(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = SocialLink::toggle_active(pool, id) {
        log::error!("Failed to toggle social link {}: {}", id, e);
    }
    Redirect::to(format!("{}/social", admin_base(slug)))
}

#[post("/social/<id>/delete")]
pub fn social_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = SocialLink::delete(pool, id) {
        log::error!("Failed to delete social link {}: {}", id, e);
    }
    Redirect::to(format!("{}/social", admin_base(slug)))
}
