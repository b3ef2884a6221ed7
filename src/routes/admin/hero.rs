use rocket::form::Form;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::hero::{HeroForm, HeroSection};
use crate::AdminSlug;

#[derive(FromForm)]
pub struct HeroFormData {
    pub title: String,
    pub subtitle: Option<String>,
    pub tagline: Option<String>,
    pub cta_primary_label: Option<String>,
    pub cta_primary_url: Option<String>,
    pub cta_secondary_label: Option<String>,
    pub cta_secondary_url: Option<String>,
    pub hero_image_url: Option<String>,
}

#[get("/hero")]
pub fn hero_edit(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Hero Section",
        "admin_slug": slug.0,
        "hero": HeroSection::get(pool),
    });
    Template::render("admin/hero", &context)
}

#[post("/hero", data = "<form>")]
pub fn hero_save(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    form: Form<HeroFormData>,
) -> Redirect {
    let hf = HeroForm {
        title: form.title.clone(),
        subtitle: form.subtitle.clone(),
        tagline: form.tagline.clone(),
        cta_primary_label: form.cta_primary_label.clone(),
        cta_primary_url: form.cta_primary_url.clone(),
        cta_secondary_label: form.cta_secondary_label.clone(),
        cta_secondary_url: form.cta_secondary_url.clone(),
        hero_image_url: form.hero_image_url.clone(),
    };

    if let Err(e) = HeroSection::save(pool, &hf) {
        log::error!("Failed to save hero section: {}", e);
        return Redirect::to(format!("{}/hero?saved=error", admin_base(slug)));
    }
    Redirect::to(format!("{}/hero?saved=ok", admin_base(slug)))
}
