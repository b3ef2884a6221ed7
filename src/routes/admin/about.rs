use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::{admin_base, split_list_field};
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::about::{AboutMe, AboutMeForm};
use crate::uploads;
use crate::AdminSlug;

#[derive(FromForm)]
pub struct AboutFormData<'f> {
    pub headline: String,
    pub bio: String,
    /// Comma-separated in the form, stored as a JSON array.
    pub highlights: Option<String>,
    pub profile_image: Option<TempFile<'f>>,
}

#[get("/about")]
pub fn about_edit(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let about = AboutMe::get(pool);
    let highlights = about
        .as_ref()
        .map(|a| a.highlight_list().join(", "))
        .unwrap_or_default();
    let context = json!({
        "page_title": "About Me",
        "admin_slug": slug.0,
        "about": about,
        "highlights_csv": highlights,
    });
    Template::render("admin/about", &context)
}

#[post("/about", data = "<form>")]
pub async fn about_save(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    mut form: Form<AboutFormData<'_>>,
) -> Redirect {
    let profile_image = match form.profile_image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/about?saved=badfile", admin_base(slug)));
            }
            uploads::save_upload(f, uploads::PREFIX_ABOUT, pool).await
        }
        // No new file: keep whatever the current record points at
        _ => AboutMe::get(pool).and_then(|a| a.profile_image),
    };

    let af = AboutMeForm {
        headline: form.headline.clone(),
        bio: form.bio.clone(),
        highlights: split_list_field(form.highlights.as_deref().unwrap_or("")),
        profile_image,
    };

    if let Err(e) = AboutMe::save(pool, &af) {
        log::error!("Failed to save about section: {}", e);
        return Redirect::to(format!("{}/about?saved=error", admin_base(slug)));
    }
    Redirect::to(format!("{}/about?saved=ok", admin_base(slug)))
}
