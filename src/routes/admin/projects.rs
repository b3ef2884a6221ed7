use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::{admin_base, split_list_field};
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::project::{Project, ProjectForm};
use crate::uploads;
use crate::AdminSlug;

#[derive(FromForm)]
pub struct ProjectFormData<'f> {
    pub title: String,
    pub description: String,
    /// Comma-separated in the form, stored as a JSON array.
    pub tech_stack: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub sort_order: Option<i64>,
    pub image: Option<TempFile<'f>>,
}

impl ProjectFormData<'_> {
    fn to_form(&self, image_id: Option<String>) -> ProjectForm {
        ProjectForm {
            title: self.title.clone(),
            description: self.description.clone(),
            tech_stack: split_list_field(self.tech_stack.as_deref().unwrap_or("")),
            image_id,
            github_url: self.github_url.clone(),
            live_url: self.live_url.clone(),
            sort_order: self.sort_order.unwrap_or(0),
        }
    }
}

#[get("/projects")]
pub fn projects_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Projects",
        "admin_slug": slug.0,
        "items": Project::list(pool),
    });
    Template::render("admin/projects/list", &context)
}

#[get("/projects/new")]
pub fn project_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Project",
        "admin_slug": slug.0,
        "item": null,
        "tech_csv": "",
    });
    Template::render("admin/projects/edit", &context)
}

#[get("/projects/<id>/edit")]
pub fn project_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = Project::find_by_id(pool, id)?;
    let tech_csv = item.tech_list().join(", ");
    let context = json!({
        "page_title": "Edit Project",
        "admin_slug": slug.0,
        "item": item,
        "tech_csv": tech_csv,
    });
    Some(Template::render("admin/projects/edit", &context))
}

#[post("/projects/new", data = "<form>")]
pub async fn project_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    mut form: Form<ProjectFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/projects/new", admin_base(slug)));
            }
            uploads::save_upload(f, uploads::PREFIX_PROJECTS, pool).await
        }
        _ => None,
    };

    if let Err(e) = Project::create(pool, &form.to_form(image_id)) {
        log::error!("Failed to create project: {}", e);
    }
    Redirect::to(format!("{}/projects", admin_base(slug)))
}

#[post("/projects/<id>/edit", data = "<form>")]
pub async fn project_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    mut form: Form<ProjectFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/projects/{}/edit", admin_base(slug), id));
            }
            uploads::save_upload(f, uploads::PREFIX_PROJECTS, pool).await
        }
        _ => Project::find_by_id(pool, id).and_then(|p| p.image_id),
    };

    if let Err(e) = Project::update(pool, id, &form.to_form(image_id)) {
        log::error!("Failed to update project {}: {}", id, e);
    }
    Redirect::to(format!("{}/projects", admin_base(slug)))
}

#[post("/projects/<id>/delete")]
pub fn project_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = Project::delete(pool, id) {
        log::error!("Failed to delete project {}: {}", id, e);
    }
    Redirect::to(format!("{}/projects", admin_base(slug)))
}
