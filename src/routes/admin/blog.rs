use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::blog::{BlogPost, BlogPostForm};
use crate::uploads;
use crate::AdminSlug;

#[derive(FromForm)]
pub struct BlogFormData<'f> {
    pub title: String,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub external_url: Option<String>,
    pub published: Option<String>,
    pub sort_order: Option<i64>,
    pub image: Option<TempFile<'f>>,
}

impl BlogFormData<'_> {
    fn to_form(&self, image_id: Option<String>) -> BlogPostForm {
        BlogPostForm {
            title: self.title.clone(),
            slug: self.slug.clone().unwrap_or_default(),
            excerpt: self.excerpt.clone().unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
            external_url: self.external_url.clone(),
            image_id,
            // Checkbox: present means checked
            published: self.published.is_some(),
            sort_order: self.sort_order.unwrap_or(0),
        }
    }
}

#[get("/blog")]
pub fn blog_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Blog Posts",
        "admin_slug": slug.0,
        "items": BlogPost::list(pool),
    });
    Template::render("admin/blog/list", &context)
}

#[get("/blog/new")]
pub fn blog_new(_admin: AdminUser, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "New Blog Post",
        "admin_slug": slug.0,
        "item": null,
    });
    Template::render("admin/blog/edit", &context)
}

#[get("/blog/<id>/edit")]
pub fn blog_edit(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = BlogPost::find_by_id(pool, id)?;
    let context = json!({
        "page_title": "Edit Blog Post",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/blog/edit", &context))
}

#[post("/blog/new", data = "<form>")]
pub async fn blog_create(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    mut form: Form<BlogFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/blog/new", admin_base(slug)));
            }
            uploads::save_upload(f, uploads::PREFIX_BLOG, pool).await
        }
        _ => None,
    };

    if let Err(e) = BlogPost::create(pool, &form.to_form(image_id)) {
        log::error!("Failed to create blog post: {}", e);
    }
    Redirect::to(format!("{}/blog", admin_base(slug)))
}

#[post("/blog/<id>/edit", data = "<form>")]
pub async fn blog_update(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    mut form: Form<BlogFormData<'_>>,
) -> Redirect {
    let image_id = match form.image.as_mut() {
        Some(f) if f.len() > 0 => {
            if !uploads::is_allowed_image(f, pool) {
                return Redirect::to(format!("{}/blog/{}/edit", admin_base(slug), id));
            }
            uploads::save_upload(f, uploads::PREFIX_BLOG, pool).await
        }
        _ => BlogPost::find_by_id(pool, id).and_then(|p| p.image_id),
    };

    if let Err(e) = BlogPost::update(pool, id, &form.to_form(image_id)) {
        log::error!("Failed to update blog post {}: {}", id, e);
    }
    Redirect::to(format!("{}/blog", admin_base(slug)))
}

/// Publish/unpublish from the list screen without touching other fields.
#[post("/blog/<id>/publish?<published>")]
pub fn blog_toggle_published(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    published: bool,
) -> Redirect {
    if let Err(e) = BlogPost::set_published(pool, id, published) {
        log::error!("Failed to toggle blog post {}: {}", id, e);
    }
    Redirect::to(format!("{}/blog", admin_base(slug)))
}

#[post("/blog/<id>/delete")]
pub fn blog_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = BlogPost::delete(pool, id) {
        log::error!("Failed to delete blog post {}: {}", id, e);
    }
    Redirect::to(format!("{}/blog", admin_base(slug)))
}
