use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use super::admin_base;
use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::contact::ContactMessage;
use crate::AdminSlug;

#[get("/contact")]
pub fn messages_list(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Contact Messages",
        "admin_slug": slug.0,
        "items": ContactMessage::list(pool),
        "count_unread": ContactMessage::count_unread(pool),
    });
    Template::render("admin/contact/list", &context)
}

/// Opening a message marks it read.
#[get("/contact/<id>")]
pub fn message_view(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Option<Template> {
    let item = ContactMessage::find_by_id(pool, id)?;
    if !item.read {
        if let Err(e) = ContactMessage::set_read(pool, id, true) {
            log::error!("Failed to mark message {} read: {}", id, e);
        }
    }
    let context = json!({
        "page_title": "Message",
        "admin_slug": slug.0,
        "item": item,
    });
    Some(Template::render("admin/contact/view", &context))
}

#[post("/contact/<id>/read?<read>")]
pub fn message_toggle_read(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
    read: bool,
) -> Redirect {
    if let Err(e) = ContactMessage::set_read(pool, id, read) {
        log::error!("Failed to toggle message {}: {}", id, e);
    }
    Redirect::to(format!("{}/contact", admin_base(slug)))
}

#[post("/contact/<id>/delete")]
pub fn message_delete(
    _admin: AdminUser,
    pool: &State<DbPool>,
    slug: &State<AdminSlug>,
    id: i64,
) -> Redirect {
    if let Err(e) = ContactMessage::delete(pool, id) {
        log::error!("Failed to delete message {}: {}", id, e);
    }
    Redirect::to(format!("{}/contact", admin_base(slug)))
}
