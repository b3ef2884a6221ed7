use rocket::form::Form;
use rocket::response::content::{RawHtml, RawXml};
use rocket::State;
use std::collections::HashMap;

use crate::ai;
use crate::db::DbPool;
use crate::email;
use crate::models::blog::BlogPost;
use crate::models::contact::{ContactMessage, ContactMessageForm};
use crate::render;
use crate::rss;
use crate::validation;

// ── Homepage ───────────────────────────────────────────

#[get("/")]
pub fn homepage(pool: &State<DbPool>) -> RawHtml<String> {
    RawHtml(render::render_home(pool))
}

// ── Blog ───────────────────────────────────────────────

#[get("/blog")]
pub fn blog_list(pool: &State<DbPool>) -> RawHtml<String> {
    RawHtml(render::render_blog_list(pool))
}

#[get("/blog/feed")]
pub fn blog_feed(pool: &State<DbPool>) -> RawXml<String> {
    RawXml(rss::generate_feed(pool))
}

#[get("/blog/<slug>", rank = 5)]
pub fn blog_single(pool: &State<DbPool>, slug: &str) -> Option<RawHtml<String>> {
    let post = BlogPost::find_by_slug(pool, slug)?;
    if !post.published {
        return None;
    }
    Some(RawHtml(render::render_blog_single(pool, &post)))
}

// ── Contact ────────────────────────────────────────────

#[derive(FromForm)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[get("/contact")]
pub fn contact_page(pool: &State<DbPool>) -> RawHtml<String> {
    RawHtml(render::render_contact_page(
        pool,
        &HashMap::new(),
        &HashMap::new(),
        None,
    ))
}

#[post("/contact", data = "<form>")]
pub fn contact_submit(pool: &State<DbPool>, form: Form<ContactFormData>) -> RawHtml<String> {
    let mut values = HashMap::new();
    values.insert("name".to_string(), form.name.clone());
    values.insert("email".to_string(), form.email.clone());
    values.insert("message".to_string(), form.message.clone());

    // Shape check happens before any database work.
    if let Err(errors) = validation::validate_contact(&form.name, &form.email, &form.message) {
        return RawHtml(render::render_contact_page(
            pool,
            &values,
            &errors,
            Some(("Please fill out all fields correctly.", false)),
        ));
    }

    let record = ContactMessageForm {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        message: form.message.trim().to_string(),
    };

    match ContactMessage::create(pool, &record) {
        Ok(_) => {
            // Row is stored; a failed notification is logged, not surfaced.
            email::send_contact_notification(&record.name, &record.email, &record.message);
            RawHtml(render::render_contact_page(
                pool,
                &HashMap::new(),
                &HashMap::new(),
                Some(("Thank you for your message! I'll get back to you soon.", true)),
            ))
        }
        Err(e) => {
            log::error!("Failed to store contact message: {}", e);
            RawHtml(render::render_contact_page(
                pool,
                &values,
                &HashMap::new(),
                Some(("Failed to send message. Please try again.", false)),
            ))
        }
    }
}

// ── Code explainer ─────────────────────────────────────

#[derive(FromForm)]
pub struct ExplainFormData {
    pub code: String,
}

#[get("/explain")]
pub fn explain_page(pool: &State<DbPool>) -> RawHtml<String> {
    RawHtml(render::render_explainer_page(pool, "", None, None))
}

#[post("/explain", data = "<form>")]
pub fn explain_submit(pool: &State<DbPool>, form: Form<ExplainFormData>) -> RawHtml<String> {
    if let Err(msg) = validation::validate_code_snippet(&form.code) {
        return RawHtml(render::render_explainer_page(
            pool,
            &form.code,
            None,
            Some(msg.as_str()),
        ));
    }

    let result = ai::explain_snippet(&form.code);
    RawHtml(render::render_explainer_page(
        pool,
        &form.code,
        Some(result.explanation.as_str()),
        None,
    ))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        homepage,
        blog_list,
        blog_feed,
        blog_single,
        contact_page,
        contact_submit,
        explain_page,
        explain_submit,
    ]
}
