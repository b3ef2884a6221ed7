use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::Redirect;
use rocket::State;
use rocket_dyn_templates::Template;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::auth;
use crate::db::DbPool;
use crate::models::settings::Setting;
use crate::rate_limit::RateLimiter;
use crate::AdminSlug;

#[derive(Debug, FromForm, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Returns true if this is a fresh install (no admin credential yet)
fn needs_setup(pool: &DbPool) -> bool {
    let email = Setting::get_or(pool, "admin_email", "");
    let hash = Setting::get_or(pool, "admin_password_hash", "");
    email.is_empty() || hash.is_empty()
}

#[get("/login")]
pub fn login_page(
    pool: &State<DbPool>,
    admin_slug: &State<AdminSlug>,
) -> Result<Template, Redirect> {
    if needs_setup(pool) {
        return Err(Redirect::to(format!("/{}/setup", admin_slug.0)));
    }
    let context = json!({
        "admin_slug": admin_slug.0,
        "error": null,
    });
    Ok(Template::render("admin/login", &context))
}

#[post("/login", data = "<form>")]
pub fn login_submit(
    form: Form<LoginForm>,
    pool: &State<DbPool>,
    admin_slug: &State<AdminSlug>,
    limiter: &State<RateLimiter>,
    cookies: &CookieJar<'_>,
) -> Result<Redirect, Template> {
    let make_err = |msg: &str| -> Template {
        let ctx = json!({
            "admin_slug": admin_slug.0,
            "error": msg,
        });
        Template::render("admin/login", &ctx)
    };

    let rate_key = format!("login:{}", auth::hash_ip(&form.email));
    let max_attempts = Setting::get_i64(pool, "login_rate_limit").max(1) as u64;
    let window = std::time::Duration::from_secs(15 * 60);

    // Check rate limit before processing
    if !limiter.check_and_record(&rate_key, max_attempts, window) {
        return Err(make_err(
            "Too many login attempts. Please try again in 15 minutes.",
        ));
    }

    let stored_hash = Setting::get(pool, "admin_password_hash").unwrap_or_default();
    let admin_email = Setting::get_or(pool, "admin_email", "");

    if admin_email.is_empty() || form.email != admin_email {
        return Err(make_err("Invalid credentials"));
    }

    if !auth::verify_password(&form.password, &stored_hash) {
        return Err(make_err("Invalid credentials"));
    }

    match auth::create_session(pool, None, None) {
        Ok(session_id) => {
            auth::set_session_cookie(cookies, &session_id);
            let _ = auth::cleanup_expired_sessions(pool);
            Ok(Redirect::to(format!("/{}", admin_slug.0)))
        }
        Err(e) => {
            log::error!("Session creation failed: {}", e);
            Err(make_err("Session creation failed"))
        }
    }
}

#[get("/logout")]
pub fn logout(
    pool: &State<DbPool>,
    admin_slug: &State<AdminSlug>,
    cookies: &CookieJar<'_>,
) -> Redirect {
    if let Some(session_id) = auth::session_cookie(cookies) {
        let _ = auth::destroy_session(pool, &session_id);
    }
    auth::clear_session_cookie(cookies);
    Redirect::to(format!("/{}/login", admin_slug.0))
}

/// Catch-all for any /<admin_slug>/* route that failed the AdminUser guard.
/// This fires when the guard returns Forward(Unauthorized).
#[get("/<_path..>", rank = 99)]
pub fn admin_redirect_to_login(
    _path: std::path::PathBuf,
    pool: &State<DbPool>,
    admin_slug: &State<AdminSlug>,
) -> Redirect {
    if needs_setup(pool) {
        Redirect::to(format!("/{}/setup", admin_slug.0))
    } else {
        Redirect::to(format!("/{}/login", admin_slug.0))
    }
}

// ── First-Time Setup ─────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SetupContext {
    error: Option<String>,
    site_name: String,
    admin_email: String,
    admin_slug: String,
}

#[derive(Debug, FromForm, Deserialize)]
pub struct SetupForm {
    pub site_name: String,
    pub admin_email: String,
    pub password: String,
    pub confirm_password: String,
}

#[get("/setup")]
pub fn setup_page(
    pool: &State<DbPool>,
    admin_slug: &State<AdminSlug>,
) -> Result<Template, Redirect> {
    if !needs_setup(pool) {
        return Err(Redirect::to(format!("/{}/login", admin_slug.0)));
    }
    let ctx = SetupContext {
        error: None,
        site_name: Setting::get_or(pool, "site_name", "Atelier"),
        admin_email: String::new(),
        admin_slug: admin_slug.0.clone(),
    };
    Ok(Template::render("admin/setup", &ctx))
}

#[post("/setup", data = "<form>")]
pub fn setup_submit(
    form: Form<SetupForm>,
    pool: &State<DbPool>,
    admin_slug: &State<AdminSlug>,
) -> Result<Redirect, Template> {
    if !needs_setup(pool) {
        return Ok(Redirect::to(format!("/{}/login", admin_slug.0)));
    }

    let make_err = |msg: &str, form: &SetupForm| {
        let ctx = SetupContext {
            error: Some(msg.to_string()),
            site_name: form.site_name.clone(),
            admin_email: form.admin_email.clone(),
            admin_slug: admin_slug.0.clone(),
        };
        Template::render("admin/setup", &ctx)
    };

    if form.admin_email.trim().is_empty() {
        return Err(make_err("Email is required.", &form));
    }
    if form.password.len() < 8 {
        return Err(make_err("Password must be at least 8 characters.", &form));
    }
    if form.password != form.confirm_password {
        return Err(make_err("Passwords do not match.", &form));
    }

    let hash = auth::hash_password(&form.password)
        .map_err(|_| make_err("Failed to hash password.", &form))?;

    let _ = Setting::set(pool, "site_name", form.site_name.trim());
    let _ = Setting::set(pool, "admin_email", form.admin_email.trim());
    let _ = Setting::set(pool, "admin_password_hash", &hash);

    Ok(Redirect::to(format!("/{}/login", admin_slug.0)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        login_page,
        login_submit,
        logout,
        admin_redirect_to_login,
        setup_page,
        setup_submit,
    ]
}
