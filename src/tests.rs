#![cfg(test)]

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::ai;
use crate::auth;
use crate::db::{run_migrations, seed_defaults, DbPool};
use crate::email::SmtpConfig;
use crate::models::about::{AboutMe, AboutMeForm};
use crate::models::award::{Award, AwardForm};
use crate::models::blog::{BlogPost, BlogPostForm};
use crate::models::contact::{ContactMessage, ContactMessageForm};
use crate::models::education::{Education, EducationForm};
use crate::models::experience::{Experience, ExperienceForm};
use crate::models::hero::{HeroForm, HeroSection};
use crate::models::licence::{Licence, LicenceForm};
use crate::models::project::{Project, ProjectForm};
use crate::models::settings::Setting;
use crate::models::skill::{Skill, SkillCategory, SkillCategoryForm, SkillForm};
use crate::models::social::{SocialLink, SocialLinkForm};
use crate::rate_limit::RateLimiter;
use crate::render;
use crate::rss;
use crate::uploads;
use crate::validation;

/// Atomic counter for unique shared-cache DB names so parallel tests don't collide.
static TEST_DB_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Create a fresh in-memory SQLite pool with all migrations + seed defaults applied.
/// Uses a named shared-cache in-memory DB so multiple connections see the same data.
fn test_pool() -> DbPool {
    let id = TEST_DB_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    let uri = format!("file:testdb_{}?mode=memory&cache=shared", id);
    let manager = SqliteConnectionManager::file(uri);
    let pool = Pool::builder()
        .max_size(2)
        .build(manager)
        .expect("Failed to create test pool");
    {
        let conn = pool.get().unwrap();
        conn.execute_batch("PRAGMA foreign_keys=ON;").unwrap();
    }
    run_migrations(&pool).expect("Failed to run migrations");
    seed_defaults(&pool).expect("Failed to seed defaults");
    pool
}

fn award_form(title: &str, sort_order: i64) -> AwardForm {
    AwardForm {
        title: title.to_string(),
        description: "desc".to_string(),
        issuer: "Issuer".to_string(),
        sort_order,
        ..Default::default()
    }
}

fn blog_form(title: &str, published: bool) -> BlogPostForm {
    BlogPostForm {
        title: title.to_string(),
        excerpt: format!("{} excerpt", title),
        content: "Some *markdown* content".to_string(),
        published,
        ..Default::default()
    }
}

// ═══════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════

#[test]
fn settings_set_and_get() {
    let pool = test_pool();
    Setting::set(&pool, "test_key", "hello").unwrap();
    assert_eq!(Setting::get(&pool, "test_key"), Some("hello".to_string()));
}

#[test]
fn settings_get_or_default() {
    let pool = test_pool();
    assert_eq!(Setting::get_or(&pool, "nonexistent", "fallback"), "fallback");
    Setting::set(&pool, "exists", "val").unwrap();
    assert_eq!(Setting::get_or(&pool, "exists", "fallback"), "val");
}

#[test]
fn settings_upsert_overwrites() {
    let pool = test_pool();
    Setting::set(&pool, "key", "first").unwrap();
    Setting::set(&pool, "key", "second").unwrap();
    assert_eq!(Setting::get(&pool, "key"), Some("second".to_string()));
}

#[test]
fn settings_seeded_defaults_present() {
    let pool = test_pool();
    assert_eq!(Setting::get_or(&pool, "admin_slug", ""), "admin");
    assert_eq!(Setting::get_i64(&pool, "session_expiry_hours"), 24);
    assert!(Setting::get_bool(&pool, "images_webp_convert"));
}

// ═══════════════════════════════════════════════════════════
// Hero / About singletons
// ═══════════════════════════════════════════════════════════

#[test]
fn hero_get_empty_returns_none() {
    let pool = test_pool();
    assert!(HeroSection::get(&pool).is_none());
}

#[test]
fn hero_save_inserts_then_updates_single_row() {
    let pool = test_pool();

    let first = HeroForm {
        title: "Hello".to_string(),
        subtitle: Some("World".to_string()),
        ..Default::default()
    };
    HeroSection::save(&pool, &first).unwrap();
    assert_eq!(HeroSection::count(&pool), 1);

    let second = HeroForm {
        title: "Hello again".to_string(),
        tagline: Some("Builder of things".to_string()),
        ..Default::default()
    };
    HeroSection::save(&pool, &second).unwrap();

    // Two saves in sequence leave exactly one row
    assert_eq!(HeroSection::count(&pool), 1);
    let hero = HeroSection::get(&pool).unwrap();
    assert_eq!(hero.title, "Hello again");
    assert_eq!(hero.tagline.as_deref(), Some("Builder of things"));
    // Fields omitted in the second save are overwritten, not merged
    assert!(hero.subtitle.is_none());
}

#[test]
fn about_save_and_highlights_round_trip() {
    let pool = test_pool();

    let form = AboutMeForm {
        headline: "About me".to_string(),
        bio: "I build things.".to_string(),
        highlights: vec!["5 years Rust".to_string(), "OSS maintainer".to_string()],
        profile_image: None,
    };
    AboutMe::save(&pool, &form).unwrap();
    AboutMe::save(&pool, &form).unwrap();

    assert_eq!(AboutMe::count(&pool), 1);
    let about = AboutMe::get(&pool).unwrap();
    assert_eq!(about.headline, "About me");
    assert_eq!(
        about.highlight_list(),
        vec!["5 years Rust".to_string(), "OSS maintainer".to_string()]
    );
    assert!(about.profile_image.is_none());
}

// ═══════════════════════════════════════════════════════════
// Awards
// ═══════════════════════════════════════════════════════════

#[test]
fn award_create_without_image_leaves_image_unset() {
    let pool = test_pool();
    let id = Award::create(&pool, &award_form("Best Hack", 0)).unwrap();

    let award = Award::find_by_id(&pool, id).unwrap();
    assert!(award.image_id.is_none());

    // Render-time resolution falls back to the placeholder
    let url = uploads::public_url(uploads::PREFIX_AWARDS, award.image_id.as_deref());
    assert_eq!(url, "/static/img/placeholder.svg");
}

#[test]
fn award_list_orders_by_sort_order_then_arrival() {
    let pool = test_pool();
    let c = Award::create(&pool, &award_form("third", 2)).unwrap();
    let a = Award::create(&pool, &award_form("first", 1)).unwrap();
    let b = Award::create(&pool, &award_form("second", 1)).unwrap();

    let ids: Vec<i64> = Award::list(&pool).iter().map(|x| x.id).collect();
    // sort_order ascending, ties broken by insertion order
    assert_eq!(ids, vec![a, b, c]);
}

#[test]
fn award_update_and_delete() {
    let pool = test_pool();
    let id = Award::create(&pool, &award_form("Old title", 0)).unwrap();

    let mut form = award_form("New title", 3);
    form.certificate_url = Some("https://example.com/cert".to_string());
    Award::update(&pool, id, &form).unwrap();

    let award = Award::find_by_id(&pool, id).unwrap();
    assert_eq!(award.title, "New title");
    assert_eq!(award.sort_order, 3);
    assert_eq!(
        award.certificate_url.as_deref(),
        Some("https://example.com/cert")
    );

    Award::delete(&pool, id).unwrap();
    assert!(Award::find_by_id(&pool, id).is_none());
    assert_eq!(Award::count(&pool), 0);
}

// ═══════════════════════════════════════════════════════════
// Licences
// ═══════════════════════════════════════════════════════════

#[test]
fn licence_crud_round_trip() {
    let pool = test_pool();
    let form = LicenceForm {
        title: "Rustacean Cert".to_string(),
        issuer: "The Foundation".to_string(),
        issue_date: Some("2024-01".to_string()),
        credential_id: Some("ABC-123".to_string()),
        ..Default::default()
    };
    let id = Licence::create(&pool, &form).unwrap();

    let licence = Licence::find_by_id(&pool, id).unwrap();
    assert_eq!(licence.title, "Rustacean Cert");
    assert_eq!(licence.credential_id.as_deref(), Some("ABC-123"));
    assert!(licence.expiry_date.is_none());

    Licence::delete(&pool, id).unwrap();
    assert!(Licence::list(&pool).is_empty());
}

// ═══════════════════════════════════════════════════════════
// Projects
// ═══════════════════════════════════════════════════════════

#[test]
fn project_tech_stack_round_trip() {
    let pool = test_pool();
    let form = ProjectForm {
        title: "Search engine".to_string(),
        description: "A toy search engine".to_string(),
        tech_stack: vec!["Rust".to_string(), "SQLite".to_string()],
        github_url: Some("https://github.com/me/search".to_string()),
        ..Default::default()
    };
    let id = Project::create(&pool, &form).unwrap();

    let project = Project::find_by_id(&pool, id).unwrap();
    assert_eq!(
        project.tech_list(),
        vec!["Rust".to_string(), "SQLite".to_string()]
    );

    let mut updated = form;
    updated.tech_stack = vec!["Rust".to_string()];
    Project::update(&pool, id, &updated).unwrap();
    assert_eq!(
        Project::find_by_id(&pool, id).unwrap().tech_list(),
        vec!["Rust".to_string()]
    );
}

// ═══════════════════════════════════════════════════════════
// Skills
// ═══════════════════════════════════════════════════════════

#[test]
fn skill_category_with_skills_grouping() {
    let pool = test_pool();
    let backend = SkillCategory::create(
        &pool,
        &SkillCategoryForm {
            category: "Backend".to_string(),
            icon: "server".to_string(),
            sort_order: 1,
        },
    )
    .unwrap();
    let frontend = SkillCategory::create(
        &pool,
        &SkillCategoryForm {
            category: "Frontend".to_string(),
            icon: "code".to_string(),
            sort_order: 0,
        },
    )
    .unwrap();

    Skill::create(
        &pool,
        &SkillForm {
            category_id: backend,
            name: "Rust".to_string(),
            proficiency: 90,
            sort_order: 0,
        },
    )
    .unwrap();
    Skill::create(
        &pool,
        &SkillForm {
            category_id: frontend,
            name: "CSS".to_string(),
            proficiency: 70,
            sort_order: 0,
        },
    )
    .unwrap();

    let grouped = SkillCategory::list_with_skills(&pool);
    assert_eq!(grouped.len(), 2);
    // Categories follow sort_order
    assert_eq!(grouped[0].category.category, "Frontend");
    assert_eq!(grouped[0].skills.len(), 1);
    assert_eq!(grouped[1].skills[0].name, "Rust");
}

#[test]
fn skill_category_delete_cascades_to_skills() {
    let pool = test_pool();
    let cat = SkillCategory::create(
        &pool,
        &SkillCategoryForm {
            category: "Databases".to_string(),
            icon: String::new(),
            sort_order: 0,
        },
    )
    .unwrap();
    for name in ["PostgreSQL", "SQLite"] {
        Skill::create(
            &pool,
            &SkillForm {
                category_id: cat,
                name: name.to_string(),
                proficiency: 80,
                sort_order: 0,
            },
        )
        .unwrap();
    }
    assert_eq!(Skill::for_category(&pool, cat).len(), 2);

    SkillCategory::delete(&pool, cat).unwrap();

    // Skills go first, then the category
    assert!(Skill::for_category(&pool, cat).is_empty());
    assert!(SkillCategory::find_by_id(&pool, cat).is_none());
    assert_eq!(Skill::count(&pool), 0);
}

// ═══════════════════════════════════════════════════════════
// Experience / Education
// ═══════════════════════════════════════════════════════════

#[test]
fn experience_and_education_are_independent_lists() {
    let pool = test_pool();
    Experience::create(
        &pool,
        &ExperienceForm {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2020 — 2024".to_string(),
            description: String::new(),
            sort_order: 0,
        },
    )
    .unwrap();
    let edu = Education::create(
        &pool,
        &EducationForm {
            degree: "BSc".to_string(),
            institution: "State U".to_string(),
            period: "2016 — 2020".to_string(),
            description: String::new(),
            sort_order: 0,
        },
    )
    .unwrap();

    assert_eq!(Experience::list(&pool).len(), 1);
    assert_eq!(Education::list(&pool).len(), 1);

    Education::delete(&pool, edu).unwrap();
    assert_eq!(Experience::list(&pool).len(), 1);
    assert!(Education::list(&pool).is_empty());
}

// ═══════════════════════════════════════════════════════════
// Blog
// ═══════════════════════════════════════════════════════════

#[test]
fn blog_slug_generated_from_title() {
    let pool = test_pool();
    let id = BlogPost::create(&pool, &blog_form("Hello, World! Again", true)).unwrap();
    let post = BlogPost::find_by_id(&pool, id).unwrap();
    assert_eq!(post.slug, "hello-world-again");
    assert_eq!(BlogPost::find_by_slug(&pool, "hello-world-again").unwrap().id, id);
}

#[test]
fn blog_explicit_slug_is_slugified() {
    let pool = test_pool();
    let mut form = blog_form("Title", true);
    form.slug = "My Custom Slug".to_string();
    let id = BlogPost::create(&pool, &form).unwrap();
    assert_eq!(BlogPost::find_by_id(&pool, id).unwrap().slug, "my-custom-slug");
}

#[test]
fn blog_published_filter() {
    let pool = test_pool();
    BlogPost::create(&pool, &blog_form("Live post", true)).unwrap();
    BlogPost::create(&pool, &blog_form("Draft post", false)).unwrap();

    let published = BlogPost::published(&pool);
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].title, "Live post");
    assert_eq!(BlogPost::count(&pool, false), 2);
    assert_eq!(BlogPost::count(&pool, true), 1);
}

#[test]
fn blog_toggle_published_flips_only_that_field() {
    let pool = test_pool();
    let id = BlogPost::create(&pool, &blog_form("Toggle me", false)).unwrap();
    let before = BlogPost::find_by_id(&pool, id).unwrap();

    BlogPost::set_published(&pool, id, true).unwrap();

    let after = BlogPost::find_by_id(&pool, id).unwrap();
    assert!(after.published);
    assert_eq!(after.title, before.title);
    assert_eq!(after.excerpt, before.excerpt);
    assert_eq!(after.content, before.content);
    assert_eq!(after.slug, before.slug);
    assert_eq!(after.sort_order, before.sort_order);
    assert_eq!(after.created_at, before.created_at);
    assert!(after.updated_at >= before.updated_at);

    BlogPost::set_published(&pool, id, false).unwrap();
    assert!(!BlogPost::find_by_id(&pool, id).unwrap().published);
}

// ═══════════════════════════════════════════════════════════
// Social links
// ═══════════════════════════════════════════════════════════

#[test]
fn social_active_filter_and_toggle() {
    let pool = test_pool();
    let visible = SocialLink::create(
        &pool,
        &SocialLinkForm {
            platform: "github".to_string(),
            url: "https://github.com/me".to_string(),
            active: true,
            ..Default::default()
        },
    )
    .unwrap();
    SocialLink::create(
        &pool,
        &SocialLinkForm {
            platform: "twitter".to_string(),
            url: "https://twitter.com/me".to_string(),
            active: false,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(SocialLink::active(&pool).len(), 1);
    assert_eq!(SocialLink::list(&pool).len(), 2);

    SocialLink::toggle_active(&pool, visible).unwrap();
    let link = SocialLink::find_by_id(&pool, visible).unwrap();
    assert!(!link.active);
    assert_eq!(link.platform, "github");
    assert!(SocialLink::active(&pool).is_empty());

    SocialLink::toggle_active(&pool, visible).unwrap();
    assert!(SocialLink::find_by_id(&pool, visible).unwrap().active);
}

// ═══════════════════════════════════════════════════════════
// Contact messages
// ═══════════════════════════════════════════════════════════

#[test]
fn contact_message_created_unread() {
    let pool = test_pool();
    let id = ContactMessage::create(
        &pool,
        &ContactMessageForm {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            message: "1234567890".to_string(),
        },
    )
    .unwrap();

    let msg = ContactMessage::find_by_id(&pool, id).unwrap();
    assert!(!msg.read);
    assert_eq!(ContactMessage::count_unread(&pool), 1);

    ContactMessage::set_read(&pool, id, true).unwrap();
    let msg = ContactMessage::find_by_id(&pool, id).unwrap();
    assert!(msg.read);
    assert_eq!(msg.message, "1234567890");
    assert_eq!(ContactMessage::count_unread(&pool), 0);
}

#[test]
fn contact_messages_listed_newest_first() {
    let pool = test_pool();
    for n in ["one", "two", "three"] {
        ContactMessage::create(
            &pool,
            &ContactMessageForm {
                name: n.to_string(),
                email: "a@b.com".to_string(),
                message: "long enough message".to_string(),
            },
        )
        .unwrap();
    }
    let names: Vec<String> = ContactMessage::list(&pool)
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["three", "two", "one"]);
}

// ═══════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════

#[test]
fn contact_validation_accepts_minimal_valid_input() {
    assert!(validation::validate_contact("Al", "a@b.com", "1234567890").is_ok());
}

#[test]
fn contact_validation_rejects_bad_email_only() {
    let errors =
        validation::validate_contact("Alice", "not-an-email", "a long enough message").unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("email"));
}

#[test]
fn contact_validation_collects_all_field_errors() {
    let errors = validation::validate_contact("A", "nope", "short").unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("message"));
}

#[test]
fn email_shape_checks() {
    assert!(validation::is_valid_email("a@b.com"));
    assert!(validation::is_valid_email("first.last+tag@sub.domain.io"));
    assert!(!validation::is_valid_email("not-an-email"));
    assert!(!validation::is_valid_email("missing@tld"));
    assert!(!validation::is_valid_email("spaces in@example.com"));
    assert!(!validation::is_valid_email("@example.com"));
}

#[test]
fn code_snippet_length_rule() {
    assert!(validation::validate_code_snippet("short").is_err());
    assert!(validation::validate_code_snippet("fn main() {}").is_ok());
}

#[test]
fn url_field_validation() {
    assert!(validation::is_valid_url(""));
    assert!(validation::is_valid_url("https://example.com/page"));
    assert!(!validation::is_valid_url("not a url"));
}

// ═══════════════════════════════════════════════════════════
// Code explainer
// ═══════════════════════════════════════════════════════════

#[test]
fn explainer_embeds_snippet_verbatim() {
    let snippet = "fn add(a: i32, b: i32) -> i32 { a + b }";
    let result = ai::explain_snippet(snippet);
    assert!(result.explanation.contains(snippet));
    assert!(result.explanation.starts_with("This is a placeholder explanation"));
}

// ═══════════════════════════════════════════════════════════
// Uploads
// ═══════════════════════════════════════════════════════════

#[test]
fn public_url_resolution() {
    assert_eq!(
        uploads::public_url(uploads::PREFIX_PROJECTS, Some("abc.webp")),
        "/uploads/projects/abc.webp"
    );
    // Blog images live at the uploads root
    assert_eq!(
        uploads::public_url(uploads::PREFIX_BLOG, Some("xyz.webp")),
        "/uploads/xyz.webp"
    );
    assert_eq!(
        uploads::public_url(uploads::PREFIX_AWARDS, None),
        "/static/img/placeholder.svg"
    );
    assert_eq!(
        uploads::public_url(uploads::PREFIX_AWARDS, Some("")),
        "/static/img/placeholder.svg"
    );
}

#[test]
fn upload_size_limit_uses_setting() {
    let pool = test_pool();
    Setting::set(&pool, "images_max_upload_mb", "1").unwrap();
    assert!(uploads::check_file_size(&pool, 1024 * 1024));
    assert!(!uploads::check_file_size(&pool, 1024 * 1024 + 1));
}

// ═══════════════════════════════════════════════════════════
// Auth / sessions
// ═══════════════════════════════════════════════════════════

#[test]
fn password_hash_and_verify() {
    // Low cost keeps the test fast; verification logic is identical
    let hash = bcrypt::hash("hunter22", 4).unwrap();
    assert!(auth::verify_password("hunter22", &hash));
    assert!(!auth::verify_password("wrong", &hash));
    assert!(!auth::verify_password("hunter22", "not-a-hash"));
}

#[test]
fn session_lifecycle() {
    let pool = test_pool();
    let session_id = auth::create_session(&pool, Some("127.0.0.1"), None).unwrap();
    assert!(auth::validate_session(&pool, &session_id));
    assert!(!auth::validate_session(&pool, "no-such-session"));

    auth::destroy_session(&pool, &session_id).unwrap();
    assert!(!auth::validate_session(&pool, &session_id));
}

#[test]
fn expired_sessions_are_rejected_and_cleaned() {
    let pool = test_pool();
    // Expiry clamps to at least one hour, so force an already-expired row
    let session_id = auth::create_session(&pool, None, None).unwrap();
    {
        let conn = pool.get().unwrap();
        conn.execute(
            "UPDATE sessions SET expires_at = datetime('now', '-1 hour') WHERE id = ?1",
            rusqlite::params![session_id],
        )
        .unwrap();
    }
    assert!(!auth::validate_session(&pool, &session_id));

    auth::cleanup_expired_sessions(&pool).unwrap();
    let conn = pool.get().unwrap();
    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}

#[test]
fn ip_hash_is_stable_and_hex() {
    let a = auth::hash_ip("10.0.0.1");
    let b = auth::hash_ip("10.0.0.1");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert_ne!(a, auth::hash_ip("10.0.0.2"));
}

// ═══════════════════════════════════════════════════════════
// Rate limiter
// ═══════════════════════════════════════════════════════════

#[test]
fn rate_limiter_blocks_over_limit() {
    let limiter = RateLimiter::new();
    let window = std::time::Duration::from_secs(60);
    for _ in 0..3 {
        assert!(limiter.check_and_record("login:abc", 3, window));
    }
    assert!(!limiter.check_and_record("login:abc", 3, window));
    // Different key has its own bucket
    assert!(limiter.check_and_record("login:def", 3, window));
}

// ═══════════════════════════════════════════════════════════
// Rendering / RSS
// ═══════════════════════════════════════════════════════════

#[test]
fn markdown_renders_to_html() {
    let html = render::markdown_to_html("Some **bold** text");
    assert!(html.contains("<strong>bold</strong>"));
}

#[test]
fn html_escape_neutralizes_markup() {
    assert_eq!(
        render::html_escape(r#"<script>alert("hi")</script>"#),
        "&lt;script&gt;alert(&quot;hi&quot;)&lt;/script&gt;"
    );
}

#[test]
fn rss_feed_lists_only_published_posts() {
    let pool = test_pool();
    BlogPost::create(&pool, &blog_form("Public post", true)).unwrap();
    BlogPost::create(&pool, &blog_form("Secret draft", false)).unwrap();

    let feed = rss::generate_feed(&pool);
    assert!(feed.contains("<title>Public post</title>"));
    assert!(!feed.contains("Secret draft"));
    assert!(feed.contains("/blog/public-post"));
    assert!(feed.starts_with("<?xml"));
}

// ═══════════════════════════════════════════════════════════
// Email config
// ═══════════════════════════════════════════════════════════

#[test]
fn smtp_config_from_env() {
    // Single test owns these vars; parallel tests never touch them
    std::env::remove_var("SMTP_HOST");
    assert!(SmtpConfig::from_env().is_none());

    std::env::set_var("SMTP_HOST", "smtp.example.com");
    std::env::set_var("SMTP_PORT", "465");
    std::env::set_var("SMTP_SECURE", "true");
    std::env::set_var("SMTP_USER", "mailer@example.com");
    std::env::set_var("SMTP_PASS", "secret");
    std::env::set_var("SMTP_FROM", "noreply@example.com");
    std::env::set_var("ADMIN_EMAIL", "owner@example.com");

    let cfg = SmtpConfig::from_env().unwrap();
    assert_eq!(cfg.host, "smtp.example.com");
    assert_eq!(cfg.port, 465);
    assert!(cfg.secure);
    assert_eq!(cfg.from, "noreply@example.com");
    assert_eq!(cfg.admin_to, "owner@example.com");

    // Recipient falls back to the from address
    std::env::remove_var("ADMIN_EMAIL");
    let cfg = SmtpConfig::from_env().unwrap();
    assert_eq!(cfg.admin_to, "noreply@example.com");

    for var in [
        "SMTP_HOST", "SMTP_PORT", "SMTP_SECURE", "SMTP_USER", "SMTP_PASS", "SMTP_FROM",
    ] {
        std::env::remove_var(var);
    }
}
