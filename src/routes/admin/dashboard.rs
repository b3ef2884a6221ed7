use rocket::State;
use rocket_dyn_templates::Template;
use serde_json::json;

use crate::auth::AdminUser;
use crate::db::DbPool;
use crate::models::about::AboutMe;
use crate::models::award::Award;
use crate::models::blog::BlogPost;
use crate::models::contact::ContactMessage;
use crate::models::education::Education;
use crate::models::experience::Experience;
use crate::models::hero::HeroSection;
use crate::models::licence::Licence;
use crate::models::project::Project;
use crate::models::settings::Setting;
use crate::models::skill::{Skill, SkillCategory};
use crate::models::social::SocialLink;
use crate::AdminSlug;

#[get("/")]
pub fn dashboard(_admin: AdminUser, pool: &State<DbPool>, slug: &State<AdminSlug>) -> Template {
    let context = json!({
        "page_title": "Dashboard",
        "admin_slug": slug.0,
        "site_name": Setting::get_or(pool, "site_name", "Atelier"),
        "hero_configured": HeroSection::count(pool) > 0,
        "about_configured": AboutMe::count(pool) > 0,
        "count_awards": Award::count(pool),
        "count_licences": Licence::count(pool),
        "count_projects": Project::count(pool),
        "count_skill_categories": SkillCategory::count(pool),
        "count_skills": Skill::count(pool),
        "count_experience": Experience::count(pool),
        "count_education": Education::count(pool),
        "count_posts": BlogPost::count(pool, false),
        "count_published_posts": BlogPost::count(pool, true),
        "count_social": SocialLink::count(pool),
        "count_messages": ContactMessage::count(pool),
        "count_unread": ContactMessage::count_unread(pool),
    });

    Template::render("admin/dashboard", &context)
}
