use crate::AdminSlug;

pub mod about;
pub mod awards;
pub mod blog;
pub mod contact;
pub mod dashboard;
pub mod experience;
pub mod hero;
pub mod licences;
pub mod projects;
pub mod skills;
pub mod social;

/// Helper: get the admin base path from managed state
pub(crate) fn admin_base(slug: &AdminSlug) -> String {
    format!("/{}", slug.0)
}

/// Split a comma-separated admin text field into trimmed, non-empty entries.
/// Used for tech stacks and about-me highlights.
pub(crate) fn split_list_field(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn routes() -> Vec<rocket::Route> {
    routes![
        dashboard::dashboard,
        hero::hero_edit,
        hero::hero_save,
        about::about_edit,
        about::about_save,
        awards::awards_list,
        awards::award_new,
        awards::award_edit,
        awards::award_create,
        awards::award_update,
        awards::award_delete,
        licences::licences_list,
        licences::licence_new,
        licences::licence_edit,
        licences::licence_create,
        licences::licence_update,
        licences::licence_delete,
        projects::projects_list,
        projects::project_new,
        projects::project_edit,
        projects::project_create,
        projects::project_update,
        projects::project_delete,
        skills::skills_list,
        skills::category_new,
        skills::category_edit,
        skills::category_create,
        skills::category_update,
        skills::category_delete,
        skills::skill_new,
        skills::skill_edit,
        skills::skill_create,
        skills::skill_update,
        skills::skill_delete,
        experience::experience_list,
        experience::experience_new,
        experience::experience_edit,
        experience::experience_create,
        experience::experience_update,
        experience::experience_delete,
        experience::education_new,
        experience::education_edit,
        experience::education_create,
        experience::education_update,
        experience::education_delete,
        blog::blog_list,
        blog::blog_new,
        blog::blog_edit,
        blog::blog_create,
        blog::blog_update,
        blog::blog_toggle_published,
        blog::blog_delete,
        social::social_list,
        social::social_new,
        social::social_edit,
        social::social_create,
        social::social_update,
        social::social_toggle_active,
        social::social_delete,
        contact::messages_list,
        contact::message_view,
        contact::message_toggle_read,
        contact::message_delete,
    ]
}
