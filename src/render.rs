use pulldown_cmark::{html, Parser};
use std::collections::HashMap;

use crate::db::DbPool;
use crate::models::about::AboutMe;
use crate::models::award::Award;
use crate::models::blog::BlogPost;
use crate::models::education::Education;
use crate::models::experience::Experience;
use crate::models::hero::HeroSection;
use crate::models::licence::Licence;
use crate::models::project::Project;
use crate::models::settings::Setting;
use crate::models::skill::SkillCategory;
use crate::models::social::SocialLink;
use crate::uploads;

// ── Page shell ─────────────────────────────────────────

/// Wraps rendered body sections in the site shell (head, nav, footer).
fn layout(pool: &DbPool, page_title: &str, body: &str) -> String {
    let site_name = Setting::get_or(pool, "site_name", "Atelier");
    let title = if page_title.is_empty() {
        site_name.clone()
    } else {
        format!("{} — {}", page_title, site_name)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/css/site.css">
<link rel="alternate" type="application/rss+xml" title="{site_name}" href="/blog/feed">
</head>
<body>
<header class="site-header">
  <a class="site-logo" href="/">{site_name}</a>
  <nav>
    <a href="/#about">About</a>
    <a href="/#projects">Projects</a>
    <a href="/#experience">Experience</a>
    <a href="/blog">Blog</a>
    <a href="/contact">Contact</a>
    <a href="/explain">AI</a>
  </nav>
</header>
<main>
{body}
</main>
<footer class="site-footer">
{social}
<p>&copy; {year} {site_name}</p>
</footer>
</body>
</html>"#,
        title = html_escape(&title),
        site_name = html_escape(&site_name),
        body = body,
        social = build_social_footer(pool),
        year = chrono::Utc::now().format("%Y"),
    )
}

fn build_social_footer(pool: &DbPool) -> String {
    let links = SocialLink::active(pool);
    if links.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="social-links">"#);
    for link in &links {
        let label = if link.display_name.is_empty() {
            &link.platform
        } else {
            &link.display_name
        };
        html.push_str(&format!(
            r#"<a href="{}" rel="me noopener" target="_blank" data-icon="{}">{}</a> "#,
            html_escape(&link.url),
            html_escape(&link.icon),
            html_escape(label),
        ));
    }
    html.push_str("</div>");
    html
}

// ── Homepage ───────────────────────────────────────────

pub fn render_home(pool: &DbPool) -> String {
    let mut body = String::new();

    body.push_str(&build_hero(HeroSection::get(pool).as_ref()));
    body.push_str(&build_about(AboutMe::get(pool).as_ref()));
    body.push_str(&build_skills(pool));
    body.push_str(&build_projects(&Project::list(pool)));
    body.push_str(&build_experience(
        &Experience::list(pool),
        &Education::list(pool),
    ));
    body.push_str(&build_awards(&Award::list(pool)));
    body.push_str(&build_licences(&Licence::list(pool)));
    body.push_str(&build_blog_teaser(&BlogPost::published(pool)));

    layout(pool, "", &body)
}

fn build_hero(hero: Option<&HeroSection>) -> String {
    let hero = match hero {
        Some(h) => h,
        None => return String::new(),
    };

    let mut html = String::from(r#"<section class="hero" id="hero">"#);
    if let Some(url) = hero.hero_image_url.as_deref().filter(|u| !u.is_empty()) {
        html.push_str(&format!(
            r#"<img class="hero-image" src="{}" alt="">"#,
            html_escape(url)
        ));
    }
    html.push_str(&format!("<h1>{}</h1>", html_escape(&hero.title)));
    if let Some(subtitle) = hero.subtitle.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!("<h2>{}</h2>", html_escape(subtitle)));
    }
    if let Some(tagline) = hero.tagline.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!("<p class=\"tagline\">{}</p>", html_escape(tagline)));
    }

    let ctas = [
        (&hero.cta_primary_label, &hero.cta_primary_url, "cta-primary"),
        (
            &hero.cta_secondary_label,
            &hero.cta_secondary_url,
            "cta-secondary",
        ),
    ];
    let mut cta_html = String::new();
    for (label, url, class) in ctas {
        if let (Some(label), Some(url)) = (label.as_deref(), url.as_deref()) {
            if !label.is_empty() && !url.is_empty() {
                cta_html.push_str(&format!(
                    r#"<a class="{}" href="{}">{}</a> "#,
                    class,
                    html_escape(url),
                    html_escape(label),
                ));
            }
        }
    }
    if !cta_html.is_empty() {
        html.push_str(&format!(r#"<div class="hero-ctas">{}</div>"#, cta_html));
    }
    html.push_str("</section>");
    html
}

fn build_about(about: Option<&AboutMe>) -> String {
    let about = match about {
        Some(a) => a,
        None => return String::new(),
    };

    let mut html = String::from(r#"<section class="about" id="about">"#);
    html.push_str(&format!(
        r#"<img class="profile-image" src="{}" alt="{}">"#,
        uploads::public_url(uploads::PREFIX_ABOUT, about.profile_image.as_deref()),
        html_escape(&about.headline),
    ));
    html.push_str(&format!("<h2>{}</h2>", html_escape(&about.headline)));
    html.push_str(&format!("<p>{}</p>", html_escape(&about.bio)));

    let highlights = about.highlight_list();
    if !highlights.is_empty() {
        html.push_str("<ul class=\"highlights\">");
        for item in &highlights {
            html.push_str(&format!("<li>{}</li>", html_escape(item)));
        }
        html.push_str("</ul>");
    }
    html.push_str("</section>");
    html
}

fn build_skills(pool: &DbPool) -> String {
    let categories = SkillCategory::list_with_skills(pool);
    if categories.is_empty() {
        return String::new();
    }

    let mut html =
        String::from(r#"<section class="skills" id="skills"><h2>Skills</h2>"#);
    for entry in &categories {
        html.push_str(&format!(
            r#"<div class="skill-category" data-icon="{}"><h3>{}</h3><ul>"#,
            html_escape(&entry.category.icon),
            html_escape(&entry.category.category),
        ));
        for skill in &entry.skills {
            html.push_str(&format!(
                r#"<li>{}<span class="meter" style="width:{}%"></span></li>"#,
                html_escape(&skill.name),
                skill.proficiency.clamp(0, 100),
            ));
        }
        html.push_str("</ul></div>");
    }
    html.push_str("</section>");
    html
}

fn build_projects(projects: &[Project]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut html =
        String::from(r#"<section class="projects" id="projects"><h2>Projects</h2>"#);
    for project in projects {
        html.push_str(&format!(
            r#"<article class="project-card"><img src="{}" alt="{}"><h3>{}</h3><p>{}</p>"#,
            uploads::public_url(uploads::PREFIX_PROJECTS, project.image_id.as_deref()),
            html_escape(&project.title),
            html_escape(&project.title),
            html_escape(&project.description),
        ));
        let tech = project.tech_list();
        if !tech.is_empty() {
            html.push_str(r#"<ul class="tech-stack">"#);
            for entry in &tech {
                html.push_str(&format!("<li>{}</li>", html_escape(entry)));
            }
            html.push_str("</ul>");
        }
        for (url, label) in [
            (project.github_url.as_deref(), "Source"),
            (project.live_url.as_deref(), "Live"),
        ] {
            if let Some(url) = url.filter(|u| !u.is_empty()) {
                html.push_str(&format!(
                    r#"<a href="{}" target="_blank" rel="noopener">{}</a> "#,
                    html_escape(url),
                    label,
                ));
            }
        }
        html.push_str("</article>");
    }
    html.push_str("</section>");
    html
}

fn build_experience(experience: &[Experience], education: &[Education]) -> String {
    if experience.is_empty() && education.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<section class="experience" id="experience">"#);
    if !experience.is_empty() {
        html.push_str("<h2>Experience</h2>");
        for entry in experience {
            html.push_str(&format!(
                r#"<article class="timeline-entry"><h3>{}</h3><p class="org">{} · {}</p><p>{}</p></article>"#,
                html_escape(&entry.role),
                html_escape(&entry.company),
                html_escape(&entry.period),
                html_escape(&entry.description),
            ));
        }
    }
    if !education.is_empty() {
        html.push_str("<h2>Education</h2>");
        for entry in education {
            html.push_str(&format!(
                r#"<article class="timeline-entry"><h3>{}</h3><p class="org">{} · {}</p><p>{}</p></article>"#,
                html_escape(&entry.degree),
                html_escape(&entry.institution),
                html_escape(&entry.period),
                html_escape(&entry.description),
            ));
        }
    }
    html.push_str("</section>");
    html
}

fn build_awards(awards: &[Award]) -> String {
    if awards.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<section class="awards" id="awards"><h2>Awards</h2>"#);
    for award in awards {
        html.push_str(&format!(
            r#"<article class="award-card"><img src="{}" alt="{}"><h3>{}</h3><p class="issuer">{}</p><p>{}</p>"#,
            uploads::public_url(uploads::PREFIX_AWARDS, award.image_id.as_deref()),
            html_escape(&award.title),
            html_escape(&award.title),
            html_escape(&award.issuer),
            html_escape(&award.description),
        ));
        if let Some(date) = award.date_awarded.as_deref().filter(|d| !d.is_empty()) {
            html.push_str(&format!(r#"<time>{}</time>"#, html_escape(date)));
        }
        if let Some(url) = award.certificate_url.as_deref().filter(|u| !u.is_empty()) {
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener">Certificate</a>"#,
                html_escape(url),
            ));
        }
        html.push_str("</article>");
    }
    html.push_str("</section>");
    html
}

fn build_licences(licences: &[Licence]) -> String {
    if licences.is_empty() {
        return String::new();
    }

    let mut html = String::from(
        r#"<section class="licences" id="licences"><h2>Licences &amp; Certifications</h2>"#,
    );
    for licence in licences {
        html.push_str(&format!(
            r#"<article class="licence-card"><img src="{}" alt="{}"><h3>{}</h3><p class="issuer">{}</p>"#,
            uploads::public_url(uploads::PREFIX_LICENCES, licence.image_id.as_deref()),
            html_escape(&licence.title),
            html_escape(&licence.title),
            html_escape(&licence.issuer),
        ));
        match (
            licence.issue_date.as_deref().filter(|d| !d.is_empty()),
            licence.expiry_date.as_deref().filter(|d| !d.is_empty()),
        ) {
            (Some(issued), Some(expires)) => html.push_str(&format!(
                "<time>{} — {}</time>",
                html_escape(issued),
                html_escape(expires)
            )),
            (Some(issued), None) => {
                html.push_str(&format!("<time>{}</time>", html_escape(issued)))
            }
            _ => {}
        }
        if let Some(cred) = licence.credential_id.as_deref().filter(|c| !c.is_empty()) {
            html.push_str(&format!(
                r#"<p class="credential">Credential {}</p>"#,
                html_escape(cred)
            ));
        }
        if let Some(url) = licence.credential_url.as_deref().filter(|u| !u.is_empty()) {
            html.push_str(&format!(
                r#"<a href="{}" target="_blank" rel="noopener">Verify</a>"#,
                html_escape(url),
            ));
        }
        html.push_str("</article>");
    }
    html.push_str("</section>");
    html
}

fn build_blog_teaser(posts: &[BlogPost]) -> String {
    if posts.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<section class="blog" id="blog"><h2>Writing</h2>"#);
    for post in posts.iter().take(3) {
        html.push_str(&format!(
            r#"<article class="blog-card"><h3><a href="/blog/{}">{}</a></h3><p>{}</p></article>"#,
            html_escape(&post.slug),
            html_escape(&post.title),
            html_escape(&post.excerpt),
        ));
    }
    html.push_str(r#"<a class="all-posts" href="/blog">All posts</a></section>"#);
    html
}

// ── Blog pages ─────────────────────────────────────────

pub fn render_blog_list(pool: &DbPool) -> String {
    let posts = BlogPost::published(pool);
    let date_format = Setting::get_or(pool, "date_format", "%B %d, %Y");

    let mut body = String::from(r#"<section class="blog-list"><h1>Blog</h1>"#);
    if posts.is_empty() {
        body.push_str("<p>Nothing here yet.</p>");
    }
    for post in &posts {
        body.push_str(&format!(
            r#"<article class="blog-card"><h2><a href="/blog/{}">{}</a></h2><time>{}</time><p>{}</p></article>"#,
            html_escape(&post.slug),
            html_escape(&post.title),
            post.created_at.format(&date_format),
            html_escape(&post.excerpt),
        ));
    }
    body.push_str("</section>");

    layout(pool, "Blog", &body)
}

pub fn render_blog_single(pool: &DbPool, post: &BlogPost) -> String {
    let date_format = Setting::get_or(pool, "date_format", "%B %d, %Y");

    let mut body = String::from(r#"<article class="blog-post">"#);
    if let Some(image_id) = post.image_id.as_deref().filter(|i| !i.is_empty()) {
        body.push_str(&format!(
            r#"<img class="post-image" src="{}" alt="">"#,
            uploads::public_url(uploads::PREFIX_BLOG, Some(image_id)),
        ));
    }
    body.push_str(&format!("<h1>{}</h1>", html_escape(&post.title)));
    body.push_str(&format!(
        "<time>{}</time>",
        post.created_at.format(&date_format)
    ));
    body.push_str(&markdown_to_html(&post.content));
    if let Some(url) = post.external_url.as_deref().filter(|u| !u.is_empty()) {
        body.push_str(&format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">Read the full article</a></p>"#,
            html_escape(url),
        ));
    }
    body.push_str("</article>");

    layout(pool, &post.title, &body)
}

// ── Contact page ───────────────────────────────────────

/// Re-renders the form with prior values and field errors on validation
/// failure; `flash` carries the success or generic-failure banner.
pub fn render_contact_page(
    pool: &DbPool,
    values: &HashMap<String, String>,
    errors: &HashMap<String, String>,
    flash: Option<(&str, bool)>,
) -> String {
    let get = |key: &str| values.get(key).map(String::as_str).unwrap_or("");
    let field_error = |key: &str| -> String {
        errors
            .get(key)
            .map(|msg| format!(r#"<p class="field-error">{}</p>"#, html_escape(msg)))
            .unwrap_or_default()
    };

    let banner = match flash {
        Some((msg, true)) => format!(r#"<p class="flash ok">{}</p>"#, html_escape(msg)),
        Some((msg, false)) => format!(r#"<p class="flash err">{}</p>"#, html_escape(msg)),
        None => String::new(),
    };

    let body = format!(
        r#"<section class="contact"><h1>Get in touch</h1>
{banner}
<form method="post" action="/contact">
  <label>Name<input type="text" name="name" value="{name}"></label>
  {name_err}
  <label>Email<input type="text" name="email" value="{email}"></label>
  {email_err}
  <label>Message<textarea name="message" rows="6">{message}</textarea></label>
  {message_err}
  <button type="submit">Send</button>
</form>
</section>"#,
        banner = banner,
        name = html_escape(get("name")),
        name_err = field_error("name"),
        email = html_escape(get("email")),
        email_err = field_error("email"),
        message = html_escape(get("message")),
        message_err = field_error("message"),
    );

    layout(pool, "Contact", &body)
}

// ── Code explainer page ────────────────────────────────

pub fn render_explainer_page(
    pool: &DbPool,
    code: &str,
    explanation: Option<&str>,
    error: Option<&str>,
) -> String {
    let mut body = String::from(
        r#"<section class="explainer"><h1>AI Code Explainer</h1>
<p>Paste a snippet and get a plain-language explanation.</p>"#,
    );
    if let Some(err) = error {
        body.push_str(&format!(r#"<p class="flash err">{}</p>"#, html_escape(err)));
    }
    body.push_str(&format!(
        r#"<form method="post" action="/explain">
  <textarea name="code" rows="10">{}</textarea>
  <button type="submit">Explain</button>
</form>"#,
        html_escape(code),
    ));
    if let Some(explanation) = explanation {
        body.push_str(&format!(
            r#"<div class="explanation"><h2>Explanation</h2><pre>{}</pre></div>"#,
            html_escape(explanation),
        ));
    }
    body.push_str("</section>");

    layout(pool, "AI Code Explainer", &body)
}

// ── Helpers ────────────────────────────────────────────

pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
