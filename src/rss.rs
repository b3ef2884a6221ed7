use chrono::{DateTime, Utc};

use crate::db::DbPool;
use crate::models::blog::BlogPost;
use crate::models::settings::Setting;

/// Generate RSS 2.0 XML feed for published blog posts
pub fn generate_feed(pool: &DbPool) -> String {
    let site_name = Setting::get_or(pool, "site_name", "Atelier");
    let site_url = Setting::get_or(pool, "site_url", "http://localhost:8000");
    let site_caption = Setting::get_or(pool, "site_caption", "");
    let feed_count = Setting::get_i64(pool, "rss_feed_count").clamp(1, 100) as usize;

    let posts: Vec<BlogPost> = BlogPost::published(pool)
        .into_iter()
        .take(feed_count)
        .collect();

    // RFC 2822 dates, as the RSS spec requires
    let format_rfc2822 = |ndt: chrono::NaiveDateTime| -> String {
        let utc: DateTime<Utc> = DateTime::from_naive_utc_and_offset(ndt, Utc);
        utc.format("%a, %d %b %Y %H:%M:%S +0000").to_string()
    };

    let last_build = posts
        .first()
        .map(|p| {
            format!(
                "    <lastBuildDate>{}</lastBuildDate>\n",
                format_rfc2822(p.created_at)
            )
        })
        .unwrap_or_default();

    let mut xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
<channel>
    <title>{title}</title>
    <link>{url}</link>
    <description>{desc}</description>
    <atom:link href="{url}/blog/feed" rel="self" type="application/rss+xml"/>
    <language>en</language>
{last_build}"#,
        title = xml_escape(&site_name),
        url = xml_escape(&site_url),
        desc = xml_escape(&site_caption),
        last_build = last_build,
    );

    for post in &posts {
        xml.push_str(&format!(
            r#"    <item>
        <title>{title}</title>
        <link>{url}/blog/{slug}</link>
        <guid isPermaLink="true">{url}/blog/{slug}</guid>
        <pubDate>{date}</pubDate>
        <description>{desc}</description>
    </item>
"#,
            title = xml_escape(&post.title),
            url = xml_escape(&site_url),
            slug = &post.slug,
            date = format_rfc2822(post.created_at),
            desc = xml_escape(&post.excerpt),
        ));
    }

    xml.push_str("</channel>\n</rss>");
    xml
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
