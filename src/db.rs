use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;

pub type DbPool = Pool<SqliteConnectionManager>;

pub fn init_pool() -> Result<DbPool, Box<dyn std::error::Error>> {
    let manager = SqliteConnectionManager::file("website/db/atelier.db");
    let pool = Pool::builder().max_size(10).build(manager)?;

    // Enable WAL mode for better concurrent read performance
    let conn = pool.get()?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    conn.execute_batch(
        "
        -- Hero section (singleton-like: slot is fixed at 1 so saves upsert)
        CREATE TABLE IF NOT EXISTS hero_sections (
            id INTEGER PRIMARY KEY,
            slot INTEGER NOT NULL DEFAULT 1 UNIQUE,
            title TEXT NOT NULL,
            subtitle TEXT,
            tagline TEXT,
            cta_primary_label TEXT,
            cta_primary_url TEXT,
            cta_secondary_label TEXT,
            cta_secondary_url TEXT,
            hero_image_url TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- About-me section (singleton-like)
        CREATE TABLE IF NOT EXISTS about_me_sections (
            id INTEGER PRIMARY KEY,
            slot INTEGER NOT NULL DEFAULT 1 UNIQUE,
            headline TEXT NOT NULL,
            bio TEXT NOT NULL DEFAULT '',
            highlights TEXT NOT NULL DEFAULT '[]',
            profile_image TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Awards and achievements
        CREATE TABLE IF NOT EXISTS awards_and_achievements (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            issuer TEXT NOT NULL DEFAULT '',
            date_awarded TEXT,
            certificate_url TEXT,
            image_id TEXT,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Licences and certifications
        CREATE TABLE IF NOT EXISTS licences_and_certifications (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            issuer TEXT NOT NULL DEFAULT '',
            issue_date TEXT,
            expiry_date TEXT,
            credential_id TEXT,
            credential_url TEXT,
            image_id TEXT,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Projects
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            tech_stack TEXT NOT NULL DEFAULT '[]',
            image_id TEXT,
            github_url TEXT,
            live_url TEXT,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Skill categories and skills (a skill belongs to exactly one category)
        CREATE TABLE IF NOT EXISTS skill_categories (
            id INTEGER PRIMARY KEY,
            category TEXT NOT NULL,
            icon TEXT NOT NULL DEFAULT '',
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS skills (
            id INTEGER PRIMARY KEY,
            category_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            proficiency INTEGER NOT NULL DEFAULT 0,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (category_id) REFERENCES skill_categories(id)
        );

        -- Work experience
        CREATE TABLE IF NOT EXISTS experience (
            id INTEGER PRIMARY KEY,
            role TEXT NOT NULL,
            company TEXT NOT NULL,
            period TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Education
        CREATE TABLE IF NOT EXISTS education (
            id INTEGER PRIMARY KEY,
            degree TEXT NOT NULL,
            institution TEXT NOT NULL,
            period TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Blog posts
        CREATE TABLE IF NOT EXISTS blog_posts (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            slug TEXT UNIQUE NOT NULL,
            excerpt TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            external_url TEXT,
            image_id TEXT,
            published INTEGER NOT NULL DEFAULT 0,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Social links
        CREATE TABLE IF NOT EXISTS social_links (
            id INTEGER PRIMARY KEY,
            platform TEXT NOT NULL,
            url TEXT NOT NULL,
            display_name TEXT NOT NULL DEFAULT '',
            icon TEXT NOT NULL DEFAULT '',
            active INTEGER NOT NULL DEFAULT 1,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Contact messages
        CREATE TABLE IF NOT EXISTS contact_messages (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            read INTEGER NOT NULL DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );

        -- Settings (key-value)
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT
        );

        -- Admin sessions
        CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY,
            created_at DATETIME NOT NULL,
            expires_at DATETIME NOT NULL,
            ip_address TEXT,
            user_agent TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_skills_category ON skills(category_id);
        CREATE INDEX IF NOT EXISTS idx_blog_published ON blog_posts(published);
        CREATE INDEX IF NOT EXISTS idx_messages_read ON contact_messages(read);
        ",
    )?;

    Ok(())
}

pub fn seed_defaults(pool: &DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let conn = pool.get()?;

    let defaults = vec![
        // General
        ("site_name", "Atelier"),
        ("site_caption", ""),
        ("site_url", "http://localhost:8000"),
        ("admin_email", ""),
        ("date_format", "%B %d, %Y"),
        // Security
        ("admin_slug", "admin"),
        ("session_expiry_hours", "24"),
        ("login_rate_limit", "5"),
        // Blog
        ("blog_posts_per_page", "10"),
        ("rss_feed_count", "25"),
        // Images
        ("images_max_upload_mb", "10"),
        ("images_webp_convert", "true"),
        ("images_allowed_types", "jpg,jpeg,png,gif,webp,svg"),
    ];

    for (key, value) in defaults {
        conn.execute(
            "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
    }

    Ok(())
}
