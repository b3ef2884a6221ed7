use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "website",
    "website/db",
    "website/uploads",
    "website/uploads/awards",
    "website/uploads/licences",
    "website/uploads/projects",
    "website/uploads/about",
    "website/static",
    "website/static/css",
    "website/static/img",
    "website/templates",
    "website/templates/admin",
];

/// Critical template files — the admin panel cannot function without these
const CRITICAL_TEMPLATES: &[&str] = &[
    "website/templates/admin/base.html.tera",
    "website/templates/admin/login.html.tera",
    "website/templates/admin/dashboard.html.tera",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing files, and
/// aborts if critical dependencies are absent.
pub fn run() {
    info!("Atelier boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Critical templates ──────────────────────────
    for file in CRITICAL_TEMPLATES {
        if !Path::new(file).exists() {
            error!("  MISSING critical template: {}", file);
            errors += 1;
        }
    }

    // ── 3. Placeholder image ───────────────────────────
    if !Path::new("website/static/img/placeholder.svg").exists() {
        warn!("  Missing placeholder image (records without an upload will render broken)");
        warnings += 1;
    }

    // ── 4. Database directory writable ──────────────────
    for dir in &["website/db", "website/uploads"] {
        let path = Path::new(dir);
        if path.exists() {
            let test_file = path.join(".write_test");
            match fs::write(&test_file, "test") {
                Ok(_) => {
                    let _ = fs::remove_file(&test_file);
                }
                Err(e) => {
                    error!("  Directory {} not writable: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 5. SMTP configuration ───────────────────────────
    if std::env::var("SMTP_HOST").map(|h| h.is_empty()).unwrap_or(true) {
        warn!("  SMTP_HOST not set — contact notifications disabled");
        warnings += 1;
    }

    // ── 6. Rocket.toml exists ───────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
