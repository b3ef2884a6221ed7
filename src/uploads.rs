use rocket::fs::TempFile;

use crate::db::DbPool;
use crate::models::settings::Setting;

pub const UPLOADS_ROOT: &str = "website/uploads";

/// Directory prefixes, one per entity type that carries images.
/// Blog images live at the uploads root (empty prefix).
pub const PREFIX_AWARDS: &str = "awards";
pub const PREFIX_LICENCES: &str = "licences";
pub const PREFIX_PROJECTS: &str = "projects";
pub const PREFIX_ABOUT: &str = "about";
pub const PREFIX_BLOG: &str = "";

/// Resolve a stored image id to its public URL. A missing id resolves to the
/// bundled placeholder so list pages never render broken images.
pub fn public_url(prefix: &str, image_id: Option<&str>) -> String {
    match image_id.filter(|id| !id.is_empty()) {
        Some(id) if prefix.is_empty() => format!("/uploads/{}", id),
        Some(id) => format!("/uploads/{}/{}", prefix, id),
        None => "/static/img/placeholder.svg".to_string(),
    }
}

/// Persist an uploaded image under the prefix directory with a generated
/// filename and return that filename — the record's "image id". The caller
/// stores the id; nothing cleans up the file if the record insert then fails.
pub async fn save_upload(file: &mut TempFile<'_>, prefix: &str, pool: &DbPool) -> Option<String> {
    if !check_file_size(pool, file.len() as usize) {
        return None;
    }

    // Try content-type extension first, then original filename, then field name
    let ext = file
        .content_type()
        .and_then(|ct| ct.extension())
        .map(|e| e.to_string())
        .or_else(|| {
            file.raw_name().and_then(|rn| {
                let s = rn.dangerous_unsafe_unsanitized_raw().as_str().to_string();
                s.rsplit('.').next().map(|e| e.to_lowercase())
            })
        })
        .or_else(|| {
            file.name()
                .and_then(|n| n.rsplit('.').next())
                .map(|e| e.to_lowercase())
        })
        .unwrap_or_else(|| "jpg".to_string());

    let uid = uuid::Uuid::new_v4();
    let filename = format!("{}.{}", uid, ext);
    let upload_dir = if prefix.is_empty() {
        std::path::PathBuf::from(UPLOADS_ROOT)
    } else {
        std::path::Path::new(UPLOADS_ROOT).join(prefix)
    };
    let _ = std::fs::create_dir_all(&upload_dir);
    let dest = upload_dir.join(&filename);

    if file.persist_to(&dest).await.is_err() {
        return None;
    }

    let ext_lower = ext.to_lowercase();

    // WebP conversion keeps stored assets small; SVG stays as-is.
    if Setting::get_bool(pool, "images_webp_convert")
        && ext_lower != "webp"
        && ext_lower != "svg"
    {
        if let Some(webp_name) = convert_to_webp_file(&dest, &uid, &upload_dir) {
            let _ = std::fs::remove_file(&dest);
            return Some(webp_name);
        }
    }

    Some(filename)
}

/// Convert an image file to WebP using the image + webp crates
fn convert_to_webp_file(
    src: &std::path::Path,
    uid: &uuid::Uuid,
    upload_dir: &std::path::Path,
) -> Option<String> {
    let img = image::open(src).ok()?;
    let (w, h) = image::GenericImageView::dimensions(&img);
    let rgba = img.to_rgba8();
    let encoder = webp::Encoder::from_rgba(&rgba, w, h);
    let webp_data = encoder.encode(85.0);
    let webp_filename = format!("{}.webp", uid);
    let webp_dest = upload_dir.join(&webp_filename);
    std::fs::write(&webp_dest, &*webp_data).ok()?;
    Some(webp_filename)
}

/// Check if a file extension is in the allowed image types
pub fn is_allowed_image(file: &TempFile<'_>, pool: &DbPool) -> bool {
    let allowed = Setting::get_or(pool, "images_allowed_types", "jpg,jpeg,png,gif,webp,svg");
    let allowed_list: Vec<&str> = allowed.split(',').map(|s| s.trim()).collect();

    let ext = file
        .content_type()
        .and_then(|ct| ct.extension())
        .map(|e| e.to_string().to_lowercase())
        .or_else(|| {
            file.raw_name().and_then(|rn| {
                let s = rn.dangerous_unsafe_unsanitized_raw().as_str().to_string();
                s.rsplit('.').next().map(|e| e.to_lowercase())
            })
        })
        .or_else(|| {
            file.name()
                .and_then(|n| n.rsplit('.').next())
                .map(|e| e.to_lowercase())
        })
        .unwrap_or_default();

    allowed_list.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

/// Check if file size is within the configured limit
pub fn check_file_size(pool: &DbPool, size_bytes: usize) -> bool {
    let max_mb = Setting::get_i64(pool, "images_max_upload_mb").max(1) as usize;
    size_bytes <= max_mb * 1024 * 1024
}
