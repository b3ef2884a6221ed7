use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// SMTP relay settings, read from the environment. `None` when SMTP_HOST is
/// unset, which disables outbound mail entirely.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub username: String,
    pub password: String,
    pub from: String,
    pub admin_to: String,
}

impl SmtpConfig {
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok().filter(|h| !h.is_empty())?;
        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);
        let secure = std::env::var("SMTP_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let username = std::env::var("SMTP_USER").unwrap_or_default();
        let password = std::env::var("SMTP_PASS").unwrap_or_default();
        let from = std::env::var("SMTP_FROM")
            .ok()
            .filter(|f| !f.is_empty())
            .or_else(|| Some(username.clone()).filter(|u| !u.is_empty()))?;
        let admin_to = std::env::var("ADMIN_EMAIL")
            .ok()
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| from.clone());

        Some(SmtpConfig {
            host,
            port,
            secure,
            username,
            password,
            from,
            admin_to,
        })
    }
}

/// Notify the site owner of a new contact message. Fire-and-forget: the
/// message row is already stored by the time this runs, so a send failure is
/// only logged and the visitor still sees success.
pub fn send_contact_notification(name: &str, email: &str, message: &str) {
    let cfg = match SmtpConfig::from_env() {
        Some(c) => c,
        None => {
            log::info!("SMTP not configured, skipping contact notification");
            return;
        }
    };

    let subject = format!("New Contact Message from {}", name);
    let body = format!("Name: {}\nEmail: {}\nMessage:\n{}\n", name, email, message);

    if let Err(e) = send(&cfg, &cfg.admin_to, &subject, &body) {
        log::error!("Failed to send contact notification: {}", e);
    }
}

fn send(cfg: &SmtpConfig, to: &str, subject: &str, body: &str) -> Result<(), String> {
    let email = Message::builder()
        .from(
            cfg.from
                .parse()
                .map_err(|e| format!("Invalid from address: {}", e))?,
        )
        .to(to.parse().map_err(|e| format!("Invalid to address: {}", e))?)
        .subject(subject)
        .header(ContentType::TEXT_PLAIN)
        .body(body.to_string())
        .map_err(|e| format!("Failed to build email: {}", e))?;

    let builder = if cfg.secure {
        SmtpTransport::relay(&cfg.host).map_err(|e| format!("SMTP relay error: {}", e))?
    } else {
        SmtpTransport::starttls_relay(&cfg.host)
            .map_err(|e| format!("SMTP relay error: {}", e))?
    };

    let mut builder = builder.port(cfg.port);
    if !cfg.username.is_empty() {
        builder = builder.credentials(Credentials::new(
            cfg.username.clone(),
            cfg.password.clone(),
        ));
    }

    let mailer = builder.build();
    mailer
        .send(&email)
        .map_err(|e| format!("SMTP send error: {}", e))?;
    Ok(())
}
