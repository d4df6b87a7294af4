use std::sync::OnceLock;
use tera::Tera;

static TERA: OnceLock<Tera> = OnceLock::new();

/// Lazily loaded template set. The UI is a single page, so only
/// `templates/index.html` is registered.
pub fn get_tera() -> &'static Tera {
    TERA.get_or_init(|| {
        let mut tera = Tera::default();
        let index = std::path::Path::new("templates").join("index.html");
        if let Err(e) = tera.add_template_file(&index, Some("index.html")) {
            tracing::error!("failed to load template {}: {}", index.display(), e);
        }
        tera
    })
}
