use folio_site::content::{self, GALLERY_IMAGES};
use folio_site::domain::contact::ContactSubmission;
use folio_site::{App, HttpFormRelay, LocalStorage, PageRenderer, SiteConfig, Theme};
use tempfile::TempDir;

fn app(config: &SiteConfig) -> App<HttpFormRelay> {
    // 這些測試不會送出表單
    App::new(config, HttpFormRelay::new("http://127.0.0.1:9/unused"))
}

fn renderer(config: &SiteConfig, theme: Theme) -> PageRenderer {
    PageRenderer::new(theme, config.site.base_path.clone(), config.identity()).with_year(2031)
}

#[tokio::test]
async fn test_write_page_creates_index_html() {
    let dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().join("dist"));
    let config = SiteConfig::default();
    let app = app(&config);

    let bytes = renderer(&config, Theme::Simple)
        .write_page(&storage, &app.view(0))
        .await
        .unwrap();

    let written = std::fs::read_to_string(dir.path().join("dist/index.html")).unwrap();
    assert_eq!(written.len(), bytes);
    assert!(written.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_every_nav_target_exists_on_page() {
    let config = SiteConfig::default();
    let app = app(&config);
    let html = renderer(&config, Theme::Simple).render_page(&app.view(0));

    for id in content::section_ids() {
        assert!(html.contains(&format!(r#"id="{}""#, id)), "missing section {}", id);
        assert!(html.contains(&format!(r##"href="#{}""##, id)), "missing link {}", id);
    }
}

#[test]
fn test_theme_changes_presentation_only() {
    let config = SiteConfig::default();
    let app = app(&config);
    let simple = renderer(&config, Theme::Simple).render_page(&app.view(0));
    let industrial = renderer(&config, Theme::Industrial).render_page(&app.view(0));

    assert!(simple.contains(r#"data-theme="simple""#));
    assert!(industrial.contains(r#"data-theme="industrial""#));
    assert!(simple.contains(Theme::Simple.style().submit_label));
    assert!(industrial.contains(Theme::Industrial.style().submit_label));
    assert_ne!(simple, industrial);

    for id in content::section_ids() {
        assert!(industrial.contains(&format!(r#"id="{}""#, id)));
    }
}

#[test]
fn test_open_lightbox_renders_viewer_with_base_path() {
    let config = SiteConfig::default();
    let mut app = app(&config);
    let r = renderer(&config, Theme::Simple);

    let closed = r.render_page(&app.view(0));
    app.gallery.open(GALLERY_IMAGES[0].url);
    let open = r.render_page(&app.view(0));

    assert!(!closed.contains("lightbox-backdrop"));
    assert!(open.contains("lightbox-backdrop"));
    assert!(open.contains(&r.asset(GALLERY_IMAGES[0].url)));
    assert!(open.contains(r#"src="/portfolio/"#));
}

#[test]
fn test_footer_and_uptime() {
    let config = SiteConfig::default();
    let app = app(&config);
    let html = renderer(&config, Theme::Simple).render_page(&app.view(3725));

    assert!(html.contains("© 2031"));
    assert!(html.contains("01:02:05"));
}

#[tokio::test]
async fn test_inline_field_errors_render() {
    let config = SiteConfig::default();
    let mut app = app(&config);
    app.contact
        .fill(ContactSubmission::new("", "nope", "Subject", "Body"));
    assert!(app.contact.submit().await.is_err());

    let html = renderer(&config, Theme::Simple).render_page(&app.view(0));
    assert!(html.contains("Name is required"));
    assert!(html.contains("Invalid email address"));
    assert!(!html.contains("Subject is required"));
}
