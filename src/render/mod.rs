//! Static HTML rendering of the single page.
//!
//! Components take read-only state (`PageView`) from the shell that owns it and
//! return markup. One component set serves both themes; only the class tokens
//! and a few labels come from [`Theme`].

pub mod sections;
pub mod theme;

pub use crate::core::contact::FormView;
use crate::core::lightbox::Lightbox;
use crate::core::shell::NavProps;
use crate::domain::model::{Certification, GalleryImage};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use chrono::Datelike;
pub use theme::{Theme, ThemeStyle};

/// Everything a render pass reads. Owned elsewhere, borrowed here.
pub struct PageView<'a> {
    pub nav: NavProps<'a>,
    pub gallery: &'a Lightbox<GalleryImage>,
    pub certificates: &'a Lightbox<Certification>,
    pub form: FormView<'a>,
    pub uptime: String,
}

#[derive(Debug, Clone)]
pub struct SiteIdentity {
    pub title: String,
    pub owner: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

pub struct PageRenderer {
    theme: Theme,
    base_path: String,
    identity: SiteIdentity,
    year: i32,
}

impl PageRenderer {
    pub fn new(theme: Theme, base_path: impl Into<String>, identity: SiteIdentity) -> Self {
        Self {
            theme,
            base_path: base_path.into(),
            identity,
            year: chrono::Local::now().year(),
        }
    }

    /// 測試用：固定頁尾年份
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn style(&self) -> &'static ThemeStyle {
        self.theme.style()
    }

    pub fn identity(&self) -> &SiteIdentity {
        &self.identity
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Resolve a site-relative asset path against the deployment base path.
    pub fn asset(&self, path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        format!("{}{}", self.base_path, trimmed.replace(' ', "%20"))
    }

    pub fn render_page(&self, view: &PageView<'_>) -> String {
        let style = self.style();
        let body = [
            sections::render_nav(self, &view.nav),
            "<main>".to_string(),
            sections::render_hero(self),
            sections::render_metrics(self),
            sections::render_skills(self),
            sections::render_marquee(),
            sections::render_experience(self),
            sections::render_projects(self),
            sections::render_certifications(self, view.certificates),
            sections::render_gallery(self, view.gallery),
            sections::render_resumes(self),
            sections::render_contact(self, &view.form),
            "</main>".to_string(),
            sections::render_footer(self),
            sections::render_scroll_to_top(view.nav.solid),
            sections::render_telemetry(&view.uptime),
        ]
        .join("\n");

        format!(
            r#"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="icon" href="{favicon}">
</head>
<body class="{body_class}">
{body}
</body>
</html>
"#,
            theme = self.theme,
            title = html_escape(&self.identity.title),
            favicon = self.asset("favicon.svg"),
            body_class = style.body,
            body = body,
        )
    }

    /// Render and write `index.html` through the storage port.
    pub async fn write_page<S: Storage>(&self, storage: &S, view: &PageView<'_>) -> Result<usize> {
        let html = self.render_page(view);
        storage.write_file("index.html", html.as_bytes()).await?;
        tracing::info!("📄 Rendered index.html ({} bytes, theme: {})", html.len(), self.theme);
        Ok(html.len())
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer(base: &str) -> PageRenderer {
        PageRenderer::new(
            Theme::Simple,
            base,
            SiteIdentity {
                title: "Portfolio".to_string(),
                owner: "Owner".to_string(),
                email: "owner@example.com".to_string(),
                phone: "+1 555".to_string(),
                location: "Somewhere".to_string(),
            },
        )
    }

    #[test]
    fn test_asset_uses_base_path() {
        let r = renderer("/portfolio/");
        assert_eq!(r.asset("photos/site photo.jpg"), "/portfolio/photos/site%20photo.jpg");
        assert_eq!(r.asset("/docs/cv.pdf"), "/portfolio/docs/cv.pdf");
        assert_eq!(renderer("/").asset("a.png"), "/a.png");
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("L&T <b>\"x\""), "L&amp;T &lt;b&gt;&quot;x&quot;");
    }
}
