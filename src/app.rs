//! Root composition: owns every piece of mutable UI state and hands read-only
//! views to the renderer.

use crate::config::SiteConfig;
use crate::content;
use crate::core::contact::ContactForm;
use crate::core::lightbox::Lightbox;
use crate::core::shell::Shell;
use crate::core::telemetry::format_uptime;
use crate::domain::model::{Certification, GalleryImage};
use crate::domain::ports::FormRelay;
use crate::render::PageView;

pub struct App<R: FormRelay> {
    pub shell: Shell,
    pub gallery: Lightbox<GalleryImage>,
    pub certificates: Lightbox<Certification>,
    pub contact: ContactForm<R>,
}

impl<R: FormRelay> App<R> {
    pub fn new(config: &SiteConfig, relay: R) -> Self {
        Self {
            shell: Shell::with_default_nav(config.scroll_spy_config()),
            gallery: Lightbox::new(content::GALLERY_IMAGES.to_vec()),
            certificates: Lightbox::new(content::CERTIFICATIONS.to_vec()),
            contact: ContactForm::with_reset_delay(relay, config.reset_after()),
        }
    }

    pub fn view(&self, uptime_seconds: u64) -> PageView<'_> {
        PageView {
            nav: self.shell.nav_props(),
            gallery: &self.gallery,
            certificates: &self.certificates,
            form: self.contact.view(),
            uptime: format_uptime(uptime_seconds),
        }
    }
}
