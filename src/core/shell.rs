use crate::content;
use crate::core::scroll_spy::{ScrollSpy, ScrollSpyConfig, SpySnapshot};
use crate::domain::model::{NavItem, Project};
use crate::domain::ports::{FrameScheduler, FrameToken, SectionLocator};

/// Read-only view of the shell state handed to the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavProps<'a> {
    pub items: &'static [NavItem],
    pub active_section: Option<&'a str>,
    pub menu_open: bool,
    /// 捲動超過門檻後導覽列改成實心背景
    pub solid: bool,
}

/// Root composition state: mobile menu, scroll-derived state and the project modal.
pub struct Shell {
    nav: &'static [NavItem],
    spy: ScrollSpy,
    menu_open: bool,
    scroll: SpySnapshot,
    open_project: Option<&'static Project>,
}

impl Shell {
    pub fn new(nav: &'static [NavItem], config: ScrollSpyConfig) -> Self {
        Self {
            nav,
            spy: ScrollSpy::new(nav.iter().map(|item| item.section_id), config),
            menu_open: false,
            scroll: SpySnapshot::default(),
            open_project: None,
        }
    }

    pub fn with_default_nav(config: ScrollSpyConfig) -> Self {
        Self::new(content::NAV_ITEMS, config)
    }

    pub fn mount<L: SectionLocator + ?Sized>(&mut self, locator: &L) {
        self.spy.attach();
        if let Some(snapshot) = self.spy.refresh(locator) {
            self.scroll = snapshot;
        }
    }

    pub fn unmount<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.spy.detach(scheduler);
    }

    pub fn on_scroll<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.spy.on_scroll(scheduler);
    }

    /// Returns true when the shell state changed and needs a re-render.
    pub fn on_frame<L: SectionLocator + ?Sized>(&mut self, token: FrameToken, locator: &L) -> bool {
        match self.spy.on_frame(token, locator) {
            Some(snapshot) => {
                self.scroll = snapshot;
                true
            }
            None => false,
        }
    }

    pub fn scroll_spy(&self) -> &ScrollSpy {
        &self.spy
    }

    pub fn active_section(&self) -> Option<&str> {
        self.scroll.active_section.as_deref()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.scrolled
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.scroll.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Following a nav link closes the mobile menu and yields the anchor to jump to.
    pub fn select_nav(&mut self, section_id: &str) -> Option<String> {
        let item = self.nav.iter().find(|item| item.section_id == section_id)?;
        self.menu_open = false;
        Some(item.href())
    }

    pub fn nav_props(&self) -> NavProps<'_> {
        NavProps {
            items: self.nav,
            active_section: self.active_section(),
            menu_open: self.menu_open,
            solid: self.scroll.scrolled,
        }
    }

    pub fn open_project(&mut self, id: &str) -> bool {
        self.open_project = content::find_project(id);
        self.open_project.is_some()
    }

    pub fn close_project(&mut self) {
        self.open_project = None;
    }

    pub fn project_modal(&self) -> Option<&'static Project> {
        self.open_project
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_closes_on_nav_selection() {
        let mut shell = Shell::with_default_nav(ScrollSpyConfig::default());
        shell.toggle_menu();
        assert!(shell.is_menu_open());

        assert_eq!(shell.select_nav("projects"), Some("#projects".to_string()));
        assert!(!shell.is_menu_open());
    }

    #[test]
    fn test_unknown_nav_keeps_menu() {
        let mut shell = Shell::with_default_nav(ScrollSpyConfig::default());
        shell.toggle_menu();
        assert_eq!(shell.select_nav("nowhere"), None);
        assert!(shell.is_menu_open());
    }

    #[test]
    fn test_project_modal() {
        let mut shell = Shell::with_default_nav(ScrollSpyConfig::default());
        assert!(shell.open_project("p1"));
        let project = shell.project_modal().unwrap();
        assert_eq!(project.detail_text(), project.description);

        shell.close_project();
        assert!(shell.project_modal().is_none());
        assert!(!shell.open_project("p404"));
    }
}
