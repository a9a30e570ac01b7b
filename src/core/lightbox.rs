use crate::domain::model::LightboxItem;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"All"` maps to the show-everything filter.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// 對應瀏覽器 `KeyboardEvent.key`
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

/// Where a click inside the open viewer landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    CloseButton,
    Image,
    Caption,
    Next,
    Previous,
}

/// Filterable grid plus full-screen viewer.
pub struct Lightbox<T: LightboxItem> {
    items: Vec<T>,
    filter: CategoryFilter,
    visible: Vec<usize>,
    selected: Option<String>,
    key_listener: bool,
}

impl<T: LightboxItem> Lightbox<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut lightbox = Self {
            items,
            filter: CategoryFilter::All,
            visible: Vec::new(),
            selected: None,
            key_listener: false,
        };
        lightbox.recompute_visible();
        lightbox
    }

    fn recompute_visible(&mut self) {
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(item.category()))
            .map(|(i, _)| i)
            .collect();
    }

    fn sync_key_listener(&mut self) {
        let wanted = self.selected.is_some();
        if wanted != self.key_listener {
            self.key_listener = wanted;
            tracing::debug!(
                "lightbox key listener {}",
                if wanted { "attached" } else { "removed" }
            );
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.recompute_visible();
        if self.is_open() && self.selected().is_none() {
            self.close();
        }
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.recompute_visible();
    }

    /// "All" followed by each distinct category in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for item in &self.items {
            if !categories.contains(&item.category()) {
                categories.push(item.category());
            }
        }
        categories
    }

    pub fn visible(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.items[i]).collect()
    }

    pub fn selected(&self) -> Option<&T> {
        let key = self.selected.as_deref()?;
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_listening(&self) -> bool {
        self.key_listener
    }

    /// Open the viewer on `key`. Keys not in the item list are ignored.
    pub fn open(&mut self, key: &str) {
        if !self.items.iter().any(|item| item.key() == key) {
            tracing::debug!("lightbox: ignoring unknown item {}", key);
            return;
        }
        self.selected = Some(key.to_string());
        self.sync_key_listener();
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.sync_key_listener();
    }

    fn step(&mut self, forward: bool) {
        let Some(current) = self.selected.as_deref() else {
            return;
        };
        let len = self.visible.len();
        let Some(pos) = self
            .visible
            .iter()
            .position(|&i| self.items[i].key() == current)
        else {
            // 目前的圖片不在篩選結果內，不動作
            return;
        };

        let next = if forward {
            (pos + 1) % len
        } else {
            (pos + len - 1) % len
        };
        self.selected = Some(self.items[self.visible[next]].key().to_string());
    }

    pub fn next(&mut self) {
        self.step(true);
    }

    pub fn previous(&mut self) {
        self.step(false);
    }

    /// Keyboard handler. Keys are ignored while the listener is detached.
    pub fn handle_key(&mut self, key: Key) {
        if !self.key_listener {
            return;
        }
        match key {
            Key::Escape => self.close(),
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.previous(),
            Key::Other => {}
        }
    }

    /// Click handler. Only the backdrop and the close button dismiss the viewer;
    /// clicks on the content stop at the content.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Backdrop | ClickTarget::CloseButton => self.close(),
            ClickTarget::Next => self.next(),
            ClickTarget::Previous => self.previous(),
            ClickTarget::Image | ClickTarget::Caption => {}
        }
    }

    /// 元件卸載：移除鍵盤監聽
    pub fn unmount(&mut self) {
        self.close();
    }
}
