use crate::core::frame::FrameGate;
use crate::domain::ports::{FrameScheduler, FrameToken, SectionLocator};

pub const DEFAULT_REFERENCE_LINE: f64 = 150.0;
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpyConfig {
    /// Distance from the top of the viewport that decides which section is active.
    pub reference_line: f64,
    pub scrolled_threshold: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            reference_line: DEFAULT_REFERENCE_LINE,
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}

/// Derived scroll state published to the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpySnapshot {
    pub scrolled: bool,
    pub active_section: Option<String>,
}

/// First section, in declared order, whose box straddles the reference line.
/// Sections the locator can't find are skipped.
pub fn active_section<'a, L: SectionLocator + ?Sized>(
    sections: &'a [String],
    locator: &L,
    reference_line: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .find(|id| {
            locator
                .bounding_rect(id)
                .map(|rect| rect.contains_line(reference_line))
                .unwrap_or(false)
        })
        .map(String::as_str)
}

pub struct ScrollSpy {
    sections: Vec<String>,
    config: ScrollSpyConfig,
    gate: FrameGate,
    last: SpySnapshot,
    attached: bool,
}

impl ScrollSpy {
    pub fn new<I, S>(sections: I, config: ScrollSpyConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            config,
            gate: FrameGate::new(),
            last: SpySnapshot::default(),
            attached: false,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn snapshot(&self) -> &SpySnapshot {
        &self.last
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// 註冊 passive scroll listener
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            tracing::debug!("scroll-spy attached ({} sections)", self.sections.len());
        }
    }

    /// 移除 listener 並取消尚未執行的 frame
    pub fn detach<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.gate.cancel(scheduler);
        if self.attached {
            self.attached = false;
            tracing::debug!("scroll-spy detached");
        }
    }

    /// Scroll event handler. Returns true when this event queued a frame.
    pub fn on_scroll<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if !self.attached {
            return false;
        }
        self.gate.schedule(scheduler)
    }

    /// Frame callback. Returns the new snapshot only if something changed.
    pub fn on_frame<L: SectionLocator + ?Sized>(
        &mut self,
        token: FrameToken,
        locator: &L,
    ) -> Option<SpySnapshot> {
        if !self.gate.begin(token) {
            return None;
        }
        self.refresh(locator)
    }

    /// Measure immediately, outside the frame gate.
    pub fn refresh<L: SectionLocator + ?Sized>(&mut self, locator: &L) -> Option<SpySnapshot> {
        let next = SpySnapshot {
            scrolled: locator.scroll_offset() > self.config.scrolled_threshold,
            active_section: active_section(&self.sections, locator, self.config.reference_line)
                .map(str::to_string),
        };

        if next == self.last {
            return None;
        }

        tracing::debug!(
            "active section: {:?} -> {:?} (scrolled: {})",
            self.last.active_section,
            next.active_section,
            next.scrolled
        );
        self.last = next.clone();
        Some(next)
    }
}
