pub mod adapters;
pub mod app;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use app::App;
pub use adapters::{HttpFormRelay, LocalStorage};
pub use config::SiteConfig;
pub use core::contact::{ContactForm, FormStatus};
pub use core::lightbox::{CategoryFilter, Lightbox};
pub use core::scroll_spy::{ScrollSpy, ScrollSpyConfig};
pub use core::shell::Shell;
pub use render::{PageRenderer, PageView, Theme};
pub use utils::error::{Result, SiteError};
