pub mod contact;
pub mod frame;
pub mod lightbox;
pub mod loading;
pub mod scroll_spy;
pub mod shell;
pub mod telemetry;

pub use crate::domain::ports::{FormRelay, FrameScheduler, FrameToken, Rect, SectionLocator, Storage};
pub use crate::utils::error::Result;
