use crate::domain::contact::ContactSubmission;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// 表單轉寄服務。任何非 2xx 都要回傳錯誤
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// "下一個畫面更新時再執行" 的排程器，對應瀏覽器的 animation frame
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameToken;
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Viewport-relative bounding box of a page section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains_line(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// 量測頁面上的區塊位置。找不到的區塊回傳 `None`
pub trait SectionLocator {
    fn scroll_offset(&self) -> f64;
    fn bounding_rect(&self, section_id: &str) -> Option<Rect>;
}
