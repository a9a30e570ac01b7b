use std::time::Duration;
use tokio::time::{interval_at, Instant};

pub const LOADING_STAGES: [&str; 5] = [
    "INITIALIZING_SYSTEM",
    "LOADING_MODULES",
    "COMPILING_DATA",
    "OPTIMIZING_PERFORMANCE",
    "SYSTEM_READY",
];

pub const PROGRESS_STEP: u8 = 2;
pub const PROGRESS_TICK: Duration = Duration::from_millis(30);
pub const STAGE_TICK: Duration = Duration::from_millis(600);
pub const COMPLETE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadingScreen {
    progress: u8,
    stage: usize,
    complete: bool,
}

impl LoadingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn stage(&self) -> &'static str {
        LOADING_STAGES[self.stage]
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// One progress tick. Returns false once progress is already at 100,
    /// which is the signal to stop the progress timer.
    pub fn tick_progress(&mut self) -> bool {
        if self.progress >= 100 {
            self.progress = 100;
            return false;
        }
        self.progress = (self.progress + PROGRESS_STEP).min(100);
        true
    }

    /// 停在最後一個階段
    pub fn tick_stage(&mut self) {
        self.stage = (self.stage + 1).min(LOADING_STAGES.len() - 1);
    }

    fn advance_stage<F>(&mut self, on_update: &mut F)
    where
        F: FnMut(&LoadingScreen),
    {
        self.tick_stage();
        tracing::debug!("loading stage: {}", self.stage());
        on_update(self);
    }

    /// Drive both timers until the screen is done. `on_update` sees every change.
    ///
    /// Dropping the future stops the timers.
    pub async fn run<F>(mut self, mut on_update: F) -> Self
    where
        F: FnMut(&LoadingScreen),
    {
        let start = Instant::now();
        let mut progress_timer = interval_at(start + PROGRESS_TICK, PROGRESS_TICK);
        let mut stage_timer = interval_at(start + STAGE_TICK, STAGE_TICK);

        loop {
            tokio::select! {
                _ = progress_timer.tick() => {
                    if !self.tick_progress() {
                        break;
                    }
                    on_update(&self);
                }
                _ = stage_timer.tick() => self.advance_stage(&mut on_update),
            }
        }

        // 等待完成的這段時間，階段標籤仍持續前進
        let complete = tokio::time::sleep(COMPLETE_DELAY);
        tokio::pin!(complete);
        loop {
            tokio::select! {
                _ = &mut complete => break,
                _ = stage_timer.tick() => self.advance_stage(&mut on_update),
            }
        }

        self.complete = true;
        on_update(&self);
        self
    }
}
