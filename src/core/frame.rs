use crate::domain::ports::{FrameScheduler, FrameToken};
use std::collections::VecDeque;

/// At most one pending recomputation per frame.
///
/// High-frequency events call [`FrameGate::schedule`]; only the first one in a
/// frame reaches the scheduler, the rest are dropped until the frame runs and
/// [`FrameGate::begin`] clears the token.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Option<FrameToken>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// 回傳 true 表示這次真的向排程器要求了新的 frame
    pub fn schedule<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }

    /// Called from the frame callback. Returns false for a stale or cancelled token.
    pub fn begin(&mut self, token: FrameToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Frame scheduler driven by hand: frames only fire when the host calls
/// [`ManualFrames::next_frame`]. Used headless and in tests.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: u64,
    queued: VecDeque<FrameToken>,
    requested: usize,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取出目前排隊中的所有 frame（同一次刷新）
    pub fn next_frame(&mut self) -> Vec<FrameToken> {
        self.queued.drain(..).collect()
    }

    pub fn queued(&self) -> usize {
        self.queued.len()
    }

    pub fn total_requested(&self) -> usize {
        self.requested
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameToken {
        self.next_id += 1;
        self.requested += 1;
        let token = FrameToken(self.next_id);
        self.queued.push_back(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.queued.retain(|t| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_requests_one_frame() {
        let mut frames = ManualFrames::new();
        let mut gate = FrameGate::new();

        assert!(gate.schedule(&mut frames));
        for _ in 0..10 {
            assert!(!gate.schedule(&mut frames));
        }
        assert_eq!(frames.total_requested(), 1);

        let tokens = frames.next_frame();
        assert_eq!(tokens.len(), 1);
        assert!(gate.begin(tokens[0]));
        assert!(!gate.is_pending());

        // 下一個 frame 可以再排
        assert!(gate.schedule(&mut frames));
        assert_eq!(frames.total_requested(), 2);
    }

    #[test]
    fn test_cancel_drops_queued_frame() {
        let mut frames = ManualFrames::new();
        let mut gate = FrameGate::new();

        gate.schedule(&mut frames);
        gate.cancel(&mut frames);
        assert_eq!(frames.queued(), 0);
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_stale_token_is_rejected() {
        let mut frames = ManualFrames::new();
        let mut gate = FrameGate::new();

        gate.schedule(&mut frames);
        let stale = frames.next_frame()[0];
        gate.cancel(&mut frames);
        assert!(!gate.begin(stale));
    }
}
