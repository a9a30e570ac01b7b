use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

pub const COUNTER_STEPS: u32 = 100;
pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Static status rows of the telemetry panel.
pub const STATUS_ROWS: &[(&str, &str)] = &[
    ("ENGINE_CORE", "ACTIVE"),
    ("DATA_PIPELINE", "SYNCHRONIZED"),
    ("SECURITY_PROTOCOL", "ENFORCED"),
];

/// `HH:MM:SS`, hours keep growing past 99.
pub fn format_uptime(seconds: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}

/// Uptime counter that ticks once per second until stopped or dropped.
pub struct UptimeClock {
    seconds: watch::Receiver<u64>,
    task: JoinHandle<()>,
}

impl UptimeClock {
    pub fn start() -> Self {
        let (tx, rx) = watch::channel(0u64);
        let task = tokio::spawn(async move {
            let period = Duration::from_secs(1);
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                tx.send_modify(|s| *s += 1);
            }
        });
        Self { seconds: rx, task }
    }

    pub fn seconds(&self) -> u64 {
        *self.seconds.borrow()
    }

    pub fn display(&self) -> String {
        format_uptime(self.seconds())
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.seconds.clone()
    }
}

impl Drop for UptimeClock {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Values shown by a count-up animation: the running total advances by
/// `target / steps` each frame, shown floored, and the last frame is exactly
/// `target`.
#[derive(Debug, Clone)]
pub struct CounterFrames {
    current: f64,
    increment: f64,
    target: u32,
    done: bool,
}

impl CounterFrames {
    pub fn new(target: u32, steps: u32) -> Self {
        Self {
            current: 0.0,
            increment: f64::from(target) / f64::from(steps.max(1)),
            target,
            done: false,
        }
    }

    /// Delay between frames for an animation lasting `duration`.
    pub fn frame_interval(duration: Duration, steps: u32) -> Duration {
        duration / steps.max(1)
    }
}

impl Iterator for CounterFrames {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        self.current += self.increment;
        if self.current >= f64::from(self.target) {
            self.done = true;
            Some(self.target)
        } else {
            Some(self.current.floor() as u32)
        }
    }
}
