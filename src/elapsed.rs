use crate::clock;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

pub const TICK_MS: u64 = 1_000;
const GROWN_AFTER_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStage {
    Idle,
    Growing,
    Grown,
}

impl GrowthStage {
    pub fn as_str(self) -> &'static str {
        match self {
            GrowthStage::Idle => "idle",
            GrowthStage::Growing => "growing",
            GrowthStage::Grown => "grown",
        }
    }
}

pub fn format_elapsed(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

pub fn growth_stage(running: bool, elapsed_ms: u64) -> GrowthStage {
    if !running {
        GrowthStage::Idle
    } else if elapsed_ms > GROWN_AFTER_MS {
        GrowthStage::Grown
    } else {
        GrowthStage::Growing
    }
}

/// What the display currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElapsedFrame {
    pub running: bool,
    pub elapsed_ms: u64,
    pub text: String,
    pub stage: GrowthStage,
    /// Bumped on every begin/end; ticks from an older run never land.
    pub generation: u64,
}

impl ElapsedFrame {
    fn idle(generation: u64) -> Self {
        Self {
            running: false,
            elapsed_ms: 0,
            text: format_elapsed(0),
            stage: GrowthStage::Idle,
            generation,
        }
    }

    fn running(elapsed_ms: u64, generation: u64) -> Self {
        Self {
            running: true,
            elapsed_ms,
            text: format_elapsed(elapsed_ms),
            stage: growth_stage(true, elapsed_ms),
            generation,
        }
    }
}

#[derive(Debug, Default)]
pub struct ElapsedTimerState {
    pub running: bool,
    pub base_elapsed_ms: u64,
    tick_handle: Option<JoinHandle<()>>,
}

impl ElapsedTimerState {
    fn cancel(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            handle.abort();
        }
    }
}

/// Elapsed-time display: one baseline sample, then a local one-second tick.
///
/// Must be driven from inside a tokio runtime; `begin_display` spawns the tick.
pub struct ElapsedDisplay {
    timer: ElapsedTimerState,
    frames: Arc<watch::Sender<ElapsedFrame>>,
    generation: u64,
}

impl ElapsedDisplay {
    pub fn new() -> Self {
        let (frames, _) = watch::channel(ElapsedFrame::idle(0));
        Self {
            timer: ElapsedTimerState::default(),
            frames: Arc::new(frames),
            generation: 0,
        }
    }

    pub fn begin_display(&mut self, start: DateTime<Utc>, server_now: Option<DateTime<Utc>>) {
        self.timer.cancel();
        self.generation += 1;

        let now = server_now.unwrap_or_else(Utc::now);
        let base = clock::elapsed_ms(start, now);
        debug!(
            base_ms = base,
            server_clock = server_now.is_some(),
            "begin elapsed display"
        );

        self.timer.running = true;
        self.timer.base_elapsed_ms = base;
        self.frames
            .send_replace(ElapsedFrame::running(base, self.generation));

        let period = Duration::from_millis(TICK_MS);
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let frames = Arc::clone(&self.frames);
        let generation = self.generation;
        self.timer.tick_handle = Some(tokio::spawn(async move {
            loop {
                ticker.tick().await;
                frames.send_if_modified(|frame| {
                    if frame.generation != generation {
                        return false;
                    }
                    *frame = ElapsedFrame::running(frame.elapsed_ms + TICK_MS, generation);
                    true
                });
            }
        }));
    }

    pub fn end_display(&mut self) {
        self.timer.cancel();
        self.generation += 1;
        self.timer.running = false;
        self.timer.base_elapsed_ms = 0;
        debug!("end elapsed display");
        self.frames.send_replace(ElapsedFrame::idle(self.generation));
    }

    pub fn frame(&self) -> ElapsedFrame {
        self.frames.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ElapsedFrame> {
        self.frames.subscribe()
    }

    pub fn is_ticking(&self) -> bool {
        self.timer
            .tick_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn timer(&self) -> &ElapsedTimerState {
        &self.timer
    }
}

impl Default for ElapsedDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ElapsedDisplay {
    fn drop(&mut self) {
        self.timer.cancel();
    }
}
