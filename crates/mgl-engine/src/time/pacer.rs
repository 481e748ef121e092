use std::time::{Duration, Instant};

/// Fixed-rate redraw scheduler.
///
/// The pacer is a hint, not a guarantee: it tells the runtime when the next
/// frame is due and how long it may sleep until then. Missed deadlines are
/// not caught up; the schedule restarts from the late frame.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Option<Duration>,
    next: Instant,
}

impl FramePacer {
    /// `hz = None` (or a non-positive rate) means "redraw as fast as possible".
    pub fn new(hz: Option<f64>, now: Instant) -> Self {
        let period = hz
            .filter(|hz| hz.is_finite() && *hz > 0.0)
            .map(|hz| Duration::from_secs_f64(1.0 / hz));
        Self { period, next: now }
    }

    /// When the next frame is due, or `None` when unpaced.
    pub fn deadline(&self) -> Option<Instant> {
        self.period.map(|_| self.next)
    }

    /// Returns `true` if a frame should be drawn at `now`, and advances the schedule.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(period) = self.period else {
            return true;
        };

        if now < self.next {
            return false;
        }

        self.next += period;
        if self.next <= now {
            self.next = now + period;
        }
        true
    }
}

/// Counts presented frames and reports the rate once per interval.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    window_start: Instant,
    frames: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self::with_interval(Duration::from_secs(1), now)
    }

    pub fn with_interval(interval: Duration, now: Instant) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            window_start: now,
            frames: 0,
        }
    }

    /// Records one frame. Returns the frames-per-second figure when an
    /// interval has elapsed, then starts a new interval.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}
