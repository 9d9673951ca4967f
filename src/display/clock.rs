// Frame clock - Decides when the next display refresh is due
//
// The window polls the clock on every redraw; a refresh is due once a full
// frame duration has passed since the previous one.

use std::time::{Duration, Instant};

/// Refresh pacing for the window's frame loop
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_duration: Duration,
    last_frame: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    /// Create a clock ticking at `fps` frames per second
    pub fn new(fps: u32) -> Self {
        Self::with_duration(Duration::from_micros(1_000_000 / fps.max(1) as u64))
    }

    /// Create a clock with an explicit frame duration
    pub fn with_duration(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            last_frame: None,
            frames: 0,
        }
    }

    /// Duration of one frame
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Number of refreshes granted so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Check whether a refresh is due at `now`, and start a new frame if so
    ///
    /// The first call is always due. At most one refresh is granted per
    /// call, however late the caller is.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = match self.last_frame {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.frame_duration,
        };
        if due {
            self.last_frame = Some(now);
            self.frames += 1;
        }
        due
    }

    /// Time at which the next refresh becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last_frame.map(|last| last + self.frame_duration)
    }
}
