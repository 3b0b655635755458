//! Fixed-timestep frame loop.
//!
//! Decouples simulation stepping (fixed 60 Hz) from rendering (variable
//! rate) using an accumulator, and keeps frame/update counters.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp to prevent spiral of death.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep frame loop state.
///
/// Call [`tick`](Self::tick) once per frame; the update callback runs zero
/// or more times at the fixed rate.
pub struct FrameLoop {
    previous_time: Instant,
    accumulator: f64,
    frame_count: u64,
    update_count: u64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Runs one frame: measures elapsed time and runs fixed-rate update
    /// steps. `update_fn(fixed_dt)` is called zero or more times.
    pub fn tick(&mut self, mut update_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.step(frame_time, &mut update_fn);
    }

    /// Advances the accumulator by an explicit frame time and runs the due
    /// fixed updates. The frame time is clamped so a long stall is absorbed
    /// as slowdown instead of a burst of catch-up steps.
    fn step(&mut self, mut frame_time: f64, update_fn: &mut impl FnMut(f64)) {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT);
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }
        self.frame_count += 1;
    }

    /// Total number of frames ticked.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total number of fixed update steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
