/// Once-per-second FPS sample for the log and an optional software frame cap.
///
/// Timestamps are seconds from macroquad's `get_time()`, passed in by the caller.
#[derive(Debug, Clone)]
pub struct TimeState {
    pub last_frame_time: f64,
    pub frame_count: u64,
    pub last_fps_instant: f64,
}

impl TimeState {
    pub fn new(now: f64) -> Self {
        Self {
            last_frame_time: now,
            frame_count: 0,
            last_fps_instant: now,
        }
    }

    /// Mark the start of a frame.
    pub fn tick(&mut self, now: f64) {
        self.last_frame_time = now;
        self.frame_count += 1;
    }

    pub fn fps_sample(&mut self, now: f64) -> Option<f32> {
        let elapsed = now - self.last_fps_instant;
        if elapsed >= 1.0 {
            let fps = (self.frame_count as f64 / elapsed) as f32;
            self.frame_count = 0;
            self.last_fps_instant = now;
            Some(fps)
        } else {
            None
        }
    }

    /// Seconds left in this frame's budget at `target_fps`. `None` when uncapped.
    pub fn remaining_budget(&self, target_fps: u32, now: f64) -> Option<f64> {
        if target_fps == 0 {
            return None;
        }
        let budget = 1.0 / target_fps as f64;
        Some((budget - (now - self.last_frame_time)).max(0.0))
    }

    /// Sleep out the rest of the frame budget. No-op when `target_fps` is 0.
    pub fn pace(&self, target_fps: u32, now: f64) {
        if let Some(rest) = self.remaining_budget(target_fps, now) {
            if rest > 0.0 {
                sleep_for(rest);
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn sleep_for(seconds: f64) {
    std::thread::sleep(std::time::Duration::from_secs_f64(seconds));
}

// the browser schedules frames; blocking its thread is not allowed
#[cfg(target_arch = "wasm32")]
fn sleep_for(_seconds: f64) {}
