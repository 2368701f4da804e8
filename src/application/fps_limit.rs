use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Keeps frames at least `1 / max_fps` seconds apart.
pub struct FpsLimiter {
    min_frame: Duration,
    frame_start: Instant,
}

impl FpsLimiter {
    pub fn new(max_fps: f32) -> Self {
        let min_frame = if max_fps.is_finite() && max_fps > 0. {
            Duration::from_secs_f64(1. / max_fps as f64)
        } else {
            Duration::ZERO
        };
        Self {
            min_frame,
            frame_start: Instant::now(),
        }
    }

    /// Sleep off whatever is left of the current frame, then start the next one
    pub fn delay(&mut self) {
        if let Some(rest) = self.min_frame.checked_sub(self.frame_start.elapsed()) {
            sleep(rest);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_waits_for_frame_time() {
        let mut limiter = FpsLimiter::new(100.);
        let start = Instant::now();
        limiter.delay();
        limiter.delay();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_unlimited_when_fps_not_positive() {
        let mut limiter = FpsLimiter::new(0.);
        let start = Instant::now();
        for _ in 0..100 {
            limiter.delay();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
