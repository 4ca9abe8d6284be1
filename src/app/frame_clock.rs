//! Frame pacing

use std::time::{Duration, Instant};

/// Schedules frames at a fixed target rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    next: Option<Instant>,
}

impl FrameClock {
    /// A clock ticking `target_fps` times per second; 0 is treated as 1
    pub fn new(target_fps: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_fps.max(1),
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a frame should run at `now`
    pub fn is_due(&self, now: Instant) -> bool {
        self.next.is_none_or(|next| now >= next)
    }

    /// Records a frame at `now` and returns when the next one is due
    ///
    /// A late frame schedules from `now` rather than catching up.
    pub fn tick(&mut self, now: Instant) -> Instant {
        let next = match self.next {
            Some(next) if now < next + self.interval => next + self.interval,
            _ => now + self.interval,
        };
        self.next = Some(next);
        next
    }

    /// When the next frame is due, if one was scheduled
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Forgets the schedule; the next check is due immediately
    pub fn reset(&mut self) {
        self.next = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        assert_eq!(FrameClock::new(50).interval(), Duration::from_millis(20));
        assert_eq!(FrameClock::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_first_frame_is_due_immediately() {
        let clock = FrameClock::new(60);
        assert!(clock.is_due(Instant::now()));
        assert_eq!(clock.deadline(), None);
    }

    #[test]
    fn test_tick_schedules_next_frame() {
        let mut clock = FrameClock::new(50);
        let start = Instant::now();

        let next = clock.tick(start);
        assert_eq!(next, start + Duration::from_millis(20));
        assert!(!clock.is_due(start + Duration::from_millis(10)));
        assert!(clock.is_due(next));

        // On time: keeps the cadence
        assert_eq!(clock.tick(next), start + Duration::from_millis(40));
    }

    #[test]
    fn test_late_frame_does_not_catch_up() {
        let mut clock = FrameClock::new(50);
        let start = Instant::now();
        clock.tick(start);

        let late = start + Duration::from_millis(500);
        assert_eq!(clock.tick(late), late + Duration::from_millis(20));
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new(60);
        let start = Instant::now();
        clock.tick(start);
        clock.reset();
        assert!(clock.is_due(start));
    }
}
