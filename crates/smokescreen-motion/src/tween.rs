//! Single-value tween with delay, play and reverse.

use crate::ease::Ease;

/// Which way the playhead is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Interpolates `from` → `to` over `duration` seconds.
///
/// The delay is only honored when playing forward from the very start;
/// reversing runs back from wherever the playhead is.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: f64,
    delay: f64,
    ease: Ease,
    playhead: f64,
    pending_delay: f64,
    direction: Option<Direction>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f64::EPSILON),
            delay: 0.0,
            ease,
            playhead: 0.0,
            pending_delay: 0.0,
            direction: None,
        }
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn play(&mut self) {
        self.pending_delay = if self.playhead <= 0.0 { self.delay } else { 0.0 };
        self.direction = Some(Direction::Forward);
    }

    pub fn reverse(&mut self) {
        self.pending_delay = 0.0;
        self.direction = Some(Direction::Reverse);
    }

    /// Move the playhead by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f64) -> f64 {
        match self.direction {
            None => {}
            Some(Direction::Forward) => {
                let waited = dt.min(self.pending_delay);
                self.pending_delay -= waited;
                self.playhead = (self.playhead + dt - waited).min(self.duration);
                if self.playhead >= self.duration {
                    self.direction = None;
                }
            }
            Some(Direction::Reverse) => {
                self.playhead = (self.playhead - dt).max(0.0);
                if self.playhead <= 0.0 {
                    self.direction = None;
                }
            }
        }
        self.value()
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self) -> f64 {
        (self.playhead / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress())
    }

    /// Whether the playhead is still moving (or waiting out its delay).
    pub fn is_active(&self) -> bool {
        self.direction.is_some()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }
}
