//! Frame schedulers: what decides when the next display refresh happens.
//!
//! The browser binding calls `FrameDriver::frame` from its own refresh
//! callback. Everything else (tests, the headless runner) pulls events
//! from a `FrameScheduler`, so no real display timer is involved.

use std::collections::VecDeque;

use smokescreen_core::types::Viewport;

/// Something the hosting environment delivers to the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// A display refresh: run one frame.
    Refresh,
    /// The viewport changed size.
    Resize(Viewport),
}

/// Source of frame-loop events. `None` ends the loop.
pub trait FrameScheduler {
    fn next_event(&mut self) -> Option<FrameEvent>;
}

/// Delivers exactly `n` refreshes.
#[derive(Debug, Clone)]
pub struct BoundedFrames {
    remaining: u64,
}

impl BoundedFrames {
    pub fn new(frames: u64) -> Self {
        Self { remaining: frames }
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl FrameScheduler for BoundedFrames {
    fn next_event(&mut self) -> Option<FrameEvent> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(FrameEvent::Refresh)
    }
}

/// Replays a fixed script of refreshes and resizes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrames {
    events: VecDeque<FrameEvent>,
}

impl ScriptedFrames {
    pub fn new(events: impl IntoIterator<Item = FrameEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Append `n` refreshes.
    pub fn refreshes(mut self, n: usize) -> Self {
        self.events.extend(std::iter::repeat(FrameEvent::Refresh).take(n));
        self
    }

    /// Append a resize.
    pub fn resize(mut self, viewport: Viewport) -> Self {
        self.events.push_back(FrameEvent::Resize(viewport));
        self
    }
}

impl FrameScheduler for ScriptedFrames {
    fn next_event(&mut self) -> Option<FrameEvent> {
        self.events.pop_front()
    }
}
