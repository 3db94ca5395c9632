//! Scroll trigger with "play none none reverse" toggle actions.

use smokescreen_core::constants::SCROLL_TRIGGER_LINE;

/// What a trigger asks its animation to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    /// Element top scrolled above the trigger line.
    Play,
    /// Element top scrolled back below the trigger line.
    Reverse,
}

/// Fires when an element's top crosses a line at a fixed fraction of the viewport height.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrigger {
    line: f64,
    entered: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(SCROLL_TRIGGER_LINE)
    }
}

impl ScrollTrigger {
    pub fn new(line: f64) -> Self {
        Self {
            line,
            entered: false,
        }
    }

    /// Feed the element's top edge (px from the viewport top) after a scroll or layout change.
    pub fn update(&mut self, element_top: f64, viewport_height: f64) -> Option<TriggerAction> {
        let past_line = element_top <= viewport_height * self.line;
        match (self.entered, past_line) {
            (false, true) => {
                self.entered = true;
                Some(TriggerAction::Play)
            }
            (true, false) => {
                self.entered = false;
                Some(TriggerAction::Reverse)
            }
            _ => None,
        }
    }

    pub fn has_entered(&self) -> bool {
        self.entered
    }
}
