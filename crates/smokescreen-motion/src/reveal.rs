//! Scroll-driven reveals: channel cards sliding in and stat numbers counting up.

use smokescreen_core::constants::*;
use smokescreen_core::error::{BackdropError, Result};

use crate::ease::Ease;
use crate::trigger::{ScrollTrigger, TriggerAction};
use crate::tween::Tween;

/// Style to apply to a card element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub opacity: f64,
    /// Vertical offset from the resting position (px).
    pub translate_y: f64,
}

/// Fades and slides a card up from below once it scrolls into view.
/// Cards later in the list start slightly later.
#[derive(Debug, Clone)]
pub struct CardReveal {
    trigger: ScrollTrigger,
    opacity: Tween,
    offset: Tween,
}

impl CardReveal {
    pub fn new(index: usize) -> Self {
        let delay = index as f64 * CARD_REVEAL_STAGGER;
        Self {
            trigger: ScrollTrigger::default(),
            opacity: Tween::new(0.0, 1.0, CARD_REVEAL_DURATION, Ease::Power1Out).with_delay(delay),
            offset: Tween::new(CARD_REVEAL_OFFSET_Y, 0.0, CARD_REVEAL_DURATION, Ease::Power1Out)
                .with_delay(delay),
        }
    }

    pub fn on_scroll(&mut self, element_top: f64, viewport_height: f64) {
        match self.trigger.update(element_top, viewport_height) {
            Some(TriggerAction::Play) => {
                self.opacity.play();
                self.offset.play();
            }
            Some(TriggerAction::Reverse) => {
                self.opacity.reverse();
                self.offset.reverse();
            }
            None => {}
        }
    }

    pub fn advance(&mut self, dt: f64) -> CardStyle {
        CardStyle {
            opacity: self.opacity.advance(dt),
            translate_y: self.offset.advance(dt),
        }
    }

    pub fn style(&self) -> CardStyle {
        CardStyle {
            opacity: self.opacity.value(),
            translate_y: self.offset.value(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.opacity.is_active() || self.offset.is_active()
    }
}

/// Counts a stat number up from zero to its target, snapped to whole numbers.
#[derive(Debug, Clone)]
pub struct StatCounter {
    target: i64,
    trigger: ScrollTrigger,
    tween: Tween,
}

impl StatCounter {
    pub fn new(target: i64) -> Self {
        Self {
            target,
            trigger: ScrollTrigger::default(),
            tween: Tween::new(0.0, target as f64, COUNTER_DURATION, Ease::Power1Out),
        }
    }

    /// Build from a `data-count` attribute value.
    pub fn from_attribute(raw: &str) -> Result<Self> {
        parse_count(raw).map(Self::new)
    }

    pub fn on_scroll(&mut self, element_top: f64, viewport_height: f64) {
        match self.trigger.update(element_top, viewport_height) {
            Some(TriggerAction::Play) => self.tween.play(),
            Some(TriggerAction::Reverse) => self.tween.reverse(),
            None => {}
        }
    }

    /// Advance and return the number to display.
    pub fn advance(&mut self, dt: f64) -> i64 {
        self.tween.advance(dt);
        self.display()
    }

    pub fn display(&self) -> i64 {
        self.tween.value().round() as i64
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_active()
    }
}

/// Parse a count the lenient way HTML attributes are usually read: skip
/// leading whitespace, accept an optional sign and an optional `0x`/`0X`
/// hex prefix, then take the leading digits and ignore the rest
/// ("1200+" → 1200, "0x10" → 16). Values beyond `i64` saturate.
pub fn parse_count(raw: &str) -> Result<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return Err(BackdropError::InvalidCount(raw.to_string()));
    }
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0u64, |acc, d| acc.saturating_mul(radix as u64).saturating_add(d as u64));
    Ok(if negative {
        0i64.checked_sub_unsigned(magnitude).unwrap_or(i64::MIN)
    } else {
        i64::try_from(magnitude).unwrap_or(i64::MAX)
    })
}
