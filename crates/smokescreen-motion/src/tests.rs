use smokescreen_core::constants::*;
use smokescreen_core::error::BackdropError;

use crate::ease::Ease;
use crate::glitch::LogoGlitch;
use crate::nav::NavAction;
use crate::reveal::{parse_count, CardReveal, StatCounter};
use crate::trigger::{ScrollTrigger, TriggerAction};
use crate::tween::{Direction, Tween};

const VIEWPORT_H: f64 = 1000.0;

/// Advance in 60 Hz steps for `secs` seconds.
fn run_for(mut f: impl FnMut(f64), secs: f64) {
    let steps = (secs * 60.0).round() as usize;
    for _ in 0..steps {
        f(NOMINAL_DT);
    }
}

// ---- Easing ----

#[test]
fn test_ease_endpoints() {
    for ease in [Ease::Linear, Ease::Power1Out] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(3.0), 1.0);
    }
    assert_eq!(Ease::Power1Out.apply(0.5), 0.75);
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
}

// ---- Tween ----

#[test]
fn test_tween_idle_until_played() {
    let mut tween = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
    assert_eq!(tween.advance(0.5), 0.0);
    assert!(!tween.is_active());
}

#[test]
fn test_tween_plays_to_end() {
    let mut tween = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
    tween.play();
    assert!((tween.advance(0.25) - 2.5).abs() < 1e-9);
    assert_eq!(tween.advance(5.0), 10.0);
    assert!(!tween.is_active());
}

#[test]
fn test_tween_delay_only_on_fresh_start() {
    let mut tween = Tween::new(0.0, 1.0, 1.0, Ease::Linear).with_delay(0.5);
    tween.play();
    assert_eq!(tween.advance(0.4), 0.0);
    assert!((tween.advance(0.2) - 0.1).abs() < 1e-9);

    tween.reverse();
    assert_eq!(tween.direction(), Some(Direction::Reverse));
    assert!((tween.advance(0.05) - 0.05).abs() < 1e-9);

    // Replaying from mid-flight skips the delay
    tween.play();
    assert!((tween.advance(0.1) - 0.15).abs() < 1e-9);
}

#[test]
fn test_tween_reverse_returns_to_start() {
    let mut tween = Tween::new(50.0, 0.0, 0.8, Ease::Power1Out);
    tween.play();
    tween.advance(1.0);
    assert_eq!(tween.value(), 0.0);
    tween.reverse();
    tween.advance(1.0);
    assert_eq!(tween.value(), 50.0);
    assert!(!tween.is_active());
}

// ---- Scroll trigger ----

#[test]
fn test_trigger_play_then_reverse() {
    let mut trigger = ScrollTrigger::default();
    assert_eq!(trigger.update(900.0, VIEWPORT_H), None);
    assert_eq!(trigger.update(800.0, VIEWPORT_H), Some(TriggerAction::Play));
    assert_eq!(trigger.update(100.0, VIEWPORT_H), None);
    assert_eq!(trigger.update(-500.0, VIEWPORT_H), None);
    assert_eq!(trigger.update(801.0, VIEWPORT_H), Some(TriggerAction::Reverse));
    assert!(!trigger.has_entered());
}

#[test]
fn test_trigger_fires_immediately_when_already_in_view() {
    let mut trigger = ScrollTrigger::default();
    assert_eq!(trigger.update(10.0, VIEWPORT_H), Some(TriggerAction::Play));
}

// ---- Card reveal ----

#[test]
fn test_card_starts_hidden_and_offset() {
    let card = CardReveal::new(0);
    let style = card.style();
    assert_eq!(style.opacity, 0.0);
    assert_eq!(style.translate_y, CARD_REVEAL_OFFSET_Y);
}

#[test]
fn test_card_reveal_completes() {
    let mut card = CardReveal::new(0);
    card.on_scroll(500.0, VIEWPORT_H);
    run_for(|dt| {
        card.advance(dt);
    }, CARD_REVEAL_DURATION + 0.1);
    let style = card.style();
    assert_eq!(style.opacity, 1.0);
    assert_eq!(style.translate_y, 0.0);
    assert!(!card.is_animating());
}

#[test]
fn test_card_stagger_by_index() {
    let mut first = CardReveal::new(0);
    let mut third = CardReveal::new(2);
    first.on_scroll(0.0, VIEWPORT_H);
    third.on_scroll(0.0, VIEWPORT_H);
    // Third card waits 0.2 s before moving
    run_for(|dt| {
        first.advance(dt);
        third.advance(dt);
    }, 0.15);
    assert!(first.style().opacity > 0.0);
    assert_eq!(third.style().opacity, 0.0);
}

#[test]
fn test_card_reverses_when_scrolled_back() {
    let mut card = CardReveal::new(0);
    card.on_scroll(0.0, VIEWPORT_H);
    run_for(|dt| {
        card.advance(dt);
    }, 1.0);
    card.on_scroll(VIEWPORT_H, VIEWPORT_H);
    run_for(|dt| {
        card.advance(dt);
    }, 1.0);
    assert_eq!(card.style().opacity, 0.0);
    assert_eq!(card.style().translate_y, CARD_REVEAL_OFFSET_Y);
}

// ---- Stat counter ----

#[test]
fn test_parse_count() {
    assert_eq!(parse_count("1200").unwrap(), 1200);
    assert_eq!(parse_count("  42 ").unwrap(), 42);
    assert_eq!(parse_count("1200+").unwrap(), 1200);
    assert_eq!(parse_count("-7").unwrap(), -7);
    assert!(matches!(parse_count("abc"), Err(BackdropError::InvalidCount(_))));
    assert!(matches!(parse_count(""), Err(BackdropError::InvalidCount(_))));
    assert!(matches!(parse_count("-"), Err(BackdropError::InvalidCount(_))));
}

#[test]
fn test_parse_count_hex_prefix() {
    assert_eq!(parse_count("0x10").unwrap(), 16);
    assert_eq!(parse_count("0XfF items").unwrap(), 255);
    assert_eq!(parse_count("-0x10").unwrap(), -16);
    assert_eq!(parse_count("0x1g").unwrap(), 1);
    assert_eq!(parse_count("0").unwrap(), 0);
    assert!(matches!(parse_count("0x"), Err(BackdropError::InvalidCount(_))));
    assert!(matches!(parse_count("0xz"), Err(BackdropError::InvalidCount(_))));
}

#[test]
fn test_parse_count_saturates_out_of_range() {
    let huge = "9".repeat(40);
    assert_eq!(parse_count(&huge).unwrap(), i64::MAX);
    assert_eq!(parse_count(&format!("-{huge}")).unwrap(), i64::MIN);
    assert_eq!(parse_count("9223372036854775807").unwrap(), i64::MAX);
    assert_eq!(parse_count("-9223372036854775808").unwrap(), i64::MIN);
    assert_eq!(parse_count("0xffffffffffffffffff").unwrap(), i64::MAX);
}

#[test]
fn test_counter_counts_up_in_whole_numbers() {
    let mut counter = StatCounter::from_attribute("500").unwrap();
    assert_eq!(counter.display(), 0);
    counter.on_scroll(100.0, VIEWPORT_H);

    let mut previous = 0;
    run_for(|dt| {
        let shown = counter.advance(dt);
        assert!(shown >= previous, "counter went backwards");
        assert!(shown <= 500);
        previous = shown;
    }, COUNTER_DURATION);
    assert_eq!(counter.display(), 500);
    assert_eq!(counter.target(), 500);
}

#[test]
fn test_counter_eases_out() {
    let mut counter = StatCounter::new(1000);
    counter.on_scroll(0.0, VIEWPORT_H);
    counter.advance(COUNTER_DURATION / 2.0);
    // power1.out is at 75% halfway through
    assert_eq!(counter.display(), 750);
}

// ---- Logo glitch ----

#[test]
fn test_glitch_at_rest_until_hovered() {
    let mut glitch = LogoGlitch::new(1);
    assert_eq!(glitch.advance(0.01), glam::DVec2::ZERO);
}

#[test]
fn test_glitch_stays_in_amplitude_and_returns_to_rest() {
    let mut glitch = LogoGlitch::new(3);
    glitch.hover();
    let target = glitch.target();
    assert!(target.x >= -GLITCH_AMPLITUDE && target.x < GLITCH_AMPLITUDE);
    assert!(target.y >= -GLITCH_AMPLITUDE && target.y < GLITCH_AMPLITUDE);

    let mut t = 0.0;
    while t < LogoGlitch::duration() - 0.01 {
        let offset = glitch.advance(0.01);
        assert!(offset.x.abs() <= target.x.abs() + 1e-9);
        assert!(offset.y.abs() <= target.y.abs() + 1e-9);
        t += 0.01;
    }
    let end = glitch.advance(0.05);
    assert_eq!(end, glam::DVec2::ZERO);
    assert!(!glitch.is_active());
}

#[test]
fn test_glitch_yoyo_reaches_target_then_heads_back() {
    let mut glitch = LogoGlitch::new(9);
    glitch.hover();
    let target = glitch.target();
    // Just before the end of the first half-cycle the offset is near the target
    let near_peak = glitch.advance(GLITCH_STEP_SECS * 0.999);
    assert!((near_peak - target).length() < 0.01);
    // Early in the second half-cycle it is moving back toward rest
    let returning = glitch.advance(GLITCH_STEP_SECS * 0.5);
    assert!(returning.length() < near_peak.length());
}

#[test]
fn test_glitch_duration() {
    assert!((LogoGlitch::duration() - 0.55).abs() < 1e-12);
}

// ---- Nav ----

#[test]
fn test_nav_external_page() {
    let action = NavAction::resolve("channels.html", |_| false);
    assert_eq!(action, NavAction::Navigate("channels.html".into()));
}

#[test]
fn test_nav_anchor_scrolls_when_present() {
    let action = NavAction::resolve("#stats", |sel| sel == "#stats");
    assert_eq!(action, NavAction::ScrollTo("#stats".into()));
}

#[test]
fn test_nav_missing_anchor_is_ignored() {
    assert_eq!(NavAction::resolve("#nowhere", |_| false), NavAction::Ignore);
    assert_eq!(NavAction::resolve("", |_| true), NavAction::Ignore);
}
