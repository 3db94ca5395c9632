//! Page motion effects for smokescreen.
//!
//! Scroll-triggered card reveals, counting stat numbers, the logo hover
//! glitch and in-page navigation, each as a small state machine advanced
//! with explicit time deltas. No DOM access lives here; the browser
//! binding reads element geometry in and writes styles out.

pub mod ease;
pub mod glitch;
pub mod nav;
pub mod reveal;
pub mod trigger;
pub mod tween;

pub use smokescreen_core as core;

#[cfg(test)]
mod tests;
