//! Navigation link handling: external pages load normally, anchors scroll smoothly.

/// What clicking a nav link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    /// Load another page.
    Navigate(String),
    /// Smooth-scroll so the matching element's top aligns with the viewport top.
    ScrollTo(String),
    /// Nothing to do (no href, or the anchor target doesn't exist).
    Ignore,
}

impl NavAction {
    /// Decide what a click on `href` does. `target_exists` reports whether
    /// the page has an element matching an in-page selector.
    pub fn resolve(href: &str, target_exists: impl Fn(&str) -> bool) -> Self {
        let href = href.trim();
        if href.is_empty() {
            return NavAction::Ignore;
        }
        if href.contains(".html") {
            return NavAction::Navigate(href.to_string());
        }
        if target_exists(href) {
            NavAction::ScrollTo(href.to_string())
        } else {
            log::debug!("nav target {href:?} not found");
            NavAction::Ignore
        }
    }
}
