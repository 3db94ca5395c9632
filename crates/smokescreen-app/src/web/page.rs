//! Page effects bound to DOM elements: card reveals, stat counters, the
//! logo glitch and nav links.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use smokescreen_motion::glitch::LogoGlitch;
use smokescreen_motion::nav::NavAction;
use smokescreen_motion::reveal::{CardReveal, StatCounter};

/// Every animated element on the page with its state machine.
pub struct PageEffects {
    cards: Vec<(HtmlElement, CardReveal)>,
    counters: Vec<(HtmlElement, StatCounter)>,
    logo: Option<(HtmlElement, LogoGlitch)>,
}

impl PageEffects {
    /// Find the animated elements. Counters with an unreadable
    /// `data-count` are left alone.
    pub fn bind(document: &Document, seed: u64) -> Result<Self, JsValue> {
        let cards: Vec<(HtmlElement, CardReveal)> = select_all(document, ".channel-card")?
            .into_iter()
            .enumerate()
            .map(|(index, el)| (el, CardReveal::new(index)))
            .collect();
        // Cards stay hidden until their trigger fires.
        for (el, card) in &cards {
            let style = card.style();
            set_style(el, "opacity", &style.opacity.to_string());
            set_style(el, "transform", &format!("translateY({}px)", style.translate_y));
        }

        let mut counters = Vec::new();
        for el in select_all(document, ".stat-number")? {
            let raw = el.get_attribute("data-count").unwrap_or_default();
            match StatCounter::from_attribute(&raw) {
                Ok(counter) => counters.push((el, counter)),
                Err(e) => log::warn!("skipping stat counter: {e}"),
            }
        }

        let logo = document
            .query_selector(".logo")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| (el, LogoGlitch::new(seed)));

        Ok(Self {
            cards,
            counters,
            logo,
        })
    }

    pub fn hover_logo(&mut self) {
        if let Some((_, glitch)) = self.logo.as_mut() {
            glitch.hover();
        }
    }

    /// Check scroll positions, advance every animation by `dt` seconds and write styles.
    pub fn frame(&mut self, dt: f64) {
        let viewport_height = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);

        for (el, card) in &mut self.cards {
            card.on_scroll(el.get_bounding_client_rect().top(), viewport_height);
            if !card.is_animating() {
                continue;
            }
            let style = card.advance(dt);
            set_style(el, "opacity", &style.opacity.to_string());
            set_style(el, "transform", &format!("translateY({}px)", style.translate_y));
        }

        for (el, counter) in &mut self.counters {
            counter.on_scroll(el.get_bounding_client_rect().top(), viewport_height);
            if !counter.is_animating() {
                continue;
            }
            let shown = counter.advance(dt);
            el.set_text_content(Some(&shown.to_string()));
        }

        if let Some((el, glitch)) = self.logo.as_mut() {
            if glitch.is_active() {
                let offset = glitch.advance(dt);
                set_style(el, "transform", &format!("translate({}px, {}px)", offset.x, offset.y));
            }
        }
    }
}

pub fn install_logo_listener(document: &Document, page: Rc<RefCell<PageEffects>>) -> Result<(), JsValue> {
    let Some(logo) = document.query_selector(".logo")? else {
        return Ok(());
    };
    let on_enter = Closure::<dyn FnMut()>::new(move || page.borrow_mut().hover_logo());
    logo.add_event_listener_with_callback("mouseenter", on_enter.as_ref().unchecked_ref())?;
    on_enter.forget();
    Ok(())
}

pub fn install_nav_listeners(document: &Document) -> Result<(), JsValue> {
    for link in select_all(document, ".nav-links a")? {
        let doc = document.clone();
        let href = link.get_attribute("href").unwrap_or_default();
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            event.prevent_default();
            let action = NavAction::resolve(&href, |selector| {
                matches!(doc.query_selector(selector), Ok(Some(_)))
            });
            if let Err(e) = follow(&doc, action) {
                log::warn!("navigation failed: {e:?}");
            }
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

fn follow(document: &Document, action: NavAction) -> Result<(), JsValue> {
    match action {
        NavAction::Navigate(href) => {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            window.location().set_href(&href)
        }
        NavAction::ScrollTo(selector) => {
            if let Some(target) = document.query_selector(&selector)? {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
            Ok(())
        }
        NavAction::Ignore => Ok(()),
    }
}

fn select_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("could not set {property}: {e:?}");
    }
}
