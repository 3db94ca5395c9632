//! Browser binding.
//!
//! Binds the smoke canvas through `CanvasSurface`, drives the frame driver
//! from `requestAnimationFrame`, resizes on window `resize`, and wires the
//! page effects to their elements.

pub mod canvas;
pub mod page;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use smokescreen_core::config::BackdropConfig;
use smokescreen_core::constants::NOMINAL_DT;
use smokescreen_core::error::BackdropError;
use smokescreen_core::types::Viewport;
use smokescreen_sim::FrameDriver;

use canvas::CanvasSurface;
use page::PageEffects;

const SMOKE_CANVAS_ID: &str = "smoke-canvas";

type SharedDriver = Rc<RefCell<FrameDriver<CanvasSurface>>>;
type SharedPage = Rc<RefCell<PageEffects>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Entry point for web builds.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas = document
        .get_element_by_id(SMOKE_CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("smoke canvas not found"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str("smoke canvas is not a canvas element"))?;

    let config = BackdropConfig {
        seed: js_sys::Date::now() as u64,
        viewport: window_viewport(&window)?,
        ..Default::default()
    };

    let surface = CanvasSurface::new(canvas).map_err(to_js)?;
    let driver: SharedDriver = Rc::new(RefCell::new(
        FrameDriver::new(&config, surface).map_err(to_js)?,
    ));
    let page: SharedPage = Rc::new(RefCell::new(PageEffects::bind(&document, config.seed)?));

    install_resize_listener(&window, driver.clone())?;
    page::install_logo_listener(&document, page.clone())?;
    page::install_nav_listeners(&document)?;
    start_frame_loop(driver, page)?;

    log::info!("smokescreen started");
    Ok(())
}

pub(crate) fn to_js(err: BackdropError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub(crate) fn js_error(value: JsValue) -> BackdropError {
    BackdropError::Surface(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

/// Inner window size in CSS pixels.
fn window_viewport(window: &web_sys::Window) -> Result<Viewport, JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width as u32, height as u32).at_least_one())
}

fn install_resize_listener(window: &web_sys::Window, driver: SharedDriver) -> Result<(), JsValue> {
    let target = window.clone();
    let on_resize = Closure::<dyn FnMut()>::new(move || match window_viewport(&target) {
        Ok(viewport) => {
            log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
            driver.borrow_mut().resize(viewport);
        }
        Err(e) => log::warn!("could not read viewport size: {e:?}"),
    });
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

fn start_frame_loop(driver: SharedDriver, page: SharedPage) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let reschedule = callback.clone();
    let mut last_ms: Option<f64> = None;

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        let dt = last_ms.map_or(NOMINAL_DT, |prev| ((now_ms - prev) / 1000.0).max(0.0));
        last_ms = Some(now_ms);

        if let Err(e) = driver.borrow_mut().frame() {
            log::warn!("smoke frame failed: {e}");
        }
        page.borrow_mut().frame(dt);

        if let Some(next) = reschedule.borrow().as_ref() {
            if let Err(e) = request_animation_frame(next) {
                log::error!("could not schedule next frame: {e:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(first) = callback.borrow().as_ref() {
        request_animation_frame(first)?;
    }
    Ok(())
}

fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .request_animation_frame(f.as_ref().unchecked_ref())
}
