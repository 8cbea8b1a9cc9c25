//! Browser entry point.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wasm start function waits for the document, resolves every element
//! once, and binds the seven behaviors independently. A behavior whose
//! elements are missing is skipped with a debug log; the others still bind.
//!
//! The page is bound once. The automatic start yields one task after the
//! document is ready, so a host that calls `start_with_config` right after
//! the module initializes binds first and the automatic pass is skipped.

mod bind;
mod host;
mod storage;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document};

use crate::config::Config;
use crate::consts::{BANNER_READY, BANNER_READY_STYLE, BANNER_TITLE, BANNER_TITLE_STYLE, CONFIG_ELEMENT_ID};
use crate::engine::PortfolioCore;
use crate::error::BindError;

pub(crate) use host::{EffectContext, Host, apply};
pub(crate) use storage::LocalStorageStore;

pub(crate) type SharedCore = Rc<RefCell<PortfolioCore<LocalStorageStore>>>;

thread_local! {
    static BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Install logging and bind the page with its embedded configuration once
/// the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    if let Err(err) = when_loaded(|| { Timeout::new(0, || initialize(None)).forget(); }) {
        log::warn!("portfolio behaviors not attached: {err}");
    }
}

/// Bind the page with configuration supplied by the embedding host.
///
/// Malformed or out-of-range JSON is logged and replaced with defaults.
#[wasm_bindgen]
pub fn start_with_config(json: &str) {
    let config = Config::from_json_or_default(json, "start_with_config");
    if let Err(err) = when_loaded(move || initialize(Some(config))) {
        log::warn!("portfolio behaviors not attached: {err}");
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("console logger not installed: {err}")));
    }
}

/// Run `init` now if the document has loaded, otherwise on `DOMContentLoaded`.
fn when_loaded(init: impl FnOnce() + 'static) -> Result<(), BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let cb = Closure::<dyn FnMut()>::once(init);
    document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.as_ref().unchecked_ref(),
        &options,
    )?;
    cb.forget();
    Ok(())
}

/// Bind every behavior, using `config` or else the configuration embedded in
/// the page. Later calls are ignored.
fn initialize(config: Option<Config>) {
    if BOUND.with(|bound| bound.replace(true)) {
        log::debug!("portfolio behaviors already bound");
        return;
    }
    let Some(window) = web_sys::window() else {
        log::warn!("portfolio behaviors not attached: {}", BindError::NoWindow);
        return;
    };
    let Some(document) = window.document() else {
        log::warn!("portfolio behaviors not attached: {}", BindError::NoDocument);
        return;
    };
    let config = config.unwrap_or_else(|| load_config(&document));
    let host = Rc::new(Host::resolve(window, document, &config));

    let store = LocalStorageStore::from_window(&host.window);
    let nav_hrefs = host.nav_links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect();
    let core: SharedCore = Rc::new(RefCell::new(PortfolioCore::new(config, store, nav_hrefs)));

    report("mobile navigation", bind::mobile_navigation(&host, &core));
    report("theme toggle", bind::theme_toggle(&host, &core));
    report("smooth scrolling", bind::smooth_scrolling(&host, &core));
    report("header effects", bind::header_effects(&host, &core));
    report("scroll reveal", bind::scroll_reveal(&host, &core));
    report("active section highlight", bind::active_section(&host, &core));
    report("form focus states", bind::form_focus(&host, &core));

    banner();
}

fn report(behavior: &str, result: Result<(), BindError>) {
    match result {
        Ok(()) => log::debug!("{behavior}: bound"),
        Err(err) if err.is_missing_element() => log::debug!("{behavior}: skipped ({err})"),
        Err(err) => log::warn!("{behavior}: not bound ({err})"),
    }
}

/// Configuration embedded in the page, or defaults.
fn load_config(document: &Document) -> Config {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return Config::default();
    };
    Config::from_json_or_default(&raw, &format!("#{CONFIG_ELEMENT_ID}"))
}

fn banner() {
    web_sys::console::log_2(&JsValue::from_str(BANNER_TITLE), &JsValue::from_str(BANNER_TITLE_STYLE));
    web_sys::console::log_2(&JsValue::from_str(BANNER_READY), &JsValue::from_str(BANNER_READY_STYLE));
}
