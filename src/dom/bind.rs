//! Listener and observer registration for each behavior.
//!
//! Each binder returns early with [`BindError::MissingElement`] when the page
//! lacks what it needs. Listener closures live as long as the page.

use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node,
};

use super::{EffectContext, Host, LocalStorageStore, SharedCore, apply};
use crate::consts::DARK_SCHEME_QUERY;
use crate::effect::Effect;
use crate::engine::PortfolioCore;
use crate::error::BindError;
use crate::form::FocusChange;
use crate::reveal;
use crate::scroll::{self, ScrollMetrics};

// =============================================================
// Mobile navigation
// =============================================================

pub(super) fn mobile_navigation(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    let toggle = host.mobile_toggle.clone().ok_or(BindError::MissingElement("mobile toggle"))?;
    let nav_list = host.nav_list.clone().ok_or(BindError::MissingElement("nav list"))?;

    listen(&toggle, "click", handler(host, core, |core, _| core.on_menu_toggle()))?;

    for link in &host.nav_links {
        listen(link, "click", handler(host, core, |core, _| core.on_nav_link_click()))?;
    }

    listen(
        &host.document,
        "click",
        handler(host, core, move |core, event| {
            let target = event.target();
            let inside_menu = target
                .as_ref()
                .and_then(|t| t.dyn_ref::<Node>())
                .is_some_and(|node| toggle.contains(Some(node)) || nav_list.contains(Some(node)));
            core.on_document_click(inside_menu)
        }),
    )
}

// =============================================================
// Theme toggle
// =============================================================

pub(super) fn theme_toggle(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    let toggle = host.theme_toggle.clone().ok_or(BindError::MissingElement("theme toggle"))?;

    let prefers_dark = prefers_dark_scheme(host);
    let effects = core.borrow_mut().init_theme(prefers_dark);
    apply(host, effects, &EffectContext::default());

    listen(&toggle, "click", handler(host, core, |core, _| core.on_theme_click()))
}

fn prefers_dark_scheme(host: &Host) -> bool {
    match host.window.match_media(DARK_SCHEME_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::debug!("matchMedia unavailable: {err:?}");
            false
        }
    }
}

// =============================================================
// Smooth scrolling
// =============================================================

pub(super) fn smooth_scrolling(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    let header_height = host.header.as_ref().map(|header| f64::from(header.offset_height()));
    core.borrow_mut().set_header_height(header_height);

    for anchor in &host.anchors {
        let nav_index = Host::position_of(&host.nav_links, anchor);
        let anchor_el = anchor.clone();
        let host_cb = Rc::clone(host);
        let core_cb = Rc::clone(core);
        listen(anchor, "click", move |event: Event| {
            let href = anchor_el.get_attribute("href").unwrap_or_default();
            let Some(selector) = scroll::anchor_selector(&href) else {
                return;
            };
            let metrics = host_cb.query(selector).map(|target| ScrollMetrics {
                element_top: target.get_bounding_client_rect().top(),
                scroll_y: host_cb.scroll_y(),
            });
            let effects = core_cb.borrow_mut().on_anchor_click(metrics, nav_index);
            apply(&host_cb, effects, &EffectContext { event: Some(&event), ..EffectContext::default() });
        })?;
    }
    Ok(())
}

// =============================================================
// Header effects
// =============================================================

pub(super) fn header_effects(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    if host.header.is_none() {
        return Err(BindError::MissingElement("header"));
    }

    let frame = {
        let host = Rc::clone(host);
        let core = Rc::clone(core);
        Rc::new(Closure::<dyn FnMut(f64)>::new(move |_ts: f64| update_header(&host, &core)))
    };

    let host_cb = Rc::clone(host);
    let core_cb = Rc::clone(core);
    let on_scroll = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let needs_frame = core_cb.borrow_mut().on_scroll();
        if !needs_frame {
            return;
        }
        let frame_fn: &js_sys::Function = AsRef::<JsValue>::as_ref(&*frame).unchecked_ref();
        if let Err(err) = host_cb.window.request_animation_frame(frame_fn) {
            log::debug!("requestAnimationFrame failed, updating header inline: {err:?}");
            update_header(&host_cb, &core_cb);
        }
    });

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    host.window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    on_scroll.forget();
    Ok(())
}

fn update_header(host: &Rc<Host>, core: &SharedCore) {
    let scroll_y = host.scroll_y();
    let effects = core.borrow_mut().on_frame(scroll_y);
    apply(host, effects, &EffectContext::default());
}

// =============================================================
// Scroll reveal
// =============================================================

pub(super) fn scroll_reveal(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    let config = core.borrow().config.reveal.clone();

    let host_cb = Rc::clone(host);
    let core_cb = Rc::clone(core);
    let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let Some(index) = Host::position_of(&host_cb.reveals, &entry.target()) else {
                    continue;
                };
                let effects = core_cb.borrow_mut().on_reveal_intersection(index, entry.is_intersecting());
                apply(&host_cb, effects, &EffectContext { observer: Some(&observer), ..EffectContext::default() });
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
    on_entries.forget();

    let effects = core.borrow_mut().register_reveals(host.reveals.len());
    apply(host, effects, &EffectContext::default());
    for element in &host.reveals {
        observer.observe(element);
    }

    inject_stylesheet(host, &reveal::revealed_stylesheet())
}

fn inject_stylesheet(host: &Host, css: &str) -> Result<(), BindError> {
    let head = host.document.head().ok_or(BindError::MissingElement("document head"))?;
    let style = host.document.create_element("style")?;
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

// =============================================================
// Active section highlight
// =============================================================

pub(super) fn active_section(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    let root_margin = core.borrow().config.section_root_margin.clone();

    let host_cb = Rc::clone(host);
    let core_cb = Rc::clone(core);
    let on_entries = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let effects = core_cb.borrow_mut().on_section_visible(&entry.target().id());
                apply(&host_cb, effects, &EffectContext::default());
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.0));
    init.set_root_margin(&root_margin);
    let observer = IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &init)?;
    on_entries.forget();

    for section in &host.sections {
        observer.observe(section);
    }
    Ok(())
}

// =============================================================
// Form focus states
// =============================================================

pub(super) fn form_focus(host: &Rc<Host>, core: &SharedCore) -> Result<(), BindError> {
    for (index, field) in host.fields.iter().enumerate() {
        listen(field, "focus", handler(host, core, move |core, _| core.on_field_focus(index, FocusChange::Focus)))?;
        listen(field, "blur", handler(host, core, move |core, _| core.on_field_focus(index, FocusChange::Blur)))?;
    }
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Register `callback` for `kind` on `target` for the page lifetime.
fn listen<F>(target: &EventTarget, kind: &str, callback: F) -> Result<(), BindError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(callback);
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Event callback that runs `step` against the core and applies its effects
/// with the event as context.
fn handler<F>(host: &Rc<Host>, core: &SharedCore, mut step: F) -> impl FnMut(Event) + 'static
where
    F: FnMut(&mut PortfolioCore<LocalStorageStore>, &Event) -> Vec<Effect> + 'static,
{
    let host = Rc::clone(host);
    let core = Rc::clone(core);
    move |event: Event| {
        let effects = step(&mut *core.borrow_mut(), &event);
        apply(&host, effects, &EffectContext { event: Some(&event), ..EffectContext::default() });
    }
}
