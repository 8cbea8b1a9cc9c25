//! Resolved page elements and effect application.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, Node, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::Config;
use crate::effect::{Effect, Target};
use crate::error::BindError;

/// Every element the behaviors touch, resolved once at startup.
pub(crate) struct Host {
    pub window: Window,
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub header: Option<HtmlElement>,
    pub mobile_toggle: Option<Element>,
    pub nav_list: Option<Element>,
    pub nav_links: Vec<Element>,
    pub theme_toggle: Option<Element>,
    pub theme_icon: Option<Element>,
    pub anchors: Vec<Element>,
    pub reveals: Vec<Element>,
    pub sections: Vec<Element>,
    pub fields: Vec<Element>,
}

impl Host {
    pub fn resolve(window: Window, document: Document, config: &Config) -> Self {
        let s = &config.selectors;
        let theme_toggle = document.get_element_by_id(&s.theme_toggle_id);
        let theme_icon = theme_toggle.as_ref().and_then(|toggle| match toggle.query_selector(&s.theme_icon) {
            Ok(icon) => icon,
            Err(err) => {
                log::debug!("invalid theme icon selector {:?}: {err:?}", s.theme_icon);
                None
            }
        });
        Self {
            body: document.body(),
            header: query_one(&document, &s.header).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()),
            mobile_toggle: query_one(&document, &s.mobile_toggle),
            nav_list: query_one(&document, &s.nav_list),
            nav_links: query_all(&document, &s.nav_link),
            theme_toggle,
            theme_icon,
            anchors: query_all(&document, &s.anchors),
            reveals: query_all(&document, &s.reveal_query()),
            sections: query_all(&document, &s.sections),
            fields: query_all(&document, &s.form_fields),
            window,
            document,
        }
    }

    /// The element behind `target`, if the page has one.
    pub fn element(&self, target: Target) -> Option<Element> {
        match target {
            Target::Body => self.body.clone().map(Element::from),
            Target::Header => self.header.clone().map(Element::from),
            Target::MobileToggle => self.mobile_toggle.clone(),
            Target::NavList => self.nav_list.clone(),
            Target::NavLink(index) => self.nav_links.get(index).cloned(),
            Target::ThemeToggle => self.theme_toggle.clone(),
            Target::ThemeIcon => self.theme_icon.clone(),
            Target::Reveal(index) => self.reveals.get(index).cloned(),
            Target::FieldParent(index) => self.fields.get(index).and_then(|field| field.parent_element()),
        }
    }

    /// Index of `element` in `list`, by node identity.
    pub fn position_of(list: &[Element], element: &Element) -> Option<usize> {
        let node: &Node = element.as_ref();
        list.iter().position(|candidate| candidate.is_same_node(Some(node)))
    }

    /// Current vertical scroll offset, or 0 when unavailable.
    pub fn scroll_y(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::debug!("scroll offset unavailable: {err:?}");
                0.0
            }
        }
    }

    /// First match for `selector`, treating invalid selectors as no match.
    pub fn query(&self, selector: &str) -> Option<Element> {
        query_one(&self.document, selector)
    }
}

/// Event-scoped handles some effects need.
#[derive(Default)]
pub(crate) struct EffectContext<'a> {
    pub event: Option<&'a Event>,
    pub observer: Option<&'a IntersectionObserver>,
}

/// Apply `effects` in order. A failing or targetless effect is skipped.
pub(crate) fn apply(host: &Rc<Host>, effects: Vec<Effect>, ctx: &EffectContext<'_>) {
    for effect in effects {
        if let Err(err) = apply_one(host, effect, ctx) {
            log::debug!("effect skipped: {err}");
        }
    }
}

fn apply_one(host: &Rc<Host>, effect: Effect, ctx: &EffectContext<'_>) -> Result<(), BindError> {
    match effect {
        Effect::AddClass(target, class) => {
            if let Some(el) = host.element(target) {
                el.class_list().add_1(class)?;
            }
        }
        Effect::RemoveClass(target, class) => {
            if let Some(el) = host.element(target) {
                el.class_list().remove_1(class)?;
            }
        }
        Effect::SetAttribute { target, name, value } => {
            if let Some(el) = host.element(target) {
                el.set_attribute(name, &value)?;
            }
        }
        Effect::SetStyle { target, property, value } => {
            if let Some(el) = host.element(target).and_then(|el| el.dyn_ref::<HtmlElement>().cloned()) {
                el.style().set_property(property, &value)?;
            }
        }
        Effect::PreventDefault => {
            if let Some(event) = ctx.event {
                event.prevent_default();
            }
        }
        Effect::ScrollTo { top } => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            host.window.scroll_to_with_scroll_to_options(&options);
        }
        Effect::Unobserve(target) => {
            if let (Some(observer), Some(el)) = (ctx.observer, host.element(target)) {
                observer.unobserve(&el);
            }
        }
        Effect::After { delay_ms, effect } => {
            let host = Rc::clone(host);
            Timeout::new(delay_ms, move || apply(&host, vec![*effect], &EffectContext::default())).forget();
        }
    }
    Ok(())
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("invalid selector {selector:?}: {err:?}");
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("invalid selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length()).filter_map(|i| list.get(i)).filter_map(|node| node.dyn_ref::<Element>().cloned()).collect()
}
