//! Event-to-effect engine for the page behaviors.
//!
//! `PortfolioCore` owns the UI state and turns each page event into a list of
//! [`Effect`]s. It has no browser dependencies, so every behavior can be
//! exercised natively; the `dom` host only translates events in and effects
//! out.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::Config;
use crate::effect::Effect;
use crate::form::{self, FocusChange};
use crate::header::HeaderEffect;
use crate::highlight;
use crate::reveal::RevealTracker;
use crate::scroll::{self, ScrollMetrics};
use crate::state::UiState;
use crate::store::PreferenceStore;
use crate::theme::{self, Theme};

pub struct PortfolioCore<S> {
    pub config: Config,
    pub ui: UiState,
    store: S,
    /// `href` of each nav link, in document order.
    nav_hrefs: Vec<String>,
    header: HeaderEffect,
    reveal: RevealTracker,
    header_height: f64,
}

impl<S: PreferenceStore> PortfolioCore<S> {
    #[must_use]
    pub fn new(config: Config, store: S, nav_hrefs: Vec<String>) -> Self {
        let header_height = config.fallback_header_height_px;
        Self {
            config,
            ui: UiState::default(),
            store,
            nav_hrefs,
            header: HeaderEffect::default(),
            reveal: RevealTracker::default(),
            header_height,
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    // --- Mobile navigation ---

    /// Hamburger clicked.
    pub fn on_menu_toggle(&mut self) -> Vec<Effect> {
        self.ui.nav.toggle()
    }

    /// A nav link was clicked; the menu closes.
    pub fn on_nav_link_click(&mut self) -> Vec<Effect> {
        self.ui.nav.close()
    }

    /// A click reached the document. `inside_menu` is true when its target is
    /// within the hamburger or the nav list.
    pub fn on_document_click(&mut self, inside_menu: bool) -> Vec<Effect> {
        if inside_menu {
            return Vec::new();
        }
        self.ui.nav.close()
    }

    // --- Theme ---

    /// Resolve and display the starting theme. Nothing is persisted.
    ///
    /// The page markup is dark by default, so only a light start produces
    /// effects.
    pub fn init_theme(&mut self, prefers_dark: bool) -> Vec<Effect> {
        let stored = self.store.get(&self.config.storage_key);
        let theme = theme::resolve_initial(stored.as_deref(), prefers_dark);
        self.ui.theme = theme;
        log::debug!("initial theme {} (stored: {stored:?}, prefers dark: {prefers_dark})", theme.as_str());
        if theme.is_light() { theme::display_effects(Theme::Light) } else { Vec::new() }
    }

    /// Theme toggle clicked: flip, display, persist, and play the press animation.
    pub fn on_theme_click(&mut self) -> Vec<Effect> {
        let next = self.ui.theme.toggled();
        self.ui.theme = next;
        if let Err(err) = self.store.set(&self.config.storage_key, next.as_str()) {
            log::debug!("theme preference not saved: {err}");
        }
        let mut effects = theme::display_effects(next);
        effects.extend(theme::press_effects(self.config.press_scale, self.config.press_duration_ms));
        effects
    }

    // --- Smooth scrolling ---

    /// Record the rendered header height, or fall back when there is no header.
    pub fn set_header_height(&mut self, height: Option<f64>) {
        self.header_height = height.unwrap_or(self.config.fallback_header_height_px);
    }

    #[must_use]
    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    /// An in-page anchor was clicked.
    ///
    /// `target` is `None` when the anchor's selector matched nothing, in which
    /// case the click is left alone. `nav_index` is set when the anchor is
    /// itself a nav link.
    pub fn on_anchor_click(&mut self, target: Option<ScrollMetrics>, nav_index: Option<usize>) -> Vec<Effect> {
        let Some(metrics) = target else {
            return Vec::new();
        };
        let top = scroll::target_offset(metrics, self.header_height, self.config.scroll_correction_px);
        let mut effects = vec![Effect::PreventDefault, Effect::ScrollTo { top }];
        self.ui.active_links = nav_index.into_iter().collect();
        effects.extend(highlight::activate(self.nav_hrefs.len(), &self.ui.active_links));
        effects
    }

    // --- Header ---

    /// Window scrolled. Returns `true` when an animation frame must be requested.
    pub fn on_scroll(&mut self) -> bool {
        self.header.on_scroll()
    }

    /// Animation frame fired after a scroll.
    pub fn on_frame(&mut self, scroll_y: f64) -> Vec<Effect> {
        let effects = self.header.on_frame(scroll_y, self.config.scroll_threshold_px);
        self.ui.header_scrolled = self.header.scrolled();
        effects
    }

    // --- Scroll reveal ---

    /// Start tracking `count` reveal elements and hide them.
    pub fn register_reveals(&mut self, count: usize) -> Vec<Effect> {
        self.reveal.register(count, &self.config.reveal)
    }

    pub fn on_reveal_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        self.reveal.on_intersection(index, is_intersecting)
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_revealed(index)
    }

    // --- Active section ---

    /// Section `id` entered the trigger band. Every call re-highlights, so the
    /// last call in a batch wins.
    pub fn on_section_visible(&mut self, id: &str) -> Vec<Effect> {
        self.ui.active_links = highlight::links_for_section(&self.nav_hrefs, id);
        highlight::activate(self.nav_hrefs.len(), &self.ui.active_links)
    }

    // --- Form focus ---

    #[allow(clippy::unused_self)]
    pub fn on_field_focus(&self, index: usize, change: FocusChange) -> Vec<Effect> {
        form::focus_effects(index, change)
    }
}
