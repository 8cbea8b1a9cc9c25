//! Interactive behaviors for the LogicLens portfolio page.
//!
//! The page itself is static HTML. This crate is compiled to WebAssembly and
//! attaches seven independent behaviors to it once the document has loaded:
//! mobile navigation, the light/dark theme toggle, smooth anchor scrolling,
//! the header scroll effect, scroll reveal animations, active-section nav
//! highlighting, and form focus states.
//!
//! All decisions live in [`engine::PortfolioCore`], which turns page events into
//! [`effect::Effect`]s and never touches the browser. The `dom` module (behind
//! the `hydrate` feature) resolves elements, registers listeners and observers,
//! and applies those effects through `web-sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable event-to-effect engine holding the UI state |
//! | [`state`] | The in-memory UI state record |
//! | [`effect`] | Effect and target types applied by the browser host |
//! | [`config`] | Selectors and tuning constants, overridable from the page |
//! | [`store`] | Theme preference storage seam |
//! | [`nav`] | Mobile navigation open/closed state |
//! | [`theme`] | Theme resolution and toggle effects |
//! | [`scroll`] | Anchor resolution and scroll offset math |
//! | [`header`] | Frame-throttled header scroll effect |
//! | [`reveal`] | One-shot scroll reveal bookkeeping |
//! | [`highlight`] | Active-section nav link matching |
//! | [`form`] | Form focus-state effects |
//! | [`consts`] | Class names, attribute names, and other fixed strings |
//! | [`error`] | Binding, storage, and configuration errors |

pub mod config;
pub mod consts;
pub mod effect;
pub mod engine;
pub mod error;
pub mod form;
pub mod header;
pub mod highlight;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod state;
pub mod store;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod dom;
