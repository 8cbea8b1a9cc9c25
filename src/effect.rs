//! Effects returned by the engine for the browser host to apply.

/// A page element an effect applies to.
///
/// Indexed targets refer to the element lists resolved once at startup, in
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Body,
    Header,
    MobileToggle,
    NavList,
    NavLink(usize),
    ThemeToggle,
    ThemeIcon,
    Reveal(usize),
    /// The parent element of the form field at this index.
    FieldParent(usize),
}

/// A single DOM mutation or browser request.
///
/// Effects for a missing target are skipped by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    AddClass(Target, &'static str),
    RemoveClass(Target, &'static str),
    SetAttribute { target: Target, name: &'static str, value: String },
    /// Set an inline style property. An empty value clears it.
    SetStyle { target: Target, property: &'static str, value: String },
    /// Cancel the browser's default action for the current event.
    PreventDefault,
    /// Smooth-scroll the window to an absolute vertical offset.
    ScrollTo { top: f64 },
    /// Stop observing a reveal element.
    Unobserve(Target),
    /// Apply `effect` once after `delay_ms`. Not cancellable.
    After { delay_ms: u32, effect: Box<Effect> },
}

impl Effect {
    /// Add or remove `class` on `target` depending on `on`.
    #[must_use]
    pub fn class(target: Target, class: &'static str, on: bool) -> Self {
        if on { Self::AddClass(target, class) } else { Self::RemoveClass(target, class) }
    }

    #[must_use]
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    #[must_use]
    pub fn attribute(target: Target, name: &'static str, value: impl Into<String>) -> Self {
        Self::SetAttribute { target, name, value: value.into() }
    }
}
