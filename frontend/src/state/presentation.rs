//! Cross-cutting presentation flags: language and view mode.
//!
//! One [`Presentation`] value is provided at the app root and read by many
//! leaves; every change goes through its setters so the flags never update
//! partially. None of it affects form or order semantics.

use crate::config::EMBEDDED_VIEWPORT;
use crate::i18n::Locale;

/// Direct rendering or a simulated phone frame around the same content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Web,
    Mobile,
}

impl ViewMode {
    pub const ALL: [ViewMode; 2] = [ViewMode::Web, ViewMode::Mobile];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Presentation {
    locale: Locale,
    view_mode: ViewMode,
    /// Rendered inside a mobile preview already (`?viewport=mobile`).
    embedded: bool,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Mode to render with. Embedded renders are always direct.
    pub fn view_mode(&self) -> ViewMode {
        if self.embedded {
            ViewMode::Web
        } else {
            self.view_mode
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Whether the header should offer the web/mobile switch.
    pub fn can_switch_view_mode(&self) -> bool {
        !self.embedded
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggled();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Applies the `viewport` query parameter of the current route.
    pub fn apply_viewport_param(&mut self, viewport: Option<&str>) {
        self.embedded = viewport == Some(EMBEDDED_VIEWPORT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Presentation::new();
        assert_eq!(p.locale(), Locale::En);
        assert_eq!(p.view_mode(), ViewMode::Web);
        assert!(p.can_switch_view_mode());
    }

    // Draft and add-on selection survive a switch because the pages own
    // them above `ViewModeFrame`; this model only tracks the mode itself.
    #[test]
    fn test_view_mode_round_trip() {
        let mut presentation = Presentation::new();
        presentation.set_view_mode(ViewMode::Mobile);
        assert_eq!(presentation.view_mode(), ViewMode::Mobile);
        presentation.set_locale(Locale::Zh);
        presentation.set_view_mode(ViewMode::Web);

        assert_eq!(presentation.view_mode(), ViewMode::Web);
        assert_eq!(presentation.locale(), Locale::Zh);
    }

    #[test]
    fn test_embedded_forces_direct_render() {
        let mut p = Presentation::new();
        p.set_view_mode(ViewMode::Mobile);
        p.apply_viewport_param(Some("mobile"));
        assert!(p.is_embedded());
        assert!(!p.can_switch_view_mode());
        assert_eq!(p.view_mode(), ViewMode::Web);

        p.apply_viewport_param(None);
        assert_eq!(p.view_mode(), ViewMode::Mobile);
    }

    #[test]
    fn test_toggle_locale() {
        let mut p = Presentation::new();
        p.toggle_locale();
        assert_eq!(p.locale(), Locale::Zh);
        p.set_locale(Locale::En);
        assert_eq!(p.locale(), Locale::En);
    }
}
