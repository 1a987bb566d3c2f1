//! Showcase carousel and sample-preview state.
//!
//! [`Carousel`] is advanced by fixed-size ticks from a repeating timer; a
//! manual selection zeroes the countdown so the next autoplay step is a
//! full interval away. [`PreviewState`] is independent of it.

use crate::config::CAROUSEL_INTERVAL_MS;
use crate::i18n::{text, Locale};
use crate::state::pricing::AddOnId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused: bool,
    elapsed_ms: u32,
    interval_ms: u32,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self::with_interval(len, CAROUSEL_INTERVAL_MS)
    }

    pub fn with_interval(len: usize, interval_ms: u32) -> Self {
        Self {
            len,
            active: 0,
            paused: false,
            elapsed_ms: 0,
            interval_ms,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Feeds elapsed time; returns `true` if the active item advanced.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.len < 2 {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < self.interval_ms {
            return false;
        }
        self.elapsed_ms = 0;
        self.active = (self.active + 1) % self.len;
        true
    }

    /// Jumps to `index`; out-of-range is ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
            self.elapsed_ms = 0;
        }
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.select((self.active + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if !self.is_empty() {
            self.select((self.active + self.len - 1) % self.len);
        }
    }

    /// Hover or touch started.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Hover or touch ended; autoplay restarts from the current item.
    pub fn resume(&mut self) {
        self.paused = false;
        self.elapsed_ms = 0;
    }
}

// =============================================================================
// Sample previews
// =============================================================================

/// Anything with a "preview" affordance on the order page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleId {
    Paper,
    Summary,
    Faq,
    Strategy,
    Refs,
    Agent,
    SimilarityReport,
    Slides,
    All,
}

impl SampleId {
    /// Modal heading; samples without a dedicated title use the generic one.
    pub fn title(self, locale: Locale) -> &'static str {
        let order = &text(locale).order;
        let titles = &order.preview_titles;
        match self {
            SampleId::Paper => titles.paper,
            SampleId::Summary => titles.summary,
            SampleId::Faq => titles.faq,
            SampleId::Strategy => titles.strategy,
            SampleId::Refs => titles.refs,
            SampleId::All => titles.all,
            SampleId::Agent | SampleId::SimilarityReport | SampleId::Slides => {
                order.sample_preview
            }
        }
    }
}

impl From<AddOnId> for SampleId {
    fn from(id: AddOnId) -> Self {
        match id {
            AddOnId::SimilarityReport => SampleId::SimilarityReport,
            AddOnId::PresentationSlides => SampleId::Slides,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    active: Option<SampleId>,
}

impl PreviewState {
    pub fn active(&self) -> Option<SampleId> {
        self.active
    }

    pub fn open(&mut self, sample: SampleId) {
        self.active = Some(sample);
    }

    /// Close button or a click on the backdrop.
    pub fn close(&mut self) {
        self.active = None;
    }
}

/// First-visit "tap here" hint; hidden once and never shown again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClickHint {
    visible: bool,
}

impl Default for ClickHint {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl ClickHint {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_autoplay_advances_circularly() {
        let mut carousel = Carousel::new(4);
        for k in 1..=9 {
            assert!(carousel.tick(CAROUSEL_INTERVAL_MS));
            assert_eq!(carousel.active(), k % 4);
        }
    }

    #[test]
    fn test_ticks_accumulate() {
        let mut carousel = Carousel::with_interval(3, 1000);
        assert!(!carousel.tick(400));
        assert!(!carousel.tick(400));
        assert!(carousel.tick(400));
        assert_eq!(carousel.active(), 1);
    }

    #[test]
    fn test_select_resets_countdown() {
        let mut carousel = Carousel::with_interval(4, 1000);
        carousel.tick(900);
        carousel.select(2);
        assert_eq!(carousel.active(), 2);
        assert!(!carousel.tick(900));
        assert!(carousel.tick(100));
        assert_eq!(carousel.active(), 3);
    }

    #[test]
    fn test_pause_blocks_autoplay() {
        let mut carousel = Carousel::with_interval(4, 1000);
        carousel.pause();
        assert!(!carousel.tick(5000));
        assert_eq!(carousel.active(), 0);

        carousel.select(1);
        carousel.resume();
        assert!(carousel.tick(1000));
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_prev_next_wrap() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.active(), 3);
        carousel.next();
        assert_eq!(carousel.active(), 0);
        carousel.select(7);
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn test_degenerate_lengths() {
        let mut empty = Carousel::new(0);
        assert!(!empty.tick(CAROUSEL_INTERVAL_MS));
        empty.next();
        empty.prev();
        assert_eq!(empty.active(), 0);

        let mut single = Carousel::new(1);
        assert!(!single.tick(CAROUSEL_INTERVAL_MS));
    }

    #[test]
    fn test_preview_open_close_independent_of_carousel() {
        let mut carousel = Carousel::new(4);
        carousel.select(2);
        let mut preview = PreviewState::default();
        preview.open(SampleId::Refs);
        assert_eq!(preview.active(), Some(SampleId::Refs));
        assert_eq!(carousel.active(), 2);
        assert!(!carousel.is_paused());
        preview.close();
        assert_eq!(preview.active(), None);
    }

    #[test]
    fn test_add_on_samples() {
        let mut preview = PreviewState::default();
        preview.open(AddOnId::PresentationSlides.into());
        assert_eq!(preview.active(), Some(SampleId::Slides));
        assert_eq!(
            SampleId::from(AddOnId::SimilarityReport),
            SampleId::SimilarityReport
        );
    }

    #[test]
    fn test_preview_titles() {
        assert_eq!(SampleId::Paper.title(Locale::En), "Final Paper Sample");
        assert_eq!(SampleId::Slides.title(Locale::En), "Sample Preview");
        assert_eq!(SampleId::All.title(Locale::Zh), "交付物概览样例");
    }

    #[test]
    fn test_click_hint_dismiss() {
        let mut hint = ClickHint::default();
        assert!(hint.is_visible());
        hint.dismiss();
        assert!(!hint.is_visible());
    }
}
