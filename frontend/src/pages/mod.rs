//! Routed pages.
//!
//! Each page owns the state that must outlive a view-mode switch and
//! passes signals down to the components it renders.

mod detector;
mod essay_writer;
mod landing;
mod not_found;
mod task;

pub use detector::*;
pub use essay_writer::*;
pub use landing::*;
pub use not_found::*;
pub use task::*;

use leptos::*;

use crate::i18n::Locale;
use crate::state::{Presentation, ViewMode};

/// Site-wide locale and view mode, provided by [`crate::App`].
pub fn use_presentation() -> RwSignal<Presentation> {
    expect_context::<RwSignal<Presentation>>()
}

pub(crate) fn locale_signal(presentation: RwSignal<Presentation>) -> Signal<Locale> {
    create_memo(move |_| presentation.with(|p| p.locale())).into()
}

pub(crate) fn view_mode_signal(presentation: RwSignal<Presentation>) -> Signal<ViewMode> {
    create_memo(move |_| presentation.with(|p| p.view_mode())).into()
}
