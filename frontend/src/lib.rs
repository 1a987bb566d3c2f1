//! EssayPass - Frontend Rust/Leptos Application
//!
//! Marketing and demo front end for an AI essay-writing service: an essay
//! request composer, an order confirmation page with add-ons and sample
//! previews, and a simulated AI-detection upload page.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (meta context, Presentation context)                    │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Router                                                      │
//! │  ├── /                         LandingPage                   │
//! │  ├── /ai-essay-writer          EssayWriterPage               │
//! │  ├── /ai-essay-writer/task/:id TaskPage                      │
//! │  └── /ai-detector              DetectorPage                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Routes, storage key, timing and upload limits
//! - [`types`] - File descriptors and error types
//! - [`i18n`] - English and Chinese text bundles
//! - [`state`] - Pure UI state models (no DOM access)
//! - [`services`] - Session storage, timers, dialogs
//! - [`components`] - Leptos components
//! - [`pages`] - Routed pages

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod i18n;
pub mod pages;
pub mod services;
pub mod state;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use i18n::{text, Locale, UiText};
pub use pages::*;
pub use state::{EssayRequest, Presentation, ViewMode};
pub use types::{AppError, AppResult, FileDescriptor};

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let presentation = create_rw_signal(Presentation::new());
    provide_context(presentation);

    view! {
        <Html lang=move || presentation.with(|p| p.locale().code())/>
        <Title text="EssayPass - AI Essay Writer | Authentic & Undetectable"/>
        <Router>
            <Shell/>
        </Router>
    }
}

/// Route outlet; marks the app embedded for `?viewport=mobile` task pages.
#[component]
fn Shell() -> impl IntoView {
    let presentation = use_presentation();

    view! {
        <div class="app" class:embedded=move || presentation.with(|p| p.is_embedded())>
            <Routes>
                <Route path="/" view=LandingPage/>
                <Route path=ESSAY_WRITER_PATH view=EssayWriterPage/>
                <Route path="/ai-essay-writer/task/:id" view=TaskPage/>
                <Route path=DETECTOR_PATH view=DetectorPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </div>
    }
}
