use leptos::*;
use leptos_router::{use_navigate, use_query_map};

use crate::components::{EssayForm, Header, Hero, ViewModeFrame};
use crate::config::{HANDOFF_KEY, ORDER_PATH};
use crate::pages::{locale_signal, use_presentation, view_mode_signal};
use crate::services::SessionSlot;
use crate::state::{handoff, EssayDraft, EssayRequest};

/// Composer page. `?topic=` pre-fills the topic field.
#[component]
pub fn EssayWriterPage() -> impl IntoView {
    let presentation = use_presentation();
    let locale = locale_signal(presentation);
    let view_mode = view_mode_signal(presentation);

    let seed = use_query_map().with_untracked(|q| q.get("topic").cloned());
    let draft = create_rw_signal(match seed {
        Some(topic) => {
            log::info!("🌱 Seeded topic from query");
            EssayDraft::seeded(topic)
        }
        None => EssayDraft::new(),
    });

    let navigate = use_navigate();
    let on_submit = move |request: EssayRequest| {
        if let Err(e) = handoff(&SessionSlot::new(HANDOFF_KEY), &request) {
            // The order page falls back to the sample order.
            log::error!("❌ Hand-off failed: {}", e);
        }
        navigate(ORDER_PATH, Default::default());
    };

    view! {
        <Header presentation=presentation view_switch=true/>
        <main class="essay-writer">
            <ViewModeFrame view_mode=view_mode>
                <Hero locale=locale/>
                <EssayForm locale=locale draft=draft on_submit=on_submit.clone()/>
            </ViewModeFrame>
        </main>
    }
}
