use leptos::*;
use leptos_router::{use_navigate, use_params_map, use_query_map};

use crate::components::{Header, OrderConfirmation, ViewModeFrame};
use crate::config::{ESSAY_WRITER_PATH, HANDOFF_KEY};
use crate::pages::{locale_signal, use_presentation, view_mode_signal};
use crate::services::SessionSlot;
use crate::state::{retrieve, AddOnSelection};

/// Order page for a submitted request.
///
/// The hand-off is read once at mount; later storage writes are not observed.
/// `?viewport=mobile` renders the page embedded, without the view-mode switch.
#[component]
pub fn TaskPage() -> impl IntoView {
    let presentation = use_presentation();

    let query = use_query_map();
    create_effect(move |_| {
        let viewport = query.with(|q| q.get("viewport").cloned());
        presentation.update(|p| p.apply_viewport_param(viewport.as_deref()));
    });
    on_cleanup(move || presentation.update(|p| p.apply_viewport_param(None)));
    let locale = locale_signal(presentation);
    let view_mode = view_mode_signal(presentation);

    let task_id = use_params_map().with_untracked(|p| p.get("id").cloned());
    log::info!("🧾 Order page for task {}", task_id.as_deref().unwrap_or("?"));

    let request = create_rw_signal(retrieve(&SessionSlot::new(HANDOFF_KEY)));
    let selection = create_rw_signal(AddOnSelection::new());

    let navigate = use_navigate();
    let on_back = move |_: ()| navigate(ESSAY_WRITER_PATH, Default::default());

    view! {
        <Header presentation=presentation view_switch=true/>
        <main class="task">
            <ViewModeFrame view_mode=view_mode>
                <OrderConfirmation
                    locale=locale
                    request=request
                    selection=selection
                    on_back=on_back.clone()
                />
            </ViewModeFrame>
        </main>
    }
}
