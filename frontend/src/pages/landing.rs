use leptos::*;

use crate::components::{EssayForm, Header, Hero, OrderConfirmation};
use crate::pages::{locale_signal, use_presentation};
use crate::state::{handoff, retrieve, AddOnSelection, EssayDraft, EssayRequest, MemorySlot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LandingView {
    Form,
    Confirmation,
}

/// Home page: composer and confirmation on one route, nothing persisted.
#[component]
pub fn LandingPage() -> impl IntoView {
    let presentation = use_presentation();
    let locale = locale_signal(presentation);

    let draft = create_rw_signal(EssayDraft::new());
    let selection = create_rw_signal(AddOnSelection::new());
    let (view_state, set_view_state) = create_signal(LandingView::Form);
    let (submitted, set_submitted) = create_signal(EssayRequest::sample());
    let slot = store_value(MemorySlot::new());

    let on_submit = move |request: EssayRequest| {
        if let Err(e) = slot.with_value(|s| handoff(s, &request)) {
            log::error!("❌ Hand-off failed: {}", e);
        }
        set_submitted.set(slot.with_value(|s| retrieve(s)));
        set_view_state.set(LandingView::Confirmation);
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    let on_back = move |_: ()| {
        set_view_state.set(LandingView::Form);
        window().scroll_to_with_x_and_y(0.0, 0.0);
    };

    view! {
        <Header presentation=presentation/>
        <main class="landing">
            <Show
                when=move || view_state.get() == LandingView::Form
                fallback=move || {
                    view! {
                        <OrderConfirmation
                            locale=locale
                            request=submitted
                            selection=selection
                            on_back=on_back
                        />
                    }
                }
            >
                <Hero locale=locale/>
                <EssayForm locale=locale draft=draft on_submit=on_submit/>
            </Show>
        </main>
    }
}
