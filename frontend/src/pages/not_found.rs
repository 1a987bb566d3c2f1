use leptos::*;
use leptos_router::A;

use crate::i18n::text;
use crate::pages::{locale_signal, use_presentation};

#[component]
pub fn NotFound() -> impl IntoView {
    let presentation = use_presentation();
    let locale = locale_signal(presentation);

    view! {
        <main class="not-found">
            <h1>"404"</h1>
            <p>{move || text(locale.get()).not_found}</p>
            <A href="/">{move || text(locale.get()).nav.home}</A>
        </main>
    }
}
