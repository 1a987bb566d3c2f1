use leptos::*;

use crate::components::DeliveryCarousel;
use crate::i18n::{text, Locale};

/// Headline plus the deliverables carousel.
#[component]
pub fn Hero(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
    let hero = move || &text(locale.get()).hero;

    view! {
        <section class="hero">
            <h1>{move || hero().title}</h1>
            <p class="hero-subtitle">{move || hero().subtitle}</p>
            <DeliveryCarousel locale=locale/>
        </section>
    }
}
