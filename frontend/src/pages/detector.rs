use leptos::*;

use crate::components::{DetectorUpload, Header, WhyBanner};
use crate::i18n::text;
use crate::pages::{locale_signal, use_presentation};

#[component]
pub fn DetectorPage() -> impl IntoView {
    let presentation = use_presentation();
    let locale = locale_signal(presentation);
    let copy = move || &text(locale.get()).detector;

    view! {
        <Header presentation=presentation/>
        <main class="detector">
            <section class="detector-hero">
                <h1>
                    {move || copy().hero_title}
                    " "
                    <span class="highlight">{move || copy().hero_title_highlight}</span>
                </h1>
                <p>{move || copy().hero_subtitle}</p>
                <div class="detector-tags">
                    <span>{move || copy().identify_risks}</span>
                    <span>{move || copy().professional_solution}</span>
                </div>
            </section>
            <DetectorUpload locale=locale/>
            <WhyBanner locale=locale/>
        </main>
    }
}
