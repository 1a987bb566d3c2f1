use leptos::*;
use leptos_router::A;

use crate::config::ESSAY_WRITER_PATH;
use crate::i18n::{text, Locale};

/// Comparison banner pointing detector visitors at the essay writer.
#[component]
pub fn WhyBanner(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
    let why = move || &text(locale.get()).detector.why;

    view! {
        <section class="why-essaypass">
            <span class="badge">{move || why().badge}</span>
            <h2>{move || why().heading}</h2>
            <div class="risk-compare">
                <span class="risk high">{move || why().general_risk}</span>
                <span class="risk safe">{move || why().essay_pass_safe}</span>
            </div>
            <div class="features">
                {move || {
                    why()
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <div class="feature">
                                    <span class=format!("icon icon-{}", feature.icon)></span>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <A href=ESSAY_WRITER_PATH class="btn-primary">{move || why().cta}</A>
        </section>
    }
}
