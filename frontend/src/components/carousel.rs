//! Auto-advancing showcase of the four delivered artifacts.
//!
//! A repeating timer feeds [`Carousel::tick`]; the model decides when to
//! advance so pausing and manual selection never race the timer.

use leptos::*;

use crate::config::CAROUSEL_TICK_MS;
use crate::i18n::{text, Locale};
use crate::services::RepeatingTask;
use crate::state::Carousel;

const CARD_COUNT: usize = 4;

#[component]
pub fn DeliveryCarousel(#[prop(into)] locale: Signal<Locale>) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(CARD_COUNT));

    RepeatingTask::scoped(CAROUSEL_TICK_MS, move || {
        // Only notify subscribers when the visible card changes.
        let advanced = carousel
            .try_update_untracked(|c| c.tick(CAROUSEL_TICK_MS))
            .unwrap_or(false);
        if advanced {
            carousel.update(|_| {});
        }
    });

    let pause = move |_| carousel.update(|c| c.pause());
    let resume = move |_| carousel.update(|c| c.resume());
    let active = move || carousel.with(|c| c.active());
    let copy = move || &text(locale.get()).carousel;

    view! {
        <div
            class="carousel"
            on:mouseenter=pause
            on:mouseleave=resume
            on:touchstart=move |_| carousel.update(|c| c.pause())
            on:touchend=move |_| carousel.update(|c| c.resume())
        >
            <div class="carousel-header">
                <h2>{move || copy().title}</h2>
                <p class="carousel-anchor">{move || copy().anchor}</p>
            </div>

            <div class="carousel-track">
                {(0..CARD_COUNT)
                    .map(|idx| {
                        let card = move || &copy().cards[idx];
                        view! {
                            <div
                                class="carousel-card"
                                class:active=move || active() == idx
                                on:click=move |_| carousel.update(|c| c.select(idx))
                            >
                                <div class=move || format!("mockup mockup-{}", card().id)></div>
                                <span class="carousel-tag">{move || card().tag}</span>
                                <h3>{move || card().title}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="carousel-controls">
                <button class="carousel-prev" on:click=move |_| carousel.update(|c| c.prev())>
                    "‹"
                </button>
                <div class="carousel-dots">
                    {(0..CARD_COUNT)
                        .map(|idx| {
                            view! {
                                <span
                                    class="dot"
                                    class:active=move || active() == idx
                                    on:click=move |_| carousel.update(|c| c.select(idx))
                                ></span>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="carousel-next" on:click=move |_| carousel.update(|c| c.next())>
                    "›"
                </button>
            </div>
        </div>
    }
}
