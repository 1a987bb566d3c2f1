//! Order confirmation: deliverables, add-ons, totals and sample previews.

use leptos::*;
use web_sys::MouseEvent;

use crate::config::CLICK_HINT_DELAY_MS;
use crate::i18n::{text, Deliverable, Deliverables, Locale};
use crate::services::{notify, DeferredTask};
use crate::state::{
    AddOnId, AddOnSelection, ClickHint, EssayRequest, PayOutcome, PreviewState, SampleId, ADD_ONS,
    BASE_PACKAGE,
};

#[component]
pub fn OrderConfirmation(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] request: Signal<EssayRequest>,
    /// Owned by the page so it survives a view-mode switch.
    selection: RwSignal<AddOnSelection>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let order = move || &text(locale.get()).order;
    let preview = create_rw_signal(PreviewState::default());
    let hint = create_rw_signal(ClickHint::default());

    let hint_timer = DeferredTask::new();
    hint_timer.cancel_on_cleanup();
    hint_timer.schedule(CLICK_HINT_DELAY_MS, move || {
        hint.update(|h| h.dismiss());
    });

    let on_pay = move |_| match selection.with_untracked(|s| s.pay()) {
        PayOutcome::ComingSoon => notify(text(locale.get_untracked()).order.pay_notice),
    };

    let summary_chips = move || {
        let locale = locale.get();
        request.with(|r| {
            vec![
                r.essay_type.label(locale),
                r.academic_level.label(locale),
                r.word_count.label(locale),
                r.citation_style.label(locale),
                r.language.label(locale),
            ]
        })
    };

    view! {
        <section class="order">
            <div class="order-header">
                <button class="back" on:click=move |_| on_back.call(())>
                    {move || format!("← {}", order().back)}
                </button>
                <div class="order-summary">
                    <span class="order-kicker">{move || order().config_title}</span>
                    <h2>
                        {move || {
                            let locale = locale.get();
                            request.with(|r| r.display_topic(locale).to_string())
                        }}
                    </h2>
                    <div class="chips">
                        {move || {
                            summary_chips()
                                .into_iter()
                                .map(|chip| view! { <span class="chip">{chip}</span> })
                                .collect_view()
                        }}
                    </div>
                </div>
                <button class="edit" on:click=move |_| on_back.call(())>
                    {move || order().edit}
                </button>
            </div>

            <div class="order-grid">
                <div class="order-main">
                    <div class="sample-banner">
                        <div>
                            <h3>{move || order().sample_previews}</h3>
                            <p>{move || order().sample_desc}</p>
                        </div>
                        <button on:click=move |_| preview.update(|p| p.open(SampleId::All))>
                            {move || order().preview_samples}
                        </button>
                    </div>

                    <div class="package">
                        <div class="package-header">
                            <h3>{move || order().all_in_one}</h3>
                            <span class="price">
                                <s>{BASE_PACKAGE.reference.to_string()}</s>
                                " "
                                {BASE_PACKAGE.price.to_string()}
                            </span>
                        </div>

                        <h4>{move || order().core_paper}</h4>
                        {deliverable_card(locale, SampleId::Paper, |d| &d.paper, preview, Some(hint))}
                        {deliverable_card(locale, SampleId::Refs, |d| &d.refs, preview, None)}

                        <h4>{move || order().review}</h4>
                        {deliverable_card(locale, SampleId::Summary, |d| &d.summary, preview, None)}
                        {deliverable_card(locale, SampleId::Faq, |d| &d.faq, preview, None)}
                        {deliverable_card(locale, SampleId::Strategy, |d| &d.strategy, preview, None)}

                        <h4>{move || order().revision}</h4>
                        {deliverable_card(locale, SampleId::Agent, |d| &d.agent, preview, None)}
                    </div>

                    <div class="addons">
                        <h3>{move || order().addons_title}</h3>
                        {ADD_ONS
                            .iter()
                            .map(|add_on| {
                                let id = add_on.id;
                                let available = add_on.is_available();
                                view! {
                                    <div
                                        class="addon-card"
                                        class:selected=move || selection.with(|s| s.is_selected(id))
                                        class:disabled=!available
                                        on:click=move |_| {
                                            if selection.try_update(|s| s.toggle(id)) == Some(true) {
                                                log::debug!("➕ Toggled add-on {:?}", id);
                                            }
                                        }
                                    >
                                        <div class="addon-title">
                                            <input
                                                type="checkbox"
                                                disabled=!available
                                                prop:checked=move || selection.with(|s| s.is_selected(id))
                                            />
                                            <span>{move || add_on.title(locale.get())}</span>
                                            {if available {
                                                view! { <span class="badge">{move || order().recommended}</span> }
                                            } else {
                                                view! { <span class="badge soon">{move || order().soon}</span> }
                                            }}
                                        </div>
                                        {(id == AddOnId::SimilarityReport).then(|| {
                                            view! {
                                                <span class="addon-sub">{move || order().addon_label}</span>
                                            }
                                        })}
                                        <span class="price">
                                            <s>{add_on.price.reference.to_string()}</s>
                                            " "
                                            {add_on.price.price.to_string()}
                                        </span>
                                        <button
                                            class="preview-link"
                                            on:click=move |ev: MouseEvent| {
                                                ev.stop_propagation();
                                                preview.update(|p| p.open(id.into()));
                                            }
                                        >
                                            {move || order().sample_preview}
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <aside class="order-side">
                    <div class="checkout">
                        <div class="line">
                            <span>{move || order().all_in_one}</span>
                            <span>{BASE_PACKAGE.price.to_string()}</span>
                        </div>
                        {move || {
                            let locale = locale.get();
                            selection.with(|s| {
                                s.selected()
                                    .map(|add_on| {
                                        view! {
                                            <div class="line">
                                                <span>{add_on.title(locale)}</span>
                                                <span>{add_on.price.price.to_string()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                        <div class="line total">
                            <span>{move || order().total}</span>
                            <span>
                                <s>{move || selection.with(|s| s.quote().reference.to_string())}</s>
                                " "
                                {move || selection.with(|s| s.quote().price.to_string())}
                            </span>
                        </div>
                        <button class="btn-primary pay" on:click=on_pay>
                            {move || {
                                format!(
                                    "{} {}",
                                    order().pay_button,
                                    selection.with(|s| s.quote().price),
                                )
                            }}
                        </button>
                        <p class="secure">{move || order().secure_payment}</p>
                    </div>

                    <div class="billing">
                        <ul>
                            {move || {
                                let d = &order().deliverables;
                                [&d.paper, &d.summary, &d.faq, &d.strategy, &d.refs, &d.agent]
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <li>
                                                <span>{item.title}</span>
                                                <span class="format">{item.format}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>

                    <div class="faq">
                        {move || {
                            order()
                                .faqs
                                .iter()
                                .map(|faq| {
                                    view! {
                                        <div class="faq-item">
                                            <p class="q">{faq.question}</p>
                                            <p class="a">{faq.answer}</p>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                        <p class="trusted">
                            {move || format!("{} {}", order().trusted_by, order().students)}
                        </p>
                    </div>
                </aside>
            </div>

            <PreviewModal locale=locale preview=preview/>
        </section>
    }
}

fn deliverable_card(
    locale: Signal<Locale>,
    sample: SampleId,
    pick: fn(&'static Deliverables) -> &'static Deliverable,
    preview: RwSignal<PreviewState>,
    hint: Option<RwSignal<ClickHint>>,
) -> impl IntoView {
    let item = move || pick(&text(locale.get()).order.deliverables);

    view! {
        <div class="deliverable" on:click=move |_| preview.update(|p| p.open(sample))>
            <span class="deliverable-title">{move || item().title}</span>
            <span class="format">{move || item().format}</span>
            {hint.map(|hint| {
                view! {
                    <Show when=move || hint.with(|h| h.is_visible()) fallback=|| view! {}>
                        <span class="click-hint">
                            {move || text(locale.get()).order.click_hint}
                        </span>
                    </Show>
                }
            })}
        </div>
    }
}

/// Sample viewer; closes on the close button or a backdrop click.
#[component]
fn PreviewModal(locale: Signal<Locale>, preview: RwSignal<PreviewState>) -> impl IntoView {
    let order = move || &text(locale.get()).order;
    let close = move |_| preview.update(|p| p.close());

    view! {
        <Show when=move || preview.with(|p| p.active().is_some()) fallback=|| view! {}>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=|ev: MouseEvent| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3>
                            {move || {
                                preview
                                    .with(|p| p.active())
                                    .map(|sample| sample.title(locale.get()))
                                    .unwrap_or_default()
                            }}
                        </h3>
                        <button class="close" on:click=close title=move || order().close_preview>
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">
                        <span class="badge">{move || order().high_fidelity}</span>
                        <p>{move || order().sample_placeholder}</p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
