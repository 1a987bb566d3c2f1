//! Essay request composer.
//!
//! Edits a page-owned [`EssayDraft`]; submitting hands a snapshot to the
//! caller, which decides where it goes.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::i18n::{text, Locale};
use crate::state::{
    AcademicLevel, CitationStyle, Constraint, EssayDraft, EssayRequest, EssayType, OutlineType,
    OutputLanguage, WordCount,
};
use crate::types::FileDescriptor;

#[component]
pub fn EssayForm(
    #[prop(into)] locale: Signal<Locale>,
    draft: RwSignal<EssayDraft>,
    #[prop(into)] on_submit: Callback<EssayRequest>,
) -> impl IntoView {
    let form = move || &text(locale.get()).form;
    let file_input = create_node_ref::<html::Input>();

    // Reference files are informational only, so no extension filter here.
    let on_reference_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            let picked: Vec<FileDescriptor> = (0..files.length())
                .filter_map(|i| files.get(i))
                .map(|file| FileDescriptor::from(&file))
                .collect();
            log::info!("📎 {} reference file(s) attached", picked.len());
            draft.update(|d| picked.into_iter().for_each(|f| d.add_reference_file(f)));
        }
        input.set_value("");
    };

    let submit = move |_| {
        let snapshot = draft.with_untracked(|d| d.snapshot());
        log::info!("📝 Submitting request: {:?} / {:?}", snapshot.essay_type, snapshot.word_count);
        on_submit.call(snapshot);
    };

    view! {
        <section class="essay-form">
            <div class="form-row">
                {choice_select(
                    Signal::derive(move || form().type_label),
                    EssayType::ALL,
                    Signal::derive(move || draft.with(|d| d.request().essay_type.index())),
                    EssayType::label,
                    locale,
                    move |i| {
                        if let Some(v) = EssayType::from_index(i) {
                            draft.update(|d| d.set_type(v));
                        }
                    },
                )}
                {choice_select(
                    Signal::derive(move || form().level_label),
                    AcademicLevel::ALL,
                    Signal::derive(move || draft.with(|d| d.request().academic_level.index())),
                    AcademicLevel::label,
                    locale,
                    move |i| {
                        if let Some(v) = AcademicLevel::from_index(i) {
                            draft.update(|d| d.set_level(v));
                        }
                    },
                )}
            </div>

            <label class="field">
                <span class="field-label">{move || form().topic_label}</span>
                <input
                    type="text"
                    placeholder=move || form().topic_placeholder
                    prop:value=move || draft.with(|d| d.request().topic.clone())
                    on:input=move |ev| draft.update(|d| d.set_topic(event_target_value(&ev)))
                />
            </label>

            <div class="field">
                <div class="editor-header">
                    <span class="field-label">{move || form().instructions_label}</span>
                    <span class="editor-title">{move || form().req_section_title}</span>
                </div>
                <textarea
                    rows="8"
                    prop:value=move || draft.with(|d| d.request().instructions.clone())
                    on:input=move |ev| {
                        draft.update(|d| d.set_instructions(event_target_value(&ev)))
                    }
                ></textarea>

                <div class="constraints">
                    <span class="constraints-hint">{move || form().missing_hint}</span>
                    <span class="constraints-title">{move || form().add_constraints}</span>
                    {Constraint::ALL
                        .into_iter()
                        .map(|constraint| {
                            view! {
                                <button
                                    type="button"
                                    class="constraint-chip"
                                    on:click=move |_| {
                                        let locale = locale.get_untracked();
                                        draft.update(|d| d.insert_constraint(constraint, locale));
                                    }
                                >
                                    {move || format!("+ {}", constraint.label(locale.get()))}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="references">
                    <input
                        type="file"
                        multiple=true
                        class="hidden"
                        node_ref=file_input
                        on:change=on_reference_change
                    />
                    <button
                        type="button"
                        class="attach-button"
                        title=move || form().attach_ref_tooltip
                        on:click=move |_| {
                            if let Some(input) = file_input.get() {
                                input.click();
                            }
                        }
                    >
                        {move || form().attach_ref}
                    </button>

                    <Show
                        when=move || draft.with(|d| !d.request().reference_files.is_empty())
                        fallback=|| view! {}
                    >
                        <div class="reference-list">
                            <span class="field-label">{move || form().ref_list_label}</span>
                            <ul>
                                {move || {
                                    draft
                                        .with(|d| d.request().reference_files.clone())
                                        .into_iter()
                                        .enumerate()
                                        .map(|(idx, file)| {
                                            view! {
                                                <li class="reference-file">
                                                    <span class="file-name">{file.name.clone()}</span>
                                                    <span class="file-size">{file.size_label()}</span>
                                                    <button
                                                        type="button"
                                                        class="remove"
                                                        on:click=move |_| {
                                                            draft.update(|d| {
                                                                d.remove_reference_file(idx);
                                                            })
                                                        }
                                                    >
                                                        {move || form().remove}
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                            <p class="reference-disclaimer">{move || form().ref_disclaimer}</p>
                        </div>
                    </Show>
                </div>
            </div>

            <div class="field">
                <span class="field-label">{move || form().outline_label}</span>
                <div class="outline-options">
                    {OutlineType::ALL
                        .into_iter()
                        .map(|outline| {
                            view! {
                                <button
                                    type="button"
                                    class="outline-option"
                                    class:active=move || {
                                        draft.with(|d| d.request().outline_type == outline)
                                    }
                                    on:click=move |_| draft.update(|d| d.set_outline_type(outline))
                                >
                                    {move || outline.label(locale.get())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="form-row">
                {choice_select(
                    Signal::derive(move || form().word_count_label),
                    WordCount::ALL,
                    Signal::derive(move || draft.with(|d| d.request().word_count.index())),
                    WordCount::label,
                    locale,
                    move |i| {
                        if let Some(v) = WordCount::from_index(i) {
                            draft.update(|d| d.set_word_count(v));
                        }
                    },
                )}
                {choice_select(
                    Signal::derive(move || form().language_label),
                    OutputLanguage::ALL,
                    Signal::derive(move || draft.with(|d| d.request().language.index())),
                    OutputLanguage::label,
                    locale,
                    move |i| {
                        if let Some(v) = OutputLanguage::from_index(i) {
                            draft.update(|d| d.set_language(v));
                        }
                    },
                )}
                {choice_select(
                    Signal::derive(move || form().citation_label),
                    CitationStyle::ALL,
                    Signal::derive(move || draft.with(|d| d.request().citation_style.index())),
                    CitationStyle::label,
                    locale,
                    move |i| {
                        if let Some(v) = CitationStyle::from_index(i) {
                            draft.update(|d| d.set_citation_style(v));
                        }
                    },
                )}
            </div>

            <div class="field">
                <span class="field-label">{move || form().figures_label}</span>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.request().include_charts_tables)
                        on:change=move |ev| {
                            draft.update(|d| d.set_include_charts_tables(event_target_checked(&ev)))
                        }
                    />
                    {move || form().extra_charts}
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|d| d.request().include_formulas)
                        on:change=move |ev| {
                            draft.update(|d| d.set_include_formulas(event_target_checked(&ev)))
                        }
                    />
                    {move || form().extra_formulas}
                </label>
            </div>

            <button type="button" class="btn-primary submit" on:click=submit>
                {move || form().submit_button}
            </button>
        </section>
    }
}

/// A labelled `<select>` over a fixed choice set, keyed by position.
fn choice_select<T>(
    label: Signal<&'static str>,
    choices: &'static [T],
    selected: Signal<usize>,
    label_of: fn(T, Locale) -> &'static str,
    locale: Signal<Locale>,
    on_pick: impl Fn(usize) + 'static,
) -> impl IntoView
where
    T: Copy + 'static,
{
    view! {
        <label class="field">
            <span class="field-label">{move || label.get()}</span>
            <select on:change=move |ev| {
                if let Ok(idx) = event_target_value(&ev).parse::<usize>() {
                    on_pick(idx);
                }
            }>
                {choices
                    .iter()
                    .copied()
                    .enumerate()
                    .map(|(idx, choice)| {
                        view! {
                            <option
                                value=idx.to_string()
                                prop:selected=move || selected.get() == idx
                            >
                                {move || label_of(choice, locale.get())}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
