use leptos::*;
use leptos_router::{use_location, A};

use crate::config::{DETECTOR_PATH, ESSAY_WRITER_PATH};
use crate::i18n::{text, Locale};
use crate::state::{Presentation, ViewMode};

#[component]
pub fn Header(
    presentation: RwSignal<Presentation>,
    /// Show the web/mobile preview switch (composer and order pages only).
    #[prop(optional)]
    view_switch: bool,
) -> impl IntoView {
    let (lang_menu_open, set_lang_menu_open) = create_signal(false);
    let pathname = use_location().pathname;

    let locale = move || presentation.with(|p| p.locale());
    let nav = move || &text(locale()).nav;
    let is_current = move |path: &'static str| pathname.with(|p| p == path);

    let show_view_switch =
        move || view_switch && presentation.with(|p| p.can_switch_view_mode());

    let pick_locale = move |next: Locale| {
        log::info!("🌐 Locale: {}", next.code());
        presentation.update(|p| p.set_locale(next));
        set_lang_menu_open.set(false);
    };

    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"EssayPass"</A>
                <nav class="header-nav">
                    <A href="/" class="nav-link">{move || nav().home}</A>
                    <A
                        href=ESSAY_WRITER_PATH
                        class="nav-link"
                    >
                        <span class:current=move || is_current(ESSAY_WRITER_PATH)>
                            {move || nav().essay_writer}
                        </span>
                    </A>
                    <A href=DETECTOR_PATH class="nav-link">
                        <span class:current=move || is_current(DETECTOR_PATH)>
                            {move || nav().detector}
                        </span>
                    </A>
                </nav>
            </div>
            <div class="header-right">
                <Show when=show_view_switch fallback=|| view! {}>
                    <div class="view-switch">
                        {ViewMode::ALL
                            .into_iter()
                            .map(|mode| {
                                let label = move || match mode {
                                    ViewMode::Web => nav().web,
                                    ViewMode::Mobile => nav().mobile,
                                };
                                view! {
                                    <button
                                        class="view-switch-option"
                                        class:active=move || {
                                            presentation.with(|p| p.view_mode() == mode)
                                        }
                                        on:click=move |_| {
                                            presentation.update(|p| p.set_view_mode(mode))
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>

                // Desktop dropdown
                <div class="lang-menu">
                    <button
                        class="lang-trigger"
                        on:click=move |_| set_lang_menu_open.update(|open| *open = !*open)
                    >
                        {move || format!("{} {}", locale().flag(), locale().label())}
                    </button>
                    <Show when=move || lang_menu_open.get() fallback=|| view! {}>
                        <ul class="lang-options">
                            {Locale::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <li
                                            class:selected=move || locale() == option
                                            on:click=move |_| pick_locale(option)
                                        >
                                            {format!("{} {}", option.flag(), option.label())}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>

                // Compact toggle
                <button
                    class="lang-toggle"
                    on:click=move |_| {
                        presentation.update(|p| p.toggle_locale());
                        set_lang_menu_open.set(false);
                    }
                >
                    {move || locale().toggled().flag()}
                </button>
            </div>
        </header>
    }
}
