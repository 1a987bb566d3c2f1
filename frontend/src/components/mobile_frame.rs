use leptos::*;

use crate::state::ViewMode;

/// Renders `children` full width or inside a phone-sized frame.
///
/// Holds no state of its own; anything that must survive a mode switch
/// lives in the page that owns the frame.
#[component]
pub fn ViewModeFrame(
    #[prop(into)] view_mode: Signal<ViewMode>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = store_value(children);

    move || match view_mode.get() {
        ViewMode::Web => view! { <div class="web-frame">{children.with_value(|c| c())}</div> },
        ViewMode::Mobile => view! {
            <div class="mobile-stage">
                <div class="mobile-frame">
                    <div class="mobile-notch"></div>
                    <div class="mobile-screen">{children.with_value(|c| c())}</div>
                </div>
            </div>
        },
    }
}
