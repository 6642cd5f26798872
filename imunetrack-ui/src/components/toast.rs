//! Toast
//!
//! The current [`Notice`]: a one-line confirmation, or a titled list for
//! rejected forms and ended sessions.

use leptos::*;

use crate::state::global::GlobalState;
use crate::state::Notice;

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let notice = state.notice;
    let on_dismiss = Callback::new(move |_| state.dismiss());

    view! {
        <div class="fixed bottom-4 right-4 z-50 max-w-sm" role="status" aria-live="polite">
            {move || notice.get().map(|n| view! { <NoticeCard notice=n on_dismiss=on_dismiss /> })}
        </div>
    }
}

#[component]
fn NoticeCard(notice: Notice, on_dismiss: Callback<()>) -> impl IntoView {
    let kind = notice.kind;
    let body = match notice.lines.as_slice() {
        [line] => view! { <p class="text-sm font-medium">{line.clone()}</p> }.into_view(),
        lines => view! {
            <ul class="text-sm list-disc list-inside space-y-1">
                {lines.iter().map(|line| view! { <li>{line.clone()}</li> }).collect_view()}
            </ul>
        }
        .into_view(),
    };

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            kind.css_class()
        )>
            <span class="text-lg leading-none">{kind.icon()}</span>
            <div class="flex-1 space-y-1">
                {kind.title().map(|title| view! { <p class="font-semibold">{title}</p> })}
                {body}
            </div>
            <button on:click=move |_| on_dismiss.call(()) class="text-white/70 hover:text-white" aria-label="Dismiss">
                "✕"
            </button>
        </div>
    }
}
