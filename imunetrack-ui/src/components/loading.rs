//! Loading placeholders

use leptos::*;

/// Spinner with a caption saying what is being fetched
#[component]
pub fn Loading(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3" aria-busy="true">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-sm text-gray-500">{label}</p>
        </div>
    }
}

/// Placeholder rows shaped like dose history entries
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    view! {
        <div class="space-y-3 animate-pulse" aria-busy="true">
            {(0..count).map(|_| view! {
                <div class="flex items-center space-x-4 bg-white rounded-xl shadow px-4 py-3">
                    <div class="h-4 w-4 rounded bg-gray-200" />
                    <div class="flex-1 space-y-2">
                        <div class="h-4 w-1/3 rounded bg-gray-200" />
                        <div class="h-3 w-1/4 rounded bg-gray-100" />
                    </div>
                    <div class="h-5 w-16 rounded-full bg-gray-200" />
                </div>
            }).collect_view()}
        </div>
    }
}
