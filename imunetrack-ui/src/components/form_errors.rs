//! Inline form error list

use leptos::*;

#[component]
pub fn FormErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        {move || {
            let errors = errors.get();
            if errors.is_empty() {
                view! {}.into_view()
            } else {
                view! {
                    <ul class="bg-red-50 text-red-700 rounded-lg px-4 py-3 text-sm space-y-1">
                        {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                }.into_view()
            }
        }}
    }
}
