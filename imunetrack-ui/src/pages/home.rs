//! Home Page
//!
//! Landing page with the way into the app.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user = state.user;

    view! {
        <div class="flex flex-col items-center justify-center min-h-[80vh] text-center px-4">
            <div class="text-6xl mb-4">"💉"</div>
            <h1 class="text-4xl font-bold mb-2">"Imunetrack"</h1>
            <p class="text-gray-500 mb-8 max-w-md">
                "Keep your vaccination card up to date: see what was applied, \
                 what is coming up and what is overdue."
            </p>

            {move || match user.get() {
                Some(user) => view! {
                    <A
                        href="/dashboard"
                        class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium"
                    >
                        {format!("Continue as {}", user.name)}
                    </A>
                }.into_view(),
                None => view! {
                    <div class="flex space-x-3">
                        <A
                            href="/login"
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium"
                        >
                            "Log in"
                        </A>
                        <A
                            href="/cadastro"
                            class="px-6 py-3 border border-primary-600 text-primary-600 rounded-lg font-medium"
                        >
                            "Create account"
                        </A>
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
