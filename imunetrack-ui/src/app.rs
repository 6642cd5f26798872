//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{SettingsModal, Toast};
use crate::pages::{Dashboard, Home, Login, Signup};
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <RedirectWatcher />
            <div class="min-h-screen flex flex-col">
                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/login" view=Login />
                        <Route path="/cadastro" view=Signup />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <SettingsModal />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Performs the navigation requested through [`GlobalState::navigate`]
#[component]
fn RedirectWatcher() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    create_effect(move |_| {
        if let Some(route) = state.redirect.get() {
            state.redirect.set_untracked(None);
            navigate(route.path(), Default::default());
        }
    });
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to home"
            </A>
        </div>
    }
}
