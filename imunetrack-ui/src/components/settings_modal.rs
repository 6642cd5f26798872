//! Settings Modal
//!
//! Theme, font size and profile.

use imunetrack::session::{FontSize, Theme};
use imunetrack::views::SettingsPanel;
use leptos::*;

use crate::components::FormErrors;
use crate::state::global::{apply_preferences, GlobalState};

#[component]
pub fn SettingsModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let open = state.settings_open;

    view! {
        {move || open.get().then(|| view! { <SettingsDialog /> })}
    }
}

#[component]
fn SettingsDialog() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let panel = match SettingsPanel::open(&state.ctx) {
        Ok(panel) => create_rw_signal(panel),
        Err(e) => {
            state.settings_open.set(false);
            state.report(&e);
            return view! {}.into_view();
        }
    };
    let (errors, set_errors) = create_signal(Vec::<String>::new());
    let (saving, set_saving) = create_signal(false);

    let state_for_prefs = state.clone();
    let set_theme = move |theme: Theme| {
        let mut result = Ok(());
        panel.update(|p| result = p.set_theme(theme));
        match result {
            Ok(()) => {
                let prefs = panel.with_untracked(|p| p.preferences());
                state_for_prefs.preferences.set(prefs);
                apply_preferences(prefs);
            }
            Err(e) => state_for_prefs.report(&e),
        }
    };

    let state_for_font = state.clone();
    let set_font_size = move |size: FontSize| {
        let mut result = Ok(());
        panel.update(|p| result = p.set_font_size(size));
        match result {
            Ok(()) => {
                let prefs = panel.with_untracked(|p| p.preferences());
                state_for_font.preferences.set(prefs);
                apply_preferences(prefs);
            }
            Err(e) => state_for_font.report(&e),
        }
    };

    let state_for_save = state.clone();
    let save_profile = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut current = panel.get_untracked();
        let state = state_for_save.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = current.save_profile().await;
            panel.set(current);
            match result {
                Ok(user) => {
                    set_errors.set(Vec::new());
                    state.user.set(Some(user));
                    state.show_success("Profile saved");
                }
                Err(e) => {
                    set_errors.set(e.messages());
                    if e.requires_login() {
                        state.report(&e);
                    }
                }
            }
            set_saving.set(false);
        });
    };

    let close = state.settings_open;
    let option_class = move |active: bool| {
        let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
        if active {
            format!("{} bg-primary-600 text-white", base)
        } else {
            format!("{} bg-gray-100 text-gray-600 hover:bg-gray-200", base)
        }
    };

    view! {
        <div class="fixed inset-0 bg-black/40 flex items-center justify-center z-40">
            <div class="bg-white rounded-xl shadow-xl p-6 w-full max-w-md space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-semibold">"Settings"</h2>
                    <button on:click=move |_| close.set(false) class="text-gray-500">"✕"</button>
                </div>

                <section class="space-y-2">
                    <h3 class="text-sm text-gray-500">"Theme"</h3>
                    <div class="flex space-x-2">
                        {Theme::all().iter().copied().map(|theme| {
                            let set_theme = set_theme.clone();
                            view! {
                                <button
                                    on:click=move |_| set_theme(theme)
                                    class=move || option_class(panel.with(|p| p.preferences().theme == theme))
                                >
                                    {theme.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </section>

                <section class="space-y-2">
                    <h3 class="text-sm text-gray-500">"Font size"</h3>
                    <div class="flex space-x-2">
                        {FontSize::all().iter().copied().map(|size| {
                            let set_font_size = set_font_size.clone();
                            view! {
                                <button
                                    on:click=move |_| set_font_size(size)
                                    class=move || option_class(panel.with(|p| p.preferences().font_size == size))
                                >
                                    {size.label()}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </section>

                <form on:submit=save_profile class="space-y-3">
                    <h3 class="text-sm text-gray-500">"Profile"</h3>
                    <FormErrors errors=errors />
                    <input
                        type="text"
                        placeholder="Name"
                        prop:value=move || panel.with(|p| p.name.clone())
                        on:input=move |ev| panel.update(|p| p.name = event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-2 border border-gray-300"
                    />
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || panel.with(|p| p.email.clone())
                        on:input=move |ev| panel.update(|p| p.email = event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-2 border border-gray-300"
                    />
                    <button
                        type="submit"
                        disabled=move || saving.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                               text-white rounded-lg py-2 font-semibold"
                    >
                        {move || if saving.get() { "Saving..." } else { "Save profile" }}
                    </button>
                </form>
            </div>
        </div>
    }
    .into_view()
}
