//! Login Page

use imunetrack::views::LoginForm;
use leptos::*;
use leptos_router::*;

use crate::components::FormErrors;
use crate::state::global::GlobalState;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (errors, set_errors) = create_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm::new(email.get(), password.get());
        if let Err(e) = form.validate() {
            set_errors.set(e.messages().to_vec());
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            match form.submit(&state.ctx).await {
                Ok(outcome) => {
                    state.user.set(Some(outcome.user));
                    state.navigate(outcome.redirect);
                }
                Err(e) => set_errors.set(e.messages()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[80vh] px-4">
            <form on:submit=on_submit class="w-full max-w-sm space-y-4 bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold">"Log in"</h1>

                <FormErrors errors=errors />

                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300 focus:border-primary-500 focus:outline-none"
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300 focus:border-primary-500 focus:outline-none"
                />

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                           text-white rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>

                <p class="text-sm text-center text-gray-500">
                    "No account yet? "
                    <A href="/cadastro" class="text-primary-600 font-medium">"Sign up"</A>
                </p>
            </form>
        </div>
    }
}
