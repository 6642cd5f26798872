//! Signup Page

use imunetrack::validation::PasswordStrength;
use imunetrack::views::SignupForm;
use leptos::*;
use leptos_router::*;

use crate::components::FormErrors;
use crate::state::global::GlobalState;

#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(SignupForm::default());
    let (errors, set_errors) = create_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let draft = form.get();
        if let Err(e) = draft.validate() {
            set_errors.set(e.messages().to_vec());
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            match draft.submit(&state.ctx).await {
                Ok(outcome) => {
                    state.show_success("Account created! Redirecting...");
                    state.user.set(Some(outcome.user));
                    state.navigate(outcome.redirect);
                }
                Err(e) => {
                    set_errors.set(e.messages());
                    set_submitting.set(false);
                }
            }
        });
    };

    let strength = move || form.with(|f| f.password_strength());
    let confirmation_hint = move || {
        form.with(|f| {
            if f.confirmation.is_empty() {
                None
            } else if f.passwords_match() {
                Some(("Passwords match", "text-green-600"))
            } else {
                Some(("Passwords do not match", "text-red-600"))
            }
        })
    };

    view! {
        <div class="flex items-center justify-center min-h-[80vh] px-4">
            <form on:submit=on_submit class="w-full max-w-sm space-y-4 bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold">"Create account"</h1>

                <FormErrors errors=errors />

                <input
                    type="text"
                    placeholder="Full name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300"
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300"
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300"
                />
                {move || strength().map(|s| view! { <StrengthMeter strength=s /> })}

                <input
                    type="password"
                    placeholder="Confirm password"
                    prop:value=move || form.with(|f| f.confirmation.clone())
                    on:input=move |ev| form.update(|f| f.confirmation = event_target_value(&ev))
                    class="w-full rounded-lg px-4 py-3 border border-gray-300"
                />
                {move || confirmation_hint().map(|(text, class)| view! {
                    <p class=format!("text-sm {}", class)>{text}</p>
                })}

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                           text-white rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>

                <p class="text-sm text-center text-gray-500">
                    "Already registered? "
                    <A href="/login" class="text-primary-600 font-medium">"Log in"</A>
                </p>
            </form>
        </div>
    }
}

#[component]
fn StrengthMeter(strength: PasswordStrength) -> impl IntoView {
    let (width, color) = match strength {
        PasswordStrength::Weak => ("w-1/3", "bg-red-500"),
        PasswordStrength::Medium => ("w-2/3", "bg-yellow-500"),
        PasswordStrength::Strong => ("w-full", "bg-green-500"),
    };

    view! {
        <div class="space-y-1">
            <div class="h-1 bg-gray-200 rounded">
                <div class=format!("h-1 rounded {} {}", width, color) />
            </div>
            <p class="text-xs text-gray-500">{format!("Strength: {}", strength.label())}</p>
        </div>
    }
}
