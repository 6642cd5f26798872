//! Schedule Form Component
//!
//! Schedules a future dose, then refreshes the dashboard.

use chrono::NaiveDate;
use imunetrack::views::{DashboardView, ScheduleForm};
use leptos::*;

use crate::components::{FormErrors, Loading};
use crate::state::global::GlobalState;
use crate::state::Notice;

#[component]
pub fn ScheduleFormView(dashboard: RwSignal<Option<DashboardView>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(None::<ScheduleForm>);
    let (errors, set_errors) = create_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_load = state.clone();
    spawn_local(async move {
        match ScheduleForm::load(state_for_load.ctx.vaccines()).await {
            Ok(loaded) => form.set(Some(loaded)),
            Err(e) => state_for_load.report(&e),
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let (Some(mut draft), Some(mut view)) = (form.get_untracked(), dashboard.get_untracked()) else {
            return;
        };
        if let Err(e) = draft.validate() {
            set_errors.set(e.messages().to_vec());
            return;
        }
        set_errors.set(Vec::new());
        set_submitting.set(true);

        let state = state.clone();
        spawn_local(async move {
            let result = view.schedule(&mut draft).await;
            let stale = view.stale().is_some();
            dashboard.update(|d| if let Some(d) = d { d.absorb(view) });
            match result {
                Ok(record) => {
                    form.set(Some(draft));
                    let message = format!("{} dose {} scheduled", record.vaccine_name, record.dose_number);
                    if stale {
                        state.notify(Notice::warning(format!(
                            "{}, but the dashboard could not be refreshed",
                            message
                        )));
                    } else {
                        state.show_success(&message);
                    }
                }
                Err(e) => {
                    set_errors.set(e.messages());
                    if e.requires_login() {
                        state.report(&e);
                    }
                }
            }
            set_submitting.set(false);
        });
    };

    let ready = create_memo(move |_| form.with(|f| f.is_some()));
    let input_class = "w-full rounded-lg px-4 py-3 border border-gray-300 focus:border-primary-500 focus:outline-none";

    view! {
        <section class="bg-white rounded-xl shadow p-6 max-w-xl">
            {move || {
                if !ready.get() {
                    return view! { <Loading label="Loading vaccines..." /> }.into_view();
                }
                view! {
                    <form on:submit=on_submit.clone() class="space-y-4">
                        <FormErrors errors=errors />

                        {move || form.with(|f| f.as_ref().map(|f| f.is_submitted())).unwrap_or(false).then(|| view! {
                            <p class="bg-green-50 text-green-700 rounded-lg px-4 py-3 text-sm">"Dose scheduled."</p>
                        })}

                        <label class="block">
                            <span class="text-sm text-gray-500">"Vaccine *"</span>
                            <select
                                class=input_class
                                on:change=move |ev| {
                                    let id = event_target_value(&ev).parse::<i64>().ok();
                                    form.update(|f| if let Some(f) = f { f.select_vaccine(id) });
                                }
                            >
                                <option value="" selected=move || form.with(|f| f.as_ref().and_then(|f| f.vaccine_id).is_none())>
                                    "Select a vaccine"
                                </option>
                                {move || form.with(|f| f.as_ref().map(|f| f.vaccines().to_vec()).unwrap_or_default())
                                    .into_iter()
                                    .map(|v| {
                                        let id = v.id;
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || form.with(|f| f.as_ref().and_then(|f| f.vaccine_id) == Some(id))
                                            >
                                                {v.option_label()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>

                        <label class="block">
                            <span class="text-sm text-gray-500">"Dose"</span>
                            <select
                                class=input_class
                                on:change=move |ev| {
                                    if let Ok(dose) = event_target_value(&ev).parse::<u32>() {
                                        form.update(|f| if let Some(f) = f { f.dose_number = dose });
                                    }
                                }
                            >
                                {move || form.with(|f| f.as_ref().map(|f| f.dose_options()).unwrap_or_default())
                                    .into_iter()
                                    .map(|dose| view! {
                                        <option
                                            value=dose.to_string()
                                            selected=move || form.with(|f| f.as_ref().map(|f| f.dose_number) == Some(dose))
                                        >
                                            {format!("Dose {}", dose)}
                                        </option>
                                    })
                                    .collect_view()}
                            </select>
                        </label>

                        <label class="block">
                            <span class="text-sm text-gray-500">"Expected date *"</span>
                            <input
                                type="date"
                                class=input_class
                                prop:value=move || form.with(|f| {
                                    f.as_ref().and_then(|f| f.expected_date).map(|d| d.to_string()).unwrap_or_default()
                                })
                                on:input=move |ev| {
                                    let date = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
                                    form.update(|f| if let Some(f) = f { f.expected_date = date });
                                }
                            />
                        </label>

                        <label class="block">
                            <span class="text-sm text-gray-500">"Location"</span>
                            <input
                                type="text"
                                class=input_class
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.location.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| if let Some(f) = f { f.location = value });
                                }
                            />
                        </label>

                        <label class="block">
                            <span class="text-sm text-gray-500">"Notes"</span>
                            <textarea
                                class=input_class
                                prop:value=move || form.with(|f| f.as_ref().map(|f| f.notes.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| if let Some(f) = f { f.notes = value });
                                }
                            />
                        </label>

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                                   text-white rounded-lg py-3 font-semibold transition-colors"
                        >
                            {move || if submitting.get() { "Scheduling..." } else { "Schedule" }}
                        </button>
                    </form>
                }.into_view()
            }}
        </section>
    }
}
