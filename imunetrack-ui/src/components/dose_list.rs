//! Dose List Component
//!
//! The user's history; pending doses can be selected and marked applied.

use imunetrack::models::DoseRecord;
use imunetrack::views::{today, DoseList, StatusBadge};
use leptos::*;

use crate::state::global::GlobalState;

#[component]
pub fn DoseListView(
    user_id: i64,
    records: Vec<DoseRecord>,
    on_applied: Callback<DoseRecord>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let list = create_rw_signal(DoseList::from_records(user_id, records));
    let (saving, set_saving) = create_signal(false);

    let mark_applied = move |_: ev::MouseEvent| {
        let mut current = list.get_untracked();
        let state = state.clone();
        set_saving.set(true);
        spawn_local(async move {
            let result = current.mark_selected_applied(state.ctx.history(), today()).await;
            list.set(current);
            match result {
                Ok(Some(record)) => {
                    state.show_success(&format!("{} dose {} marked as applied", record.vaccine_name, record.dose_number));
                    on_applied.call(record);
                }
                Ok(None) => {}
                Err(e) => {
                    if e.requires_login() {
                        state.report(&e);
                    }
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="bg-white rounded-xl shadow p-6 space-y-4">
            {move || list.with(|l| l.error().map(|e| view! {
                <p class="bg-red-50 text-red-700 rounded-lg px-4 py-3 text-sm">{e.to_string()}</p>
            }))}

            {move || {
                if list.with(|l| l.is_empty()) {
                    return view! {
                        <p class="text-gray-500">"No vaccines recorded yet."</p>
                    }.into_view();
                }
                let selected = list.with(|l| l.selected().map(|r| r.id));
                list.with(|l| l.records().to_vec()).into_iter().map(|record| {
                    let badge = StatusBadge::for_status(record.status);
                    let id = record.id;
                    let selectable = record.is_pending();
                    let class = match (selected == Some(id), selectable) {
                        (true, _) => "w-full flex items-center justify-between px-4 py-3 rounded-lg ring-2 ring-primary-500",
                        (false, true) => "w-full flex items-center justify-between px-4 py-3 rounded-lg hover:bg-gray-50",
                        (false, false) => "w-full flex items-center justify-between px-4 py-3 rounded-lg cursor-default",
                    };
                    view! {
                        <button
                            class=class
                            disabled=!selectable
                            on:click=move |_| { list.update(|l| { l.select(id); }); }
                        >
                            <div class="text-left">
                                <div class="font-medium">{format!("{} - dose {}", record.vaccine_name, record.dose_number)}</div>
                                <div class="text-sm text-gray-500">
                                    {record.display_date().map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()}
                                </div>
                            </div>
                            <span class=format!("badge {}", badge.tone.css_class())>{badge.label}</span>
                        </button>
                    }
                }).collect_view()
            }}

            {move || list.with(|l| l.selected().cloned()).map(|record| view! {
                <div class="flex items-center justify-between border-t border-gray-200 pt-4">
                    <span class="text-sm">{format!("Selected: {} - dose {}", record.vaccine_name, record.dose_number)}</span>
                    <div class="space-x-2">
                        <button
                            on:click=move |_| list.update(|l| l.clear_selection())
                            class="px-4 py-2 rounded-lg text-gray-600 hover:bg-gray-100"
                        >
                            "Cancel"
                        </button>
                        <button
                            on:click=mark_applied.clone()
                            disabled=move || saving.get()
                            class="px-4 py-2 rounded-lg bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400 text-white"
                        >
                            {move || if saving.get() { "Saving..." } else { "Mark as applied" }}
                        </button>
                    </div>
                </div>
            })}
        </div>
    }
}
