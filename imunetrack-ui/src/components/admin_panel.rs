//! Admin Panel Component
//!
//! User and vaccine management for administrators.

use imunetrack::views::AdminPanel;
use imunetrack::AppResult;
use leptos::*;

use crate::components::Loading;
use crate::state::global::GlobalState;

/// Which admin action is in flight, for the success toast
#[derive(Clone, Copy)]
enum Action {
    SaveUser,
    DeleteUser(i64),
    SaveVaccine,
    DeleteVaccine(i64),
    CreateVaccine,
}

impl Action {
    fn done_message(&self) -> &'static str {
        match self {
            Action::SaveUser => "User updated",
            Action::DeleteUser(_) => "User deleted",
            Action::SaveVaccine => "Vaccine updated",
            Action::DeleteVaccine(_) => "Vaccine deleted",
            Action::CreateVaccine => "Vaccine created",
        }
    }
}

async fn perform(panel: &mut AdminPanel, action: Action) -> AppResult<()> {
    match action {
        Action::SaveUser => panel.save_user().await.map(|_| ()),
        Action::DeleteUser(id) => panel.delete_user(id).await,
        Action::SaveVaccine => panel.save_vaccine().await.map(|_| ()),
        Action::DeleteVaccine(id) => panel.delete_vaccine(id).await,
        Action::CreateVaccine => panel.create_vaccine().await.map(|_| ()),
    }
}

#[component]
pub fn AdminPanelView() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let panel = create_rw_signal(None::<AdminPanel>);

    let state_for_open = state.clone();
    spawn_local(async move {
        match AdminPanel::open(&state_for_open.ctx).await {
            Ok(opened) => panel.set(Some(opened)),
            Err(e) => state_for_open.report(&e),
        }
    });

    let run = Callback::new(move |action: Action| {
        let Some(mut current) = panel.get_untracked() else {
            return;
        };
        if let Action::DeleteUser(_) | Action::DeleteVaccine(_) = action {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Delete permanently?").ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
        }
        let state = state.clone();
        spawn_local(async move {
            let result = perform(&mut current, action).await;
            panel.set(Some(current));
            match result {
                Ok(()) => state.show_success(action.done_message()),
                Err(e) => state.report(&e),
            }
        });
    });

    let ready = create_memo(move |_| panel.with(|p| p.is_some()));

    view! {
        {move || {
            if !ready.get() {
                return view! { <Loading label="Loading users and vaccines..." /> }.into_view();
            }
            view! {
                <div class="space-y-8">
                    <UsersSection panel=panel run=run />
                    <VaccinesSection panel=panel run=run />
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn UsersSection(panel: RwSignal<Option<AdminPanel>>, run: Callback<Action>) -> impl IntoView {
    let users = create_memo(move |_| panel.with(|p| p.as_ref().map(|p| p.users().to_vec()).unwrap_or_default()));
    let editing = create_memo(move |_| panel.with(|p| p.as_ref().and_then(|p| p.editing_user().map(|u| u.id))));

    view! {
        <section class="bg-white rounded-xl shadow p-6">
            <h2 class="text-xl font-semibold mb-4">"Users"</h2>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-500">
                        <th>"Name"</th><th>"Email"</th><th>"Administrator"</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || users.get().into_iter().map(|user| {
                        let id = user.id;
                        if editing.get() == Some(id) {
                            view! {
                                <tr>
                                    <td>
                                        <input
                                            class="border rounded px-2 py-1"
                                            prop:value=user.name.clone()
                                            on:input=move |ev| panel.update(|p| {
                                                if let Some(u) = p.as_mut().and_then(|p| p.editing_user_mut()) {
                                                    u.name = event_target_value(&ev);
                                                }
                                            })
                                        />
                                    </td>
                                    <td>
                                        <input
                                            class="border rounded px-2 py-1"
                                            prop:value=user.email.clone()
                                            on:input=move |ev| panel.update(|p| {
                                                if let Some(u) = p.as_mut().and_then(|p| p.editing_user_mut()) {
                                                    u.email = event_target_value(&ev);
                                                }
                                            })
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=user.is_admin
                                            on:change=move |ev| panel.update(|p| {
                                                if let Some(u) = p.as_mut().and_then(|p| p.editing_user_mut()) {
                                                    u.is_admin = event_target_checked(&ev);
                                                }
                                            })
                                        />
                                    </td>
                                    <td class="space-x-2 text-right">
                                        <button on:click=move |_| run.call(Action::SaveUser) class="text-primary-600">"Save"</button>
                                        <button
                                            on:click=move |_| panel.update(|p| if let Some(p) = p { p.cancel_user_edit() })
                                            class="text-gray-500"
                                        >
                                            "Cancel"
                                        </button>
                                    </td>
                                </tr>
                            }
                        } else {
                            view! {
                                <tr>
                                    <td>{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{if user.is_admin { "Yes" } else { "No" }}</td>
                                    <td class="space-x-2 text-right">
                                        <button
                                            on:click=move |_| panel.update(|p| if let Some(p) = p { p.edit_user(id); })
                                            class="text-primary-600"
                                        >
                                            "Edit"
                                        </button>
                                        <button on:click=move |_| run.call(Action::DeleteUser(id)) class="text-red-600">"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn VaccinesSection(panel: RwSignal<Option<AdminPanel>>, run: Callback<Action>) -> impl IntoView {
    let vaccines = create_memo(move |_| panel.with(|p| p.as_ref().map(|p| p.vaccines().to_vec()).unwrap_or_default()));
    let editing = create_memo(move |_| panel.with(|p| p.as_ref().and_then(|p| p.editing_vaccine().map(|v| v.id))));
    let draft = move || panel.with(|p| p.as_ref().map(|p| p.new_vaccine().clone()));

    view! {
        <section class="bg-white rounded-xl shadow p-6 space-y-4">
            <h2 class="text-xl font-semibold">"Vaccines"</h2>
            <table class="w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-500">
                        <th>"Name"</th><th>"Doses"</th><th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || vaccines.get().into_iter().map(|vaccine| {
                        let id = vaccine.id;
                        if editing.get() == Some(id) {
                            view! {
                                <tr>
                                    <td>
                                        <input
                                            class="border rounded px-2 py-1"
                                            prop:value=vaccine.name.clone()
                                            on:input=move |ev| panel.update(|p| {
                                                if let Some(v) = p.as_mut().and_then(|p| p.editing_vaccine_mut()) {
                                                    v.name = event_target_value(&ev);
                                                }
                                            })
                                        />
                                    </td>
                                    <td>
                                        <input
                                            type="number"
                                            min="1"
                                            class="border rounded px-2 py-1 w-20"
                                            prop:value=vaccine.doses.to_string()
                                            on:input=move |ev| panel.update(|p| {
                                                if let Some(v) = p.as_mut().and_then(|p| p.editing_vaccine_mut()) {
                                                    v.doses = event_target_value(&ev).parse().unwrap_or(0);
                                                }
                                            })
                                        />
                                    </td>
                                    <td class="space-x-2 text-right">
                                        <button on:click=move |_| run.call(Action::SaveVaccine) class="text-primary-600">"Save"</button>
                                        <button
                                            on:click=move |_| panel.update(|p| if let Some(p) = p { p.cancel_vaccine_edit() })
                                            class="text-gray-500"
                                        >
                                            "Cancel"
                                        </button>
                                    </td>
                                </tr>
                            }
                        } else {
                            view! {
                                <tr>
                                    <td>{vaccine.name.clone()}</td>
                                    <td>{vaccine.doses}</td>
                                    <td class="space-x-2 text-right">
                                        <button
                                            on:click=move |_| panel.update(|p| if let Some(p) = p { p.edit_vaccine(id); })
                                            class="text-primary-600"
                                        >
                                            "Edit"
                                        </button>
                                        <button on:click=move |_| run.call(Action::DeleteVaccine(id)) class="text-red-600">"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    }).collect_view()}
                </tbody>
            </table>

            // New vaccine
            <form
                class="flex items-end space-x-2"
                on:submit=move |ev: ev::SubmitEvent| {
                    ev.prevent_default();
                    run.call(Action::CreateVaccine);
                }
            >
                <label class="flex-1">
                    <span class="text-sm text-gray-500">"Name"</span>
                    <input
                        class="w-full border rounded px-2 py-1"
                        prop:value=move || draft().map(|d| d.name).unwrap_or_default()
                        on:input=move |ev| panel.update(|p| if let Some(p) = p { p.new_vaccine_mut().name = event_target_value(&ev) })
                    />
                </label>
                <label>
                    <span class="text-sm text-gray-500">"Doses"</span>
                    <input
                        type="number"
                        min="1"
                        class="border rounded px-2 py-1 w-20"
                        prop:value=move || draft().map(|d| d.doses.to_string()).unwrap_or_default()
                        on:input=move |ev| panel.update(|p| {
                            if let Some(p) = p {
                                p.new_vaccine_mut().doses = event_target_value(&ev).parse().unwrap_or(0);
                            }
                        })
                    />
                </label>
                <button type="submit" class="px-4 py-2 rounded-lg bg-primary-600 text-white">"Add"</button>
            </form>
        </section>
    }
}
