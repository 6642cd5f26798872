//! Dashboard Page
//!
//! Sidebar with tabs, statistics, calendar, history, scheduling and
//! administration.

use imunetrack::models::DoseRecord;
use imunetrack::views::{today, DashboardView, Tab};
use leptos::*;

use crate::components::{AdminPanelView, Calendar, DoseListView, ListSkeleton, ScheduleFormView, Sidebar};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let dashboard = create_rw_signal(None::<DashboardView>);
    let (loading, set_loading) = create_signal(true);

    let state_for_load = state.clone();
    let reload = Callback::new(move |refresh: bool| {
        let Some(mut view) = dashboard.get_untracked() else {
            return;
        };
        let state = state_for_load.clone();
        set_loading.set(true);
        spawn_local(async move {
            let result = if refresh {
                view.refresh().await
            } else {
                view.load().await
            };
            // The tab may have changed while loading; only take what was fetched
            dashboard.update(|d| if let Some(d) = d { d.absorb(view) });
            if let Err(e) = result {
                state.report(&e);
            }
            set_loading.set(false);
        });
    });

    // Open on mount; without a stored user this sends the visitor to /login
    match DashboardView::open(&state.ctx) {
        Ok(view) => {
            dashboard.set(Some(view));
            reload.call(false);
        }
        Err(e) => state.report(&e),
    }

    let records = create_memo(move |_| {
        dashboard.with(|d| d.as_ref().map(|d| d.records().to_vec()).unwrap_or_default())
    });
    let user_id = create_memo(move |_| dashboard.with(|d| d.as_ref().map(|d| d.user().id)));
    let tabs = create_memo(move |_| dashboard.with(|d| d.as_ref().map(|d| d.tabs()).unwrap_or_default()));
    let active = create_memo(move |_| dashboard.with(|d| d.as_ref().map(|d| d.tab()).unwrap_or(Tab::Overview)));

    let state_for_tabs = state.clone();
    let on_select = Callback::new(move |tab: Tab| {
        let mut result = Ok(());
        dashboard.update(|d| {
            if let Some(d) = d {
                result = d.select_tab(tab);
            }
        });
        if let Err(e) = result {
            state_for_tabs.report(&e);
        }
    });

    view! {
        <div class="flex min-h-screen">
            <Sidebar tabs=tabs active=active on_select=on_select />

            <section class="flex-1 p-8 space-y-8">
                <header>
                    <h1 class="text-3xl font-bold">
                        {move || dashboard.with(|d| d.as_ref().map(|d| d.greeting()).unwrap_or_default())}
                    </h1>
                    <p class="text-gray-500 mt-1">{move || active.get().label()}</p>
                </header>

                {move || {
                    let Some(user_id) = user_id.get() else {
                        return view! {}.into_view();
                    };
                    match active.get() {
                        Tab::Overview => view! {
                            <Overview dashboard=dashboard loading=loading records=records />
                        }.into_view(),
                        Tab::Schedule => view! {
                            <ScheduleFormView dashboard=dashboard />
                        }.into_view(),
                        Tab::History => {
                            if loading.get() {
                                view! { <ListSkeleton count=4 /> }.into_view()
                            } else {
                                view! {
                                    <DoseListView
                                        user_id=user_id
                                        records=records.get()
                                        on_applied=Callback::new(move |_| reload.call(false))
                                    />
                                }.into_view()
                            }
                        }
                        Tab::Admin => view! { <AdminPanelView /> }.into_view(),
                    }
                }}
            </section>
        </div>
    }
}

/// Stat cards, calendar and upcoming doses
#[component]
fn Overview(
    dashboard: RwSignal<Option<DashboardView>>,
    loading: ReadSignal<bool>,
    #[prop(into)] records: Signal<Vec<DoseRecord>>,
) -> impl IntoView {
    let cards = move || dashboard.with(|d| d.as_ref().map(|d| d.stat_cards()));
    let upcoming = move || {
        dashboard.with(|d| {
            d.as_ref()
                .and_then(|d| d.stats())
                .map(|s| s.upcoming.clone())
                .unwrap_or_default()
        })
    };
    let user_id = dashboard.with_untracked(|d| d.as_ref().map(|d| d.user().id).unwrap_or_default());

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-3 gap-4">
                {move || cards().map(|cards| {
                    cards.into_iter().map(|(label, count)| view! {
                        <div class="bg-white rounded-xl shadow p-6">
                            <div class="text-sm text-gray-500">{label}</div>
                            <div class="text-3xl font-bold">
                                {move || if loading.get() { "…".to_string() } else { count.to_string() }}
                            </div>
                        </div>
                    }).collect_view()
                })}
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Calendar"</h2>
                    <Calendar user_id=user_id today=today() records=records />
                </section>

                <section class="bg-white rounded-xl shadow p-6">
                    <h2 class="text-xl font-semibold mb-4">"Upcoming doses"</h2>
                    {move || {
                        let upcoming = upcoming();
                        if upcoming.is_empty() {
                            view! { <p class="text-gray-500">"Nothing scheduled."</p> }.into_view()
                        } else {
                            view! {
                                <ul class="space-y-2">
                                    {upcoming.into_iter().map(|dose| view! {
                                        <li class="flex justify-between">
                                            <span>{format!("{} (dose {})", dose.vaccine, dose.dose)}</span>
                                            <span class="text-gray-500">
                                                {dose.expected_date.map(|d| d.format("%d/%m/%Y").to_string()).unwrap_or_default()}
                                            </span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
