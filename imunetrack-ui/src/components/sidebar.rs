//! Sidebar Component
//!
//! Dashboard navigation: tabs, settings and logout.

use imunetrack::views::Tab;
use leptos::*;

use crate::state::global::GlobalState;

fn tab_icon(tab: Tab) -> &'static str {
    match tab {
        Tab::Overview => "🏠",
        Tab::Schedule => "📅",
        Tab::History => "📋",
        Tab::Admin => "🛠",
    }
}

#[component]
pub fn Sidebar(
    #[prop(into)] tabs: Signal<Vec<Tab>>,
    #[prop(into)] active: Signal<Tab>,
    on_select: Callback<Tab>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user = state.user;
    let settings_open = state.settings_open;

    view! {
        <aside class="w-64 bg-white border-r border-gray-200 flex flex-col">
            <div class="px-6 py-5 border-b border-gray-200">
                <div class="text-xl font-bold">"💉 Imunetrack"</div>
                <div class="text-sm text-gray-500 mt-1">
                    {move || user.get().map(|u| u.name).unwrap_or_default()}
                </div>
            </div>

            <nav class="flex-1 px-3 py-4 space-y-1">
                {move || tabs.get().into_iter().map(|tab| view! {
                    <button
                        id=tab.id()
                        on:click=move |_| on_select.call(tab)
                        class=move || {
                            let base = "w-full text-left px-4 py-2 rounded-lg flex items-center space-x-3 transition-colors";
                            if active.get() == tab {
                                format!("{} bg-primary-600 text-white", base)
                            } else {
                                format!("{} text-gray-700 hover:bg-gray-100", base)
                            }
                        }
                    >
                        <span>{tab_icon(tab)}</span>
                        <span>{tab.label()}</span>
                    </button>
                }).collect_view()}
            </nav>

            <div class="px-3 py-4 border-t border-gray-200 space-y-1">
                <button
                    on:click=move |_| settings_open.set(true)
                    class="w-full text-left px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
                >
                    "⚙ Settings"
                </button>
                <button
                    on:click=move |_| state.logout()
                    class="w-full text-left px-4 py-2 rounded-lg text-red-600 hover:bg-red-50"
                >
                    "Log out"
                </button>
            </div>
        </aside>
    }
}
