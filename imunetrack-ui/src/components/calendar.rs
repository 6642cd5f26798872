//! Calendar Component
//!
//! Month grid with dose markers and the doses of the selected day.

use chrono::NaiveDate;
use imunetrack::calendar::{CalendarView, DayCell, WEEKDAY_LABELS};
use imunetrack::models::DoseRecord;
use imunetrack::views::StatusBadge;
use leptos::*;

#[component]
pub fn Calendar(
    user_id: i64,
    today: NaiveDate,
    #[prop(into)] records: Signal<Vec<DoseRecord>>,
) -> impl IntoView {
    let calendar = create_rw_signal(CalendarView::new(user_id, today));

    create_effect(move |_| {
        let records = records.get();
        calendar.update(|c| c.set_records(records));
    });

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <button
                    on:click=move |_| calendar.update(|c| c.prev_month())
                    class="px-3 py-1 rounded-lg hover:bg-gray-100"
                >
                    "‹"
                </button>
                <span class="font-semibold">{move || calendar.with(|c| c.month().label())}</span>
                <button
                    on:click=move |_| calendar.update(|c| c.next_month())
                    class="px-3 py-1 rounded-lg hover:bg-gray-100"
                >
                    "›"
                </button>
            </div>

            <div class="grid grid-cols-7 gap-1 text-center text-xs text-gray-500">
                {WEEKDAY_LABELS.iter().map(|label| view! { <div>{*label}</div> }).collect_view()}
            </div>

            <div class="grid grid-cols-7 gap-1">
                {move || {
                    calendar.with(|c| {
                        c.grid()
                            .cells
                            .iter()
                            .map(|cell| day_cell(c, cell, calendar))
                            .collect_view()
                    })
                }}
            </div>

            <SelectedDay calendar=calendar />
        </div>
    }
}

fn day_cell(view_state: &CalendarView, cell: &DayCell, calendar: RwSignal<CalendarView>) -> View {
    let day = cell.day();
    if !cell.is_interactive() {
        return view! {
            <div class="h-12 p-1 text-gray-300 text-sm">{day}</div>
        }
        .into_view();
    }

    let markers = view_state.markers(cell);
    let selected = view_state.selected_day() == Some(cell.date);
    let is_today = cell.date == view_state.today();

    let mut class = String::from("h-12 p-1 rounded-lg text-sm text-left hover:bg-gray-100");
    if selected {
        class.push_str(" ring-2 ring-primary-500");
    }
    if is_today {
        class.push_str(" font-bold");
    }

    view! {
        <button class=class on:click=move |_| { calendar.update(|c| { c.select_day(day); }); }>
            <div>{day}</div>
            <div class="flex space-x-1">
                {markers.into_iter().map(|m| view! {
                    <span class=format!("marker {}", m.css_class())>{m.symbol().to_string()}</span>
                }).collect_view()}
            </div>
        </button>
    }
    .into_view()
}

#[component]
fn SelectedDay(calendar: RwSignal<CalendarView>) -> impl IntoView {
    view! {
        {move || {
            calendar.with(|c| {
                let date = c.selected_day()?;
                let records: Vec<DoseRecord> = c.selected_records().into_iter().cloned().collect();

                Some(view! {
                    <div class="border-t border-gray-200 pt-4 space-y-2">
                        <div class="flex items-center justify-between">
                            <h3 class="font-semibold">{date.format("%d/%m/%Y").to_string()}</h3>
                            <button
                                on:click=move |_| calendar.update(|c| c.clear_selection())
                                class="text-sm text-gray-500"
                            >
                                "✕"
                            </button>
                        </div>
                        {if records.is_empty() {
                            view! { <p class="text-sm text-gray-500">"No vaccines on this day."</p> }.into_view()
                        } else {
                            records.into_iter().map(|r| {
                                let badge = StatusBadge::for_status(r.status);
                                view! {
                                    <div class="text-sm">
                                        <span class="font-medium">{format!("{} - dose {}", r.vaccine_name, r.dose_number)}</span>
                                        " "
                                        <span class=format!("badge {}", badge.tone.css_class())>{badge.label}</span>
                                        {r.location.map(|l| view! { <div class="text-gray-500">{l}</div> })}
                                    </div>
                                }
                            }).collect_view()
                        }}
                    </div>
                })
            })
        }}
    }
}
