//! User Dashboard Page
//!
//! Resident view: grid notices, weekly consumption, weather and the
//! appliance energy calculator.

use leptos::*;

use crate::components::BarChart;
use crate::metrics::{self, use_metrics};
use crate::state::global::GlobalState;
use crate::state::intake;
use crate::state::records::{daily_cost, total_daily_kwh, Appliance};
use crate::state::store::{IdGen, RecordStore};

/// Chart labels for the weekly consumption readings.
const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Notice feed filter chips.
const FILTERS: [(&str, &str); 4] = [
    ("all", "All"),
    ("grid", "Grid"),
    ("solar", "Solar"),
    ("weather", "Weather"),
];

/// User dashboard page component
#[component]
pub fn UserDashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"My Energy"</h1>
                <p class="text-gray-400 mt-1">"Grid notices, consumption and planning tools"</p>
            </div>

            <NoticeFeed />

            <div class="grid md:grid-cols-2 gap-8">
                <ConsumptionPanel />
                <WeatherPanel />
            </div>

            <AppliancePlanner />
        </div>
    }
}

/// Grid/solar/weather notices with filter chips.
#[component]
fn NoticeFeed() -> impl IntoView {
    let provider = use_metrics();
    let notices = provider.grid_notices();
    let (filter, set_filter) = create_signal("all");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Grid Notices"</h2>
                <div class="flex space-x-2">
                    {FILTERS.into_iter().map(|(value, label)| view! {
                        <FilterChip
                            value=value
                            label=label
                            current=filter
                            on_click=move |_| set_filter.set(value)
                        />
                    }).collect_view()}
                </div>
            </div>

            <div class="space-y-3">
                {move || {
                    let shown: Vec<_> = notices.iter()
                        .filter(|n| filter.get() == "all" || n.kind == filter.get())
                        .cloned()
                        .collect();

                    if shown.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm py-6 text-center">
                                "No notices in this category."
                            </p>
                        }.into_view()
                    } else {
                        shown.into_iter().map(|notice| view! {
                            <div class="flex items-start space-x-3 bg-gray-700 rounded-lg p-4">
                                <span class="text-2xl">{notice.icon}</span>
                                <div class="flex-1">
                                    <h4 class="font-semibold">{notice.title}</h4>
                                    <p class="text-gray-300 text-sm">{notice.message}</p>
                                </div>
                                <span class="text-gray-400 text-xs whitespace-nowrap">{notice.age}</span>
                            </div>
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Filter chip, one active at a time.
#[component]
fn FilterChip(
    value: &'static str,
    label: &'static str,
    current: ReadSignal<&'static str>,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class=move || {
                let base = "px-3 py-1 rounded-full text-sm font-medium transition-colors";
                if current.get() == value {
                    format!("{} bg-emerald-500 text-black", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Weekly consumption chart plus the derived stats row.
#[component]
fn ConsumptionPanel() -> impl IntoView {
    let provider = use_metrics();
    let days = provider.daily_consumption();

    let today = days.last().copied().unwrap_or(0.0);
    let week = metrics::week_total(&days);
    let month = metrics::month_estimate(week);

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Weekly Consumption"</h2>

            <BarChart values=days labels=WEEKDAYS.to_vec() />

            <div class="grid grid-cols-3 gap-4 mt-4 text-center">
                <ConsumptionStat label="Today" kwh=today />
                <ConsumptionStat label="This Week" kwh=week />
                <ConsumptionStat label="This Month" kwh=month />
            </div>
        </section>
    }
}

#[component]
fn ConsumptionStat(label: &'static str, kwh: f64) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg py-3">
            <div class="text-lg font-bold">{format!("{:.1} kWh", kwh)}</div>
            <div class="text-gray-400 text-xs">{label}</div>
        </div>
    }
}

/// Simulated weather snapshot and short-range forecast.
#[component]
fn WeatherPanel() -> impl IntoView {
    let provider = use_metrics();
    let now = provider.current_weather();
    let forecast = provider.forecast();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Weather"</h2>

            <div class="flex items-center space-x-4">
                <span class="text-5xl">"⛅"</span>
                <div>
                    <div class="text-3xl font-bold">{format!("{:.1}°C", now.temp_c)}</div>
                    <div class="text-gray-400">{now.description}</div>
                </div>
            </div>

            <div class="grid grid-cols-3 gap-2 mt-4 text-sm text-gray-300">
                <span>{format!("Wind: {:.1} km/h", now.wind_kmh)}</span>
                <span>{format!("Humidity: {:.0}%", now.humidity_pct)}</span>
                <span>{format!("UV: {:.1}", now.uv_index)}</span>
            </div>

            <div class="flex justify-between mt-6">
                {forecast.into_iter().map(|day| view! {
                    <div class="flex flex-col items-center space-y-1 bg-gray-700 rounded-lg px-3 py-2">
                        <span class="text-xs text-gray-400">{day.day}</span>
                        <span>"⛅"</span>
                        <span class="text-sm font-semibold">{format!("{:.0}°C", day.temp_c)}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Appliance store plus the totals derived from its snapshot.
#[component]
fn AppliancePlanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Store and id source for this page region
    let appliances = create_rw_signal(RecordStore::<Appliance>::new());
    let ids = IdGen::new();

    let (name, set_name) = create_signal(String::new());
    let (watts, set_watts) = create_signal(String::new());
    let (hours, set_hours) = create_signal(String::new());
    let (tariff, set_tariff) = create_signal("8".to_string());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match intake::appliance(&name.get(), &watts.get(), &hours.get(), &ids) {
            Ok(appliance) => {
                appliances.update(|store| store.insert_front(appliance));
                set_name.set(String::new());
                set_watts.set(String::new());
                set_hours.set(String::new());
            }
            Err(err) => state.show_error(&err.to_string()),
        }
    };

    // Recomputed from the snapshot on every change
    let daily = move || appliances.with(|store| total_daily_kwh(store.all()));
    let cost = move || {
        let rate: f64 = tariff.get().trim().parse().unwrap_or(0.0);
        daily_cost(daily(), rate)
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Appliance Energy Calculator"</h2>

            <form on:submit=on_add class="grid md:grid-cols-4 gap-3">
                <input
                    type="text"
                    placeholder="Appliance name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <input
                    type="number"
                    placeholder="Watts"
                    prop:value=move || watts.get()
                    on:input=move |ev| set_watts.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <input
                    type="number"
                    placeholder="Hours per day"
                    prop:value=move || hours.get()
                    on:input=move |ev| set_hours.set(event_target_value(&ev))
                    class="bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Add Appliance"
                </button>
            </form>

            <div class="space-y-2 mt-6">
                {move || {
                    let store = appliances.get();
                    if store.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm py-6 text-center">
                                "No appliances added yet."
                            </p>
                        }.into_view()
                    } else {
                        store.all().iter().cloned().map(|item| {
                            let id = item.id;
                            view! {
                                <div class="flex items-center justify-between bg-gray-700 rounded-lg px-4 py-3">
                                    <div class="flex items-center space-x-3">
                                        <span class="text-xl">"🔌"</span>
                                        <div>
                                            <div class="font-medium">{item.name}</div>
                                            <div class="text-gray-400 text-sm">
                                                {format!("{}W · {}h/day", item.watts, item.hours)}
                                            </div>
                                        </div>
                                    </div>
                                    <button
                                        on:click=move |_| appliances.update(|store| {
                                            store.delete_by_id(id);
                                        })
                                        class="px-3 py-1 bg-gray-600 hover:bg-red-600 rounded-full
                                               text-sm transition-colors"
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>

            // Tariff input and derived totals
            <div class="flex flex-wrap items-center justify-between gap-4 mt-6 bg-gray-700 rounded-lg px-4 py-3">
                <label class="flex items-center space-x-2 text-sm text-gray-300">
                    <span>"Cost per kWh (₹)"</span>
                    <input
                        type="number"
                        prop:value=move || tariff.get()
                        on:input=move |ev| set_tariff.set(event_target_value(&ev))
                        class="w-20 bg-gray-800 rounded px-2 py-1
                               border border-gray-600 focus:border-emerald-500 focus:outline-none"
                    />
                </label>
                <span class="font-semibold">
                    "Daily usage: " {move || format!("{:.2} kWh", daily())}
                </span>
                <span class="font-semibold">
                    "Daily cost: " {move || format!("₹{:.2}", cost())}
                </span>
            </div>
        </section>
    }
}
