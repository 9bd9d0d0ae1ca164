//! Department Dashboard Page
//!
//! Operator view: alert posts, simulated fault analysis, weather alert
//! broadcasting and news management. Each section owns its store.

use chrono::{Duration, Local};
use gloo_timers::callback::Timeout;
use leptos::*;

use crate::components::InlineLoading;
use crate::metrics::{use_metrics, FaultReport};
use crate::state::global::GlobalState;
use crate::state::intake;
use crate::state::records::{
    badge_class, badge_label, fault_icon, local_timestamp, validity_label, weather_icon,
    NewsItem, Post, WeatherAlert,
};
use crate::state::store::{IdGen, RecordStore};

/// Simulated analysis delay before fault results come back.
const SCAN_DELAY_MS: u32 = 2_000;

/// Department dashboard page component
#[component]
pub fn DepartmentDashboard() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Department Operations"</h1>
                <p class="text-gray-400 mt-1">"Broadcasts, fault analysis and public updates"</p>
            </div>

            <div class="grid lg:grid-cols-2 gap-8">
                <PostBoard />
                <FaultAnalysis />
                <WeatherBroadcast />
                <NewsDesk />
            </div>
        </div>
    }
}

/// Alert post form and feed.
#[component]
fn PostBoard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let posts = create_rw_signal(RecordStore::<Post>::new());
    let ids = IdGen::new();

    let (title, set_title) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (priority, set_priority) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match intake::post(&title.get(), &message.get(), &priority.get(), &ids) {
            Ok(post) => {
                posts.update(|store| store.insert_front(post));
                set_title.set(String::new());
                set_message.set(String::new());
                set_priority.set(String::new());
                state.show_success("Alert posted successfully!");
            }
            Err(err) => state.show_error(&err.to_string()),
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Post Alert"</h2>

            <form on:submit=on_submit class="space-y-3">
                <input
                    type="text"
                    placeholder="Alert title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <textarea
                    placeholder="Alert message"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 h-24 resize-none
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <select
                    on:change=move |ev| set_priority.set(event_target_value(&ev))
                    prop:value=move || priority.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                >
                    <option value="">"Select priority"</option>
                    <option value="high">"High"</option>
                    <option value="medium">"Medium"</option>
                    <option value="low">"Low"</option>
                </select>
                <button
                    type="submit"
                    class="w-full bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Post Alert"
                </button>
            </form>

            <div class="space-y-3 mt-6">
                {move || {
                    let store = posts.get();
                    if store.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm py-6 text-center">
                                "No alerts posted yet."
                            </p>
                        }.into_view()
                    } else {
                        store.all().iter().cloned().map(|post| {
                            let id = post.id;
                            view! {
                                <div class="bg-gray-700 rounded-lg p-4">
                                    <div class="flex items-center justify-between">
                                        <h4 class="font-semibold">{post.title}</h4>
                                        <span class=format!(
                                            "text-xs px-2 py-0.5 rounded-full font-semibold {}",
                                            badge_class(&post.priority)
                                        )>
                                            {badge_label(&post.priority)}
                                        </span>
                                    </div>
                                    <p class="text-gray-300 text-sm mt-2">{post.message}</p>
                                    <div class="flex items-center justify-between mt-3 text-xs text-gray-400">
                                        <span>"Posted: " {post.posted_at}</span>
                                        <button
                                            on:click=move |_| {
                                                posts.update(|store| {
                                                    store.delete_by_id(id);
                                                });
                                                state.show_success("Post deleted");
                                            }
                                            class="px-3 py-1 bg-gray-600 hover:bg-red-600 rounded-full
                                                   transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Where a fault scan currently stands.
#[derive(Clone)]
enum ScanState {
    Idle,
    Running,
    Done(Vec<FaultReport>),
}

/// Location form plus the delayed scan results.
#[component]
fn FaultAnalysis() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let provider = use_metrics();

    let (location, set_location) = create_signal(String::new());
    let (scan, set_scan) = create_signal(ScanState::Idle);

    // Pending scan timer. Replacing the handle cancels the previous
    // callback, and component disposal drops it, so a torn-down view
    // never hears from a stale scan
    let pending = store_value(None::<Timeout>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let queried = location.get().trim().to_string();
        if queried.is_empty() {
            state.show_error("Please enter a location");
            return;
        }

        set_scan.set(ScanState::Running);
        let scanner = provider.clone();
        let timer = Timeout::new(SCAN_DELAY_MS, move || {
            set_scan.set(ScanState::Done(scanner.scan_faults(&queried)));
        });
        pending.set_value(Some(timer));
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Fault Detection"</h2>

            <form on:submit=on_submit class="flex space-x-3">
                <input
                    type="text"
                    placeholder="Area or substation"
                    prop:value=move || location.get()
                    on:input=move |ev| set_location.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="px-6 bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg
                           font-semibold transition-colors"
                >
                    "Analyze"
                </button>
            </form>

            <div class="space-y-3 mt-6">
                {move || {
                    match scan.get() {
                        ScanState::Idle => view! {
                            <p class="text-gray-400 text-sm py-6 text-center">
                                "Enter a location to analyze grid status."
                            </p>
                        }.into_view(),
                        ScanState::Running => view! {
                            <div class="flex items-center justify-center space-x-2 text-gray-400 py-6">
                                <InlineLoading />
                                <span>"Analyzing grid status..."</span>
                            </div>
                        }.into_view(),
                        ScanState::Done(reports) => reports.into_iter().map(|report| {
                            let tone = if report.is_nominal() {
                                "border-emerald-500"
                            } else {
                                "border-yellow-500"
                            };
                            view! {
                                <div class=format!("bg-gray-700 rounded-lg p-4 border-l-4 {}", tone)>
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center space-x-2">
                                            <span class="text-xl">{fault_icon(&report.kind)}</span>
                                            <span class="font-semibold">{badge_label(&report.kind)}</span>
                                        </div>
                                        <span class=format!(
                                            "text-xs px-2 py-0.5 rounded-full font-semibold {}",
                                            badge_class(&report.severity)
                                        )>
                                            {badge_label(&report.severity)}
                                        </span>
                                    </div>
                                    <p class="text-gray-300 text-sm mt-2">{report.message}</p>
                                    <div class="flex items-center justify-between mt-3 text-xs text-gray-400">
                                        <span>"Location: " {report.location}</span>
                                        <span>"Time: " {report.detected_at}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view(),
                    }
                }}
            </div>
        </section>
    }
}

/// Seed alerts so the broadcast feed starts mid-shift.
fn sample_weather_alerts(ids: &IdGen) -> Vec<WeatherAlert> {
    let now = Local::now().naive_local();
    vec![
        WeatherAlert {
            id: ids.next_id(),
            title: "Thunderstorm Warning".to_string(),
            kind: "thunderstorm".to_string(),
            severity: "warning".to_string(),
            message: "Severe thunderstorms expected this evening. High winds and heavy rain \
                      may affect solar panel efficiency. Consider switching to grid power."
                .to_string(),
            valid_until: now + Duration::hours(6),
            sent_at: local_timestamp(),
        },
        WeatherAlert {
            id: ids.next_id(),
            title: "Heat Wave Advisory".to_string(),
            kind: "heat-wave".to_string(),
            severity: "advisory".to_string(),
            message: "Temperatures expected to reach 38°C tomorrow. Solar panels will be \
                      highly efficient. Consider using renewable energy sources."
                .to_string(),
            valid_until: now + Duration::hours(24),
            sent_at: local_timestamp(),
        },
    ]
}

/// Weather alert broadcast form and feed.
#[component]
fn WeatherBroadcast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let ids = IdGen::new();
    let alerts = create_rw_signal({
        let mut store = RecordStore::<WeatherAlert>::new();
        // Reverse so the first sample ends up on top of the feed
        for alert in sample_weather_alerts(&ids).into_iter().rev() {
            store.insert_front(alert);
        }
        store
    });

    let (title, set_title) = create_signal(String::new());
    let (kind, set_kind) = create_signal(String::new());
    let (severity, set_severity) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (valid_until, set_valid_until) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match intake::weather_alert(
            &title.get(),
            &kind.get(),
            &severity.get(),
            &message.get(),
            &valid_until.get(),
            &ids,
        ) {
            Ok(alert) => {
                alerts.update(|store| store.insert_front(alert));
                set_title.set(String::new());
                set_kind.set(String::new());
                set_severity.set(String::new());
                set_message.set(String::new());
                set_valid_until.set(String::new());
                state.show_success("Weather alert broadcasted successfully!");
            }
            Err(err) => state.show_error(&err.to_string()),
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Weather Broadcast"</h2>

            <form on:submit=on_submit class="space-y-3">
                <input
                    type="text"
                    placeholder="Alert title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <div class="grid grid-cols-2 gap-3">
                    <select
                        on:change=move |ev| set_kind.set(event_target_value(&ev))
                        prop:value=move || kind.get()
                        class="bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-emerald-500 focus:outline-none"
                    >
                        <option value="">"Select type"</option>
                        <option value="thunderstorm">"Thunderstorm"</option>
                        <option value="heavy-rain">"Heavy Rain"</option>
                        <option value="snow">"Snow"</option>
                        <option value="heat-wave">"Heat Wave"</option>
                        <option value="cold-wave">"Cold Wave"</option>
                        <option value="wind">"High Wind"</option>
                        <option value="fog">"Fog"</option>
                        <option value="other">"Other"</option>
                    </select>
                    <select
                        on:change=move |ev| set_severity.set(event_target_value(&ev))
                        prop:value=move || severity.get()
                        class="bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-emerald-500 focus:outline-none"
                    >
                        <option value="">"Select severity"</option>
                        <option value="warning">"Warning"</option>
                        <option value="advisory">"Advisory"</option>
                        <option value="emergency">"Emergency"</option>
                    </select>
                </div>
                <textarea
                    placeholder="Alert message"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 h-24 resize-none
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <label class="block text-sm text-gray-400">
                    "Valid until"
                    <input
                        type="datetime-local"
                        prop:value=move || valid_until.get()
                        on:input=move |ev| set_valid_until.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 mt-1 text-white
                               border border-gray-600 focus:border-emerald-500 focus:outline-none"
                    />
                </label>
                <button
                    type="submit"
                    class="w-full bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Broadcast Alert"
                </button>
            </form>

            <div class="space-y-3 mt-6">
                {move || {
                    let store = alerts.get();
                    if store.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm py-6 text-center">
                                "No weather alerts sent yet."
                            </p>
                        }.into_view()
                    } else {
                        // Validity is recomputed on every rebuild, so an
                        // alert can flip to EXPIRED with no mutation
                        let now = Local::now().naive_local();
                        store.all().iter().cloned().map(|alert| {
                            let id = alert.id;
                            let validity = validity_label(alert.valid_until, now);
                            let validity_tone = if validity == "ACTIVE" {
                                "bg-emerald-500 text-black"
                            } else {
                                "bg-red-500 text-white"
                            };
                            view! {
                                <div class="bg-gray-700 rounded-lg p-4">
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center space-x-2">
                                            <span class="text-xl">{weather_icon(&alert.kind)}</span>
                                            <h4 class="font-semibold">{alert.title}</h4>
                                        </div>
                                        <div class="flex items-center space-x-2">
                                            <span class=format!(
                                                "text-xs px-2 py-0.5 rounded-full font-semibold {}",
                                                badge_class(&alert.severity)
                                            )>
                                                {badge_label(&alert.severity)}
                                            </span>
                                            <span class=format!(
                                                "text-xs px-2 py-0.5 rounded-full font-semibold {}",
                                                validity_tone
                                            )>
                                                {validity}
                                            </span>
                                        </div>
                                    </div>
                                    <p class="text-gray-300 text-sm mt-2">{alert.message}</p>
                                    <div class="flex items-center justify-between mt-3 text-xs text-gray-400">
                                        <div class="space-x-4">
                                            <span>
                                                "Valid until: "
                                                {alert.valid_until.format("%d/%m/%Y, %H:%M").to_string()}
                                            </span>
                                            <span>"Sent: " {alert.sent_at}</span>
                                        </div>
                                        <button
                                            on:click=move |_| {
                                                alerts.update(|store| {
                                                    store.delete_by_id(id);
                                                });
                                                state.show_success("Weather alert deleted");
                                            }
                                            class="px-3 py-1 bg-gray-600 hover:bg-red-600 rounded-full
                                                   transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}

/// News article form and feed.
#[component]
fn NewsDesk() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let news = create_rw_signal(RecordStore::<NewsItem>::new());
    let ids = IdGen::new();

    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (category, set_category) = create_signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match intake::news(&title.get(), &content.get(), &category.get(), &ids) {
            Ok(item) => {
                news.update(|store| store.insert_front(item));
                set_title.set(String::new());
                set_content.set(String::new());
                set_category.set(String::new());
                state.show_success("News article added successfully!");
            }
            Err(err) => state.show_error(&err.to_string()),
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"News Management"</h2>

            <form on:submit=on_submit class="space-y-3">
                <input
                    type="text"
                    placeholder="Article title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <textarea
                    placeholder="Article content"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 h-24 resize-none
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                />
                <select
                    on:change=move |ev| set_category.set(event_target_value(&ev))
                    prop:value=move || category.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-emerald-500 focus:outline-none"
                >
                    <option value="">"Select category"</option>
                    <option value="maintenance">"Maintenance"</option>
                    <option value="updates">"Updates"</option>
                    <option value="outage">"Outage"</option>
                    <option value="general">"General"</option>
                </select>
                <button
                    type="submit"
                    class="w-full bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg py-3
                           font-semibold transition-colors"
                >
                    "Publish Article"
                </button>
            </form>

            <div class="space-y-3 mt-6">
                {move || {
                    let store = news.get();
                    if store.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm py-6 text-center">
                                "No news articles yet."
                            </p>
                        }.into_view()
                    } else {
                        store.all().iter().cloned().map(|item| {
                            let id = item.id;
                            view! {
                                <div class="bg-gray-700 rounded-lg p-4">
                                    <div class="flex items-center justify-between">
                                        <h4 class="font-semibold">{item.title}</h4>
                                        <span class=format!(
                                            "text-xs px-2 py-0.5 rounded-full font-semibold {}",
                                            badge_class(&item.category)
                                        )>
                                            {badge_label(&item.category)}
                                        </span>
                                    </div>
                                    <p class="text-gray-300 text-sm mt-2">{item.content}</p>
                                    <div class="flex items-center justify-between mt-3 text-xs text-gray-400">
                                        <span>"Published: " {item.published_at}</span>
                                        <button
                                            on:click=move |_| {
                                                news.update(|store| {
                                                    store.delete_by_id(id);
                                                });
                                                state.show_success("News article deleted");
                                            }
                                            class="px-3 py-1 bg-gray-600 hover:bg-red-600 rounded-full
                                                   transition-colors"
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
