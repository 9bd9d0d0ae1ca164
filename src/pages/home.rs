//! Landing Page
//!
//! Public page with the boot overlay, login/signup tabs and the role
//! choice that decides which dashboard a submit navigates to.

use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::components::BootOverlay;
use crate::state::global::GlobalState;

/// How long the boot overlay stays up, in milliseconds.
const BOOT_MS: u32 = 3_000;

/// Which auth form is visible.
#[derive(Clone, Copy, PartialEq)]
enum AuthTab {
    Login,
    Signup,
}

/// Mutually-exclusive account role radio.
#[derive(Clone, Copy, PartialEq)]
enum Role {
    User,
    Department,
}

impl Role {
    fn dashboard_path(self) -> &'static str {
        match self {
            Role::User => "/user",
            Role::Department => "/department",
        }
    }
}

/// Landing page component
#[component]
pub fn Home() -> impl IntoView {
    let (booting, set_booting) = create_signal(true);
    let (tab, set_tab) = create_signal(AuthTab::Login);

    // Boot overlay for a few seconds; dropped (cancelled) if the page
    // unmounts first
    let boot_timer = Timeout::new(BOOT_MS, move || set_booting.set(false));
    on_cleanup(move || drop(boot_timer));

    view! {
        {move || {
            if booting.get() {
                view! { <BootOverlay /> }.into_view()
            } else {
                view! {}.into_view()
            }
        }}

        <div class="max-w-xl mx-auto space-y-8">
            // Hero copy
            <section class="text-center space-y-2 pt-8">
                <h1 class="text-4xl font-bold">"Power the switch to solar"</h1>
                <p class="text-gray-400">
                    "Track consumption, follow grid alerts and plan your appliance usage."
                </p>
            </section>

            <section class="bg-gray-800 rounded-xl p-6 space-y-6">
                // Tab switcher
                <div class="flex space-x-2">
                    <TabButton
                        label="Login"
                        current=tab
                        target=AuthTab::Login
                        on_click=move |_| set_tab.set(AuthTab::Login)
                    />
                    <TabButton
                        label="Sign Up"
                        current=tab
                        target=AuthTab::Signup
                        on_click=move |_| set_tab.set(AuthTab::Signup)
                    />
                </div>

                {move || {
                    match tab.get() {
                        AuthTab::Login => view! { <LoginForm /> }.into_view(),
                        AuthTab::Signup => view! { <SignupForm /> }.into_view(),
                    }
                }}
            </section>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<AuthTab>,
    target: AuthTab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-400 hover:text-white", base)
                }
            }
        >
            {label}
        </button>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(None::<Role>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // No backend: the chosen role is the whole login
        match role.get() {
            Some(role) => navigate(role.dashboard_path(), NavigateOptions::default()),
            None => state.show_success("Login successful!"),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <TextField
                label="Email"
                kind="email"
                placeholder="you@example.com"
                value=email
                set_value=set_email
            />
            <TextField
                label="Password"
                kind="password"
                placeholder="••••••••"
                value=password
                set_value=set_password
            />

            <RolePicker group="login-role" role=role set_role=set_role />

            <button
                type="submit"
                class="w-full bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg py-3
                       font-semibold transition-colors"
            >
                "Login"
            </button>
        </form>
    }
}

#[component]
fn SignupForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (role, set_role) = create_signal(None::<Role>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match role.get() {
            Some(role) => navigate(role.dashboard_path(), NavigateOptions::default()),
            None => state.show_success("Account created successfully!"),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <TextField
                label="Name"
                kind="text"
                placeholder="Your name"
                value=name
                set_value=set_name
            />
            <TextField
                label="Email"
                kind="email"
                placeholder="you@example.com"
                value=email
                set_value=set_email
            />
            <TextField
                label="Password"
                kind="password"
                placeholder="Pick a password"
                value=password
                set_value=set_password
            />

            <RolePicker group="signup-role" role=role set_role=set_role />

            <button
                type="submit"
                class="w-full bg-emerald-500 hover:bg-emerald-400 text-black rounded-lg py-3
                       font-semibold transition-colors"
            >
                "Create Account"
            </button>
        </form>
    }
}

#[component]
fn TextField(
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-emerald-500 focus:outline-none"
            />
        </div>
    }
}

/// Radio pair selecting which dashboard a submit lands on.
#[component]
fn RolePicker(
    group: &'static str,
    role: ReadSignal<Option<Role>>,
    set_role: WriteSignal<Option<Role>>,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-6">
            <label class="flex items-center space-x-2 cursor-pointer">
                <input
                    type="radio"
                    name=group
                    on:change=move |_| set_role.set(Some(Role::User))
                    prop:checked=move || role.get() == Some(Role::User)
                />
                <span class="text-sm text-gray-300">"Regular User"</span>
            </label>
            <label class="flex items-center space-x-2 cursor-pointer">
                <input
                    type="radio"
                    name=group
                    on:change=move |_| set_role.set(Some(Role::Department))
                    prop:checked=move || role.get() == Some(Role::Department)
                />
                <span class="text-sm text-gray-300">"Electricity Department"</span>
            </label>
        </div>
    }
}
