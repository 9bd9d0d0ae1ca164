//! Toast Notification Component
//!
//! Transient, non-blocking messages with timed dismissal.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-5 right-5 z-50 space-y-2">
            // Success toast
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Success />
                })
            }}

            // Error toast
            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg variant=ToastVariant::Error />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let (icon, tone_class) = match variant {
        ToastVariant::Success => ("✓", "bg-gradient-to-r from-emerald-400 to-cyan-400 text-black"),
        ToastVariant::Error => ("✕", "bg-red-600 text-white"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} px-4 py-3 rounded-lg shadow-lg font-semibold \
             transform transition-all duration-300 ease-out animate-slide-in",
            tone_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm">{message}</span>
        </div>
    }
}
