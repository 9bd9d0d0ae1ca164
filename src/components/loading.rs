//! Loading Component
//!
//! Boot overlay and loading spinners.

use leptos::*;

/// Full-screen overlay shown while the landing page "initializes".
#[component]
pub fn BootOverlay() -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 bg-gray-900 flex flex-col items-center justify-center space-y-4">
            <span class="text-4xl">"⚡"</span>
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400">"Connecting to the grid..."</p>
        </div>
    }
}

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
