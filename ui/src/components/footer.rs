//! Footer component

use leptos::prelude::*;

/// Page footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 px-4 border-t border-emerald-100 text-center text-slate-400 text-sm">
            <p>"ApotheCare • Registered online pharmacy • © 2026"</p>
            <p class="mt-1">
                "Questions about medication? Ask our pharmacist assistant or call your doctor."
            </p>
        </footer>
    }
}
