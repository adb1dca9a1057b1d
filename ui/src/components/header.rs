//! Header component

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_signed_in = Signal::derive(move || state.customer_email.get().is_some());

    view! {
        <header class="h-16 sticky top-0 z-40 bg-white/90 backdrop-blur-sm border-b border-emerald-100">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href="/" class="flex items-center gap-2 hover:opacity-80 transition-opacity">
                    <span class="w-9 h-9 rounded-lg bg-emerald-600 text-white flex items-center justify-center text-xl">
                        "⚕"
                    </span>
                    <div>
                        <h1 class="text-xl font-bold text-emerald-700">"ApotheCare"</h1>
                        <p class="text-xs text-slate-400 -mt-0.5">"Your online pharmacy"</p>
                    </div>
                </a>

                // Navigation
                <nav class="flex items-center gap-2">
                    <a href="/" class="px-3 py-2 rounded-lg text-slate-700 hover:bg-emerald-50 transition-colors">
                        "Shop"
                    </a>
                    <Show when=move || is_signed_in.get()>
                        <a
                            href="/admin/products"
                            class="px-3 py-2 rounded-lg text-slate-700 hover:bg-emerald-50 transition-colors"
                        >
                            "Manage products"
                        </a>
                    </Show>

                    {move || {
                        if is_signed_in.get() {
                            let state = state.clone();
                            let navigate = navigate.clone();
                            view! {
                                <a
                                    href="/account"
                                    class="px-3 py-2 rounded-lg text-slate-700 hover:bg-emerald-50 transition-colors"
                                >
                                    "My account"
                                </a>
                                <button
                                    on:click=move |_| {
                                        state.sign_out();
                                        navigate("/", Default::default());
                                    }
                                    class="px-3 py-2 rounded-lg text-slate-700 hover:bg-emerald-50 transition-colors"
                                >
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        } else {
                            view! {
                                <a
                                    href="/login"
                                    class="px-4 py-2 rounded-lg bg-emerald-600 hover:bg-emerald-700 text-white font-medium transition-colors"
                                >
                                    "Sign In"
                                </a>
                            }
                                .into_any()
                        }
                    }}
                </nav>
            </div>
        </header>
    }
}
