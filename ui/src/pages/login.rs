//! Sign-in / create-account page

use crate::components::Header;
use crate::state::AppState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

/// Sign-in / create-account page.
///
/// The submit handler only simulates authentication: it waits a fixed
/// second, logs the attempt, records the email and navigates to the account
/// page. Nothing is verified or persisted server-side.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let is_register = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    // Redirect if already signed in
    let navigate_for_redirect = navigate.clone();
    Effect::new(move |_| {
        if state.customer_email.get().is_some() {
            navigate_for_redirect("/account", Default::default());
        }
    });

    // Handle form submission
    let navigate_for_submit = navigate.clone();
    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let is_reg = is_register.get();
        let state = state_for_submit.clone();
        let navigate = navigate_for_submit.clone();

        spawn_local(async move {
            is_loading.set(true);

            // Placeholder for a real credential check
            TimeoutFuture::new(1_000).await;

            tracing::info!(
                email = %email_val,
                register = is_reg,
                "auth attempt (stubbed, always succeeds)"
            );

            is_loading.set(false);
            state.sign_in(&email_val);
            navigate("/account", Default::default());
        });
    };

    view! {
        <Title text="Sign in • ApotheCare" />
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 flex items-center justify-center px-4 py-12">
                <div class="w-full max-w-md">
                    // Card
                    <div class="bg-white rounded-2xl shadow-lg border border-emerald-100 p-8 animate-fade-in">
                        // Header
                        <div class="text-center mb-8">
                            <h1 class="text-2xl font-bold text-emerald-700">
                                {move || if is_register.get() { "Create Account" } else { "Welcome Back" }}
                            </h1>
                            <p class="text-sm text-slate-500 mt-1">
                                {move || {
                                    if is_register.get() {
                                        "Sign up to order from ApotheCare"
                                    } else {
                                        "Sign in to continue shopping"
                                    }
                                }}
                            </p>
                        </div>

                        // Form
                        <form on:submit=on_submit class="flex flex-col gap-4">
                            // Name field (register only)
                            <Show when=move || is_register.get()>
                                <div class="animate-fade-in">
                                    <label class="block text-sm font-medium text-slate-700 mb-1">"Name"</label>
                                    <input
                                        type="text"
                                        prop:value=move || name.get()
                                        on:input=move |ev| name.set(event_target_value(&ev))
                                        placeholder="Your name"
                                        class="w-full px-3 py-2 border border-emerald-200 rounded-lg
                                               focus:outline-none focus:ring-2 focus:ring-emerald-500"
                                    />
                                </div>
                            </Show>

                            // Email field
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">"Email"</label>
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                    placeholder="you@example.com"
                                    class="w-full px-3 py-2 border border-emerald-200 rounded-lg
                                           focus:outline-none focus:ring-2 focus:ring-emerald-500"
                                />
                            </div>

                            // Password field
                            <div>
                                <label class="block text-sm font-medium text-slate-700 mb-1">"Password"</label>
                                <input
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    placeholder="••••••••"
                                    class="w-full px-3 py-2 border border-emerald-200 rounded-lg
                                           focus:outline-none focus:ring-2 focus:ring-emerald-500"
                                />
                            </div>

                            // Submit button
                            <button
                                type="submit"
                                disabled=move || is_loading.get()
                                class="w-full py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg
                                       font-medium transition-colors disabled:opacity-50
                                       flex items-center justify-center gap-2"
                            >
                                {move || {
                                    if is_loading.get() {
                                        "Signing in..."
                                    } else if is_register.get() {
                                        "Create Account"
                                    } else {
                                        "Sign In"
                                    }
                                }}
                            </button>
                        </form>

                        // Toggle login/register
                        <div class="text-center text-sm text-slate-500 mt-6">
                            {move || {
                                if is_register.get() {
                                    "Already have an account? "
                                } else {
                                    "Don't have an account? "
                                }
                            }}
                            <button
                                on:click=move |_| is_register.update(|v| *v = !*v)
                                class="text-emerald-600 hover:underline font-medium"
                            >
                                {move || if is_register.get() { "Sign in" } else { "Sign up" }}
                            </button>
                        </div>
                    </div>

                    // Demo hint
                    <div class="mt-6 bg-white rounded-xl border border-emerald-100 p-4 text-sm text-slate-500 animate-fade-in-up">
                        <p class="font-medium text-slate-700 mb-1">"Demo mode"</p>
                        <p>"Any email and password work. Accounts are not verified yet."</p>
                    </div>
                </div>
            </main>
        </div>
    }
}
