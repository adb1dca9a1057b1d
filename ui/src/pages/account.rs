//! Customer account landing page

use crate::components::{Button, ButtonVariant, ChatWidget, Footer, Header};
use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

/// Landing page after the (simulated) sign-in
#[component]
pub fn AccountPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Not signed in: back to the form
    let navigate_for_redirect = navigate.clone();
    Effect::new(move |_| {
        if state.customer_email.get().is_none() {
            navigate_for_redirect("/login", Default::default());
        }
    });

    let greeting = move || {
        state
            .customer_email
            .get()
            .map(|email| format!("Welcome back, {}", email))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <Title text="My account • ApotheCare" />
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 max-w-4xl mx-auto w-full px-4 py-12">
                <div class="bg-white rounded-2xl border border-emerald-100 shadow-sm p-8 animate-fade-in">
                    <h1 class="text-2xl font-bold text-emerald-800 mb-2">{greeting}</h1>
                    <p class="text-slate-500 mb-8">
                        "Your orders, prescriptions and saved products will appear here."
                    </p>

                    <div class="grid sm:grid-cols-2 gap-4 mb-8">
                        <a
                            href="/"
                            class="p-5 rounded-xl border border-emerald-100 hover:border-emerald-300
                                   hover:shadow-sm transition-all"
                        >
                            <p class="text-2xl mb-2">"🛒"</p>
                            <p class="font-semibold text-slate-800">"Continue shopping"</p>
                            <p class="text-sm text-slate-500">"Browse the full catalogue"</p>
                        </a>
                        <a
                            href="/admin/products"
                            class="p-5 rounded-xl border border-emerald-100 hover:border-emerald-300
                                   hover:shadow-sm transition-all"
                        >
                            <p class="text-2xl mb-2">"🖼"</p>
                            <p class="font-semibold text-slate-800">"Manage products"</p>
                            <p class="text-sm text-slate-500">"Update catalogue photos"</p>
                        </a>
                    </div>

                    // Clearing the email sends the redirect effect to /login
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=Callback::new({
                            let state = state.clone();
                            move |_| state.sign_out()
                        })
                    >
                        "Sign out"
                    </Button>
                </div>
            </main>

            <Footer />
            <ChatWidget />
        </div>
    }
}
