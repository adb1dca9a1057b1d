//! Home/landing page

use crate::api::fetch_health;
use crate::components::{AnimatedSection, ChatWidget, Footer, Header};
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

/// Home page with hero section, category grid and the chat widget
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_signed_in = move || state.customer_email.get().is_some();

    // Probe the API once so connectivity problems surface in the console
    let api_base = state.api_base;
    Effect::new(move |_| {
        let base = api_base.get_untracked();
        spawn_local(async move {
            if let Err(e) = fetch_health(&base).await {
                tracing::warn!("API health check failed: {}", e);
            }
        });
    });

    view! {
        <Title text="ApotheCare • Your online pharmacy" />
        <div class="min-h-screen flex flex-col">
            <Header />

            // Hero section
            <AnimatedSection animation="animate-fade-in" class="flex items-center justify-center px-4 py-20">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="mb-8">
                        <div class="w-20 h-20 mx-auto rounded-2xl bg-emerald-600 text-white
                                    flex items-center justify-center text-4xl shadow-xl shadow-emerald-600/25">
                            "⚕"
                        </div>
                    </div>

                    <h1 class="text-5xl md:text-6xl font-bold mb-6 text-emerald-800">
                        "Healthcare, delivered"
                    </h1>

                    <p class="text-lg text-slate-500 mb-12 max-w-2xl mx-auto">
                        "Order over-the-counter medication, vitamins and personal care products, "
                        "with advice from our pharmacist assistant whenever you need it."
                    </p>

                    // CTA buttons
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Show
                            when=is_signed_in
                            fallback=move || {
                                view! {
                                    <a
                                        href="/login"
                                        class="px-8 py-4 bg-emerald-600 hover:bg-emerald-700 text-white rounded-xl
                                               text-lg font-semibold transition-all hover:scale-105
                                               hover:shadow-lg hover:shadow-emerald-600/25"
                                    >
                                        "Get Started"
                                    </a>
                                }
                            }
                        >
                            <a
                                href="/account"
                                class="px-8 py-4 bg-emerald-600 hover:bg-emerald-700 text-white rounded-xl
                                       text-lg font-semibold transition-all hover:scale-105
                                       hover:shadow-lg hover:shadow-emerald-600/25"
                            >
                                "My Account"
                            </a>
                        </Show>

                        <a
                            href="#categories"
                            class="px-8 py-4 bg-white hover:bg-emerald-50 border border-emerald-200
                                   text-emerald-700 rounded-xl text-lg font-semibold transition-all hover:scale-105"
                        >
                            "Browse Products"
                        </a>
                    </div>
                </div>
            </AnimatedSection>

            // Category grid
            <AnimatedSection animation="animate-fade-in-up" delay_ms=150 class="py-16 px-4 bg-white/60">
                <div id="categories" class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12 text-emerald-800">"Shop by category"</h2>

                    <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        <CategoryCard
                            icon="💊"
                            title="Pain relief"
                            description="Paracetamol, ibuprofen and more for everyday aches"
                        />
                        <CategoryCard
                            icon="🤧"
                            title="Cold & flu"
                            description="Decongestants, lozenges and fever support"
                        />
                        <CategoryCard
                            icon="🌿"
                            title="Vitamins"
                            description="Daily supplements and immune support"
                        />
                        <CategoryCard
                            icon="🩹"
                            title="First aid"
                            description="Plasters, bandages and wound care"
                        />
                        <CategoryCard
                            icon="🧴"
                            title="Skin care"
                            description="Dermatological care for sensitive skin"
                        />
                        <CategoryCard
                            icon="👶"
                            title="Baby & child"
                            description="Gentle care products for the little ones"
                        />
                    </div>
                </div>
            </AnimatedSection>

            // Why us
            <AnimatedSection animation="animate-fade-in-up" delay_ms=300 class="py-16 px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center mb-12 text-emerald-800">"Why ApotheCare"</h2>

                    <div class="grid md:grid-cols-3 gap-8">
                        <CategoryCard
                            icon="🚚"
                            title="Next-day delivery"
                            description="Ordered before 22:00, delivered tomorrow"
                        />
                        <CategoryCard
                            icon="💬"
                            title="Pharmacist assistant"
                            description="Product questions answered around the clock"
                        />
                        <CategoryCard
                            icon="🔒"
                            title="Certified pharmacy"
                            description="Registered and regulated, with discreet packaging"
                        />
                    </div>
                </div>
            </AnimatedSection>

            <Footer />
            <ChatWidget />
        </div>
    }
}

/// Category/feature card component
#[component]
fn CategoryCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="p-6 bg-white rounded-xl border border-emerald-100 hover:border-emerald-300
                    hover:shadow-md transition-all group">
            <div class="w-12 h-12 rounded-xl bg-emerald-50 flex items-center justify-center text-2xl mb-4
                        group-hover:scale-110 transition-transform">
                {icon}
            </div>
            <h3 class="text-lg font-semibold mb-2 text-slate-800">{title}</h3>
            <p class="text-sm text-slate-500">{description}</p>
        </div>
    }
}
