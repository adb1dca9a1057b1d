//! Product management page

use crate::components::{Footer, Header, ImageUploader};
use crate::types::Product;
use leptos::prelude::*;
use leptos_meta::Title;

fn demo_catalogue() -> Vec<Product> {
    vec![
        Product {
            id: "apc-paracetamol-500".to_string(),
            name: "Paracetamol 500mg".to_string(),
            description: "20 tablets, pain and fever relief".to_string(),
            price_cents: 249,
            image_url: None,
        },
        Product {
            id: "apc-ibuprofen-200".to_string(),
            name: "Ibuprofen 200mg".to_string(),
            description: "24 tablets, anti-inflammatory".to_string(),
            price_cents: 329,
            image_url: None,
        },
        Product {
            id: "apc-vitamin-d3".to_string(),
            name: "Vitamin D3 1000 IU".to_string(),
            description: "90 softgels, daily immune support".to_string(),
            price_cents: 899,
            image_url: None,
        },
        Product {
            id: "apc-saline-spray".to_string(),
            name: "Saline nasal spray".to_string(),
            description: "30ml, gentle congestion relief".to_string(),
            price_cents: 459,
            image_url: None,
        },
    ]
}

/// Product grid with a photo uploader per product.
///
/// Uploads go straight to the external product backend; the card picks up
/// the returned image URL. Upload failures land in a shared banner.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(demo_catalogue());
    let upload_error = RwSignal::new(None::<String>);

    view! {
        <Title text="Manage products • ApotheCare" />
        <div class="min-h-screen flex flex-col">
            <Header />

            <main class="flex-1 max-w-6xl mx-auto w-full px-4 py-12">
                <h1 class="text-2xl font-bold text-emerald-800 mb-2">"Manage products"</h1>
                <p class="text-slate-500 mb-8">"Upload or replace catalogue photos."</p>

                // Error banner
                <Show when=move || upload_error.read().is_some()>
                    <div class="mb-6 p-4 bg-rose-50 border border-rose-200 rounded-xl text-rose-700 text-sm animate-fade-in">
                        {move || upload_error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="grid sm:grid-cols-2 gap-6">
                    <For
                        each=move || products.get()
                        key=|p| (p.id.clone(), p.image_url.clone())
                        children=move |product| {
                            let product_id = product.id.clone();
                            let on_uploaded = Callback::new({
                                let product_id = product_id.clone();
                                move |url: String| {
                                    upload_error.set(None);
                                    products.update(|list| {
                                        if let Some(p) = list.iter_mut().find(|p| p.id == product_id) {
                                            p.image_url = Some(url.clone());
                                        }
                                    });
                                }
                            });
                            let on_error = Callback::new(move |e: String| {
                                upload_error.set(Some(e));
                            });
                            view! { <ProductCard product on_uploaded on_error /> }
                        }
                    />
                </div>
            </main>

            <Footer />
        </div>
    }
}

/// One product card with its uploader
#[component]
fn ProductCard(
    product: Product,
    on_uploaded: Callback<String>,
    on_error: Callback<String>,
) -> impl IntoView {
    let price = product.price_display();

    view! {
        <div class="bg-white rounded-xl border border-emerald-100 overflow-hidden shadow-sm">
            // Photo
            <div class="h-40 bg-emerald-50 flex items-center justify-center">
                {match &product.image_url {
                    Some(url) => view! {
                        <img src=url.clone() alt=product.name.clone() class="h-full w-full object-cover" />
                    }
                        .into_any(),
                    None => view! { <span class="text-4xl opacity-40">"💊"</span> }.into_any(),
                }}
            </div>

            <div class="p-5">
                <div class="flex items-baseline justify-between mb-1">
                    <h3 class="font-semibold text-slate-800">{product.name.clone()}</h3>
                    <span class="text-emerald-700 font-medium">{price}</span>
                </div>
                <p class="text-sm text-slate-500 mb-4">{product.description.clone()}</p>

                <ImageUploader product_id=product.id.clone() on_uploaded on_error />
            </div>
        </div>
    }
}
