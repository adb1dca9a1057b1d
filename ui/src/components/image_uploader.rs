//! Product image uploader

use crate::api::upload_product_image;
use crate::state::AppState;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::loading::LoadingSpinner;

/// Single-file upload widget for product photos.
///
/// Holds one selected file and an upload-in-progress flag. Upload issues a
/// single call to the product backend; success hands the returned image URL
/// to `on_uploaded` and clears the selection, failure hands the message to
/// `on_error` and keeps the selection so the user can retry by hand.
#[component]
pub fn ImageUploader(
    /// Product the image belongs to
    product_id: String,
    /// Called with the stored image URL after a successful upload
    on_uploaded: Callback<String>,
    /// Called with an error message when the upload fails
    on_error: Callback<String>,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    // File handles are JS objects, so the signal stays on this thread
    let selected_file = RwSignal::new_local(None::<web_sys::File>);
    let is_uploading = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        selected_file.set(input.files().and_then(|list| list.get(0)));
    };

    let on_upload = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            return;
        };
        if is_uploading.get_untracked() {
            return;
        }

        let base = state.product_api_base.get_untracked();
        let product_id = product_id.clone();

        spawn_local(async move {
            is_uploading.set(true);

            match upload_product_image(&base, &product_id, file).await {
                Ok(url) => {
                    selected_file.set(None);
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    on_uploaded.run(url);
                }
                Err(e) => {
                    tracing::error!("image upload failed: {}", e);
                    on_error.run(e);
                }
            }

            is_uploading.set(false);
        });
    };

    let has_file = move || selected_file.read().is_some();
    let file_name = move || {
        selected_file
            .read()
            .as_ref()
            .map(|f| f.name())
            .unwrap_or_else(|| "No photo selected".to_string())
    };

    view! {
        <div class="flex items-center gap-3">
            <label class="px-3 py-1.5 text-sm rounded-lg border border-emerald-200 text-emerald-700
                          hover:bg-emerald-50 cursor-pointer transition-colors">
                "Choose photo"
                <input
                    node_ref=input_ref
                    type="file"
                    accept="image/*"
                    class="hidden"
                    on:change=on_file_change
                />
            </label>

            <span class="text-sm text-slate-500 truncate max-w-[10rem]">{file_name}</span>

            <button
                on:click=on_upload
                disabled=move || !has_file() || is_uploading.get()
                class="px-3 py-1.5 text-sm rounded-lg bg-emerald-600 hover:bg-emerald-700 text-white
                       disabled:opacity-50 disabled:cursor-not-allowed transition-colors
                       flex items-center gap-2"
            >
                <Show when=move || is_uploading.get()>
                    <LoadingSpinner size="w-4 h-4" />
                </Show>
                {move || if is_uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
        </div>
    }
}
