//! Floating pharmacist chat widget

use crate::api::send_chat_message;
use crate::state::AppState;
use crate::types::{ChatMessage, MessageRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::loading::LoadingDots;

/// Floating chat panel for the pharmacist assistant.
///
/// Messages live only in this component; closing the page drops the
/// conversation. Each send is one round trip to `/api/chatbot`.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let state = expect_context::<AppState>();

    let open = RwSignal::new(false);
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let input = RwSignal::new(String::new());
    let is_sending = RwSignal::new(false);

    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() || is_sending.get_untracked() {
            return;
        }

        input.set(String::new());
        messages.update(|m| m.push(ChatMessage::user(text.clone())));

        let base = state.api_base.get_untracked();
        spawn_local(async move {
            is_sending.set(true);

            // Server errors arrive as an `error` envelope with an apology;
            // network errors get shown the same way.
            let reply = match send_chat_message(&base, &text).await {
                Ok(reply) => reply.reply,
                Err(e) => e,
            };
            messages.update(|m| m.push(ChatMessage::assistant(reply)));

            is_sending.set(false);
        });
    };

    let on_keydown = {
        let send = send.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" && !ev.shift_key() {
                ev.prevent_default();
                send();
            }
        }
    };

    view! {
        <div class="fixed bottom-6 right-6 z-50 flex flex-col items-end gap-3">
            // Panel
            <Show when=move || open.get()>
                <div class="w-80 h-96 bg-white rounded-2xl shadow-2xl border border-emerald-100
                            flex flex-col overflow-hidden animate-fade-in-up">
                    <div class="px-4 py-3 bg-emerald-600 text-white">
                        <p class="font-semibold">"Pharmacist assistant"</p>
                        <p class="text-xs text-emerald-100">"Ask about products, orders and shipping"</p>
                    </div>

                    // Messages
                    <div class="flex-1 overflow-y-auto p-3 flex flex-col gap-2">
                        <Show when=move || messages.read().is_empty()>
                            <p class="text-sm text-slate-400 text-center mt-8">
                                "How can we help you today?"
                            </p>
                        </Show>
                        <For
                            each=move || messages.get()
                            key=|msg| msg.id.clone()
                            children=move |msg| {
                                view! { <ChatBubble message=msg /> }
                            }
                        />
                        <Show when=move || is_sending.get()>
                            <div class="px-3 py-2 bg-emerald-50 rounded-2xl rounded-tl-sm self-start">
                                <LoadingDots />
                            </div>
                        </Show>
                    </div>

                    // Input
                    <div class="p-3 border-t border-emerald-100 flex items-center gap-2">
                        <input
                            type="text"
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown.clone()
                            placeholder="Type your question..."
                            disabled=move || is_sending.get()
                            class="flex-1 px-3 py-2 text-sm bg-emerald-50 border border-emerald-100 rounded-lg
                                   focus:outline-none focus:ring-2 focus:ring-emerald-500
                                   disabled:opacity-50"
                        />
                        <button
                            on:click={
                                let send = send.clone();
                                move |_| send()
                            }
                            disabled=move || is_sending.get()
                            class="p-2 bg-emerald-600 hover:bg-emerald-700 disabled:bg-emerald-200
                                   text-white rounded-lg transition-colors"
                        >
                            "➤"
                        </button>
                    </div>
                </div>
            </Show>

            // Toggle button
            <button
                on:click=move |_| open.update(|v| *v = !*v)
                class="w-14 h-14 rounded-full bg-emerald-600 hover:bg-emerald-700 text-white text-2xl
                       shadow-lg shadow-emerald-600/30 transition-transform hover:scale-105"
            >
                {move || if open.get() { "×" } else { "💬" }}
            </button>
        </div>
    }
}

/// One chat bubble
#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;

    view! {
        <div class=format!(
            "flex flex-col max-w-[85%] {}",
            if is_user { "self-end items-end" } else { "self-start items-start" },
        )>
            <div class=format!(
                "px-3 py-2 rounded-2xl text-sm whitespace-pre-wrap break-words {}",
                if is_user {
                    "bg-emerald-600 text-white rounded-tr-sm"
                } else {
                    "bg-emerald-50 text-slate-800 rounded-tl-sm"
                },
            )>
                {message.content}
            </div>
            <span class="text-[10px] text-slate-400 mt-0.5">
                {message.timestamp.format("%H:%M").to_string()}
            </span>
        </div>
    }
}
