//! Animated section wrapper

use leptos::prelude::*;

/// Wraps content in an entrance animation with an optional stagger delay.
///
/// Animation names map to the keyframes in `assets/styles.css`
/// (`animate-fade-in`, `animate-slide-up`, `animate-fade-in-up`).
#[component]
pub fn AnimatedSection(
    #[prop(default = "animate-slide-up")] animation: &'static str,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let style = if delay_ms > 0 {
        format!("animation-delay: {}ms", delay_ms)
    } else {
        String::new()
    };

    view! {
        <section class=format!("{} {}", animation, class) style=style>
            {children()}
        </section>
    }
}
