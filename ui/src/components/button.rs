//! Button component

use leptos::prelude::*;

/// Visual style of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-emerald-600 hover:bg-emerald-700 text-white shadow-sm shadow-emerald-600/25"
            }
            ButtonVariant::Secondary => {
                "bg-white hover:bg-emerald-50 text-emerald-700 border border-emerald-200"
            }
            ButtonVariant::Ghost => "bg-transparent hover:bg-emerald-50 text-slate-700",
            ButtonVariant::Danger => "bg-rose-600 hover:bg-rose-700 text-white",
        }
    }
}

/// Size of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-3 py-1.5 text-sm",
            ButtonSize::Md => "px-5 py-2.5",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        }
    }
}

/// Prop-driven button; variant and size map to fixed class strings
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = false)] disabled: bool,
    #[prop(optional, into)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {}",
        variant.classes(),
        size.classes(),
    );

    view! {
        <button
            class=classes
            disabled=disabled
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
