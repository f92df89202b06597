//! Shared form widgets used by both views.
//!
//! ARCHITECTURE
//! ============
//! Components here are presentational only; pages own the signals they bind.

use leptos::prelude::*;

/// Labeled text input bound to a string signal.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Status line shown under a form; hidden while the message is empty.
#[component]
pub fn Notice(message: RwSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="notice">{move || message.get()}</p>
        </Show>
    }
}
