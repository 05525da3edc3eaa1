//! Input Field Components
//!
//! Labelled inputs that reflect their validation state.
//! Features:
//! - `valid` class once the value passes its rule
//! - `error` class flashed for [`ERROR_FLASH`] on a failed check

use dioxus::prelude::*;
use tinygames_core::forms::ERROR_FLASH;
use tinygames_core::FieldState;

/// Flash the error highlight on a field, then fall back to neutral.
///
/// A state that changed in the meantime (e.g. the user fixed the value) is
/// left alone.
pub fn flash_error(mut state: Signal<FieldState>) {
    tracing::trace!(flash_ms = ERROR_FLASH.as_millis() as u64, "Flashing field error");
    state.set(FieldState::Error);
    spawn(async move {
        tokio::time::sleep(ERROR_FLASH).await;
        if *state.peek() == FieldState::Error {
            state.set(FieldState::Neutral);
        }
    });
}

/// Join a base class with the state class, skipping the empty neutral class
pub fn field_class(base: &str, state: FieldState) -> String {
    match state.class() {
        "" => base.to_string(),
        extra => format!("{} {}", base, extra),
    }
}

/// Properties for the ValidatedInput component
#[derive(Clone, PartialEq, Props)]
pub struct ValidatedInputProps {
    /// Element id, also used for the label
    pub id: String,
    /// Label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Current validation state
    #[props(default)]
    pub state: FieldState,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Handler called when the field loses focus
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// Input type (text, email, date, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
}

/// Text input with label and validation feedback
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
/// let mut email_state = use_signal(FieldState::default);
///
/// rsx! {
///     ValidatedInput {
///         id: "correo".to_string(),
///         label: "Correo electrónico".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         state: email_state(),
///         oninput: move |s: String| {
///             email_state.set(FieldRule::Email.on_input(&s, ""));
///             email.set(s);
///         },
///     }
/// }
/// ```
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let input_class = field_class("input-field", props.state);

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
                onblur: move |_| {
                    if let Some(handler) = &props.onblur {
                        handler.call(());
                    }
                },
            }
        }
    }
}
