//! Password Field Component
//!
//! Password input with a show/hide toggle. Each field owns its own
//! visibility, so the registration page's two password inputs toggle
//! independently.

use dioxus::prelude::*;
use tinygames_core::{FieldState, PasswordVisibility};

use super::input::field_class;

#[derive(Clone, PartialEq, Props)]
pub struct PasswordFieldProps {
    pub id: String,
    pub label: String,
    pub value: String,
    #[props(default)]
    pub state: FieldState,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub onblur: Option<EventHandler<()>>,
    /// CSS class of the toggle button
    #[props(default = "toggle-password".to_string())]
    pub toggle_class: String,
}

#[component]
pub fn PasswordField(props: PasswordFieldProps) -> Element {
    let mut visibility = use_signal(PasswordVisibility::default);
    let input_class = field_class("input-field", props.state);

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{props.id}",
                "{props.label}"
            }
            div { class: "password-wrapper",
                input {
                    id: "{props.id}",
                    class: "{input_class}",
                    r#type: visibility().input_type(),
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                    onblur: move |_| {
                        if let Some(handler) = &props.onblur {
                            handler.call(());
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "{props.toggle_class}",
                    "aria-label": visibility().aria_label(),
                    onclick: move |_| visibility.write().toggle(),
                    EyeIcon { open: visibility() == PasswordVisibility::Hidden }
                }
            }
        }
    }
}

/// Lucide eye / eye-off icon
#[component]
fn EyeIcon(open: bool) -> Element {
    if open {
        rsx! {
            svg {
                class: "eye-open",
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" }
                circle { cx: "12", cy: "12", r: "3" }
            }
        }
    } else {
        rsx! {
            svg {
                class: "eye-closed",
                xmlns: "http://www.w3.org/2000/svg",
                width: "20",
                height: "20",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M9.88 9.88a3 3 0 1 0 4.24 4.24" }
                path { d: "M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" }
                path { d: "M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" }
                line { x1: "2", x2: "22", y1: "2", y2: "22" }
            }
        }
    }
}
