//! Button Component
//!
//! The filled submit button shared by the login and register forms.

use dioxus::prelude::*;

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Whether the button is disabled, e.g. while a submit is in flight
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         button_type: "submit".to_string(),
///         disabled: loading(),
///         "Ingresar"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "btn-primary",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_defaults_to_enabled_plain_button() {
        let props = ButtonProps::builder().children(VNode::empty()).build();
        assert_eq!(props.button_type, "button");
        assert!(!props.disabled);
    }

    #[test]
    fn submit_button_can_be_disabled() {
        let props = ButtonProps::builder()
            .children(VNode::empty())
            .button_type("submit".to_string())
            .disabled(true)
            .build();
        assert_eq!(props.button_type, "submit");
        assert!(props.disabled);
    }
}
