//! Login page.
//!
//! Only the form is validated; a valid submit plays the loading animation
//! and lands on the home page.

use dioxus::prelude::*;
use tinygames_core::forms::REDIRECT_DELAY;
use tinygames_core::{FieldState, LoginField, LoginForm};
use tinygames_ui::{flash_error, Button, LoadingOverlay, PasswordField, ValidatedInput};

use crate::app::Route;
use crate::components::PageShell;

#[component]
pub fn Login() -> Element {
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_state = use_signal(FieldState::default);
    let mut password_state = use_signal(FieldState::default);
    let mut loading = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        email_state.set(FieldState::Neutral);
        password_state.set(FieldState::Neutral);

        let form = LoginForm {
            email: email(),
            password: password(),
        };
        let invalid = form.validate();
        for field in &invalid {
            match field {
                LoginField::Email => flash_error(email_state),
                LoginField::Password => flash_error(password_state),
            }
        }

        if invalid.is_empty() {
            tracing::info!("Login form valid, redirecting home");
            loading.set(true);
            spawn(async move {
                tokio::time::sleep(REDIRECT_DELAY).await;
                loading.set(false);
                navigator.push(Route::Home {});
            });
        }
    };

    rsx! {
        PageShell { header: false,
            main { class: "login-page",
                div { class: "login-box",
                    h1 { class: "login-box__title", "Iniciar sesión" }
                    form { class: "login-form", novalidate: true, onsubmit: on_submit,
                        ValidatedInput {
                            id: "login-email".to_string(),
                            label: "Correo electrónico".to_string(),
                            input_type: "email".to_string(),
                            value: email(),
                            state: email_state(),
                            oninput: move |s: String| email.set(s),
                        }
                        PasswordField {
                            id: "login-pass".to_string(),
                            label: "Contraseña".to_string(),
                            value: password(),
                            state: password_state(),
                            oninput: move |s: String| password.set(s),
                        }
                        Button { button_type: "submit".to_string(), disabled: loading(), "Ingresar" }
                    }
                    p { class: "login-box__alt",
                        "¿No tenés cuenta? "
                        Link { to: Route::Register {}, "Registrate" }
                    }
                }
            }
            LoadingOverlay { active: loading() }
        }
    }
}
