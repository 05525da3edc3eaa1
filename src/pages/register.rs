//! Registration page.
//!
//! Every field validates live on blur and input; submit re-checks them all
//! plus the captcha box. No account is created, a valid submit just plays
//! the loading animation and lands on the home page.

use dioxus::prelude::*;
use tinygames_core::forms::{ERROR_FLASH, REDIRECT_DELAY};
use tinygames_core::{FieldRule, FieldState, RegisterField, RegisterForm};
use tinygames_ui::{flash_error, Button, LoadingOverlay, PasswordField, ValidatedInput};

use crate::app::Route;
use crate::components::PageShell;

/// Apply a rule's blur result to a field
fn apply_blur(rule: FieldRule, value: &str, password: &str, mut state: Signal<FieldState>) {
    match rule.on_blur(value, password) {
        Some(FieldState::Error) => flash_error(state),
        Some(next) => state.set(next),
        None => {}
    }
}

/// A form value together with its feedback state
#[derive(Clone, Copy, PartialEq)]
struct Field {
    rule: FieldRule,
    value: Signal<String>,
    state: Signal<FieldState>,
}

impl Field {
    fn input(mut self, value: String, password: &str) {
        self.state.set(self.rule.on_input(&value, password));
        self.value.set(value);
    }

    fn blur(self, password: &str) {
        apply_blur(self.rule, &self.value.peek(), password, self.state);
    }
}

fn use_field(rule: FieldRule) -> Field {
    Field {
        rule,
        value: use_signal(String::new),
        state: use_signal(FieldState::default),
    }
}

#[component]
pub fn Register() -> Element {
    let navigator = use_navigator();

    let birth_date = use_field(FieldRule::BirthDate);
    let email = use_field(FieldRule::Email);
    let password = use_field(FieldRule::Password);
    let repeat = use_field(FieldRule::RepeatPassword);
    let full_name = use_field(FieldRule::FullName);
    let nickname = use_field(FieldRule::Nickname);

    let mut captcha = use_signal(|| false);
    let mut captcha_error = use_signal(|| false);
    let mut loading = use_signal(|| false);

    // Current password, for the repeat-password rule
    let pw = move || password.value.peek().clone();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let form = RegisterForm {
            birth_date: birth_date.value.peek().clone(),
            email: email.value.peek().clone(),
            password: password.value.peek().clone(),
            repeat_password: repeat.value.peek().clone(),
            full_name: full_name.value.peek().clone(),
            nickname: nickname.value.peek().clone(),
            captcha: captcha(),
        };

        let invalid = form.validate();
        for field in &invalid {
            match field {
                RegisterField::BirthDate => flash_error(birth_date.state),
                RegisterField::Email => flash_error(email.state),
                RegisterField::Password => flash_error(password.state),
                RegisterField::RepeatPassword => flash_error(repeat.state),
                RegisterField::FullName => flash_error(full_name.state),
                RegisterField::Captcha => {
                    captcha_error.set(true);
                    spawn(async move {
                        tokio::time::sleep(ERROR_FLASH).await;
                        captcha_error.set(false);
                    });
                }
            }
        }

        if invalid.is_empty() {
            tracing::info!("Registration form valid, redirecting home");
            loading.set(true);
            spawn(async move {
                tokio::time::sleep(REDIRECT_DELAY).await;
                loading.set(false);
                navigator.push(Route::Home {});
            });
        } else {
            tracing::debug!(?invalid, "Registration form has invalid fields");
        }
    };

    rsx! {
        PageShell {
            main { class: "register-page",
                h1 { class: "register-page__title", "Crear cuenta" }
                form { class: "register-form", novalidate: true, onsubmit: on_submit,
                    ValidatedInput {
                        id: "fecha-nacimiento".to_string(),
                        label: "Fecha de nacimiento".to_string(),
                        input_type: "date".to_string(),
                        value: birth_date.value.read().clone(),
                        state: *birth_date.state.read(),
                        oninput: move |s: String| birth_date.input(s, ""),
                        onblur: move |_| birth_date.blur(""),
                    }
                    ValidatedInput {
                        id: "correo".to_string(),
                        label: "Correo electrónico".to_string(),
                        input_type: "email".to_string(),
                        value: email.value.read().clone(),
                        state: *email.state.read(),
                        oninput: move |s: String| email.input(s, ""),
                        onblur: move |_| email.blur(""),
                    }
                    PasswordField {
                        id: "contraseña".to_string(),
                        label: "Contraseña".to_string(),
                        value: password.value.read().clone(),
                        state: *password.state.read(),
                        oninput: move |s: String| password.input(s, ""),
                        onblur: move |_| password.blur(""),
                    }
                    PasswordField {
                        id: "repetir-contraseña".to_string(),
                        label: "Repetir contraseña".to_string(),
                        toggle_class: "toggle-password-repeat".to_string(),
                        value: repeat.value.read().clone(),
                        state: *repeat.state.read(),
                        oninput: move |s: String| repeat.input(s, &pw()),
                        onblur: move |_| repeat.blur(&pw()),
                    }
                    ValidatedInput {
                        id: "nombre-apellido".to_string(),
                        label: "Nombre y apellido".to_string(),
                        value: full_name.value.read().clone(),
                        state: *full_name.state.read(),
                        oninput: move |s: String| full_name.input(s, ""),
                        onblur: move |_| full_name.blur(""),
                    }
                    ValidatedInput {
                        id: "nickname".to_string(),
                        label: "Nickname".to_string(),
                        value: nickname.value.read().clone(),
                        state: *nickname.state.read(),
                        oninput: move |s: String| nickname.input(s, ""),
                        onblur: move |_| nickname.blur(""),
                    }

                    div { class: if captcha_error() { "captcha-container error" } else { "captcha-container" },
                        input {
                            id: "captcha-checkbox",
                            r#type: "checkbox",
                            checked: captcha(),
                            onchange: move |e: FormEvent| captcha.set(e.checked()),
                        }
                        label { r#for: "captcha-checkbox", "No soy un robot" }
                    }

                    Button { button_type: "submit".to_string(), disabled: loading(), "Registrarse" }
                }
                p { class: "register-page__alt",
                    "¿Ya tenés cuenta? "
                    Link { to: Route::Login {}, "Iniciá sesión" }
                }
            }
            LoadingOverlay { active: loading() }
        }
    }
}
