//! Login and registration form rules
//!
//! Fields give live feedback: leaving a field (blur) flags it as valid or
//! flashes an error, typing (input) marks it valid as soon as it passes and
//! quietly drops the mark when it stops passing. Submitting re-checks every
//! field and flashes the ones that fail.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;

/// How long a field keeps its error highlight
pub const ERROR_FLASH: Duration = Duration::from_millis(400);

/// Loading animation shown after a valid submit, before redirecting home
pub const REDIRECT_DELAY: Duration = Duration::from_millis(6850);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PASSWORD_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9*$#+-]{8,}$").expect("valid password regex"));

const PASSWORD_SYMBOLS: &[char] = &['-', '*', '$', '#', '+'];

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// At least 8 characters from `[A-Za-z0-9-*$#+]`, with an uppercase
/// letter, a digit and one of `-*$#+`.
pub fn is_strong_password(value: &str) -> bool {
    PASSWORD_CHARSET_RE.is_match(value)
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.contains(PASSWORD_SYMBOLS)
}

/// Visual feedback on a form field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Valid,
    Error,
}

impl FieldState {
    /// Returns the CSS class for this state
    pub fn class(&self) -> &'static str {
        match self {
            FieldState::Neutral => "",
            FieldState::Valid => "valid",
            FieldState::Error => "error",
        }
    }
}

/// Validation rule attached to a registration field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    BirthDate,
    Email,
    Password,
    /// Must match the password field
    RepeatPassword,
    FullName,
    Nickname,
}

impl FieldRule {
    /// Check `value`. `password` is only consulted by [`FieldRule::RepeatPassword`].
    pub fn is_satisfied(&self, value: &str, password: &str) -> bool {
        match self {
            FieldRule::BirthDate => !value.is_empty(),
            FieldRule::Email => is_valid_email(value),
            FieldRule::Password => is_strong_password(value),
            FieldRule::RepeatPassword => !value.is_empty() && value == password,
            FieldRule::FullName => value.trim().chars().count() >= 2,
            FieldRule::Nickname => value.chars().count() >= 6,
        }
    }

    /// State after the field loses focus. `None` when the rule has no blur
    /// check (nickname).
    pub fn on_blur(&self, value: &str, password: &str) -> Option<FieldState> {
        if matches!(self, FieldRule::Nickname) {
            return None;
        }
        Some(if self.is_satisfied(value, password) {
            FieldState::Valid
        } else {
            FieldState::Error
        })
    }

    /// State while typing: valid once passing, neutral otherwise.
    pub fn on_input(&self, value: &str, password: &str) -> FieldState {
        if self.is_satisfied(value, password) {
            FieldState::Valid
        } else {
            FieldState::Neutral
        }
    }
}

/// Login form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Login form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Fields that fail on submit, in form order. Empty means valid.
    pub fn validate(&self) -> Vec<LoginField> {
        let mut invalid = Vec::new();
        if !is_valid_email(&self.email) {
            invalid.push(LoginField::Email);
        }
        if self.password.is_empty() {
            invalid.push(LoginField::Password);
        }
        invalid
    }
}

/// Registration form field checked on submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    BirthDate,
    Email,
    Password,
    RepeatPassword,
    FullName,
    Captcha,
}

impl RegisterField {
    /// Rule behind the field; the captcha is a plain checkbox
    pub fn rule(&self) -> Option<FieldRule> {
        match self {
            RegisterField::BirthDate => Some(FieldRule::BirthDate),
            RegisterField::Email => Some(FieldRule::Email),
            RegisterField::Password => Some(FieldRule::Password),
            RegisterField::RepeatPassword => Some(FieldRule::RepeatPassword),
            RegisterField::FullName => Some(FieldRule::FullName),
            RegisterField::Captcha => None,
        }
    }
}

/// Registration form contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub birth_date: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub full_name: String,
    /// Only validated while typing, never on submit
    pub nickname: String,
    pub captcha: bool,
}

impl RegisterForm {
    pub fn value(&self, field: RegisterField) -> &str {
        match field {
            RegisterField::BirthDate => &self.birth_date,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::RepeatPassword => &self.repeat_password,
            RegisterField::FullName => &self.full_name,
            RegisterField::Captcha => "",
        }
    }

    /// Fields that fail on submit, in form order. Empty means valid.
    pub fn validate(&self) -> Vec<RegisterField> {
        [
            RegisterField::BirthDate,
            RegisterField::Email,
            RegisterField::Password,
            RegisterField::RepeatPassword,
            RegisterField::FullName,
            RegisterField::Captcha,
        ]
        .into_iter()
        .filter(|field| match field.rule() {
            Some(rule) => !rule.is_satisfied(self.value(*field), &self.password),
            None => !self.captcha,
        })
        .collect()
    }
}

/// Whether a password input shows its contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PasswordVisibility {
    pub fn toggle(&mut self) {
        *self = match self {
            PasswordVisibility::Hidden => PasswordVisibility::Shown,
            PasswordVisibility::Shown => PasswordVisibility::Hidden,
        };
    }

    /// `type` attribute for the input
    pub fn input_type(&self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "password",
            PasswordVisibility::Shown => "text",
        }
    }

    /// Label for the toggle button, describing what a click will do
    pub fn aria_label(&self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "Mostrar contraseña",
            PasswordVisibility::Shown => "Ocultar contraseña",
        }
    }
}
