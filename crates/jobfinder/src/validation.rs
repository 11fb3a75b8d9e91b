//! Application form rules applied before an application is recorded.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::model::ApplicationForm;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Local mobile numbers: 11 digits starting with "09".
static RE_CONTACT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").unwrap());

pub const NAME_MIN_CHARS: usize = 2;
pub const WHY_HIRE_YOU_MIN_CHARS: usize = 10;
pub const WHY_HIRE_YOU_MAX_CHARS: usize = 500;

/// Per-field validation messages; `None` means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub why_hire_you: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.messages().next().is_none()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        [
            &self.name,
            &self.email,
            &self.contact_number,
            &self.why_hire_you,
        ]
        .into_iter()
        .filter_map(|message| message.as_deref())
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.messages().collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Checks every field of `form` and collects one message per invalid field.
pub fn validate_application(form: &ApplicationForm) -> FormErrors {
    FormErrors {
        name: validate_name(&form.name),
        email: validate_email(&form.email),
        contact_number: validate_contact_number(&form.contact_number),
        why_hire_you: validate_why_hire_you(&form.why_hire_you),
    }
}

fn validate_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        Some("Name is required".to_string())
    } else if name.chars().count() < NAME_MIN_CHARS {
        Some("Name must be at least 2 characters".to_string())
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !RE_EMAIL.is_match(email) {
        Some("Please enter a valid email address".to_string())
    } else {
        None
    }
}

fn validate_contact_number(number: &str) -> Option<String> {
    if number.trim().is_empty() {
        Some("Contact number is required".to_string())
    } else if !RE_CONTACT_NUMBER.is_match(number) {
        Some("Please enter a valid number starting with 09 (e.g., 09XXXXXXXXX)".to_string())
    } else {
        None
    }
}

fn validate_why_hire_you(text: &str) -> Option<String> {
    let text = text.trim();
    let chars = text.chars().count();
    if text.is_empty() {
        Some("Please tell us why we should hire you".to_string())
    } else if chars < WHY_HIRE_YOU_MIN_CHARS {
        Some("Please provide at least 10 characters".to_string())
    } else if chars > WHY_HIRE_YOU_MAX_CHARS {
        Some("Please keep your response under 500 characters".to_string())
    } else {
        None
    }
}
