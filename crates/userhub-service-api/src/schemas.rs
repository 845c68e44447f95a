//! Input schemas for the auth endpoints.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use userhub_service_shared::{FieldSchema, Issues, Schema};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Schema for `POST /api/auth.register`.
pub fn register_user_schema() -> Schema {
    Schema::object(vec![
        FieldSchema::string("name").min_len(3, "Name is required"),
        FieldSchema::string("email"),
        FieldSchema::string("password"),
        FieldSchema::string("confirmPassword"),
    ])
    .refine(|input, issues| {
        validate_email(input, issues, "email");
        validate_password_strength(input, issues, "password");
        validate_password_match(input, issues);
    })
}

/// Schema for `POST /api/auth.login`.
pub fn login_user_schema() -> Schema {
    Schema::object(vec![
        FieldSchema::string("email"),
        FieldSchema::string("password"),
    ])
    .refine(|input, issues| {
        validate_email(input, issues, "email");
        validate_password_strength(input, issues, "password");
    })
}

fn str_field<'a>(input: &'a Map<String, Value>, field: &str) -> &'a str {
    input.get(field).and_then(Value::as_str).unwrap_or("")
}

fn validate_email(input: &Map<String, Value>, issues: &mut Issues, field: &str) {
    if !EMAIL_REGEX.is_match(str_field(input, field)) {
        issues.add(field, "Invalid email format");
    }
}

/// Staged strength checks: one message at a time, weakest failure first.
fn validate_password_strength(input: &Map<String, Value>, issues: &mut Issues, field: &str) {
    let password = str_field(input, field);

    if password.chars().count() < 6 {
        issues.add(field, "Password must be at least 6 characters long");
    } else if !password.chars().any(|c| c.is_ascii_uppercase()) {
        issues.add(field, "Password must contain at least one uppercase letter");
    } else if !password.chars().any(|c| c.is_ascii_lowercase()) {
        issues.add(field, "Password must contain at least one lowercase letter");
    } else if !password.chars().any(|c| c.is_ascii_digit()) {
        issues.add(field, "Password must contain at least one number");
    } else if !password.chars().any(|c| "!@#%^&*".contains(c)) {
        issues.add(field, "Password must contain at least one special character");
    }
}

fn validate_password_match(input: &Map<String, Value>, issues: &mut Issues) {
    if str_field(input, "password") != str_field(input, "confirmPassword") {
        issues.add("confirmPassword", "Passwords do not match");
    }
}
