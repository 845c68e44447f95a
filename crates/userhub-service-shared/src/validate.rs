//! Adapter from schema violations to field errors.

use serde_json::Value;

use crate::exception::AppFieldError;
use crate::schema::Schema;

/// Validate `input` against `schema`.
///
/// On failure, returns one [`AppFieldError`] per invalid field, ordered by
/// first occurrence, with every violation message for that field joined by
/// `", "`. That ordering is preserved all the way into the response body, so
/// it effectively specifies which field errors surface and in what order.
pub fn validate(schema: &Schema, input: &Value) -> Result<(), Vec<AppFieldError>> {
    let violations = schema.check(input);
    if violations.is_empty() {
        return Ok(());
    }

    // Group messages per field, keeping first-seen field order.
    let mut errors: Vec<AppFieldError> = Vec::new();
    for violation in violations {
        match errors.iter_mut().find(|e| e.field == violation.field) {
            Some(existing) => {
                existing.error_message.push_str(", ");
                existing.error_message.push_str(&violation.message);
            }
            None => errors.push(AppFieldError::new(violation.field, violation.message)),
        }
    }

    Err(errors)
}
