//! Random identifier generation for the "Generate UUID" action

use uuid::Uuid;

/// Fresh random (v4) UUID in lowercase hyphenated form.
#[must_use]
pub fn generate_identifier() -> String {
    Uuid::new_v4().to_string()
}
