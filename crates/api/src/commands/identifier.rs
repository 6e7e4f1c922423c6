//! Identifier command

use tokentray_core::generate_identifier;
use tracing::info;

/// Generate a random hyphenated UUID. Needs no configuration.
pub fn new_identifier() -> String {
    let identifier = generate_identifier();
    info!(command = "identifier::new_identifier", "command_execution_success");
    identifier
}
