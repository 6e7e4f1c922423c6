//! Commands - the operations behind each tray menu item

mod identifier;
mod log_file;
mod settings;
mod status;
mod token;

pub use identifier::*;
pub use log_file::*;
pub use settings::*;
pub use status::*;
pub use token::*;
