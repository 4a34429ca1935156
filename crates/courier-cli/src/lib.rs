/*
[INPUT]:  Module declarations
[OUTPUT]: courier-cli library surface used by the binary and tests
[POS]:    Crate root - module wiring
[UPDATE]: When adding command modules
*/

pub mod cli;
pub mod config;
pub mod send;

pub use cli::{Cli, Command, SendArgs};
pub use config::{ClientSettings, CourierConfig};
pub use send::{build_webhook, send};
