//! CLI command implementations

pub mod config;
pub mod inspect;
pub mod serve;
pub mod url;

pub use config::ConfigCommand;
pub use inspect::{InspectCommand, InspectOutcome};
pub use serve::ServeCommand;
pub use self::url::UrlCommand;
