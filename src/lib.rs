// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod options;
pub mod runtime;

// Re-export commonly used types
pub use crate::cli::{Cli, Environment};
pub use crate::config::{AppConfig, DATABASE_CONFIG_KEY};
pub use crate::errors::{OptionsError, Result};
pub use crate::options::{
    DatabaseOptions, FrameworkOptions, ModuleOptions, ParsedOptions, Subcommand,
};
pub use crate::runtime::{RuntimeEnv, ENV_VAR};
