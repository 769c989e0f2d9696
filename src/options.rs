//! Launch options parsed from the command line.
//!
//! [`ParsedOptions`] is built once, eagerly, from the argument vector and
//! is immutable afterwards. Two finalization operations hand the result to
//! the embedding application: [`configure`](ParsedOptions::configure)
//! publishes the database settings path into the application config, and
//! [`apply_environment`](ParsedOptions::apply_environment) writes the
//! execution mode into the process environment.

use std::env;
use std::ffi::OsString;
use std::panic::Location;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::cli::{self, Cli, Environment};
use crate::config::{self, AppConfig};
use crate::errors::{OptionsError, Result};
use crate::runtime::RuntimeEnv;

/// Database-related launch options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseOptions {
    /// Path of the YAML file holding database settings.
    pub config: PathBuf,
    /// Run without database support.
    pub disabled: bool,
    /// Extra migration directories, in the order given. Duplicates are
    /// kept; the migration runner deduplicates if it cares to.
    pub migration_paths: Vec<PathBuf>,
}

/// Framework-related launch options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkOptions {
    /// Configuration file handed to the framework bootstrap untouched.
    pub config: Option<PathBuf>,
}

/// Module-loading launch options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleOptions {
    /// An additional module search path.
    pub path: Option<PathBuf>,
}

/// Action requested instead of a normal console boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subcommand {
    Version,
}

/// Options parsed from the command line that configure the console runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
    pub environment: Environment,
    pub database: DatabaseOptions,
    pub framework: FrameworkOptions,
    pub modules: ModuleOptions,
    pub subcommand: Option<Subcommand>,
    /// Tokens not consumed as flags or flag values, in their original order.
    pub positional: Vec<String>,
}

impl ParsedOptions {
    /// Parse the process argument vector.
    ///
    /// `-h`/`--help` prints the usage text and exits with status 0;
    /// malformed input prints a diagnostic and exits non-zero. Both happen
    /// before any side effect on the configuration or the environment.
    pub fn parse() -> Self {
        Self::from_cli(cli::parse_args(), config::user_config_root())
    }

    /// Parse an explicit token sequence (without the program name).
    pub fn try_parse<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_with_config_root(tokens, config::user_config_root())
    }

    /// Parse with an explicit user config root instead of `~/.opconsole`.
    ///
    /// The root is only consulted for the default database settings path;
    /// `-y` bypasses it entirely.
    pub fn try_parse_with_config_root<I, T>(
        tokens: I,
        config_root: Option<PathBuf>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv =
            std::iter::once(OsString::from("opconsole")).chain(tokens.into_iter().map(Into::into));

        match Cli::try_parse_from(argv) {
            Ok(parsed) => Ok(Self::from_cli(parsed, config_root)),
            // Help is a terminal action: render and exit 0, as the process
            // surface promises.
            Err(error) if error.kind() == ErrorKind::DisplayHelp => error.exit(),
            Err(error) => Err(error.into()),
        }
    }

    fn from_cli(parsed: Cli, config_root: Option<PathBuf>) -> Self {
        let database = DatabaseOptions {
            config: parsed
                .yaml
                .unwrap_or_else(|| config::default_database_config(config_root.as_deref())),
            disabled: parsed.no_database,
            migration_paths: parsed.migration_path,
        };

        Self {
            environment: parsed.environment.unwrap_or_default(),
            database,
            framework: FrameworkOptions {
                config: parsed.config,
            },
            modules: ModuleOptions {
                path: parsed.module_path,
            },
            subcommand: parsed.version.then_some(Subcommand::Version),
            positional: parsed.positional,
        }
    }

    /// Publish the database settings path into the application config.
    pub fn configure(&self, application: &mut AppConfig) {
        application.set(
            config::DATABASE_CONFIG_KEY,
            self.database.config.to_string_lossy(),
        );
    }

    /// Write the execution mode into the runtime's environment variable.
    ///
    /// Must run before anything reads [`RuntimeEnv::current`]: once the
    /// cache has latched, the value can no longer change, and this returns
    /// [`OptionsError::LateEnvironmentBinding`] naming the call site.
    /// Calling it again before the first read is harmless.
    #[track_caller]
    pub fn apply_environment(&self, runtime: &RuntimeEnv) -> Result<()> {
        if runtime.is_initialized() {
            return Err(OptionsError::late_environment_binding(
                runtime.variable(),
                Location::caller(),
            ));
        }

        env::set_var(runtime.variable(), self.environment.as_str());
        Ok(())
    }
}
