//! Process-wide runtime environment cache.
//!
//! Downstream subsystems read the execution mode through
//! [`RuntimeEnv::current`], which memoizes on first read. The launcher must
//! write `OPCONSOLE_ENV` before that happens; [`RuntimeEnv::is_initialized`]
//! exposes the latch so
//! [`apply_environment`](crate::options::ParsedOptions::apply_environment)
//! can fail fast instead of racing the cache.

use std::env;
use std::sync::OnceLock;

use crate::cli::Environment;

/// Process environment variable carrying the resolved execution mode.
pub const ENV_VAR: &str = "OPCONSOLE_ENV";

/// Memoizing view of the execution mode, keyed by one environment variable.
#[derive(Debug)]
pub struct RuntimeEnv {
    variable: String,
    cached: OnceLock<Environment>,
}

impl RuntimeEnv {
    pub fn new() -> Self {
        Self::with_variable(ENV_VAR)
    }

    /// Cache reading a variable other than [`ENV_VAR`]. Tests use this to
    /// keep process-global state out of each other's way.
    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            cached: OnceLock::new(),
        }
    }

    /// Name of the environment variable this cache reads.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// The execution mode, latched on first call.
    ///
    /// Resolution order: the environment variable when set to a recognized
    /// name, else production. An unrecognized value logs a warning rather
    /// than aborting; the strict value constraint binds the `-E` flag, not
    /// the variable.
    pub fn current(&self) -> Environment {
        *self.cached.get_or_init(|| match env::var(&self.variable) {
            Ok(value) => value.parse().unwrap_or_else(|error: String| {
                log::warn!("{}: {error}", self.variable);
                Environment::default()
            }),
            Err(_) => Environment::default(),
        })
    }

    /// Whether the execution mode has been read and memoized.
    pub fn is_initialized(&self) -> bool {
        self.cached.get().is_some()
    }
}

impl Default for RuntimeEnv {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<RuntimeEnv> = OnceLock::new();

/// The cache the console process itself reads.
pub fn global() -> &'static RuntimeEnv {
    GLOBAL.get_or_init(RuntimeEnv::new)
}
