//! Error types for launch-option parsing and environment binding.
//!
//! All failures here are configuration or usage errors surfaced to the
//! operator before the console proceeds: there is no retry and no partial
//! success. Parse failures come out of the clap layer and are mapped onto
//! the typed variants below; `LateEnvironmentBinding` is raised by
//! [`ParsedOptions::apply_environment`](crate::options::ParsedOptions::apply_environment)
//! when the runtime environment was read before it could be written.

use std::panic::Location;
use thiserror::Error;

/// Failures produced while parsing launch options or applying them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A token looked like an option but matches nothing in the grammar.
    #[error("unknown option: {token}")]
    UnknownFlag { token: String },

    /// A recognized option was given a value outside its allowed set, or
    /// no value at all.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The runtime environment was already memoized when
    /// `apply_environment` ran. Startup must abort; the cached value can
    /// no longer be changed.
    #[error("{location}: {variable} applied too late, the runtime environment is already memoized")]
    LateEnvironmentBinding {
        variable: String,
        location: &'static Location<'static>,
    },
}

impl OptionsError {
    /// Create an unknown-flag error for a token.
    pub fn unknown_flag(token: impl Into<String>) -> Self {
        Self::UnknownFlag {
            token: token.into(),
        }
    }

    /// Create an invalid-argument error with a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a late-binding error naming the offending call site.
    pub fn late_environment_binding(
        variable: impl Into<String>,
        location: &'static Location<'static>,
    ) -> Self {
        Self::LateEnvironmentBinding {
            variable: variable.into(),
            location,
        }
    }
}

impl From<clap::Error> for OptionsError {
    fn from(error: clap::Error) -> Self {
        use clap::error::{ContextKind, ContextValue, ErrorKind};

        match error.kind() {
            ErrorKind::UnknownArgument | ErrorKind::InvalidSubcommand => {
                let token = match error.get(ContextKind::InvalidArg) {
                    Some(ContextValue::String(value)) => value.clone(),
                    _ => render_summary(&error),
                };
                Self::UnknownFlag { token }
            }
            _ => Self::InvalidArgument {
                message: render_summary(&error),
            },
        }
    }
}

/// First diagnostic line of a clap error, without the `error: ` prefix or
/// the trailing usage block.
fn render_summary(error: &clap::Error) -> String {
    let rendered = error.render().to_string();
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, OptionsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    #[test]
    fn test_unknown_argument_maps_to_unknown_flag() {
        let error = Cli::try_parse_from(["opconsole", "--frobnicate"]).unwrap_err();

        match OptionsError::from(error) {
            OptionsError::UnknownFlag { token } => assert_eq!(token, "--frobnicate"),
            other => panic!("expected UnknownFlag, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_enum_value_maps_to_invalid_argument() {
        let error = Cli::try_parse_from(["opconsole", "-E", "bogus"]).unwrap_err();

        match OptionsError::from(error) {
            OptionsError::InvalidArgument { message } => {
                assert!(message.contains("bogus"), "message was: {message}");
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_value_maps_to_invalid_argument() {
        let error = Cli::try_parse_from(["opconsole", "--yaml"]).unwrap_err();

        assert!(matches!(
            OptionsError::from(error),
            OptionsError::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_late_binding_display_names_call_site() {
        let error =
            OptionsError::late_environment_binding("OPCONSOLE_ENV", Location::caller());

        let message = error.to_string();
        assert!(message.contains("OPCONSOLE_ENV"));
        assert!(message.contains(file!()));
    }
}
