use clap::{ArgAction, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Named execution mode for the console runtime.
///
/// The console boots in production mode by default; development and test
/// loosen caching and logging downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Environment {
    Development,
    #[default]
    Production,
    Test,
}

impl Environment {
    /// Canonical lowercase name, as written to `OPCONSOLE_ENV`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(format!(
                "unrecognized environment '{other}' (expected development, production or test)"
            )),
        }
    }
}

/// Command-line surface of the console launcher.
///
/// Flag grammar only; defaults that need the filesystem (the database
/// config fallback) are resolved when this is lowered into
/// [`ParsedOptions`](crate::options::ParsedOptions).
#[derive(Parser, Debug)]
#[command(name = "opconsole")]
#[command(about = "Modular operator console", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// The runtime environment. The OPCONSOLE_ENV variable is consulted
    /// when this option is not given; production is the fallback.
    #[arg(
        short = 'E',
        long = "environment",
        value_enum,
        value_name = "ENVIRONMENT",
        help_heading = "Common options"
    )]
    pub environment: Option<Environment>,

    /// Specify a directory containing additional database migrations
    #[arg(
        short = 'M',
        long = "migration-path",
        value_name = "DIRECTORY",
        action = ArgAction::Append,
        help_heading = "Database options"
    )]
    pub migration_path: Vec<PathBuf>,

    /// Disable database support
    #[arg(short = 'n', long = "no-database", help_heading = "Database options")]
    pub no_database: bool,

    /// Specify a YAML file containing database settings
    #[arg(
        short = 'y',
        long = "yaml",
        value_name = "PATH",
        help_heading = "Database options"
    )]
    pub yaml: Option<PathBuf>,

    /// Load the specified configuration file
    #[arg(short = 'c', value_name = "FILE", help_heading = "Framework options")]
    pub config: Option<PathBuf>,

    /// Show version
    #[arg(short = 'v', long = "version", help_heading = "Framework options")]
    pub version: bool,

    /// An additional module path
    #[arg(
        short = 'm',
        long = "module-path",
        value_name = "DIRECTORY",
        overrides_with = "module_path",
        help_heading = "Module options"
    )]
    pub module_path: Option<PathBuf>,

    /// Leftover tokens handed back to the caller untouched
    #[arg(value_name = "ARGS")]
    pub positional: Vec<String>,
}

/// Render the full usage text, as printed for `-h`/`--help`.
pub fn usage() -> String {
    use clap::CommandFactory;

    Cli::command().render_long_help().to_string()
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
