use anyhow::Result;
use opconsole::options::{ParsedOptions, Subcommand};
use opconsole::{runtime, AppConfig};

// Launcher entry point: resolve the launch options, bind the runtime
// environment before anything reads it, and hand the finished
// configuration to the embedding console runtime.
fn main() -> Result<()> {
    env_logger::init();

    let options = ParsedOptions::parse();

    if options.subcommand == Some(Subcommand::Version) {
        println!("opconsole {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    options.apply_environment(runtime::global())?;

    let mut application = AppConfig::new();
    options.configure(&mut application);

    log_launch_plan(&options);

    Ok(())
}

fn log_launch_plan(options: &ParsedOptions) {
    log::debug!("environment: {}", options.environment);

    if options.database.disabled {
        log::debug!("database support disabled");
    } else {
        log::debug!("database settings: {}", options.database.config.display());
        for path in &options.database.migration_paths {
            log::debug!("additional migration path: {}", path.display());
        }
    }

    if let Some(path) = &options.framework.config {
        log::debug!("framework configuration file: {}", path.display());
    }

    if let Some(path) = &options.modules.path {
        log::debug!("additional module path: {}", path.display());
    }

    if !options.positional.is_empty() {
        log::debug!("positional arguments: {:?}", options.positional);
    }
}
