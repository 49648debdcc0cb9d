use env_logger::{Builder, Env};
use log::LevelFilter;

use crate::constants::LOG_ENV_VAR;

/// Initialize logging on `stderr`.
///
/// The `verbosity_level` (`-v` count minus `-q` count) picks the default level.
/// If set, the environment variable [`LOG_ENV_VAR`] takes precedence.
pub fn init(verbosity_level: i8) {
    let default_level = level_for(verbosity_level);

    Builder::new()
        .filter_level(default_level)
        .parse_env(Env::new().filter(LOG_ENV_VAR))
        .format_timestamp_millis()
        .init();
}

fn level_for(verbosity_level: i8) -> LevelFilter {
    match verbosity_level {
        i8::MIN..=-2 => LevelFilter::Off,
        -1 => LevelFilter::Error,
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        3..=i8::MAX => LevelFilter::Trace,
    }
}
