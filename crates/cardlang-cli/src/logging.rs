//! Log output for the CLI. Logs go to stderr so stdout stays pipeable.

use tracing::Level;

/// `-v` count to the most verbose level shown.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_logging(verbosity: u8, color: bool) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .finish();

    // A subscriber installed earlier wins
    let _ = tracing::subscriber::set_global_default(subscriber);
}
