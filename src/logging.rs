use colored::Colorize;
use log::{Level, LevelFilter};

/// Installs the global logger used for diagnostics.
///
/// Records at or above `level` are written to stderr as `[LEVEL] message`,
/// keeping them apart from results on stdout.
///
/// # Errors
/// Fails if a global logger has already been installed.
pub fn init(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new().format(|out, message, record| {
                             let level_str = match record.level() {
                                 Level::Error => "ERROR".red().bold(),
                                 Level::Warn => "WARN ".yellow().bold(),
                                 Level::Info => "INFO ".green().bold(),
                                 Level::Debug => "DEBUG".blue().bold(),
                                 Level::Trace => "TRACE".magenta().bold(),
                             };
                             out.finish(format_args!("[{level_str}] {message}"));
                         })
                         .level(level)
                         .chain(std::io::stderr())
                         .apply()?;

    Ok(())
}
