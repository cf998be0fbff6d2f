//! Diagnostic logging
//!
//! The terminal belongs to the UI, so debug builds log to a file in the temp
//! directory instead. Release builds install no logger and every `log` call
//! is a no-op.

use std::path::PathBuf;

pub const LOG_FILE_NAME: &str = "cozyyu-search.log";

/// Where debug builds write their log
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Initialize the logger (debug builds only)
///
/// Honors `RUST_LOG`, defaulting to `debug`.
pub fn init() {
    #[cfg(debug_assertions)]
    {
        use std::fs::File;
        use std::io::Write;

        let path = log_file_path();
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Could not open log file {}: {}", path.display(), e);
                return;
            }
        };

        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} {:<5} {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();
    }
}
