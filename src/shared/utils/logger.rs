use log::{debug, error, warn};
use std::sync::Once;
use std::time::{Duration, Instant};

static INIT: Once = Once::new();

/// Statements slower than this are logged at warn level.
const SLOW_STATEMENT: Duration = Duration::from_millis(250);

/// Initialize env_logger once per process.
///
/// Defaults to info, with this crate at debug; `RUST_LOG` overrides both.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .filter_module("pubapi", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tokio", log::LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_millis()
            .format_module_path(false)
            .init();

        log::info!("Logger ready");
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Log lines shared by the pool and the repositories, so they read the same everywhere.
pub struct LogContext;

impl LogContext {
    pub fn statement(statement: &str, table: &str, rows: usize, elapsed: Duration) {
        let ms = elapsed.as_millis();
        if elapsed >= SLOW_STATEMENT {
            warn!("DB: slow {} on {} ({} rows, {}ms)", statement, table, rows, ms);
        } else {
            debug!("DB: {} on {} ({} rows, {}ms)", statement, table, rows, ms);
        }
    }

    pub fn slow_acquire(waited: Duration, in_use: u32, max_size: u32) {
        warn!(
            "DB: waited {}ms for a pooled connection ({}/{} in use)",
            waited.as_millis(),
            in_use,
            max_size
        );
    }

    pub fn failure(context: &str, err: &dyn std::error::Error) {
        error!("{}: {}", context, err);
    }
}

/// Times one store statement from creation until `finish`.
pub struct TimedOperation {
    start: Instant,
    statement: &'static str,
    table: &'static str,
}

impl TimedOperation {
    pub fn new(statement: &'static str, table: &'static str) -> Self {
        Self {
            start: Instant::now(),
            statement,
            table,
        }
    }

    /// Log the statement with the number of rows it returned or touched.
    pub fn finish(self, rows: usize) -> Duration {
        let elapsed = self.start.elapsed();
        LogContext::statement(self.statement, self.table, rows, elapsed);
        elapsed
    }
}
