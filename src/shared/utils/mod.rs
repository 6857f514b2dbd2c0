pub mod date_format;
pub mod logger;

pub use logger::{init_logger, LogContext, TimedOperation};
