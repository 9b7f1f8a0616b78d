use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        println!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}:{}] {}",
                timestamp, prefix, file_name, line, message
            ),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    init_logger_with_verbosity(prefix, false);
}

pub fn init_logger_with_verbosity(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Messages logged before initialization are dropped, so library code can
/// log unconditionally.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

pub fn log_debug(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get()
        && logger.is_verbose()
    {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logger::log_debug(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories_and_adds_prefix() {
        let logger = Logger::new(Some("Arena".to_string()), false);
        let line = logger.format_line("engine/src/games/tictactoe/session.rs", 42, "X won");
        assert!(line.ends_with("[Arena][session.rs:42] X won"));
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("C:\\engine\\src\\lib.rs", 7, "hello");
        assert!(line.ends_with("[lib.rs:7] hello"));
        assert!(logger.is_verbose());
    }

    #[test]
    fn test_log_before_init_does_not_panic() {
        crate::log!("dropped {}", 1);
        crate::log_debug!("dropped {}", 2);
    }
}
