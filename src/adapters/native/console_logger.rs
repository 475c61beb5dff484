use crate::ports::LoggerPort;

/// Native logger implementation using stdout/stderr, tagging lines with
/// the crate scope.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    scope: &'static str,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            scope: "alert-modal",
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("[{}] {message}", self.scope);
    }

    fn error(&self, message: &str) {
        eprintln!("[{}] [ERROR] {message}", self.scope);
    }

    fn warn(&self, message: &str) {
        eprintln!("[{}] [WARN] {message}", self.scope);
    }

    fn time(&self, label: &str) {
        println!("[{}] [TIME:START] {label}", self.scope);
    }

    fn time_end(&self, label: &str) {
        println!("[{}] [TIME:END] {label}", self.scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = ConsoleLogger::new();
        logger.log("test");
    }

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.time("test_timer");
        logger.time_end("test_timer");
    }
}
