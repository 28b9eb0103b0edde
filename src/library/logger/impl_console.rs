use crate::library::logger::interface::{join_namespace, LogResult, Logger};
use chrono::Utc;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, level: &str, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn debug(&self, message: &str) -> LogResult {
        println!("{}", self.format_line("DEBUG", message));
        Ok(())
    }

    fn info(&self, message: &str) -> LogResult {
        println!("{}", self.format_line("INFO", message));
        Ok(())
    }

    fn error(&self, message: &str) -> LogResult {
        eprintln!("{}", self.format_line("ERROR", message));
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_are_joined() {
        let utc = chrono::FixedOffset::east_opt(0).unwrap();
        let logger = LoggerConsole {
            namespace: Some("app".to_string()),
            timezone: utc,
        };

        let line = logger.format_line("INFO", "Model loaded");

        assert!(line.ends_with("INFO app: Model loaded"));
        assert_eq!(join_namespace(Some("app"), "classifier"), "app:classifier");
        assert_eq!(join_namespace(None, "classifier"), "classifier");
    }
}
