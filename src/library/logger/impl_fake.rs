use crate::library::logger::interface::{join_namespace, LogResult, Logger};
use std::sync::{Arc, Mutex};

/// Records every line so tests can assert on what was logged.
#[derive(Debug, Clone, Default)]
pub struct LoggerFake {
    namespace: Option<String>,
    lines: Arc<Mutex<Vec<String>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, level: &str, message: &str) -> LogResult {
        let line = match &self.namespace {
            Some(namespace) => format!("{} {}: {}", level, namespace, message),
            None => format!("{} {}", level, message),
        };
        self.lines.lock().map_err(|e| e.to_string())?.push(line);
        Ok(())
    }
}

impl Logger for LoggerFake {
    fn debug(&self, message: &str) -> LogResult {
        self.push("DEBUG", message)
    }

    fn info(&self, message: &str) -> LogResult {
        self.push("INFO", message)
    }

    fn error(&self, message: &str) -> LogResult {
        self.push("ERROR", message)
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerFake {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
            lines: self.lines.clone(),
        })
    }
}
