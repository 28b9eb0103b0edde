use crate::library::logger::interface::{join_namespace, LogResult, Logger};
use std::sync::Arc;

/// Forwards log lines to the global `tracing` subscriber.
#[derive(Debug, Clone, Default)]
pub struct LoggerTracing {
    namespace: Option<String>,
}

impl LoggerTracing {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or("app")
    }
}

impl Logger for LoggerTracing {
    fn debug(&self, message: &str) -> LogResult {
        tracing::debug!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn info(&self, message: &str) -> LogResult {
        tracing::info!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn error(&self, message: &str) -> LogResult {
        tracing::error!(namespace = self.namespace(), "{}", message);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerTracing {
            namespace: Some(join_namespace(self.namespace.as_deref(), namespace)),
        })
    }
}
