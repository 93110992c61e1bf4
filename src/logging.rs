//! Logging setup and the host-platform audit sink.
//!
//! The clients report every outbound registrar call and its raw response to a
//! [`CallLog`], keyed by a human-readable action label ("Domain register",
//! "LiveDNS records", ...). The sink is audit/debug only and has no effect on
//! control flow. Hosts that capture module calls themselves can plug in their
//! own implementation; the default forwards to `tracing`.

use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Audit sink for registrar API calls.
pub trait CallLog: Send + Sync {
    /// Record one outbound call: a human-readable action label, a summary of
    /// the request data, and the raw response body.
    fn record(&self, action: &str, request: &str, response: &str);
}

/// Default sink forwarding each call to `tracing` at debug level.
#[derive(Debug, Default, Clone)]
pub struct TracingCallLog;

impl CallLog for TracingCallLog {
    fn record(&self, action: &str, request: &str, response: &str) {
        tracing::debug!(action, request, response, "registrar call");
    }
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone)]
pub struct NoopCallLog;

impl CallLog for NoopCallLog {
    fn record(&self, _action: &str, _request: &str, _response: &str) {}
}

/// In-memory sink for inspecting calls in tests.
#[derive(Debug, Default)]
pub struct MemoryCallLog {
    entries: Mutex<Vec<(String, String, String)>>,
}

impl MemoryCallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded (action, request, response) entries.
    pub fn entries(&self) -> Vec<(String, String, String)> {
        self.entries.lock().expect("call log poisoned").clone()
    }
}

impl CallLog for MemoryCallLog {
    fn record(&self, action: &str, request: &str, response: &str) {
        self.entries
            .lock()
            .expect("call log poisoned")
            .push((action.to_string(), request.to_string(), response.to_string()));
    }
}

/// Initialize tracing output to stderr.
///
/// `RUST_LOG` wins when set; otherwise `log_level` is used. Safe to call once
/// per process; later calls are ignored.
pub fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_call_log_records_in_order() {
        let log = MemoryCallLog::new();
        log.record("Domain info", "example.com", r#"{"fqdn":"example.com"}"#);
        log.record("Domain renew", "example.com", r#"{"code":202}"#);

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "Domain info");
        assert_eq!(entries[1].2, r#"{"code":202}"#);
    }

    #[test]
    fn test_noop_call_log() {
        // Nothing observable; just verify it is callable through the trait.
        let log: &dyn CallLog = &NoopCallLog;
        log.record("Domain availability", "example.com", "{}");
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("error");
        init_tracing("debug");
    }
}
