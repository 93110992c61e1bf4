//! HTTP clients for the Gandi v5 APIs.
//!
//! Two clients share one synchronous `ureq` transport: [`DomainClient`] for
//! the domain/contact/nameserver/organization endpoints and
//! [`LiveDnsClient`] for the record-set endpoints. The adapter depends on
//! them through the [`DomainApi`] / [`LiveDnsApi`] traits so tests can swap
//! in fakes.

mod dns;
mod domain;

pub use dns::LiveDnsClient;
pub use domain::DomainClient;

use crate::error::{GandiApiError, GandiApiResult};
use crate::logging::CallLog;
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{
    ApiReply, ContactDetails, ContactRecord, DnsEntry, DomainContacts, DomainInfo,
    DomainListEntry, Organization, RecordSet,
};
use std::sync::Arc;
use std::time::Duration;

/// Fixed user-agent transmitted on every request.
pub const USER_AGENT: &str = concat!("gandi-registrar/", env!("CARGO_PKG_VERSION"));

/// Registrar domain API operations the adapter consumes.
pub trait DomainApi: Send + Sync {
    /// Availability status of a domain (the first product's status).
    fn get_domain_availability(&self, domain: &str) -> GandiApiResult<String>;

    /// Register a domain with the derived owner contact.
    fn register_domain(
        &self,
        domain: &str,
        owner: &ContactRecord,
        nameservers: &[String],
        period: u32,
        organization: Option<&str>,
    ) -> GandiApiResult<ApiReply>;

    /// Start an inbound transfer with the registry authorization code.
    fn transfer_domain(
        &self,
        domain: &str,
        owner: &ContactRecord,
        nameservers: &[String],
        period: u32,
        auth_code: &str,
        organization: Option<&str>,
    ) -> GandiApiResult<ApiReply>;

    /// Renew a domain for a number of years.
    fn renew_domain(
        &self,
        domain: &str,
        period: u32,
        organization: Option<&str>,
    ) -> GandiApiResult<ApiReply>;

    /// Current nameserver list of a domain.
    fn get_domain_nameservers(&self, domain: &str) -> GandiApiResult<Vec<String>>;

    /// Replace the nameserver list of a domain.
    fn update_domain_nameservers(
        &self,
        domain: &str,
        nameservers: &[String],
    ) -> GandiApiResult<ApiReply>;

    /// The four whois roles of a domain.
    fn get_domain_contacts(&self, domain: &str) -> GandiApiResult<DomainContacts>;

    /// Patch the four whois roles back.
    fn update_domain_contacts(
        &self,
        domain: &str,
        contacts: &ContactDetails,
    ) -> GandiApiResult<ApiReply>;

    /// Create a child host under the domain.
    fn register_nameserver(&self, domain: &str, name: &str, ip: &str) -> GandiApiResult<ApiReply>;

    /// Change the IP of a child host.
    fn update_nameserver(&self, domain: &str, name: &str, ip: &str) -> GandiApiResult<ApiReply>;

    /// Delete a child host.
    fn delete_nameserver(&self, domain: &str, name: &str) -> GandiApiResult<ApiReply>;

    /// The domain resource (status/expiry sync, EPP code).
    fn get_domain_info(&self, domain: &str) -> GandiApiResult<DomainInfo>;

    /// Domains visible to the credential.
    fn get_domain_list(&self) -> GandiApiResult<Vec<DomainListEntry>>;

    /// Organizations the credential can act on behalf of.
    fn get_organizations(&self) -> GandiApiResult<Vec<Organization>>;

    /// LiveDNS delegation state of a domain.
    fn get_livedns_info(&self, domain: &str) -> GandiApiResult<ApiReply>;

    /// Delegate a domain's DNS to LiveDNS.
    fn enable_livedns(&self, domain: &str) -> GandiApiResult<ApiReply>;
}

/// LiveDNS record operations the adapter consumes.
pub trait LiveDnsApi: Send + Sync {
    /// All record sets of a domain.
    fn get_livedns_records(&self, domain: &str) -> GandiApiResult<Vec<RecordSet>>;

    /// Create a record set from one flat entry.
    fn add_record(&self, domain: &str, entry: &DnsEntry) -> GandiApiResult<ApiReply>;

    /// Delete the record set identified by the entry's (label, type).
    fn delete_record(&self, domain: &str, record: &RecordSet) -> GandiApiResult<ApiReply>;
}

/// Shared synchronous transport: authentication, JSON bodies, timing,
/// call-log reporting, and error mapping.
#[derive(Clone)]
pub(crate) struct Transport {
    base_url: String,
    api_key: String,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
    call_log: Arc<dyn CallLog>,
}

impl Transport {
    pub(crate) fn new(
        base_url: String,
        api_key: String,
        timeout_secs: u64,
        call_log: Arc<dyn CallLog>,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
            call_log,
        }
    }

    pub(crate) fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub(crate) fn call_log(&self) -> &Arc<dyn CallLog> {
        &self.call_log
    }

    pub(crate) fn set_call_log(&mut self, call_log: Arc<dyn CallLog>) {
        self.call_log = call_log;
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub(crate) fn get(&self, path: &str) -> GandiApiResult<String> {
        self.execute("GET", path, None)
    }

    pub(crate) fn post(&self, path: &str, body: &serde_json::Value) -> GandiApiResult<String> {
        self.execute("POST", path, Some(body))
    }

    pub(crate) fn put(&self, path: &str, body: &serde_json::Value) -> GandiApiResult<String> {
        self.execute("PUT", path, Some(body))
    }

    pub(crate) fn patch(&self, path: &str, body: &serde_json::Value) -> GandiApiResult<String> {
        self.execute("PATCH", path, Some(body))
    }

    pub(crate) fn delete(&self, path: &str) -> GandiApiResult<String> {
        self.execute("DELETE", path, None)
    }

    /// Issue one request and return the raw response body.
    ///
    /// The registrar reports business errors in-band, so any HTTP status
    /// whose body is parseable JSON is returned as a body for the caller to
    /// inspect; only statuses without one become typed transport errors.
    fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> GandiApiResult<String> {
        let url = self.build_url(path);
        let timer = HttpTimer::new(self.metrics.clone());

        tracing::debug!(method, %url, "registrar request");

        let request = self
            .agent
            .request(method, &url)
            .set("authorization", &format!("Apikey {}", self.api_key))
            .set("content-type", "application/json");

        let result = match body {
            Some(body) => request.send_json(body),
            None => request.call(),
        };

        match result {
            Ok(response) => {
                timer.complete();
                response
                    .into_string()
                    .map_err(|e| GandiApiError::HttpError(e.to_string()))
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                if !body.trim().is_empty()
                    && serde_json::from_str::<serde_json::Value>(&body).is_ok()
                {
                    // In-band error payload; the caller checks `code`/`errors`.
                    timer.complete();
                    Ok(body)
                } else {
                    timer.complete_with_error();
                    Err(Self::map_status_error(status, body))
                }
            }
            Err(ureq::Error::Transport(transport)) => {
                timer.complete_with_error();
                Err(Self::map_transport_error(transport))
            }
        }
    }

    fn map_status_error(status: u16, body: String) -> GandiApiError {
        let message = if body.is_empty() {
            "Unknown error".to_string()
        } else {
            body
        };
        match status {
            401 => GandiApiError::Unauthorized,
            404 => GandiApiError::NotFound(message),
            _ => GandiApiError::ApiError { status, message },
        }
    }

    fn map_transport_error(transport: ureq::Transport) -> GandiApiError {
        if transport.kind() == ureq::ErrorKind::ConnectionFailed {
            GandiApiError::HttpError("Connection failed".to_string())
        } else if transport.kind() == ureq::ErrorKind::Io {
            GandiApiError::Timeout
        } else {
            GandiApiError::HttpError(transport.to_string())
        }
    }
}
