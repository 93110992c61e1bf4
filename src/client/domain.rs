//! Client for the Gandi v5 domain API.

use super::{DomainApi, Transport};
use crate::config::Config;
use crate::error::{GandiApiError, GandiApiResult};
use crate::logging::{CallLog, TracingCallLog};
use crate::metrics::Metrics;
use crate::models::{
    compact_nameservers, ApiReply, ContactDetails, ContactRecord, DomainContacts, DomainInfo,
    DomainListEntry, Organization, OwnerPayload,
};
use std::sync::Arc;

/// Client for the domain/contact/nameserver/organization endpoints.
///
/// Stateless per call: every method is one authenticated request plus JSON
/// decoding. Construct one per operation invocation with the credential the
/// host platform supplies.
#[derive(Clone)]
pub struct DomainClient {
    transport: Transport,
    default_language: Option<String>,
}

impl DomainClient {
    /// Create a client from configuration and an API key.
    pub fn new(config: &Config, api_key: impl Into<String>) -> Self {
        Self {
            transport: Transport::new(
                config.api_base_url.clone(),
                api_key.into(),
                config.request_timeout,
                Arc::new(TracingCallLog),
            ),
            default_language: config.default_language.clone(),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            transport: Transport::new(base_url, api_key, 10, Arc::new(TracingCallLog)),
            default_language: None,
        }
    }

    /// Replace the audit sink the client reports calls to.
    pub fn with_call_log(mut self, call_log: Arc<dyn CallLog>) -> Self {
        self.transport.set_call_log(call_log);
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        self.transport.metrics()
    }

    fn report(&self, action: &str, request: &str, response: &str) {
        self.transport.call_log().record(action, request, response);
    }

    /// Append the organization scope when one is set.
    fn scoped(path: String, organization: Option<&str>) -> String {
        match organization.filter(|org| !org.is_empty()) {
            Some(org) => format!("{}?sharing_id={}", path, urlencoding::encode(org)),
            None => path,
        }
    }

    /// The creation/transfer request body shared by register and transfer.
    fn order_body(
        &self,
        domain: &str,
        owner: &ContactRecord,
        nameservers: &[String],
        period: u32,
    ) -> serde_json::Value {
        serde_json::json!({
            "fqdn": domain,
            "duration": period,
            "owner": OwnerPayload::derive(owner, self.default_language.as_deref()),
            "nameservers": compact_nameservers(nameservers),
        })
    }
}

impl DomainApi for DomainClient {
    fn get_domain_availability(&self, domain: &str) -> GandiApiResult<String> {
        let path = format!("/domain/check?name={}", urlencoding::encode(domain));
        let body = self.transport.get(&path)?;
        self.report("Domain availability", domain, &body);

        let response: crate::models::AvailabilityResponse = serde_json::from_str(&body)?;
        response
            .products
            .first()
            .map(|product| product.status.clone())
            .ok_or_else(|| {
                GandiApiError::MalformedResponse(
                    "availability check returned no products".to_string(),
                )
            })
    }

    fn register_domain(
        &self,
        domain: &str,
        owner: &ContactRecord,
        nameservers: &[String],
        period: u32,
        organization: Option<&str>,
    ) -> GandiApiResult<ApiReply> {
        let path = Self::scoped("/domain/domains".to_string(), organization);
        let params = self.order_body(domain, owner, nameservers, period);
        let body = self.transport.post(&path, &params)?;
        self.report("Domain register", &params.to_string(), &body);
        Ok(ApiReply::parse(body))
    }

    fn transfer_domain(
        &self,
        domain: &str,
        owner: &ContactRecord,
        nameservers: &[String],
        period: u32,
        auth_code: &str,
        organization: Option<&str>,
    ) -> GandiApiResult<ApiReply> {
        let path = Self::scoped("/domain/transferin".to_string(), organization);
        let mut params = self.order_body(domain, owner, nameservers, period);
        params["authinfo"] = serde_json::Value::from(auth_code);
        let body = self.transport.post(&path, &params)?;
        self.report("Domain transfer", &params.to_string(), &body);
        Ok(ApiReply::parse(body))
    }

    fn renew_domain(
        &self,
        domain: &str,
        period: u32,
        organization: Option<&str>,
    ) -> GandiApiResult<ApiReply> {
        let path = Self::scoped(format!("/domain/domains/{}/renew", domain), organization);
        let params = serde_json::json!({ "duration": period });
        let body = self.transport.post(&path, &params)?;
        self.report("Domain renew", domain, &body);
        Ok(ApiReply::parse(body))
    }

    fn get_domain_nameservers(&self, domain: &str) -> GandiApiResult<Vec<String>> {
        let path = format!("/domain/domains/{}/nameservers", domain);
        let body = self.transport.get(&path)?;
        self.report("Domain nameservers", domain, &body);

        let value: serde_json::Value = serde_json::from_str(&body)?;
        if value.is_array() {
            Ok(serde_json::from_value(value)?)
        } else {
            Err(GandiApiError::MalformedResponse(
                "nameserver list is not an array".to_string(),
            ))
        }
    }

    fn update_domain_nameservers(
        &self,
        domain: &str,
        nameservers: &[String],
    ) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/nameservers", domain);
        let params = serde_json::json!({ "nameservers": nameservers });
        let body = self.transport.put(&path, &params)?;
        self.report("Domain update nameservers", &params.to_string(), &body);
        Ok(ApiReply::parse(body))
    }

    fn get_domain_contacts(&self, domain: &str) -> GandiApiResult<DomainContacts> {
        let path = format!("/domain/domains/{}/contacts", domain);
        let body = self.transport.get(&path)?;
        self.report("Domain contacts", domain, &body);
        Ok(serde_json::from_str(&body)?)
    }

    fn update_domain_contacts(
        &self,
        domain: &str,
        contacts: &ContactDetails,
    ) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/contacts", domain);
        let params = contacts.to_update_body();
        let body = self.transport.patch(&path, &params)?;
        self.report("Domain update contacts", &params.to_string(), &body);
        Ok(ApiReply::parse(body))
    }

    fn register_nameserver(&self, domain: &str, name: &str, ip: &str) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/hosts", domain);
        let params = serde_json::json!({ "name": name, "ips": [ip] });
        let body = self.transport.post(&path, &params)?;
        self.report("Register nameserver", &params.to_string(), &body);
        Ok(ApiReply::parse(body))
    }

    fn update_nameserver(&self, domain: &str, name: &str, ip: &str) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/hosts/{}", domain, name);
        let params = serde_json::json!({ "ips": [ip] });
        let body = self.transport.put(&path, &params)?;
        self.report("Update nameserver", &params.to_string(), &body);
        Ok(ApiReply::parse(body))
    }

    fn delete_nameserver(&self, domain: &str, name: &str) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/hosts/{}", domain, name);
        let body = self.transport.delete(&path)?;
        self.report("Delete nameserver", name, &body);
        Ok(ApiReply::parse(body))
    }

    fn get_domain_info(&self, domain: &str) -> GandiApiResult<DomainInfo> {
        let path = format!("/domain/domains/{}", domain);
        let body = self.transport.get(&path)?;
        self.report("Domain info", domain, &body);
        Ok(serde_json::from_str(&body)?)
    }

    fn get_domain_list(&self) -> GandiApiResult<Vec<DomainListEntry>> {
        let body = self.transport.get("/domain/domains")?;
        self.report("Domain list", "", &body);
        Ok(serde_json::from_str(&body)?)
    }

    fn get_organizations(&self) -> GandiApiResult<Vec<Organization>> {
        let body = self.transport.get("/organization/organizations")?;
        self.report("Organizations", "", &body);
        Ok(serde_json::from_str(&body)?)
    }

    fn get_livedns_info(&self, domain: &str) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/livedns", domain);
        let body = self.transport.get(&path)?;
        self.report("LiveDNS info", domain, &body);
        Ok(ApiReply::parse(body))
    }

    fn enable_livedns(&self, domain: &str) -> GandiApiResult<ApiReply> {
        let path = format!("/domain/domains/{}/livedns", domain);
        let body = self.transport.post(&path, &serde_json::json!({}))?;
        self.report("Enable LiveDNS", domain, &body);
        Ok(ApiReply::parse(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let config = Config::default();
        let client = DomainClient::new(&config, "test-key-123");
        assert_eq!(client.transport.metrics().http_requests_total(), 0);
        assert_eq!(client.default_language, None);
    }

    #[test]
    fn test_scoped_path() {
        assert_eq!(
            DomainClient::scoped("/domain/domains".to_string(), None),
            "/domain/domains"
        );
        assert_eq!(
            DomainClient::scoped("/domain/domains".to_string(), Some("")),
            "/domain/domains"
        );
        assert_eq!(
            DomainClient::scoped("/domain/domains".to_string(), Some("org-1")),
            "/domain/domains?sharing_id=org-1"
        );
    }

    #[test]
    fn test_order_body_compacts_nameservers() {
        let client = DomainClient::with_base_url(
            "https://api.example.com".to_string(),
            "test-key".to_string(),
        );
        let owner = ContactRecord {
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
            email: "alice@example.com".to_string(),
            ..Default::default()
        };
        let nameservers = vec![
            "ns1.example.net".to_string(),
            String::new(),
            "ns3.example.net".to_string(),
        ];

        let body = client.order_body("example.com", &owner, &nameservers, 1);
        assert_eq!(body["fqdn"], "example.com");
        assert_eq!(body["duration"], 1);
        assert_eq!(body["owner"]["given"], "Alice");
        assert_eq!(
            body["nameservers"],
            serde_json::json!(["ns1.example.net", "ns3.example.net"])
        );
    }
}
