//! Domain API resource models.
//!
//! Gandi signals business errors in-band: any response body, including one
//! on a 200-level transport response, may carry an HTTP-style numeric `code`
//! and/or an `errors` list. Envelope fields are decoded defensively into
//! explicit optional fields; their absence is only an error when an
//! operation requires the field.

use crate::error::{GandiApiError, GandiApiResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// Success code Gandi replies with on accepted mutations.
pub const ACCEPTED_CODE: u16 = 202;

/// A domain name as the host platform supplies it: second-level and
/// top-level labels, joined as `sld.tld`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainName {
    pub sld: String,
    pub tld: String,
}

impl DomainName {
    pub fn new(sld: impl Into<String>, tld: impl Into<String>) -> Self {
        Self {
            sld: sld.into(),
            tld: tld.into(),
        }
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.sld, self.tld)
    }
}

/// One entry of an in-band `errors` list.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FieldError {
    pub description: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>,
}

/// The status envelope Gandi may attach to any response body.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ApiStatus {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub errors: Option<Vec<FieldError>>,
    pub object: Option<String>,
    pub cause: Option<String>,
}

/// A decoded mutation response: the status envelope plus the raw body it was
/// decoded from, kept for error reporting and audit logging.
#[derive(Debug, Clone, Default)]
pub struct ApiReply {
    pub status: ApiStatus,
    pub raw: String,
}

impl ApiReply {
    /// Decode a raw response body.
    ///
    /// Bodies that are empty or not a JSON object (some endpoints reply 204
    /// with nothing) decode to an empty envelope, which counts as accepted.
    pub fn parse(raw: String) -> Self {
        let status = serde_json::from_str::<ApiStatus>(&raw).unwrap_or_default();
        ApiReply { status, raw }
    }

    /// Whether the registrar accepted the request: no `errors`, and `code`
    /// (when present) equal to the expected success code.
    pub fn is_accepted(&self) -> bool {
        self.status.errors.is_none() && self.status.code.map_or(true, |c| c == ACCEPTED_CODE)
    }

    /// The registrar's `message` field, falling back to the raw body.
    pub fn error_message(&self) -> String {
        self.status
            .message
            .clone()
            .unwrap_or_else(|| self.raw.clone())
    }

    /// Fail with the serialized response unless the request was accepted.
    pub fn ensure_accepted(&self) -> GandiApiResult<()> {
        if self.is_accepted() {
            Ok(())
        } else {
            Err(GandiApiError::Rejected(self.raw.clone()))
        }
    }
}

/// Lifecycle dates of a domain resource.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DomainDates {
    pub registry_created_at: Option<String>,
    pub registry_ends_at: Option<String>,
    pub updated_at: Option<String>,
}

/// The domain resource, as needed for status/expiry sync and EPP-code
/// retrieval. An in-band `code` (403/404) on this resource is how the
/// registrar reports a domain no longer under the credential's control.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DomainInfo {
    pub code: Option<u16>,
    pub message: Option<String>,
    pub fqdn: Option<String>,
    pub authinfo: Option<String>,
    pub status: Option<Vec<String>>,
    pub dates: Option<DomainDates>,
}

impl DomainInfo {
    /// The registry expiry instant, when present and well-formed.
    pub fn registry_end(&self) -> Option<DateTime<Utc>> {
        let raw = self.dates.as_ref()?.registry_ends_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// One product of an availability check response.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AvailabilityProduct {
    pub status: String,
    pub name: Option<String>,
    pub process: Option<String>,
}

/// The availability check response; the first product's status is the
/// domain's availability.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AvailabilityResponse {
    pub products: Vec<AvailabilityProduct>,
    pub currency: Option<String>,
}

/// An organization the credential can act on behalf of. Only used to
/// populate a selection list during configuration.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Organization {
    pub id: String,
    pub name: String,
}

/// One domain of the account's domain list.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct DomainListEntry {
    pub fqdn: String,
    pub id: Option<String>,
    pub dates: Option<DomainDates>,
}

/// Drop empty nameserver slots, preserving the order of the rest.
pub fn compact_nameservers(slots: &[String]) -> Vec<String> {
    slots
        .iter()
        .filter(|ns| !ns.trim().is_empty())
        .cloned()
        .collect()
}
