//! The registrar operation catalogue.
//!
//! [`RegistrarAdapter`] is the surface a hosting/billing platform calls. Each
//! operation validates and reshapes the platform's parameters, invokes one or
//! more client methods, and reshapes the result back. Failures of every kind
//! are converted into [`crate::error::GandiApiError`] at this boundary;
//! nothing here is fatal to the process.

pub mod contacts;
pub mod dns;
pub mod domains;
pub mod nameservers;

pub use domains::{
    LookupStatus, RegisterParams, RenewParams, SyncStatus, TldAvailability, TransferParams,
    TransferSyncStatus,
};

use crate::client::{DomainApi, DomainClient, LiveDnsApi, LiveDnsClient};
use crate::config::Config;
use std::sync::Arc;
use std::time::Duration;

/// How the account pays for chargeable operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Individual,
    Organization,
    Reseller,
}

/// The organization scope applied to chargeable operations.
///
/// An individual account sends no scope; organization and reseller accounts
/// bill the configured organization via the `sharing_id` query parameter.
#[derive(Debug, Clone)]
pub struct AccountScope {
    pub account_type: AccountType,
    pub organization: Option<String>,
}

impl AccountScope {
    pub fn individual() -> Self {
        Self {
            account_type: AccountType::Individual,
            organization: None,
        }
    }

    pub fn organization(account_type: AccountType, organization: impl Into<String>) -> Self {
        Self {
            account_type,
            organization: Some(organization.into()),
        }
    }

    /// The `sharing_id` to transmit, if any.
    pub fn sharing_id(&self) -> Option<&str> {
        match self.account_type {
            AccountType::Individual => None,
            AccountType::Organization | AccountType::Reseller => self.organization.as_deref(),
        }
    }
}

impl Default for AccountScope {
    fn default() -> Self {
        Self::individual()
    }
}

/// The set of named operations the host platform invokes.
///
/// Cheap to construct; build one per operation invocation with the
/// credential the platform supplies. No state is carried between calls.
pub struct RegistrarAdapter {
    domain_api: Arc<dyn DomainApi>,
    dns_api: Arc<dyn LiveDnsApi>,
    contact_update_delay: Duration,
}

impl RegistrarAdapter {
    /// Create an adapter backed by real API clients.
    pub fn new(config: &Config, api_key: &str) -> Self {
        Self {
            domain_api: Arc::new(DomainClient::new(config, api_key)),
            dns_api: Arc::new(LiveDnsClient::new(config, api_key)),
            contact_update_delay: Duration::from_secs(config.contact_update_delay),
        }
    }

    /// Create an adapter over arbitrary API implementations (useful for
    /// testing with fakes).
    pub fn with_apis(
        domain_api: Arc<dyn DomainApi>,
        dns_api: Arc<dyn LiveDnsApi>,
        contact_update_delay: Duration,
    ) -> Self {
        Self {
            domain_api,
            dns_api,
            contact_update_delay,
        }
    }

    pub(crate) fn domain_api(&self) -> &Arc<dyn DomainApi> {
        &self.domain_api
    }

    pub(crate) fn dns_api(&self) -> &Arc<dyn LiveDnsApi> {
        &self.dns_api
    }

    pub(crate) fn contact_update_delay(&self) -> Duration {
        self.contact_update_delay
    }
}
