//! Domain lifecycle operations: register, transfer, renew, availability
//! lookup, status sync, and EPP code retrieval.

use super::{AccountScope, RegistrarAdapter};
use crate::error::{GandiApiError, GandiApiResult};
use crate::models::{ContactRecord, DomainName};
use chrono::{NaiveDate, Utc};

/// Availability status the registrar reports for a registrable domain.
const AVAILABLE: &str = "available";

/// In-band codes meaning the domain is no longer under this credential.
const GONE_CODES: [u16; 2] = [403, 404];

/// Parameters for a domain registration order.
#[derive(Debug, Clone)]
pub struct RegisterParams {
    pub domain: DomainName,
    pub period: u32,
    pub owner: ContactRecord,
    /// Up to five slots; empty ones are dropped before transmission.
    pub nameservers: Vec<String>,
    pub scope: AccountScope,
}

/// Parameters for an inbound transfer order.
#[derive(Debug, Clone)]
pub struct TransferParams {
    pub domain: DomainName,
    pub period: u32,
    pub owner: ContactRecord,
    pub nameservers: Vec<String>,
    pub auth_code: String,
    pub scope: AccountScope,
}

/// Parameters for a renewal order.
#[derive(Debug, Clone)]
pub struct RenewParams {
    pub domain: DomainName,
    pub period: u32,
    pub scope: AccountScope,
}

/// Classification of one availability lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Registered,
    NotRegistered,
}

/// Per-TLD result of an availability batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldAvailability {
    pub sld: String,
    pub tld: String,
    pub status: LookupStatus,
}

/// Outcome of a periodic domain status sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncStatus {
    pub expiry_date: Option<NaiveDate>,
    pub active: bool,
    pub expired: bool,
    pub transferred_away: bool,
}

impl SyncStatus {
    fn transferred_away() -> Self {
        SyncStatus {
            expiry_date: None,
            active: false,
            expired: false,
            transferred_away: true,
        }
    }
}

/// Outcome of a periodic transfer status sync. Errors are folded into the
/// failed state rather than propagated, so the host platform always gets a
/// status to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSyncStatus {
    pub completed: bool,
    pub failed: bool,
    pub expiry_date: Option<NaiveDate>,
    pub reason: Option<String>,
    pub error: Option<String>,
}

impl TransferSyncStatus {
    fn pending() -> Self {
        TransferSyncStatus {
            completed: false,
            failed: false,
            expiry_date: None,
            reason: None,
            error: None,
        }
    }

    fn completed(expiry_date: NaiveDate) -> Self {
        TransferSyncStatus {
            completed: true,
            failed: false,
            expiry_date: Some(expiry_date),
            reason: None,
            error: None,
        }
    }

    fn failed(error: &GandiApiError) -> Self {
        TransferSyncStatus {
            completed: false,
            failed: true,
            expiry_date: None,
            reason: Some("Transfer Error".to_string()),
            error: Some(error.to_string()),
        }
    }
}

impl RegistrarAdapter {
    /// Register a domain.
    ///
    /// Checks availability first; any status other than `available` fails
    /// with that status as the error message.
    pub fn register(&self, params: &RegisterParams) -> GandiApiResult<()> {
        let fqdn = params.domain.to_string();
        let availability = self.domain_api().get_domain_availability(&fqdn)?;
        if availability != AVAILABLE {
            return Err(GandiApiError::NotAvailable(availability));
        }

        let reply = self.domain_api().register_domain(
            &fqdn,
            &params.owner,
            &params.nameservers,
            params.period,
            params.scope.sharing_id(),
        )?;
        reply.ensure_accepted()
    }

    /// Start an inbound transfer.
    pub fn transfer(&self, params: &TransferParams) -> GandiApiResult<()> {
        let fqdn = params.domain.to_string();
        let reply = self.domain_api().transfer_domain(
            &fqdn,
            &params.owner,
            &params.nameservers,
            params.period,
            &params.auth_code,
            params.scope.sharing_id(),
        )?;
        reply.ensure_accepted()
    }

    /// Renew a domain.
    pub fn renew(&self, params: &RenewParams) -> GandiApiResult<()> {
        let fqdn = params.domain.to_string();
        let reply =
            self.domain_api()
                .renew_domain(&fqdn, params.period, params.scope.sharing_id())?;
        reply.ensure_accepted()
    }

    /// Check one second-level label against a batch of TLDs, in order.
    ///
    /// Leading dots on the TLDs are stripped. The first lookup failure
    /// aborts the whole batch.
    pub fn check_availability(
        &self,
        sld: &str,
        tlds: &[String],
    ) -> GandiApiResult<Vec<TldAvailability>> {
        let mut results = Vec::with_capacity(tlds.len());
        for tld in tlds {
            let tld = tld.trim_start_matches('.');
            let fqdn = format!("{}.{}", sld, tld);
            let availability = self.domain_api().get_domain_availability(&fqdn)?;
            let status = if availability == AVAILABLE {
                LookupStatus::NotRegistered
            } else {
                LookupStatus::Registered
            };
            results.push(TldAvailability {
                sld: sld.to_string(),
                tld: tld.to_string(),
                status,
            });
        }
        Ok(results)
    }

    /// Sync a domain's status and expiry from the registrar.
    pub fn sync(&self, domain: &str) -> GandiApiResult<SyncStatus> {
        let info = self.domain_api().get_domain_info(domain)?;
        if let Some(code) = info.code {
            if GONE_CODES.contains(&code) {
                return Ok(SyncStatus::transferred_away());
            }
            if code == 401 {
                return Err(GandiApiError::Unauthorized);
            }
        }

        let end = info.registry_end().ok_or_else(|| {
            GandiApiError::MalformedResponse("domain info has no registry end date".to_string())
        })?;

        Ok(SyncStatus {
            expiry_date: Some(end.date_naive()),
            active: true,
            expired: end < Utc::now(),
            transferred_away: false,
        })
    }

    /// Sync an inbound transfer's status from the registrar.
    pub fn transfer_sync(&self, domain: &str) -> TransferSyncStatus {
        match self.try_transfer_sync(domain) {
            Ok(status) => status,
            Err(error) => TransferSyncStatus::failed(&error),
        }
    }

    fn try_transfer_sync(&self, domain: &str) -> GandiApiResult<TransferSyncStatus> {
        let info = self.domain_api().get_domain_info(domain)?;
        if let Some(code) = info.code {
            // The domain resource is not visible until the transfer lands.
            if GONE_CODES.contains(&code) {
                return Ok(TransferSyncStatus::pending());
            }
        }

        let end = info.registry_end().ok_or_else(|| {
            GandiApiError::MalformedResponse("domain info has no registry end date".to_string())
        })?;
        Ok(TransferSyncStatus::completed(end.date_naive()))
    }

    /// The domain's transfer authorization code.
    pub fn get_epp_code(&self, domain: &str) -> GandiApiResult<String> {
        let info = self.domain_api().get_domain_info(domain)?;
        info.authinfo.ok_or_else(|| {
            GandiApiError::MalformedResponse("domain info has no authinfo".to_string())
        })
    }
}
