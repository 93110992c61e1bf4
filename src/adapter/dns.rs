//! DNS host-record operations over LiveDNS.

use super::RegistrarAdapter;
use crate::error::{GandiApiError, GandiApiResult};
use crate::models::DnsEntry;

impl RegistrarAdapter {
    /// Fetch the domain's DNS entries in the host platform's flat shape.
    ///
    /// Record sets of types the platform does not manage are skipped; each
    /// kept set yields one entry per value, with MX priorities split out.
    pub fn get_dns(&self, domain: &str) -> GandiApiResult<Vec<DnsEntry>> {
        let records = self.dns_api().get_livedns_records(domain)?;
        Ok(records
            .iter()
            .filter_map(|record| record.flatten())
            .flatten()
            .collect())
    }

    /// Replace DNS entries with the submitted list.
    ///
    /// Pairing is positional: the submitted entry at index i replaces the
    /// registrar's record set at index i (delete, then add), which assumes
    /// both sides share an ordering. The sequence is not transactional: a
    /// failure between delete and add leaves that set removed. An add the
    /// registrar answers with an in-band 404 means the domain has no LiveDNS
    /// delegation, which aborts the operation; other per-record rejections
    /// are logged and skipped.
    pub fn save_dns(&self, domain: &str, entries: &[DnsEntry]) -> GandiApiResult<()> {
        let existing = self.dns_api().get_livedns_records(domain)?;

        for (index, entry) in entries.iter().enumerate() {
            if let Some(current) = existing.get(index) {
                self.dns_api().delete_record(domain, current)?;
            }

            let reply = self.dns_api().add_record(domain, entry)?;
            if reply.status.code == Some(404) {
                return Err(GandiApiError::LiveDnsNotEnabled);
            }
            if !reply.is_accepted() {
                tracing::warn!(
                    domain,
                    hostname = %entry.hostname,
                    record_type = %entry.record_type,
                    response = %reply.raw,
                    "record not accepted"
                );
            }
        }
        Ok(())
    }
}
