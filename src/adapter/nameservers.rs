//! Nameserver operations: the per-domain delegation list and child hosts.

use super::RegistrarAdapter;
use crate::error::{GandiApiError, GandiApiResult};
use crate::models::compact_nameservers;
use std::collections::BTreeMap;

/// First label of a child nameserver name; hosts are keyed by it under the
/// parent domain.
fn host_label(nameserver: &str) -> GandiApiResult<&str> {
    let label = nameserver.split('.').next().unwrap_or_default();
    if label.is_empty() {
        return Err(GandiApiError::InvalidRequest(
            "nameserver name is empty".to_string(),
        ));
    }
    Ok(label)
}

impl RegistrarAdapter {
    /// Fetch the current nameservers, keyed `ns1`..`nsN` in registrar order.
    pub fn get_nameservers(&self, domain: &str) -> GandiApiResult<BTreeMap<String, String>> {
        let nameservers = self.domain_api().get_domain_nameservers(domain)?;
        Ok(nameservers
            .into_iter()
            .enumerate()
            .map(|(index, host)| (format!("ns{}", index + 1), host))
            .collect())
    }

    /// Replace the nameservers with the non-empty submitted slots.
    pub fn save_nameservers(&self, domain: &str, slots: &[String]) -> GandiApiResult<()> {
        let nameservers = compact_nameservers(slots);
        let reply = self
            .domain_api()
            .update_domain_nameservers(domain, &nameservers)?;
        reply.ensure_accepted()
    }

    /// Add a child nameserver (glue record) under the domain.
    pub fn register_nameserver(
        &self,
        domain: &str,
        nameserver: &str,
        ip: &str,
    ) -> GandiApiResult<()> {
        let label = host_label(nameserver)?;
        let reply = self.domain_api().register_nameserver(domain, label, ip)?;
        reply.ensure_accepted()
    }

    /// Change the IP of a child nameserver.
    pub fn modify_nameserver(
        &self,
        domain: &str,
        nameserver: &str,
        new_ip: &str,
    ) -> GandiApiResult<()> {
        let label = host_label(nameserver)?;
        let reply = self.domain_api().update_nameserver(domain, label, new_ip)?;
        reply.ensure_accepted()
    }

    /// Delete a child nameserver.
    pub fn delete_nameserver(&self, domain: &str, nameserver: &str) -> GandiApiResult<()> {
        let label = host_label(nameserver)?;
        let reply = self.domain_api().delete_nameserver(domain, label)?;
        reply.ensure_accepted()
    }
}
