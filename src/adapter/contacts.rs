//! Whois contact operations.

use super::RegistrarAdapter;
use crate::error::{GandiApiError, GandiApiResult};
use crate::models::ContactDetails;

impl RegistrarAdapter {
    /// Fetch the four whois roles with registrar-internal fields stripped.
    pub fn get_contact_details(&self, domain: &str) -> GandiApiResult<ContactDetails> {
        let contacts = self.domain_api().get_domain_contacts(domain)?;
        Ok(ContactDetails::from(contacts))
    }

    /// Submit edited whois roles.
    ///
    /// On success the call blocks for the configured propagation delay
    /// before returning: the registrar applies contact changes
    /// asynchronously, and reading them back immediately would show stale
    /// data. On an in-band rejection the registrar's message is the error.
    pub fn save_contact_details(
        &self,
        domain: &str,
        details: &ContactDetails,
    ) -> GandiApiResult<()> {
        let reply = self.domain_api().update_domain_contacts(domain, details)?;
        if !reply.is_accepted() {
            return Err(GandiApiError::Rejected(reply.error_message()));
        }

        std::thread::sleep(self.contact_update_delay());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::fakes::{rejected_reply, FakeDomainApi, FakeLiveDnsApi};
    use crate::adapter::RegistrarAdapter;
    use crate::models::DomainContacts;
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;

    fn adapter_with(domain_api: Arc<FakeDomainApi>) -> RegistrarAdapter {
        RegistrarAdapter::with_apis(
            domain_api,
            Arc::new(FakeLiveDnsApi::default()),
            Duration::ZERO,
        )
    }

    #[test]
    fn test_get_contact_details_strips_internal_fields() {
        let api = Arc::new(FakeDomainApi::default());
        let contacts: DomainContacts = serde_json::from_str(
            r#"{
                "owner": {"given": "Alice", "type": 0, "data_obfuscated": true},
                "admin": {"given": "Bob", "same_as_owner": true},
                "bill": {"given": "Carol"},
                "tech": {"given": "Dave", "mail_obfuscated": false}
            }"#,
        )
        .unwrap();
        *api.contacts.lock().unwrap() = Some(contacts);
        let adapter = adapter_with(api);

        let details = adapter.get_contact_details("example.com").unwrap();
        assert_eq!(details.owner.get("given"), Some(&Value::from("Alice")));
        assert!(details.owner.get("type").is_none());
        assert!(details.owner.get("data_obfuscated").is_none());
        assert!(details.admin.get("same_as_owner").is_none());
        assert!(details.tech.get("mail_obfuscated").is_none());
        assert_eq!(details.billing.get("given"), Some(&Value::from("Carol")));
    }

    #[test]
    fn test_save_contact_details() {
        let api = Arc::new(FakeDomainApi::default());
        let adapter = adapter_with(api.clone());

        adapter
            .save_contact_details("example.com", &ContactDetails::default())
            .unwrap();
        assert_eq!(api.calls(), vec!["update_contacts:example.com"]);
    }

    #[test]
    fn test_save_contact_details_uses_registrar_message() {
        let api = Arc::new(FakeDomainApi::default());
        *api.reply.lock().unwrap() = Some(rejected_reply(
            r#"{"code":400,"message":"invalid postal code"}"#,
        ));
        let adapter = adapter_with(api);

        match adapter.save_contact_details("example.com", &ContactDetails::default()) {
            Err(GandiApiError::Rejected(message)) => {
                assert_eq!(message, "invalid postal code");
            }
            other => panic!("Expected Rejected, got: {:?}", other),
        }
    }
}
