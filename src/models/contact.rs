//! Whois contact models and the owner payload derivation.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Contact-type code Gandi expects on non-owner whois roles.
/// 0=person, 1=company, 2=association, 3=public body, 4=reseller.
const CONTACT_TYPE_PERSON: u64 = 0;

/// Country codes of French overseas territories Gandi files under FR.
const FRENCH_OVERSEAS: [&str; 5] = ["GF", "GP", "MQ", "RE", "YT"];

/// Host-platform language names mapped to Gandi language codes.
///
/// The table is a verbatim port of the upstream module: "chinese" maps to
/// "zh-hant" and there is no simplified-Chinese entry. Languages outside the
/// table produce an owner with no language field at all.
static LANGUAGE_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("english", "en"),
        ("spanish", "es"),
        ("french", "fr"),
        ("japanese", "ja"),
        ("chinese", "zh-hant"),
    ])
});

/// A whois contact as the host platform supplies it for registration and
/// transfer orders.
///
/// Registrar-specific derived fields (language code, the FR-overseas
/// state/country rewrite) are computed into [`OwnerPayload`] and never
/// written back here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub org_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postcode: String,
    pub country_code: String,
    pub country_name: String,
    pub state: Option<String>,
    pub phone_number: String,
    pub phone_country_code: String,
    pub phone_number_formatted: String,
    pub language: Option<String>,
}

/// The owner object transmitted on domain creation and transfer, using
/// Gandi's field names.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OwnerPayload {
    pub city: String,
    pub given: String,
    pub family: String,
    pub zip: String,
    pub country: String,
    pub streetaddr: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub contact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orgname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl OwnerPayload {
    /// Derive the registrar owner object from a host-platform contact.
    ///
    /// `default_language` is the host platform's configured language,
    /// applied when the contact carries none.
    pub fn derive(contact: &ContactRecord, default_language: Option<&str>) -> Self {
        let contact_type = if contact.org_name.trim().is_empty() {
            "individual"
        } else {
            "company"
        };

        let orgname = if contact.org_name.trim().is_empty() {
            None
        } else {
            Some(contact.org_name.clone())
        };

        // Gandi files the French overseas territories under FR with an
        // ISO-3166-2 state.
        let (country, state) = if FRENCH_OVERSEAS.contains(&contact.country_code.as_str()) {
            ("FR".to_string(), Some(format!("FR-{}", contact.country_code)))
        } else {
            (contact.country_code.clone(), contact.state.clone())
        };

        let language = contact
            .language
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .or(default_language);
        let lang = language
            .and_then(|l| LANGUAGE_CODES.get(l.to_lowercase().as_str()))
            .map(|code| code.to_string());

        OwnerPayload {
            city: contact.city.clone(),
            given: contact.first_name.clone(),
            family: contact.last_name.clone(),
            zip: contact.postcode.clone(),
            country,
            streetaddr: contact.address.clone(),
            phone: contact.phone_number_formatted.clone(),
            email: contact.email.clone(),
            contact_type: contact_type.to_string(),
            orgname,
            state,
            lang,
        }
    }
}

/// One whois role as a loose field map.
///
/// Gandi's contact fields are a user-edited passthrough, so they stay
/// dynamic; only the envelope/status fields of other resources get explicit
/// structs.
pub type ContactFields = Map<String, Value>;

/// The four whois roles as returned by the contacts endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainContacts {
    #[serde(default)]
    pub owner: ContactFields,
    #[serde(default)]
    pub admin: ContactFields,
    #[serde(default)]
    pub bill: ContactFields,
    #[serde(default)]
    pub tech: ContactFields,
}

/// The four whois roles as the host platform edits them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub owner: ContactFields,
    pub admin: ContactFields,
    pub billing: ContactFields,
    pub tech: ContactFields,
}

/// Registrar-internal fields stripped from every role before the host
/// platform sees it.
const INTERNAL_FIELDS: [&str; 4] = ["extra_parameters", "type", "data_obfuscated", "mail_obfuscated"];

fn strip_internal(mut fields: ContactFields, is_owner: bool) -> ContactFields {
    for key in INTERNAL_FIELDS {
        fields.remove(key);
    }
    if !is_owner {
        fields.remove("same_as_owner");
    }
    fields
}

impl From<DomainContacts> for ContactDetails {
    fn from(contacts: DomainContacts) -> Self {
        ContactDetails {
            owner: strip_internal(contacts.owner, true),
            admin: strip_internal(contacts.admin, false),
            billing: strip_internal(contacts.bill, false),
            tech: strip_internal(contacts.tech, false),
        }
    }
}

impl ContactDetails {
    /// Build the PATCH body for the contacts endpoint.
    ///
    /// The owner keeps whatever type the registrar derived for it; the other
    /// roles are normalized to the person contact-type code.
    pub fn to_update_body(&self) -> Value {
        let force_type = |fields: &ContactFields| -> Value {
            let mut fields = fields.clone();
            fields.insert("type".to_string(), Value::from(CONTACT_TYPE_PERSON));
            Value::Object(fields)
        };

        serde_json::json!({
            "owner": Value::Object(self.owner.clone()),
            "admin": force_type(&self.admin),
            "bill": force_type(&self.billing),
            "tech": force_type(&self.tech),
        })
    }
}
