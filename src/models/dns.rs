//! DNS record models and the record-set flattening rules.
//!
//! The registrar groups multiple values under one `(label, type)` record
//! set; the host platform edits one flat entry per value. MX values travel
//! as `"priority address"` in a single string and are split on the way out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The record types the host platform can manage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Mxe,
    Mx,
    Cname,
    Txt,
    Url,
    Frame,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
            RecordType::Mxe => "MXE",
            RecordType::Mx => "MX",
            RecordType::Cname => "CNAME",
            RecordType::Txt => "TXT",
            RecordType::Url => "URL",
            RecordType::Frame => "FRAME",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::Aaaa),
            "MXE" => Ok(RecordType::Mxe),
            "MX" => Ok(RecordType::Mx),
            "CNAME" => Ok(RecordType::Cname),
            "TXT" => Ok(RecordType::Txt),
            "URL" => Ok(RecordType::Url),
            "FRAME" => Ok(RecordType::Frame),
            _ => Err(()),
        }
    }
}

/// A registrar-side record set. `rrset_type` stays a plain string because
/// the list endpoint also returns types (NS, SOA, ...) the host platform
/// never manages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordSet {
    pub rrset_name: String,
    pub rrset_type: String,
    pub rrset_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrset_ttl: Option<u32>,
}

/// One flat host-platform DNS entry: a single value of a record set, with
/// MX priority broken out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DnsEntry {
    pub hostname: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
}

/// Split a raw MX value at the first space into (priority, address).
///
/// Values without a leading numeric priority are kept whole as the address.
fn split_mx_value(value: &str) -> (Option<u16>, String) {
    if let Some((prio, address)) = value.split_once(' ') {
        if let Ok(prio) = prio.parse::<u16>() {
            return (Some(prio), address.to_string());
        }
    }
    tracing::debug!(value, "MX value without a leading priority");
    (None, value.to_string())
}

impl RecordSet {
    /// Flatten this set into one entry per value.
    ///
    /// Returns `None` for record types the host platform does not manage;
    /// those sets are skipped, never surfaced.
    pub fn flatten(&self) -> Option<Vec<DnsEntry>> {
        let record_type = RecordType::from_str(&self.rrset_type).ok()?;
        let entries = self
            .rrset_values
            .iter()
            .map(|value| {
                let (priority, address) = if record_type == RecordType::Mx {
                    split_mx_value(value)
                } else {
                    (None, value.clone())
                };
                DnsEntry {
                    hostname: self.rrset_name.clone(),
                    record_type,
                    address,
                    priority,
                }
            })
            .collect();
        Some(entries)
    }
}

impl DnsEntry {
    /// The single raw value transmitted for this entry: `"priority address"`
    /// for MX, the address verbatim otherwise.
    pub fn rrset_value(&self) -> String {
        match (self.record_type, self.priority) {
            (RecordType::Mx, Some(priority)) => format!("{} {}", priority, self.address),
            _ => self.address.clone(),
        }
    }

    /// Build the single-value record set payload for transmission.
    pub fn to_record_set(&self) -> RecordSet {
        RecordSet {
            rrset_name: self.hostname.clone(),
            rrset_type: self.record_type.to_string(),
            rrset_values: vec![self.rrset_value()],
            rrset_ttl: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(name: &str, rtype: &str, values: &[&str]) -> RecordSet {
        RecordSet {
            rrset_name: name.to_string(),
            rrset_type: rtype.to_string(),
            rrset_values: values.iter().map(|v| v.to_string()).collect(),
            rrset_ttl: Some(10800),
        }
    }

    #[test]
    fn test_flatten_multi_value_set() {
        let entries = set("www", "A", &["10.0.0.1", "10.0.0.2"]).flatten().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hostname, "www");
        assert_eq!(entries[0].record_type, RecordType::A);
        assert_eq!(entries[0].address, "10.0.0.1");
        assert_eq!(entries[1].address, "10.0.0.2");
        assert!(entries[0].priority.is_none());
    }

    #[test]
    fn test_flatten_mx_splits_priority() {
        let entries = set("@", "MX", &["10 mail.example.com"]).flatten().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].priority, Some(10));
        assert_eq!(entries[0].address, "mail.example.com");
    }

    #[test]
    fn test_flatten_multi_value_mx_splits_each() {
        let entries = set("@", "MX", &["10 mail.example.com", "20 backup.example.com"])
            .flatten()
            .unwrap();
        assert_eq!(entries[0].priority, Some(10));
        assert_eq!(entries[0].address, "mail.example.com");
        assert_eq!(entries[1].priority, Some(20));
        assert_eq!(entries[1].address, "backup.example.com");
    }

    #[test]
    fn test_flatten_mx_without_priority_keeps_value() {
        let entries = set("@", "MX", &["mail.example.com"]).flatten().unwrap();
        assert_eq!(entries[0].priority, None);
        assert_eq!(entries[0].address, "mail.example.com");
    }

    #[test]
    fn test_flatten_skips_unmanaged_types() {
        assert!(set("@", "NS", &["ns1.gandi.net."]).flatten().is_none());
        assert!(set("@", "SOA", &["..."]).flatten().is_none());
    }

    #[test]
    fn test_round_trip_preserves_value_count() {
        let original = set("www", "A", &["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        let entries = original.flatten().unwrap();
        assert_eq!(entries.len(), original.rrset_values.len());

        let values: Vec<String> = entries.iter().map(|e| e.rrset_value()).collect();
        assert_eq!(values, original.rrset_values);
    }

    #[test]
    fn test_mx_entry_joins_value() {
        let entry = DnsEntry {
            hostname: "@".to_string(),
            record_type: RecordType::Mx,
            address: "mail.example.com".to_string(),
            priority: Some(10),
        };
        assert_eq!(entry.rrset_value(), "10 mail.example.com");

        let rrset = entry.to_record_set();
        assert_eq!(rrset.rrset_type, "MX");
        assert_eq!(rrset.rrset_values, vec!["10 mail.example.com"]);
    }

    #[test]
    fn test_record_type_serde_names() {
        let json = serde_json::to_string(&RecordType::Aaaa).unwrap();
        assert_eq!(json, "\"AAAA\"");
        let parsed: RecordType = serde_json::from_str("\"CNAME\"").unwrap();
        assert_eq!(parsed, RecordType::Cname);
    }

    #[test]
    fn test_entry_serialization_shape() {
        let entry = DnsEntry {
            hostname: "www".to_string(),
            record_type: RecordType::A,
            address: "10.0.0.1".to_string(),
            priority: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "A");
        assert!(json.get("priority").is_none());
    }
}
