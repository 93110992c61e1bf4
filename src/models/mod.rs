//! Data models: host-platform shapes on one side, Gandi resource shapes on
//! the other, and the conversions between them.

pub mod contact;
pub mod dns;
pub mod domain;

pub use contact::{ContactDetails, ContactFields, ContactRecord, DomainContacts, OwnerPayload};
pub use dns::{DnsEntry, RecordSet, RecordType};
pub use domain::{
    compact_nameservers, ApiReply, ApiStatus, AvailabilityProduct, AvailabilityResponse,
    DomainDates, DomainInfo, DomainListEntry, DomainName, FieldError, Organization, ACCEPTED_CODE,
};
