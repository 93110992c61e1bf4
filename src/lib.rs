//! Gandi Registrar - a registrar and LiveDNS adapter for the Gandi v5 API.
//!
//! This library lets a hosting/billing platform drive domain lifecycle
//! operations (registration, transfer, renewal, nameservers, whois contacts,
//! DNS records, status sync) against Gandi's v5 REST API.
//!
//! # Architecture
//!
//! - **models**: Data structures for contacts, domains, and DNS records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP clients for the domain and LiveDNS APIs
//! - **adapter**: The named operations the host platform invokes
//! - **logging**: Tracing setup and the host-platform audit sink
//! - **metrics**: HTTP instrumentation counters

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;

pub use adapter::{
    AccountScope, AccountType, LookupStatus, RegisterParams, RegistrarAdapter, RenewParams,
    SyncStatus, TldAvailability, TransferParams, TransferSyncStatus,
};
pub use client::{DomainApi, DomainClient, LiveDnsApi, LiveDnsClient};
pub use config::Config;
pub use error::{ConfigError, GandiApiError};
pub use logging::{CallLog, NoopCallLog, TracingCallLog};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{
    ApiReply, ContactDetails, ContactRecord, DnsEntry, DomainInfo, DomainName, Organization,
    OwnerPayload, RecordSet, RecordType,
};
