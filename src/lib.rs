//! AI Finance Agency Protocol Buffer definitions.
//!
//! This crate provides gRPC service definitions and message types for all
//! AI Finance Agency microservices.
//!
//! # Services
//!
//! - [`signals`] - Trading signal publication, listing, exits, and performance
//! - [`payment`] - Payment intents, subscriptions, refunds, and webhooks
//! - [`user`] - Users, plans, subscriptions, and entitlement checks
//! - [`notification`] - Operational alerts and signal delivery
//! - [`risk`] - Compliance checks gating signal distribution
//! - [`education`] - Course library and progress tracking
//! - [`health`] / [`metrics`] - Cross-cutting service plumbing
//! - [`common`] - Shared messages (money, tiers, pagination, time ranges)
//!
//! # Generated Code
//!
//! All message and service types are auto-generated from Protocol Buffer
//! definitions using `tonic-build`. The generated code includes gRPC client
//! and server implementations for each service. The schemas in `proto/` are
//! the source of truth for wire compatibility: package names, service names,
//! method names, field numbers, and wire types must not change meaning.
//!
//! On top of the generated code this crate ships a small hand-written layer:
//! [`convert`] for moving between protobuf and Rust domain types, and
//! [`services`] with ready-made health and metrics service implementations.
//!
//! Note: Clippy lints for generated code are configured in `Cargo.toml` since
//! we cannot modify the auto-generated protobuf code.

pub mod convert;
pub mod services;

/// Shared message types used across all services.
///
/// Money, subscription tiers, delivery channels, pagination envelopes,
/// and time ranges. This package defines no gRPC service.
pub mod common {
    /// Version 1 of the common types.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.common.v1");
    }
}

/// Health checking protocol definitions.
///
/// Mirrors grpc.health.v1 semantics (Check and streaming Watch) so standard
/// tooling can probe every platform service.
pub mod health {
    /// Version 1 of the health API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.health.v1");
    }
}

/// Operational metrics protocol definitions.
///
/// Batch metric-point ingestion and snapshots.
pub mod metrics {
    /// Version 1 of the metrics API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.metrics.v1");
    }
}

/// Signal service protocol definitions.
///
/// Trading signal publication, tier-filtered listing, exit recording,
/// and aggregate performance reporting.
pub mod signals {
    /// Version 1 of the signals API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.signals.v1");
    }
}

/// Payment service protocol definitions.
///
/// Payment intents with tax computation, recurring subscriptions, refunds,
/// revenue summaries, and provider webhook ingestion.
pub mod payment {
    /// Version 1 of the payment API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.payment.v1");
    }
}

/// User service protocol definitions.
///
/// User CRUD, subscription plans, entitlement checks, and subscriber
/// listing for distribution fan-out.
pub mod user {
    /// Version 1 of the user API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.user.v1");
    }
}

/// Notification service protocol definitions.
///
/// Operational alerts, per-subscriber signal delivery, and delivery
/// statistics.
pub mod notification {
    /// Version 1 of the notification API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.notification.v1");
    }
}

/// Risk service protocol definitions.
///
/// Compliance checks (disclaimers, content, marketing, risk disclosure,
/// prohibited terms), approvals, reports, and complaints.
pub mod risk {
    /// Version 1 of the risk API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.risk.v1");
    }
}

/// Education service protocol definitions.
///
/// Course library with tier-gated access and per-user progress.
pub mod education {
    /// Version 1 of the education API.
    #[allow(missing_docs)]
    pub mod v1 {
        tonic::include_proto!("aifa.education.v1");
    }
}

/// File descriptor set for gRPC reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("aifa_descriptor");

pub use convert::{ConvertError, MoneyConverter, TierExt, TimestampConverter};
pub use services::{HealthReporter, MetricsRecorder};
