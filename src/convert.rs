//! Conversions between protobuf messages and Rust domain types.
//!
//! Generated message types carry timestamps as `prost_types::Timestamp`,
//! money as the google.type.Money shape, and enums as raw `i32` fields.
//! Service implementations use these converters at the gRPC boundary.

use crate::common::v1::{Money, SubscriptionTier};
use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use thiserror::Error;

/// Errors produced when protobuf values cannot be mapped to domain types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// A structurally required sub-message was absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),
    /// Timestamp outside the range chrono can represent.
    #[error("timestamp out of range: {seconds}s {nanos}ns")]
    TimestampOutOfRange {
        /// Seconds since the Unix epoch.
        seconds: i64,
        /// Nanosecond offset as carried on the wire.
        nanos: i32,
    },
    /// Money nanos outside ±999_999_999.
    #[error("money nanos out of range: {0}")]
    MoneyNanosOutOfRange(i32),
    /// Money carries sub-minor-unit precision that minor units cannot hold.
    #[error("money amount not representable in minor units")]
    MoneyPrecision,
    /// Money amount overflows an i64 of minor units.
    #[error("money amount overflows minor units")]
    MoneyOverflow,
}

/// Unwrap an optional sub-message, naming the field in the error.
///
/// # Errors
///
/// Returns [`ConvertError::MissingField`] when the field is `None`.
pub fn require<T>(field: Option<T>, name: &'static str) -> Result<T, ConvertError> {
    field.ok_or(ConvertError::MissingField(name))
}

/// Convert between `chrono::DateTime<Utc>` and protobuf `Timestamp`.
pub struct TimestampConverter;

impl TimestampConverter {
    /// Protobuf timestamp for a UTC datetime.
    #[must_use]
    pub fn to_proto(dt: &DateTime<Utc>) -> Timestamp {
        Timestamp {
            seconds: dt.timestamp(),
            nanos: i32::try_from(dt.timestamp_subsec_nanos()).unwrap_or(0),
        }
    }

    /// UTC datetime for a protobuf timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::TimestampOutOfRange`] when nanos fall outside
    /// `0..1_000_000_000` or the instant is unrepresentable.
    pub fn from_proto(ts: &Timestamp) -> Result<DateTime<Utc>, ConvertError> {
        let out_of_range = ConvertError::TimestampOutOfRange {
            seconds: ts.seconds,
            nanos: ts.nanos,
        };
        if !(0..1_000_000_000).contains(&ts.nanos) {
            return Err(out_of_range);
        }
        DateTime::from_timestamp(ts.seconds, ts.nanos.unsigned_abs()).ok_or(out_of_range)
    }
}

/// Convert between `Money` and integer minor units (cents, paise).
///
/// Both payment providers charge in minor units with a decimal exponent of
/// two; amounts with finer precision are rejected rather than rounded.
pub struct MoneyConverter;

impl MoneyConverter {
    /// Nano-units per minor unit at a decimal exponent of two.
    const NANOS_PER_MINOR: i32 = 10_000_000;

    /// Total amount in minor units.
    ///
    /// # Errors
    ///
    /// Returns an error when nanos are out of range, the amount carries
    /// sub-minor-unit precision, or the total overflows.
    pub fn to_minor_units(money: &Money) -> Result<i64, ConvertError> {
        if money.nanos <= -1_000_000_000 || money.nanos >= 1_000_000_000 {
            return Err(ConvertError::MoneyNanosOutOfRange(money.nanos));
        }
        if money.nanos % Self::NANOS_PER_MINOR != 0 {
            return Err(ConvertError::MoneyPrecision);
        }
        money
            .units
            .checked_mul(100)
            .and_then(|c| c.checked_add(i64::from(money.nanos / Self::NANOS_PER_MINOR)))
            .ok_or(ConvertError::MoneyOverflow)
    }

    /// `Money` from an amount in minor units.
    #[must_use]
    pub fn from_minor_units(currency_code: &str, minor_units: i64) -> Money {
        Money {
            currency_code: currency_code.to_string(),
            units: minor_units / 100,
            nanos: i32::try_from(minor_units % 100).unwrap_or(0) * Self::NANOS_PER_MINOR,
        }
    }
}

fn tier_rank(tier: SubscriptionTier) -> u8 {
    match tier {
        SubscriptionTier::Unspecified => 0,
        SubscriptionTier::Basic => 1,
        SubscriptionTier::Pro => 2,
        SubscriptionTier::Enterprise => 3,
    }
}

/// Hierarchical tier access.
pub trait TierExt {
    /// Whether a subscriber at this tier may see content requiring `required`.
    ///
    /// Access is ordered BASIC < PRO < ENTERPRISE and reflexive. Content
    /// tagged UNSPECIFIED is denied to everyone: producers default content
    /// to BASIC, so an UNSPECIFIED tag can only be a producer bug and must
    /// not widen access.
    fn grants_access_to(self, required: Self) -> bool;
}

impl TierExt for SubscriptionTier {
    fn grants_access_to(self, required: Self) -> bool {
        tier_rank(required) > 0 && tier_rank(self) >= tier_rank(required)
    }
}
