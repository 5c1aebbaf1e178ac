//! Epoch-seconds timestamps, as the JSON protocol sends them.
//!
//! Values may carry a fractional part; precision is kept to milliseconds.
//! Shapes pass timestamps through [`truncate_to_millis`] when they are set, so
//! what a record holds is exactly what it serializes.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

/// `#[serde(with = "...")]` adapter for `Option<DateTime<Utc>>` fields.
pub mod epoch_seconds_option {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_some(&to_epoch_seconds(ts)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<f64>::deserialize(deserializer)?
            .map(from_epoch_seconds)
            .transpose()
    }
}

/// Drop sub-millisecond precision.
pub fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.trunc_subsecs(3)
}

fn to_epoch_seconds(ts: &DateTime<Utc>) -> f64 {
    ts.timestamp_millis() as f64 / 1000.0
}

fn from_epoch_seconds<E: de::Error>(secs: f64) -> Result<DateTime<Utc>, E> {
    if !secs.is_finite() {
        return Err(E::custom(format!("timestamp `{secs}` is not finite")));
    }
    let millis = (secs * 1000.0).round() as i64;
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| E::custom(format!("timestamp `{secs}` is out of range")))
}
