//! Payment records as printed by the node's `listpayments` and `payinvoice` commands.
//!
//! The node encodes 64-bit integers as JSON strings. Fields the diagram does not need are
//! ignored when decoding.

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::fmt::Display;
use std::str::FromStr;

/// Failure code of a part the payee released after giving up on the remaining parts.
pub const MPP_TIMEOUT: &str = "MPP_TIMEOUT";

/// Number of pubkey characters shown in route descriptions.
const SHORT_PUB_KEY_LEN: usize = 6;

/// Output of `listpayments`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PaymentList {
    pub payments: Vec<Payment>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Payment {
    pub payment_hash: String,
    #[serde(default)]
    pub htlcs: Vec<Htlc>,
}

/// A single attempt to deliver (part of) a payment along one route.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Htlc {
    pub route: Route,
    #[serde(deserialize_with = "string_as_int", serialize_with = "int_as_string")]
    pub attempt_time_ns: i64,
    /// `0` while the attempt is unresolved.
    #[serde(
        default,
        deserialize_with = "string_as_int",
        serialize_with = "int_as_string"
    )]
    pub resolve_time_ns: i64,
    #[serde(default)]
    pub status: HtlcStatus,
    #[serde(default)]
    pub failure: Option<Failure>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum HtlcStatus {
    #[serde(rename = "SUCCEEDED")]
    Succeeded,
    #[serde(rename = "FAILED")]
    Failed,
    /// Every other status the node reports, including none at all.
    #[default]
    #[serde(rename = "IN_FLIGHT")]
    #[serde(other)]
    InFlight,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Failure {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub failure_source_index: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Route {
    #[serde(default)]
    pub hops: Vec<Hop>,
    #[serde(deserialize_with = "string_as_int", serialize_with = "int_as_string")]
    pub total_amt: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hop {
    pub pub_key: String,
    #[serde(deserialize_with = "string_as_int", serialize_with = "int_as_string")]
    pub chan_id: u64,
    /// Only meaningful on the last hop, where it is the amount the payee receives.
    #[serde(
        default,
        deserialize_with = "string_as_int",
        serialize_with = "int_as_string"
    )]
    pub amt_to_forward: i64,
}

impl Htlc {
    pub fn resolve_time_ns(&self) -> Option<i64> {
        match self.resolve_time_ns {
            0 => None,
            t => Some(t),
        }
    }

    /// Whether the amount of this attempt reached the payee.
    ///
    /// An `MPP_TIMEOUT` failure still counts: parts that were already committed settle anyway.
    pub fn is_settled(&self) -> bool {
        match self.status {
            HtlcStatus::Succeeded => true,
            HtlcStatus::Failed => self
                .failure
                .as_ref()
                .map(|failure| failure.code == MPP_TIMEOUT)
                .unwrap_or(false),
            HtlcStatus::InFlight => false,
        }
    }
}

impl Route {
    /// Human readable route, e.g. `ABCDEF (123)  > 012345`.
    ///
    /// The first segment keeps its trailing space. Settled amounts are tallied by this text, so
    /// it has to stay byte-stable. Returns `None` for a route without hops.
    pub fn text(&self) -> Option<String> {
        let (first, rest) = self.hops.split_first()?;

        let mut text = format!("{} ({}) ", first.short_pub_key(), first.chan_id);
        for hop in rest {
            text.push_str(" > ");
            text.push_str(hop.short_pub_key());
        }

        Some(text)
    }

    /// Amount delivered to the payee.
    pub fn delivered_amt(&self) -> Option<i64> {
        self.hops.last().map(|hop| hop.amt_to_forward)
    }
}

impl Hop {
    pub fn short_pub_key(&self) -> &str {
        self.pub_key
            .get(..SHORT_PUB_KEY_LEN)
            .unwrap_or(&self.pub_key)
    }
}

fn string_as_int<'de, T, D>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    String::deserialize(de)?
        .parse()
        .map_err(serde::de::Error::custom)
}

pub fn int_as_string<T, S>(x: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.serialize_str(&x.to_string())
}
