//! Core types for request search.
//!
//! These types describe the search key, the decoded request records returned
//! by the chain, and the envelope handed back to callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Message carried by every NOT_FOUND envelope.
pub const NOT_FOUND_MESSAGE: &str = "request with specified specification not found";

/// Identifier of an oracle data request.
///
/// Assigned by the chain in creation order, so a larger id is a newer request.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestId(pub u64);

impl RequestId {
    /// Get the raw numeric id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Serialize an integer the way amino JSON does, as a decimal string.
pub fn serialize_amino_int<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: fmt::Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Deserialize an amino JSON integer. Bare JSON numbers are accepted too.
pub fn deserialize_amino_int<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromStr,
    T::Err: fmt::Display,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AminoInt {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    let text = match AminoInt::deserialize(deserializer)? {
        AminoInt::Text(s) => s,
        AminoInt::Signed(n) => n.to_string(),
        AminoInt::Unsigned(n) => n.to_string(),
    };
    text.parse().map_err(serde::de::Error::custom)
}

/// The search key describing which data requests to look for.
///
/// Fields are passed through verbatim to the chain's index; they are kept
/// as strings so that the caller's formatting is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchSpec {
    /// Oracle script the request was made against.
    pub oracle_script_id: String,

    /// Hex/OBI encoded call parameters.
    pub calldata: String,

    /// Number of validators asked to report.
    pub ask_count: String,

    /// Minimum number of reports required to resolve.
    pub min_count: String,
}

impl SearchSpec {
    /// Create a new search specification.
    pub fn new(
        oracle_script_id: impl Into<String>,
        calldata: impl Into<String>,
        ask_count: impl Into<String>,
        min_count: impl Into<String>,
    ) -> Self {
        Self {
            oracle_script_id: oracle_script_id.into(),
            calldata: calldata.into(),
            ask_count: ask_count.into(),
            min_count: min_count.into(),
        }
    }

    /// Iterate over `(name, value)` pairs, in query path order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("oracle_script_id", self.oracle_script_id.as_str()),
            ("calldata", self.calldata.as_str()),
            ("ask_count", self.ask_count.as_str()),
            ("min_count", self.min_count.as_str()),
        ]
    }
}

/// Request parameters echoed back in a resolved result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RequestPacket {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub oracle_script_id: String,
    #[serde(default)]
    pub calldata: String,
    #[serde(default)]
    pub ask_count: String,
    #[serde(default)]
    pub min_count: String,
}

/// Resolution payload of a data request.
///
/// Integer fields travel as amino JSON strings, like `ans_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResponsePacket {
    #[serde(default)]
    pub client_id: String,
    #[serde(
        serialize_with = "serialize_amino_int",
        deserialize_with = "deserialize_amino_int"
    )]
    pub request_id: RequestId,
    #[serde(default)]
    pub ans_count: String,
    #[serde(
        default,
        serialize_with = "serialize_amino_int",
        deserialize_with = "deserialize_amino_int"
    )]
    pub request_time: i64,
    /// Time the request was resolved. Not unique across requests.
    #[serde(
        serialize_with = "serialize_amino_int",
        deserialize_with = "deserialize_amino_int"
    )]
    pub resolve_time: i64,
    #[serde(default)]
    pub resolve_status: String,
    #[serde(default)]
    pub result: String,
}

/// The result part of a record, present once the request is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResult {
    pub request_packet_data: RequestPacket,
    pub response_packet_data: ResponsePacket,
}

/// Full record stored on chain for a data request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// Original request body, kept opaque.
    #[serde(default)]
    pub request: serde_json::Value,

    /// Validator reports collected so far, kept opaque.
    #[serde(default)]
    pub reports: Vec<serde_json::Value>,

    /// Resolution result. `None` while the request is still pending.
    #[serde(default)]
    pub result: Option<RequestResult>,
}

impl RequestRecord {
    /// Create a record for a request that has not resolved yet.
    pub fn pending() -> Self {
        Self {
            request: serde_json::Value::Null,
            reports: Vec::new(),
            result: None,
        }
    }

    /// Create a resolved record.
    pub fn resolved(id: RequestId, resolve_time: i64) -> Self {
        Self {
            request: serde_json::Value::Null,
            reports: Vec::new(),
            result: Some(RequestResult {
                request_packet_data: RequestPacket::default(),
                response_packet_data: ResponsePacket {
                    request_id: id,
                    resolve_time,
                    ..ResponsePacket::default()
                },
            }),
        }
    }

    /// Returns true once the request has a response.
    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }

    /// Resolve time of the response, if resolved.
    pub fn resolve_time(&self) -> Option<i64> {
        self.result
            .as_ref()
            .map(|r| r.response_packet_data.resolve_time)
    }
}

/// A record together with the id it was fetched for and the height it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedRecord {
    pub id: RequestId,
    pub record: RequestRecord,
    pub height: i64,
}

/// Outcome of an index lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidates {
    /// No request matches the specification.
    NoMatch,
    /// Matching ids, most recent first.
    Found(Vec<RequestId>),
}

impl From<Vec<RequestId>> for Candidates {
    fn from(ids: Vec<RequestId>) -> Self {
        if ids.is_empty() {
            Self::NoMatch
        } else {
            Self::Found(ids)
        }
    }
}

/// Status tag of a [`ResultEnvelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryStatus {
    Ok,
    NotFound,
}

/// Envelope returned to search callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope<T> {
    /// Whether the search found anything.
    pub status: QueryStatus,

    /// Payload, present when `status` is OK.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    /// Human readable reason, present when `status` is NOT_FOUND.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Chain height the payload was observed at. 0 when not found.
    pub height: i64,
}

impl<T> ResultEnvelope<T> {
    /// Create an OK envelope.
    pub fn ok(result: T, height: i64) -> Self {
        Self {
            status: QueryStatus::Ok,
            result: Some(result),
            message: None,
            height,
        }
    }

    /// Create a NOT_FOUND envelope.
    pub fn not_found() -> Self {
        Self {
            status: QueryStatus::NotFound,
            result: None,
            message: Some(NOT_FOUND_MESSAGE.to_string()),
            height: 0,
        }
    }

    /// Returns true if the envelope carries a payload.
    pub fn is_found(&self) -> bool {
        self.status == QueryStatus::Ok
    }
}
