//! JSON rendering of TCX documents.
//!
//! Thin wrappers around `serde_json`. Field names are camelCase and unset
//! optionals are left out; reading JSON back applies the same construction
//! rules as the model constructors (empty optional sequences become absent,
//! `daysPerPeriod` is clamped).
use crate::error::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Deserialize a TCX entity from a JSON string.
///
/// # Examples
///
/// ```
/// use pacer_serde::json::from_json_str;
/// use pacer_tcx::HeartRate;
///
/// let heart_rate: HeartRate = from_json_str(r#"{"value": 142}"#).unwrap();
/// assert_eq!(heart_rate.value(), 142);
/// ```
pub fn from_json_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_str(s)?)
}

/// Deserialize a TCX entity from JSON bytes.
pub fn from_json_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_slice(v)?)
}

/// Deserialize a TCX entity from a `serde_json::Value`.
pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

/// Serialize a TCX entity to a compact JSON string.
///
/// # Examples
///
/// ```
/// use pacer_serde::json::to_json_string;
/// use pacer_tcx::{Plan, TrainingType};
///
/// let plan = Plan::new(TrainingType::Course, false, None);
/// assert_eq!(
///     to_json_string(&plan).unwrap(),
///     r#"{"trainingType":"Course","intervalWorkout":false}"#
/// );
/// ```
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serialize a TCX entity to a pretty-printed JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize a TCX entity to JSON bytes.
pub fn to_json_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_vec(value)?)
}

/// Serialize a TCX entity to a `serde_json::Value`.
pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}
