//! Deserialization helpers that re-apply construction invariants when an
//! entity is read from JSON instead of being built through its constructor.

use serde::{Deserialize, Deserializer};

use crate::extensions::activity_goals::Period;

/// Reads an optional sequence, treating an empty sequence as absent.
pub(crate) fn non_empty<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let values = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(values.filter(|values| !values.is_empty()))
}

/// Reads `daysPerPeriod` and clamps it the same way [`Period::new`] does.
pub(crate) fn days_per_period<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    u16::deserialize(deserializer).map(Period::clamp_days)
}
