//! Entities of the Garmin extension schemas that TCX documents embed.

pub mod activity_extension;
pub mod activity_goals;
