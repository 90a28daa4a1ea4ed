//! # Pacer TCX
//!
//! Typed model of Garmin Training Center XML documents: the
//! TrainingCenterDatabase v2 schema plus the `ActivityExtension v2` and
//! `ActivityGoalsExtension v1` schemas.
//!
//! Every entity is an immutable value with structural equality and hashing.
//! Entities implement [`pacer_serde_support::XmlCodable`] next to their
//! definitions, so the attribute/element split of each type lives with the
//! type. The text layer that reads and writes XML documents is the
//! `pacer-serde` crate.
//!
//! ```
//! use pacer_tcx::{Period, RecurrenceCode};
//! use chrono::{TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap();
//! let period = Period::new(start, None, RecurrenceCode::Yearly, 365);
//! assert_eq!(period.days_per_period(), 356);
//! ```

pub mod codes;
pub mod elements;
pub mod extensions;
mod serde_helpers;

pub use codes::{BuildType, Intensity, SensorState, Sport, TrainingType, TriggerMethod};
pub use elements::activity::{Activity, ActivityList};
pub use elements::application::{Application, Build};
pub use elements::course::{Course, CourseLap, CourseList};
pub use elements::creator::{Creator, Version};
pub use elements::database::{DatabaseExtensions, TrainingCenterDatabase};
pub use elements::lap::{ActivityLap, HeartRate, Position, Track, Trackpoint};
pub use elements::multisport::{MultiSportSession, NextSport};
pub use elements::training::{Plan, Training};
pub use extensions::activity_extension::{
    CadenceSensorType, TrackpointExtension, TrackpointExtensions,
};
pub use extensions::activity_goals::{
    ActivityGoal, ActivityGoals, Measure, Period, RecurrenceCode,
};

/// Default namespace of TCX documents.
pub const TRAINING_CENTER_DATABASE_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2";

pub const XML_SCHEMA_INSTANCE_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Namespace bound to `ns3` on encode.
pub const ACTIVITY_EXTENSION_NAMESPACE: &str =
    "http://www.garmin.com/xmlschemas/ActivityExtension/v2";

/// Namespace bound to `ns5` on encode.
pub const ACTIVITY_GOALS_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/ActivityGoals/v1";
