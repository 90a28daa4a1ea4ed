use pacer_serde_support::{
    AliasedKey, DecodeError, XmlCodable, XmlDecoder, XmlEncoder, decode_with_fallback,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::codes::Intensity;
use crate::elements::creator::Creator;
use crate::elements::lap::{HeartRate, Position, Track};
use crate::serde_helpers::non_empty;

/// TCX Course List
///
/// An empty course list and an absent one are the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseList {
    // CourseList_t
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    courses: Option<Vec<Course>>,
}

impl CourseList {
    /// The schema spells the repeated child `Course`; some writers emit
    /// `Courses` for it instead.
    pub const COURSES: AliasedKey = AliasedKey::new("Course", &["Courses"]);

    pub fn new(courses: Option<Vec<Course>>) -> Self {
        Self {
            courses: courses.filter(|courses| !courses.is_empty()),
        }
    }

    pub fn courses(&self) -> Option<&[Course]> {
        self.courses.as_deref()
    }

    pub fn len(&self) -> usize {
        self.courses.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_none()
    }
}

impl XmlCodable for CourseList {
    const ENTITY: &'static str = "CourseList";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        if let Some(courses) = &self.courses {
            encoder.encode_entities(Self::COURSES.primary(), courses);
        }
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(decode_with_fallback(
            decoder,
            &Self::COURSES,
            |decoder, key| decoder.decode_entities(key),
        )?))
    }
}

/// TCX Course
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    // Course_t
    name: String,
    #[serde(default)]
    laps: Vec<CourseLap>,
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    creator: Option<Creator>,
}

impl Course {
    const NAME: &'static str = "Name";
    const LAP: &'static str = "Lap";
    const TRACK: &'static str = "Track";
    const NOTES: &'static str = "Notes";
    const CREATOR: &'static str = "Creator";

    pub fn new(
        name: String,
        laps: Vec<CourseLap>,
        tracks: Vec<Track>,
        notes: Option<String>,
        creator: Option<Creator>,
    ) -> Self {
        Self {
            name,
            laps,
            tracks,
            notes,
            creator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn laps(&self) -> &[CourseLap] {
        &self.laps
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn creator(&self) -> Option<&Creator> {
        self.creator.as_ref()
    }
}

impl XmlCodable for Course {
    const ENTITY: &'static str = "Course";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::NAME, &self.name);
        encoder.encode_entities(Self::LAP, &self.laps);
        encoder.encode_entities(Self::TRACK, &self.tracks);
        encoder.encode_optional(Self::NOTES, self.notes.as_ref());
        encoder.encode_optional_entity(Self::CREATOR, self.creator.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::NAME)?,
            decoder.decode_entities(Self::LAP)?,
            decoder.decode_entities(Self::TRACK)?,
            decoder.decode_optional(Self::NOTES)?,
            decoder.decode_optional_entity(Self::CREATOR)?,
        ))
    }
}

/// A lap of a planned course: expected time and distance between two
/// positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseLap {
    // CourseLap_t
    total_time_seconds: Decimal,
    distance_meters: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    begin_position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    begin_altitude_meters: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_altitude_meters: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<HeartRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maximum_heart_rate: Option<HeartRate>,
    intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence: Option<u8>,
}

impl CourseLap {
    const TOTAL_TIME_SECONDS: &'static str = "TotalTimeSeconds";
    const DISTANCE_METERS: &'static str = "DistanceMeters";
    const BEGIN_POSITION: &'static str = "BeginPosition";
    const BEGIN_ALTITUDE_METERS: &'static str = "BeginAltitudeMeters";
    const END_POSITION: &'static str = "EndPosition";
    const END_ALTITUDE_METERS: &'static str = "EndAltitudeMeters";
    const AVERAGE_HEART_RATE: &'static str = "AverageHeartRateBpm";
    const MAXIMUM_HEART_RATE: &'static str = "MaximumHeartRateBpm";
    const INTENSITY: &'static str = "Intensity";
    const CADENCE: &'static str = "Cadence";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        total_time_seconds: Decimal,
        distance_meters: Decimal,
        begin_position: Option<Position>,
        begin_altitude_meters: Option<Decimal>,
        end_position: Option<Position>,
        end_altitude_meters: Option<Decimal>,
        average_heart_rate: Option<HeartRate>,
        maximum_heart_rate: Option<HeartRate>,
        intensity: Intensity,
        cadence: Option<u8>,
    ) -> Self {
        Self {
            total_time_seconds,
            distance_meters,
            begin_position,
            begin_altitude_meters,
            end_position,
            end_altitude_meters,
            average_heart_rate,
            maximum_heart_rate,
            intensity,
            cadence,
        }
    }

    pub fn total_time_seconds(&self) -> Decimal {
        self.total_time_seconds
    }

    pub fn distance_meters(&self) -> Decimal {
        self.distance_meters
    }

    pub fn begin_position(&self) -> Option<&Position> {
        self.begin_position.as_ref()
    }

    pub fn begin_altitude_meters(&self) -> Option<Decimal> {
        self.begin_altitude_meters
    }

    pub fn end_position(&self) -> Option<&Position> {
        self.end_position.as_ref()
    }

    pub fn end_altitude_meters(&self) -> Option<Decimal> {
        self.end_altitude_meters
    }

    pub fn average_heart_rate(&self) -> Option<&HeartRate> {
        self.average_heart_rate.as_ref()
    }

    pub fn maximum_heart_rate(&self) -> Option<&HeartRate> {
        self.maximum_heart_rate.as_ref()
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn cadence(&self) -> Option<u8> {
        self.cadence
    }
}

impl XmlCodable for CourseLap {
    const ENTITY: &'static str = "CourseLap";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::TOTAL_TIME_SECONDS, &self.total_time_seconds);
        encoder.encode(Self::DISTANCE_METERS, &self.distance_meters);
        encoder.encode_optional_entity(Self::BEGIN_POSITION, self.begin_position.as_ref());
        encoder.encode_optional(Self::BEGIN_ALTITUDE_METERS, self.begin_altitude_meters.as_ref());
        encoder.encode_optional_entity(Self::END_POSITION, self.end_position.as_ref());
        encoder.encode_optional(Self::END_ALTITUDE_METERS, self.end_altitude_meters.as_ref());
        encoder.encode_optional_entity(Self::AVERAGE_HEART_RATE, self.average_heart_rate.as_ref());
        encoder.encode_optional_entity(Self::MAXIMUM_HEART_RATE, self.maximum_heart_rate.as_ref());
        encoder.encode(Self::INTENSITY, &self.intensity);
        encoder.encode_optional(Self::CADENCE, self.cadence.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::TOTAL_TIME_SECONDS)?,
            decoder.decode(Self::DISTANCE_METERS)?,
            decoder.decode_optional_entity(Self::BEGIN_POSITION)?,
            decoder.decode_optional(Self::BEGIN_ALTITUDE_METERS)?,
            decoder.decode_optional_entity(Self::END_POSITION)?,
            decoder.decode_optional(Self::END_ALTITUDE_METERS)?,
            decoder.decode_optional_entity(Self::AVERAGE_HEART_RATE)?,
            decoder.decode_optional_entity(Self::MAXIMUM_HEART_RATE)?,
            decoder.decode(Self::INTENSITY)?,
            decoder.decode_optional(Self::CADENCE)?,
        ))
    }
}
