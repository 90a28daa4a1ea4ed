use chrono::{DateTime, Utc};
use pacer_serde_support::{DecodeError, NodePlacement, XmlCodable, XmlDecoder, XmlEncoder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::codes::{Intensity, SensorState, TriggerMethod};
use crate::extensions::activity_extension::TrackpointExtensions;

/// TCX Activity Lap
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLap {
    // ActivityLap_t
    start_time: DateTime<Utc>,
    total_time_seconds: Decimal,
    distance_meters: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maximum_speed: Option<Decimal>,
    calories: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<HeartRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maximum_heart_rate: Option<HeartRate>,
    intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence: Option<u8>,
    trigger_method: TriggerMethod,
    #[serde(default)]
    tracks: Vec<Track>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl ActivityLap {
    const START_TIME: &'static str = "StartTime";
    const TOTAL_TIME_SECONDS: &'static str = "TotalTimeSeconds";
    const DISTANCE_METERS: &'static str = "DistanceMeters";
    const MAXIMUM_SPEED: &'static str = "MaximumSpeed";
    const CALORIES: &'static str = "Calories";
    const AVERAGE_HEART_RATE: &'static str = "AverageHeartRateBpm";
    const MAXIMUM_HEART_RATE: &'static str = "MaximumHeartRateBpm";
    const INTENSITY: &'static str = "Intensity";
    const CADENCE: &'static str = "Cadence";
    const TRIGGER_METHOD: &'static str = "TriggerMethod";
    const TRACK: &'static str = "Track";
    const NOTES: &'static str = "Notes";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: DateTime<Utc>,
        total_time_seconds: Decimal,
        distance_meters: Decimal,
        maximum_speed: Option<Decimal>,
        calories: u16,
        average_heart_rate: Option<HeartRate>,
        maximum_heart_rate: Option<HeartRate>,
        intensity: Intensity,
        cadence: Option<u8>,
        trigger_method: TriggerMethod,
        tracks: Vec<Track>,
        notes: Option<String>,
    ) -> Self {
        Self {
            start_time,
            total_time_seconds,
            distance_meters,
            maximum_speed,
            calories,
            average_heart_rate,
            maximum_heart_rate,
            intensity,
            cadence,
            trigger_method,
            tracks,
            notes,
        }
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn total_time_seconds(&self) -> Decimal {
        self.total_time_seconds
    }

    pub fn distance_meters(&self) -> Decimal {
        self.distance_meters
    }

    /// Maximum speed in meters per second.
    pub fn maximum_speed(&self) -> Option<Decimal> {
        self.maximum_speed
    }

    pub fn calories(&self) -> u16 {
        self.calories
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

    pub fn trigger_method(&self) -> TriggerMethod {
        self.trigger_method
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Iterates the trackpoints of every track of the lap, in order.
    pub fn trackpoints(&self) -> impl Iterator<Item = &Trackpoint> {
        self.tracks.iter().flat_map(|track| track.trackpoints())
    }
}

impl XmlCodable for ActivityLap {
    const ENTITY: &'static str = "ActivityLap";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::START_TIME => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::START_TIME, &self.start_time);
        encoder.encode(Self::TOTAL_TIME_SECONDS, &self.total_time_seconds);
        encoder.encode(Self::DISTANCE_METERS, &self.distance_meters);
        encoder.encode_optional(Self::MAXIMUM_SPEED, self.maximum_speed.as_ref());
        encoder.encode(Self::CALORIES, &self.calories);
        encoder.encode_optional_entity(Self::AVERAGE_HEART_RATE, self.average_heart_rate.as_ref());
        encoder.encode_optional_entity(Self::MAXIMUM_HEART_RATE, self.maximum_heart_rate.as_ref());
        encoder.encode(Self::INTENSITY, &self.intensity);
        encoder.encode_optional(Self::CADENCE, self.cadence.as_ref());
        encoder.encode(Self::TRIGGER_METHOD, &self.trigger_method);
        encoder.encode_entities(Self::TRACK, &self.tracks);
        encoder.encode_optional(Self::NOTES, self.notes.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::START_TIME)?,
            decoder.decode(Self::TOTAL_TIME_SECONDS)?,
            decoder.decode(Self::DISTANCE_METERS)?,
            decoder.decode_optional(Self::MAXIMUM_SPEED)?,
            decoder.decode(Self::CALORIES)?,
            decoder.decode_optional_entity(Self::AVERAGE_HEART_RATE)?,
            decoder.decode_optional_entity(Self::MAXIMUM_HEART_RATE)?,
            decoder.decode(Self::INTENSITY)?,
            decoder.decode_optional(Self::CADENCE)?,
            decoder.decode(Self::TRIGGER_METHOD)?,
            decoder.decode_entities(Self::TRACK)?,
            decoder.decode_optional(Self::NOTES)?,
        ))
    }
}

/// Heart rate in beats per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeartRate {
    // HeartRateInBeatsPerMinute_t
    value: u8,
}

impl HeartRate {
    const VALUE: &'static str = "Value";

    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl XmlCodable for HeartRate {
    const ENTITY: &'static str = "HeartRate";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::VALUE, &self.value);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(decoder.decode(Self::VALUE)?))
    }
}

/// TCX Track
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    // Track_t
    trackpoints: Vec<Trackpoint>,
}

impl Track {
    const TRACKPOINT: &'static str = "Trackpoint";

    pub fn new(trackpoints: Vec<Trackpoint>) -> Self {
        Self { trackpoints }
    }

    pub fn trackpoints(&self) -> &[Trackpoint] {
        &self.trackpoints
    }
}

impl XmlCodable for Track {
    const ENTITY: &'static str = "Track";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_entities(Self::TRACKPOINT, &self.trackpoints);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(decoder.decode_entities(Self::TRACKPOINT)?))
    }
}

/// TCX Trackpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trackpoint {
    // Trackpoint_t
    time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    altitude_meters: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance_meters: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    heart_rate: Option<HeartRate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cadence: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sensor_state: Option<SensorState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<TrackpointExtensions>,
}

impl Trackpoint {
    const TIME: &'static str = "Time";
    const POSITION: &'static str = "Position";
    const ALTITUDE_METERS: &'static str = "AltitudeMeters";
    const DISTANCE_METERS: &'static str = "DistanceMeters";
    const HEART_RATE: &'static str = "HeartRateBpm";
    const CADENCE: &'static str = "Cadence";
    const SENSOR_STATE: &'static str = "SensorState";
    const EXTENSIONS: &'static str = "Extensions";

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        time: DateTime<Utc>,
        position: Option<Position>,
        altitude_meters: Option<Decimal>,
        distance_meters: Option<Decimal>,
        heart_rate: Option<HeartRate>,
        cadence: Option<u8>,
        sensor_state: Option<SensorState>,
        extensions: Option<TrackpointExtensions>,
    ) -> Self {
        Self {
            time,
            position,
            altitude_meters,
            distance_meters,
            heart_rate,
            cadence,
            sensor_state,
            extensions,
        }
    }

    /// A trackpoint carrying only its timestamp.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self::new(time, None, None, None, None, None, None, None)
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn altitude_meters(&self) -> Option<Decimal> {
        self.altitude_meters
    }

    pub fn distance_meters(&self) -> Option<Decimal> {
        self.distance_meters
    }

    pub fn heart_rate(&self) -> Option<&HeartRate> {
        self.heart_rate.as_ref()
    }

    pub fn cadence(&self) -> Option<u8> {
        self.cadence
    }

    pub fn sensor_state(&self) -> Option<SensorState> {
        self.sensor_state
    }

    pub fn extensions(&self) -> Option<&TrackpointExtensions> {
        self.extensions.as_ref()
    }
}

impl XmlCodable for Trackpoint {
    const ENTITY: &'static str = "Trackpoint";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::TIME, &self.time);
        encoder.encode_optional_entity(Self::POSITION, self.position.as_ref());
        encoder.encode_optional(Self::ALTITUDE_METERS, self.altitude_meters.as_ref());
        encoder.encode_optional(Self::DISTANCE_METERS, self.distance_meters.as_ref());
        encoder.encode_optional_entity(Self::HEART_RATE, self.heart_rate.as_ref());
        encoder.encode_optional(Self::CADENCE, self.cadence.as_ref());
        encoder.encode_optional(Self::SENSOR_STATE, self.sensor_state.as_ref());
        encoder.encode_optional_entity(Self::EXTENSIONS, self.extensions.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::TIME)?,
            decoder.decode_optional_entity(Self::POSITION)?,
            decoder.decode_optional(Self::ALTITUDE_METERS)?,
            decoder.decode_optional(Self::DISTANCE_METERS)?,
            decoder.decode_optional_entity(Self::HEART_RATE)?,
            decoder.decode_optional(Self::CADENCE)?,
            decoder.decode_optional(Self::SENSOR_STATE)?,
            decoder.decode_optional_entity(Self::EXTENSIONS)?,
        ))
    }
}

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    // Position_t
    latitude_degrees: Decimal,
    longitude_degrees: Decimal,
}

impl Position {
    const LATITUDE_DEGREES: &'static str = "LatitudeDegrees";
    const LONGITUDE_DEGREES: &'static str = "LongitudeDegrees";

    pub fn new(latitude_degrees: Decimal, longitude_degrees: Decimal) -> Self {
        Self {
            latitude_degrees,
            longitude_degrees,
        }
    }

    pub fn latitude_degrees(&self) -> Decimal {
        self.latitude_degrees
    }

    pub fn longitude_degrees(&self) -> Decimal {
        self.longitude_degrees
    }
}

impl XmlCodable for Position {
    const ENTITY: &'static str = "Position";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::LATITUDE_DEGREES, &self.latitude_degrees);
        encoder.encode(Self::LONGITUDE_DEGREES, &self.longitude_degrees);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::LATITUDE_DEGREES)?,
            decoder.decode(Self::LONGITUDE_DEGREES)?,
        ))
    }
}
