use chrono::{DateTime, Utc};
use pacer_serde_support::{DecodeError, NodePlacement, XmlCodable, XmlDecoder, XmlEncoder};
use serde::{Deserialize, Serialize};

use crate::codes::Sport;
use crate::elements::creator::Creator;
use crate::elements::lap::ActivityLap;
use crate::elements::multisport::MultiSportSession;
use crate::elements::training::Training;

/// TCX Activity
///
/// One recorded workout: a sport, the start timestamp that identifies it and
/// its laps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    // Activity_t
    sport: Sport,
    id: DateTime<Utc>,
    laps: Vec<ActivityLap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    training: Option<Training>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    creator: Option<Creator>,
}

impl Activity {
    const SPORT: &'static str = "Sport";
    const ID: &'static str = "Id";
    const LAP: &'static str = "Lap";
    const NOTES: &'static str = "Notes";
    const TRAINING: &'static str = "Training";
    const CREATOR: &'static str = "Creator";

    pub fn new(
        sport: Sport,
        id: DateTime<Utc>,
        laps: Vec<ActivityLap>,
        notes: Option<String>,
        training: Option<Training>,
        creator: Option<Creator>,
    ) -> Self {
        Self {
            sport,
            id,
            laps,
            notes,
            training,
            creator,
        }
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    /// Activity ID, the start time of the activity.
    pub fn id(&self) -> DateTime<Utc> {
        self.id
    }

    pub fn laps(&self) -> &[ActivityLap] {
        &self.laps
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn training(&self) -> Option<&Training> {
        self.training.as_ref()
    }

    pub fn creator(&self) -> Option<&Creator> {
        self.creator.as_ref()
    }
}

impl XmlCodable for Activity {
    const ENTITY: &'static str = "Activity";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::SPORT => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::SPORT, &self.sport);
        encoder.encode(Self::ID, &self.id);
        encoder.encode_entities(Self::LAP, &self.laps);
        encoder.encode_optional(Self::NOTES, self.notes.as_ref());
        encoder.encode_optional_entity(Self::TRAINING, self.training.as_ref());
        encoder.encode_optional_entity(Self::CREATOR, self.creator.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::SPORT)?,
            decoder.decode(Self::ID)?,
            decoder.decode_entities(Self::LAP)?,
            decoder.decode_optional(Self::NOTES)?,
            decoder.decode_optional_entity(Self::TRAINING)?,
            decoder.decode_optional_entity(Self::CREATOR)?,
        ))
    }
}

/// TCX Activity List
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityList {
    // ActivityList_t
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    multi_sport_sessions: Vec<MultiSportSession>,
}

impl ActivityList {
    const ACTIVITY: &'static str = "Activity";
    const MULTI_SPORT_SESSION: &'static str = "MultiSportSession";

    pub fn new(activities: Vec<Activity>, multi_sport_sessions: Vec<MultiSportSession>) -> Self {
        Self {
            activities,
            multi_sport_sessions,
        }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn multi_sport_sessions(&self) -> &[MultiSportSession] {
        &self.multi_sport_sessions
    }
}

impl XmlCodable for ActivityList {
    const ENTITY: &'static str = "ActivityList";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_entities(Self::ACTIVITY, &self.activities);
        encoder.encode_entities(Self::MULTI_SPORT_SESSION, &self.multi_sport_sessions);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode_entities(Self::ACTIVITY)?,
            decoder.decode_entities(Self::MULTI_SPORT_SESSION)?,
        ))
    }
}
