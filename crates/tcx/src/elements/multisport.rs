use chrono::{DateTime, Utc};
use pacer_serde_support::{DecodeError, XmlCodable, XmlDecoder, XmlEncoder};
use serde::{Deserialize, Serialize};

use crate::elements::activity::Activity;
use crate::elements::lap::ActivityLap;
use crate::serde_helpers::non_empty;

/// A multi-sport session such as a triathlon: a first activity followed by
/// optional further legs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiSportSession {
    // MultiSportSession_t
    id: DateTime<Utc>,
    first_sport: Activity,
    #[serde(
        default,
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    next_sport: Option<Vec<NextSport>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl MultiSportSession {
    const ID: &'static str = "Id";
    const FIRST_SPORT: &'static str = "FirstSport";
    const NEXT_SPORT: &'static str = "NextSport";
    const NOTES: &'static str = "Notes";

    pub fn new(
        id: DateTime<Utc>,
        first_sport: Activity,
        next_sport: Option<Vec<NextSport>>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            first_sport,
            next_sport: next_sport.filter(|legs| !legs.is_empty()),
            notes,
        }
    }

    pub fn id(&self) -> DateTime<Utc> {
        self.id
    }

    pub fn first_sport(&self) -> &Activity {
        &self.first_sport
    }

    pub fn next_sport(&self) -> Option<&[NextSport]> {
        self.next_sport.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Every activity of the session in order, the first sport included.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        std::iter::once(&self.first_sport).chain(
            self.next_sport
                .iter()
                .flatten()
                .map(|next| &next.activity),
        )
    }
}

impl XmlCodable for MultiSportSession {
    const ENTITY: &'static str = "MultiSportSession";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::ID, &self.id);
        encoder.encode_entity(Self::FIRST_SPORT, &self.first_sport);
        if let Some(next_sport) = &self.next_sport {
            encoder.encode_entities(Self::NEXT_SPORT, next_sport);
        }
        encoder.encode_optional(Self::NOTES, self.notes.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::ID)?,
            decoder.decode_entity(Self::FIRST_SPORT)?,
            Some(decoder.decode_entities(Self::NEXT_SPORT)?),
            decoder.decode_optional(Self::NOTES)?,
        ))
    }
}

/// A later leg of a multi-sport session, with the transition that led to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSport {
    // NextSport_t
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transition: Option<ActivityLap>,
    activity: Activity,
}

impl NextSport {
    const TRANSITION: &'static str = "Transition";
    const ACTIVITY: &'static str = "Activity";

    pub fn new(transition: Option<ActivityLap>, activity: Activity) -> Self {
        Self {
            transition,
            activity,
        }
    }

    pub fn transition(&self) -> Option<&ActivityLap> {
        self.transition.as_ref()
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }
}

impl XmlCodable for NextSport {
    const ENTITY: &'static str = "NextSport";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_optional_entity(Self::TRANSITION, self.transition.as_ref());
        encoder.encode_entity(Self::ACTIVITY, &self.activity);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode_optional_entity(Self::TRANSITION)?,
            decoder.decode_entity(Self::ACTIVITY)?,
        ))
    }
}
