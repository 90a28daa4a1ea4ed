use pacer_serde_support::{DecodeError, NodePlacement, XmlCodable, XmlDecoder, XmlEncoder};
use serde::{Deserialize, Serialize};

use crate::codes::TrainingType;

/// Training context of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    // Training_t
    virtual_partner: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plan: Option<Plan>,
}

impl Training {
    const VIRTUAL_PARTNER: &'static str = "VirtualPartner";
    const PLAN: &'static str = "Plan";

    pub fn new(virtual_partner: bool, plan: Option<Plan>) -> Self {
        Self {
            virtual_partner,
            plan,
        }
    }

    pub fn virtual_partner(&self) -> bool {
        self.virtual_partner
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }
}

impl XmlCodable for Training {
    const ENTITY: &'static str = "Training";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::VIRTUAL_PARTNER => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::VIRTUAL_PARTNER, &self.virtual_partner);
        encoder.encode_optional_entity(Self::PLAN, self.plan.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::VIRTUAL_PARTNER)?,
            decoder.decode_optional_entity(Self::PLAN)?,
        ))
    }
}

/// The workout or course an activity followed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    // Plan_t
    training_type: TrainingType,
    interval_workout: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Plan {
    const TRAINING_TYPE: &'static str = "Type";
    const INTERVAL_WORKOUT: &'static str = "IntervalWorkout";
    const NAME: &'static str = "Name";

    pub fn new(training_type: TrainingType, interval_workout: bool, name: Option<String>) -> Self {
        Self {
            training_type,
            interval_workout,
            name,
        }
    }

    pub fn training_type(&self) -> TrainingType {
        self.training_type
    }

    pub fn interval_workout(&self) -> bool {
        self.interval_workout
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl XmlCodable for Plan {
    const ENTITY: &'static str = "Plan";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::TRAINING_TYPE | Self::INTERVAL_WORKOUT => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::TRAINING_TYPE, &self.training_type);
        encoder.encode(Self::INTERVAL_WORKOUT, &self.interval_workout);
        encoder.encode_optional(Self::NAME, self.name.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::TRAINING_TYPE)?,
            decoder.decode(Self::INTERVAL_WORKOUT)?,
            decoder.decode_optional(Self::NAME)?,
        ))
    }
}
