//! Activity goals extension (`ActivityGoalsExtension v1`, usually bound to
//! the `ns5` prefix).
//!
//! Goal elements show up both prefixed (`ns5:activityGoal`) and unprefixed
//! (`ActivityGoal`) depending on the writer; the prefixed spelling wins when
//! both are present.

use chrono::{DateTime, Utc};
use pacer_serde_support::{
    AliasedKey, DecodeError, NodePlacement, XmlCodable, XmlDecoder, XmlEncoder, XmlRoot,
    decode_with_fallback,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::codes::{Sport, code_enum};
use crate::serde_helpers::days_per_period;

code_enum! {
    /// Measure_t: the quantity a goal tracks.
    pub enum Measure {
        DistanceMeters = "DistanceMeters",
        TimeSeconds = "TimeSeconds",
        NumberOfSessions = "NumberOfSessions",
        Calories = "Calories",
    }
}

code_enum! {
    /// RecurrenceCode_t
    pub enum RecurrenceCode {
        Once = "Once",
        Daily = "Daily",
        Weekly = "Weekly",
        Monthly = "Monthly",
        Yearly = "Yearly",
        Custom = "Custom",
    }
}

/// The collection of goals carried in a database's `Extensions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGoals {
    // ActivityGoals_t
    #[serde(default)]
    goals: Vec<ActivityGoal>,
}

impl ActivityGoals {
    pub const GOALS: AliasedKey = AliasedKey::new("ns5:activityGoal", &["ActivityGoal"]);

    pub fn new(goals: Vec<ActivityGoal>) -> Self {
        Self { goals }
    }

    pub fn goals(&self) -> &[ActivityGoal] {
        &self.goals
    }
}

impl XmlCodable for ActivityGoals {
    const ENTITY: &'static str = "ActivityGoals";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_entities(Self::GOALS.primary(), &self.goals);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        let goals = decode_with_fallback(decoder, &Self::GOALS, |decoder, key| {
            decoder.decode_entities(key)
        })?;
        Ok(Self::new(goals.unwrap_or_default()))
    }
}

impl XmlRoot for ActivityGoals {
    const ROOT_ELEMENT: &'static str = "ActivityGoals";
    const NAMESPACES: &'static [(&'static str, &'static str)] =
        &[("xmlns:ns5", crate::ACTIVITY_GOALS_NAMESPACE)];
}

/// A named target for one sport and measure, with the progress made so far.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGoal {
    // ActivityGoal_t
    sport: Sport,
    measure: Measure,
    target: Decimal,
    current: Decimal,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    period: Option<Period>,
}

impl ActivityGoal {
    const SPORT: &'static str = "Sport";
    const MEASURE: &'static str = "Measure";
    const TARGET: &'static str = "Target";
    const CURRENT: &'static str = "Current";
    const NAME: &'static str = "Name";
    const PERIOD: &'static str = "Period";

    pub fn new(
        sport: Sport,
        measure: Measure,
        target: Decimal,
        current: Decimal,
        name: String,
        period: Option<Period>,
    ) -> Self {
        Self {
            sport,
            measure,
            target,
            current,
            name,
            period,
        }
    }

    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn measure(&self) -> Measure {
        self.measure
    }

    pub fn target(&self) -> Decimal {
        self.target
    }

    pub fn current(&self) -> Decimal {
        self.current
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    /// Whether the current value has reached the target.
    pub fn is_met(&self) -> bool {
        self.current >= self.target
    }
}

impl XmlCodable for ActivityGoal {
    const ENTITY: &'static str = "ActivityGoal";

    fn node_placement(key: &str) -> NodePlacement {
        match key {
            Self::SPORT | Self::MEASURE | Self::TARGET | Self::CURRENT => NodePlacement::Attribute,
            _ => NodePlacement::Element,
        }
    }

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::SPORT, &self.sport);
        encoder.encode(Self::MEASURE, &self.measure);
        encoder.encode(Self::TARGET, &self.target);
        encoder.encode(Self::CURRENT, &self.current);
        encoder.encode(Self::NAME, &self.name);
        encoder.encode_optional_entity(Self::PERIOD, self.period.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::SPORT)?,
            decoder.decode(Self::MEASURE)?,
            decoder.decode(Self::TARGET)?,
            decoder.decode(Self::CURRENT)?,
            decoder.decode(Self::NAME)?,
            decoder.decode_optional_entity(Self::PERIOD)?,
        ))
    }
}

/// The time window a goal applies to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    // Period_t
    start_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_date: Option<DateTime<Utc>>,
    recurrence: RecurrenceCode,
    #[serde(deserialize_with = "days_per_period")]
    days_per_period: u16,
}

impl Period {
    pub const DEFAULT_DAYS_PER_PERIOD: u16 = 7;
    pub const MIN_DAYS_PER_PERIOD: u16 = 1;
    pub const MAX_DAYS_PER_PERIOD: u16 = 356;

    const START_DATE: &'static str = "StartDateTime";
    const END_DATE: &'static str = "EndDateTime";
    const RECURRENCE: &'static str = "Recurrence";
    const DAYS_PER_PERIOD: &'static str = "DaysPerPeriod";

    /// Builds a period; `days_per_period` is clamped into
    /// `MIN_DAYS_PER_PERIOD..=MAX_DAYS_PER_PERIOD` without error.
    pub fn new(
        start_date: DateTime<Utc>,
        end_date: Option<DateTime<Utc>>,
        recurrence: RecurrenceCode,
        days_per_period: u16,
    ) -> Self {
        Self {
            start_date,
            end_date,
            recurrence,
            days_per_period: Self::clamp_days(days_per_period),
        }
    }

    /// A period of [`DEFAULT_DAYS_PER_PERIOD`](Self::DEFAULT_DAYS_PER_PERIOD) days.
    pub fn with_default_days(
        start_date: DateTime<Utc>,
        end_date: Option<DateTime<Utc>>,
        recurrence: RecurrenceCode,
    ) -> Self {
        Self::new(
            start_date,
            end_date,
            recurrence,
            Self::DEFAULT_DAYS_PER_PERIOD,
        )
    }

    pub fn clamp_days(days: u16) -> u16 {
        days.clamp(Self::MIN_DAYS_PER_PERIOD, Self::MAX_DAYS_PER_PERIOD)
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn recurrence(&self) -> RecurrenceCode {
        self.recurrence
    }

    pub fn days_per_period(&self) -> u16 {
        self.days_per_period
    }
}

impl XmlCodable for Period {
    const ENTITY: &'static str = "Period";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode(Self::START_DATE, &self.start_date);
        encoder.encode_optional(Self::END_DATE, self.end_date.as_ref());
        encoder.encode(Self::RECURRENCE, &self.recurrence);
        encoder.encode(Self::DAYS_PER_PERIOD, &self.days_per_period);
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode(Self::START_DATE)?,
            decoder.decode_optional(Self::END_DATE)?,
            decoder.decode(Self::RECURRENCE)?,
            decoder.decode(Self::DAYS_PER_PERIOD)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pacer_serde_support::{XmlElement, classify, decode_element, encode_element};
    use rust_decimal_macros::dec;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 1, 7, 0, 0, 0).unwrap()
    }

    fn goal(name: &str) -> ActivityGoal {
        ActivityGoal::new(
            Sport::Running,
            Measure::DistanceMeters,
            dec!(40000),
            dec!(12500.5),
            name.to_string(),
            Some(Period::with_default_days(start(), None, RecurrenceCode::Weekly)),
        )
    }

    fn goal_element(key: &str, name: &str) -> XmlElement {
        encode_element(&goal(name), key)
    }

    #[test]
    fn test_days_per_period_is_clamped() {
        let period = |days| Period::new(start(), None, RecurrenceCode::Custom, days);
        assert_eq!(period(400).days_per_period(), 356);
        assert_eq!(period(356).days_per_period(), 356);
        assert_eq!(period(30).days_per_period(), 30);
        assert_eq!(period(1).days_per_period(), 1);
        assert_eq!(period(0).days_per_period(), 1);
        assert_eq!(
            Period::with_default_days(start(), None, RecurrenceCode::Weekly).days_per_period(),
            7
        );
    }

    #[test]
    fn test_decoded_days_pass_through_clamp() {
        let mut element = encode_element(
            &Period::new(start(), None, RecurrenceCode::Yearly, 356),
            "Period",
        );
        for child in &mut element.children {
            if child.name == "DaysPerPeriod" {
                child.text = Some("365".to_string());
            }
        }
        let period: Period = decode_element(&element).unwrap();
        assert_eq!(period.days_per_period(), 356);
    }

    #[test]
    fn test_json_days_pass_through_clamp() {
        let json = r#"{"startDate":"2019-01-07T00:00:00Z","recurrence":"Daily","daysPerPeriod":0}"#;
        let period: Period = serde_json::from_str(json).unwrap();
        assert_eq!(period.days_per_period(), 1);
    }

    #[test]
    fn test_goal_attributes() {
        for key in ["Sport", "Measure", "Target", "Current"] {
            assert_eq!(classify::<ActivityGoal>(key), NodePlacement::Attribute);
        }
        assert_eq!(classify::<ActivityGoal>("Name"), NodePlacement::Element);
        assert_eq!(classify::<ActivityGoal>("Period"), NodePlacement::Element);

        let element = goal_element("ns5:activityGoal", "Weekly miles");
        assert_eq!(element.attribute("Measure"), Some("DistanceMeters"));
        assert_eq!(element.attribute("Current"), Some("12500.5"));
        assert_eq!(decode_element::<ActivityGoal>(&element), Ok(goal("Weekly miles")));
    }

    #[test]
    fn test_goals_prefer_prefixed_key() {
        let mut element = XmlElement::new("ActivityGoals");
        element.push_child(goal_element("ActivityGoal", "unprefixed"));
        element.push_child(goal_element("ns5:activityGoal", "prefixed"));
        let goals: ActivityGoals = decode_element(&element).unwrap();
        assert_eq!(goals, ActivityGoals::new(vec![goal("prefixed")]));
    }

    #[test]
    fn test_goals_fall_back_to_unprefixed_key() {
        let mut element = XmlElement::new("ActivityGoals");
        element.push_child(goal_element("ActivityGoal", "first"));
        element.push_child(goal_element("ActivityGoal", "second"));
        let goals: ActivityGoals = decode_element(&element).unwrap();
        assert_eq!(goals, ActivityGoals::new(vec![goal("first"), goal("second")]));
    }

    #[test]
    fn test_goals_absent_decode_empty() {
        let goals: ActivityGoals = decode_element(&XmlElement::new("ActivityGoals")).unwrap();
        assert!(goals.goals().is_empty());
    }

    #[test]
    fn test_malformed_prefixed_goal_does_not_fall_back() {
        let mut bad = goal_element("ns5:activityGoal", "bad");
        bad.attributes.retain(|(key, _)| key != "Measure");
        bad.push_attribute("Measure", "Steps");

        let mut element = XmlElement::new("ActivityGoals");
        element.push_child(bad);
        element.push_child(goal_element("ActivityGoal", "good"));
        assert_eq!(
            decode_element::<ActivityGoals>(&element),
            Err(DecodeError::UnrecognizedEnumCode {
                entity: "ActivityGoal",
                key: "Measure",
                value: "Steps".to_string(),
            })
        );
    }

    #[test]
    fn test_goals_encode_primary_key_only() {
        let goals = ActivityGoals::new(vec![goal("a"), goal("b")]);
        let element = encode_element(&goals, "ns5:ActivityGoals");
        assert_eq!(element.children_named("ns5:activityGoal").count(), 2);
        assert_eq!(element.children_named("ActivityGoal").count(), 0);
    }

    #[test]
    fn test_goal_progress() {
        assert!(!goal("x").is_met());
        let done = ActivityGoal::new(
            Sport::Biking,
            Measure::NumberOfSessions,
            dec!(3),
            dec!(3),
            "three rides".to_string(),
            None,
        );
        assert!(done.is_met());
    }
}
