use pacer_serde_support::{
    AliasedKey, DecodeError, XmlCodable, XmlDecoder, XmlEncoder, XmlRoot, decode_with_fallback,
};
use serde::{Deserialize, Serialize};

use crate::elements::activity::{Activity, ActivityList};
use crate::elements::application::Application;
use crate::elements::course::CourseList;
use crate::extensions::activity_goals::{ActivityGoal, ActivityGoals};

/// TCX Training Center Database
///
/// The root of every TCX document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingCenterDatabase {
    // TrainingCenterDatabase_t
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activities: Option<ActivityList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    courses: Option<CourseList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<Application>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    extensions: Option<DatabaseExtensions>,
}

impl TrainingCenterDatabase {
    const ACTIVITIES: &'static str = "Activities";
    const COURSES: &'static str = "Courses";
    const AUTHOR: &'static str = "Author";
    const EXTENSIONS: &'static str = "Extensions";

    pub fn new(
        activities: Option<ActivityList>,
        courses: Option<CourseList>,
        author: Option<Application>,
        extensions: Option<DatabaseExtensions>,
    ) -> Self {
        Self {
            activities,
            courses,
            author,
            extensions,
        }
    }

    pub fn activities(&self) -> Option<&ActivityList> {
        self.activities.as_ref()
    }

    pub fn courses(&self) -> Option<&CourseList> {
        self.courses.as_ref()
    }

    pub fn author(&self) -> Option<&Application> {
        self.author.as_ref()
    }

    pub fn extensions(&self) -> Option<&DatabaseExtensions> {
        self.extensions.as_ref()
    }

    /// Every activity in the document: the plain activities followed by the
    /// legs of each multi-sport session.
    pub fn all_activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter().flat_map(|list| {
            list.activities().iter().chain(
                list.multi_sport_sessions()
                    .iter()
                    .flat_map(|session| session.activities()),
            )
        })
    }

    /// Goals from the database extensions, empty when there are none.
    pub fn goals(&self) -> &[ActivityGoal] {
        self.extensions
            .as_ref()
            .and_then(DatabaseExtensions::activity_goals)
            .map(ActivityGoals::goals)
            .unwrap_or_default()
    }
}

impl XmlCodable for TrainingCenterDatabase {
    const ENTITY: &'static str = "TrainingCenterDatabase";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_optional_entity(Self::ACTIVITIES, self.activities.as_ref());
        encoder.encode_optional_entity(Self::COURSES, self.courses.as_ref());
        encoder.encode_optional_entity(Self::AUTHOR, self.author.as_ref());
        encoder.encode_optional_entity(Self::EXTENSIONS, self.extensions.as_ref());
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(
            decoder.decode_optional_entity(Self::ACTIVITIES)?,
            decoder.decode_optional_entity(Self::COURSES)?,
            decoder.decode_optional_entity(Self::AUTHOR)?,
            decoder.decode_optional_entity(Self::EXTENSIONS)?,
        ))
    }
}

impl XmlRoot for TrainingCenterDatabase {
    const ROOT_ELEMENT: &'static str = "TrainingCenterDatabase";
    const NAMESPACES: &'static [(&'static str, &'static str)] = &[
        ("xmlns", crate::TRAINING_CENTER_DATABASE_NAMESPACE),
        ("xmlns:xsi", crate::XML_SCHEMA_INSTANCE_NAMESPACE),
        ("xmlns:ns3", crate::ACTIVITY_EXTENSION_NAMESPACE),
        ("xmlns:ns5", crate::ACTIVITY_GOALS_NAMESPACE),
    ];
}

/// The `Extensions` element directly under the database root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseExtensions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activity_goals: Option<ActivityGoals>,
}

impl DatabaseExtensions {
    pub const ACTIVITY_GOALS: AliasedKey =
        AliasedKey::new("ns5:ActivityGoals", &["ActivityGoals"]);

    pub fn new(activity_goals: Option<ActivityGoals>) -> Self {
        Self { activity_goals }
    }

    pub fn activity_goals(&self) -> Option<&ActivityGoals> {
        self.activity_goals.as_ref()
    }
}

impl XmlCodable for DatabaseExtensions {
    const ENTITY: &'static str = "DatabaseExtensions";

    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
        encoder.encode_optional_entity(
            Self::ACTIVITY_GOALS.primary(),
            self.activity_goals.as_ref(),
        );
    }

    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
        Ok(Self::new(decode_with_fallback(
            decoder,
            &Self::ACTIVITY_GOALS,
            |decoder, key| decoder.decode_entity(key),
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Sport;
    use crate::extensions::activity_goals::Measure;
    use pacer_serde_support::{XmlElement, decode_element, encode_root};
    use rust_decimal_macros::dec;

    fn goals() -> ActivityGoals {
        ActivityGoals::new(vec![ActivityGoal::new(
            Sport::Biking,
            Measure::Calories,
            dec!(5000),
            dec!(0),
            "Burn".to_string(),
            None,
        )])
    }

    #[test]
    fn test_root_declares_namespaces() {
        let element = encode_root(&TrainingCenterDatabase::default());
        assert_eq!(element.name, "TrainingCenterDatabase");
        assert_eq!(
            element.attribute("xmlns"),
            Some("http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2")
        );
        assert_eq!(
            element.attribute("xmlns:ns5"),
            Some("http://www.garmin.com/xmlschemas/ActivityGoals/v1")
        );
        assert!(element.children.is_empty());
    }

    #[test]
    fn test_extensions_round_trip_under_prefixed_key() {
        let database = TrainingCenterDatabase::new(
            None,
            None,
            None,
            Some(DatabaseExtensions::new(Some(goals()))),
        );
        let element = encode_root(&database);
        let extensions = element.child("Extensions").unwrap();
        assert!(extensions.child("ns5:ActivityGoals").is_some());
        assert_eq!(
            decode_element::<TrainingCenterDatabase>(&element),
            Ok(database.clone())
        );
        assert_eq!(database.goals().len(), 1);
    }

    #[test]
    fn test_extensions_accept_unprefixed_goals() {
        let mut goals_element = XmlElement::new("ActivityGoals");
        let mut goal = XmlElement::new("ActivityGoal");
        goal.push_attribute("Sport", "Running");
        goal.push_attribute("Measure", "TimeSeconds");
        goal.push_attribute("Target", "3600");
        goal.push_attribute("Current", "600");
        goal.push_child(XmlElement::with_text("Name", "Hour"));
        goals_element.push_child(goal);
        let mut extensions = XmlElement::new("Extensions");
        extensions.push_child(goals_element);

        let decoded: DatabaseExtensions = decode_element(&extensions).unwrap();
        let goals = decoded.activity_goals().unwrap().goals();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].measure(), Measure::TimeSeconds);
        assert_eq!(goals[0].target(), dec!(3600));
    }

    #[test]
    fn test_goals_default_to_empty() {
        assert!(TrainingCenterDatabase::default().goals().is_empty());
        let database = TrainingCenterDatabase::new(None, None, None, Some(DatabaseExtensions::default()));
        assert!(database.goals().is_empty());
    }
}
