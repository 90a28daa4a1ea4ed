//! Decodes every fixture document under `tests/data` and checks that it
//! survives re-encoding to XML and to JSON unchanged.

#![cfg(feature = "xml")]

use pacer_serde::json::{from_json_str, to_json_string_pretty};
use pacer_serde::xml::{from_xml_slice, from_xml_str, to_xml_string, to_xml_string_pretty};
use pacer_tcx::{
    CadenceSensorType, Measure, RecurrenceCode, Sport, TrainingCenterDatabase, TrainingType,
};
use rust_decimal_macros::dec;
use std::fs;
use std::path::{Path, PathBuf};

fn tests_data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

fn fixture_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(tests_data_root())
        .expect("tests/data exists")
        .map(|entry| entry.expect("readable directory entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "tcx"))
        .collect();
    files.sort();
    files
}

fn load(name: &str) -> TrainingCenterDatabase {
    let path = tests_data_root().join(name);
    let bytes = fs::read(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    from_xml_slice(&bytes).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

fn check_round_trips(path: &Path) {
    let xml = fs::read_to_string(path).expect("fixture is UTF-8");
    let database: TrainingCenterDatabase =
        from_xml_str(&xml).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));

    let compact = to_xml_string(&database).expect("compact XML");
    let reparsed: TrainingCenterDatabase = from_xml_str(&compact).expect("compact XML decodes");
    assert_eq!(reparsed, database, "{}: compact XML round trip", path.display());

    let pretty = to_xml_string_pretty(&database).expect("pretty XML");
    let reparsed: TrainingCenterDatabase = from_xml_str(&pretty).expect("pretty XML decodes");
    assert_eq!(reparsed, database, "{}: pretty XML round trip", path.display());

    // Re-encoding a decoded document is stable.
    assert_eq!(to_xml_string(&reparsed).expect("compact XML"), compact);

    let json = to_json_string_pretty(&database).expect("JSON");
    let from_json: TrainingCenterDatabase = from_json_str(&json).expect("JSON decodes");
    assert_eq!(from_json, database, "{}: JSON round trip", path.display());
}

#[test]
fn test_all_fixtures_round_trip() {
    let files = fixture_files();
    assert!(files.len() >= 2, "expected fixture documents in tests/data");
    for path in &files {
        check_round_trips(path);
    }
}

#[test]
fn test_prefixed_fixture_contents() {
    let database = load("morning_run_prefixed.tcx");

    let activities = database.activities().expect("activities");
    assert_eq!(activities.activities().len(), 1);
    let run = &activities.activities()[0];
    assert_eq!(run.sport(), Sport::Running);
    assert_eq!(run.laps().len(), 2);
    assert_eq!(run.laps()[0].notes(), Some("Warm-up mile, cold & windy"));
    assert_eq!(run.laps()[0].trackpoints().count(), 3);
    assert_eq!(run.laps()[1].cadence(), Some(86));
    assert_eq!(
        run.training().and_then(|t| t.plan()).map(|p| p.training_type()),
        Some(TrainingType::Workout)
    );

    let creator = run.creator().expect("creator");
    assert_eq!(creator.source_type(), "Device_t");
    assert_eq!(creator.product_id(), Some("2691"));
    assert_eq!(creator.version().map(ToString::to_string).as_deref(), Some("21.0.0.0"));

    let tpx = run.laps()[0]
        .trackpoints()
        .nth(1)
        .and_then(|point| point.extensions())
        .and_then(|extensions| extensions.tpx())
        .expect("trackpoint extension");
    assert_eq!(tpx.cadence_sensor(), Some(CadenceSensorType::Footpod));
    assert_eq!(tpx.speed(), Some(dec!(2.9270000457763672)));
    assert_eq!(tpx.run_cadence(), Some(84));

    let session = &activities.multi_sport_sessions()[0];
    let sports: Vec<_> = session.activities().map(|a| a.sport()).collect();
    assert_eq!(sports, vec![Sport::Biking, Sport::Running]);
    assert!(session.next_sport().unwrap()[0].transition().is_some());
    assert_eq!(database.all_activities().count(), 3);

    let courses = database.courses().expect("courses");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses.courses().unwrap()[0].name(), "Lake loop");

    assert_eq!(database.author().and_then(|a| a.part_number()), Some("006-D2449-00"));

    let goals = database.goals();
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].measure(), Measure::DistanceMeters);
    assert_eq!(goals[0].current(), dec!(3218.68));
    let yearly = goals[1].period().expect("period");
    assert_eq!(yearly.recurrence(), RecurrenceCode::Yearly);
    assert_eq!(yearly.days_per_period(), 356);
    assert!(yearly.end_date().is_some());
}

#[test]
fn test_unprefixed_fixture_contents() {
    let database = load("evening_ride_unprefixed.tcx");

    let ride = &database.activities().expect("activities").activities()[0];
    assert_eq!(ride.sport(), Sport::Biking);
    let watts: Vec<_> = ride.laps()[0]
        .trackpoints()
        .filter_map(|point| point.extensions().and_then(|e| e.tpx()))
        .filter_map(|tpx| tpx.watts())
        .collect();
    assert_eq!(watts, vec![180, 184]);
    assert_eq!(ride.creator().map(|c| c.source_type()), Some("Device_t"));

    let names: Vec<_> = database
        .courses()
        .and_then(|c| c.courses())
        .unwrap_or_default()
        .iter()
        .map(|course| course.name())
        .collect();
    assert_eq!(names, vec!["Hill repeats", "Flat out and back"]);

    let goals = database.goals();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].measure(), Measure::NumberOfSessions);
    assert_eq!(goals[0].period().map(|p| p.days_per_period()), Some(1));
}

#[test]
fn test_unprefixed_fixture_reencodes_with_primary_keys() {
    let xml = to_xml_string(&load("evening_ride_unprefixed.tcx")).expect("XML");
    assert!(xml.contains("<ns3:TPX CadenceSensor=\"Bike\"><ns3:Speed>8.1</ns3:Speed>"));
    assert!(xml.contains("<ns3:Watts>184</ns3:Watts>"));
    assert!(xml.contains("<Courses><Course><Name>Hill repeats</Name></Course>"));
    assert!(xml.contains("<ns5:ActivityGoals><ns5:activityGoal Sport=\"Biking\""));
    assert!(!xml.contains("<ActivityGoal "));
    assert!(!xml.contains("<TPX"));
}
