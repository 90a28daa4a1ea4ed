//! Entities of the TrainingCenterDatabase v2 schema.

pub mod activity;
pub mod application;
pub mod course;
pub mod creator;
pub mod database;
pub mod lap;
pub mod multisport;
pub mod training;
