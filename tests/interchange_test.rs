// ABOUTME: Integration tests for the interchange JSON document builder
// ABOUTME: Checks segment layout, step projections, target handling, and JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use pierre_workout_export::models::{InterchangeDocument, StepDescription};
use pierre_workout_export::workout::{build_interchange_document, to_pretty_json};
use serde_json::{json, Value};

use common::{bike_session, easy_run, hiit_session, untargeted_walk};

#[test]
fn test_single_segment_holds_every_step_in_order() {
    let document = build_interchange_document(&hiit_session());

    assert_eq!(document.workout_name, "HIIT Session");
    assert_eq!(document.workout_segments.len(), 1);
    assert_eq!(document.workout_segments[0].segment_order, 1);

    let names: Vec<&str> = document.steps().map(|step| step.step_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Warm up", "Sprint", "Rest", "Sprint", "Rest", "Cool down"]
    );
}

#[test]
fn test_easy_run_document_shape() {
    let document = build_interchange_document(&easy_run());
    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(
        value,
        json!({
            "workoutName": "Easy Run",
            "sportType": { "sportTypeId": 1, "sportTypeKey": "running" },
            "workoutSegments": [{
                "segmentOrder": 1,
                "workoutSteps": [{
                    "stepId": null,
                    "stepName": "Run",
                    "stepType": { "stepTypeId": 3, "stepTypeKey": "time" },
                    "duration": { "type": "time", "value": 1800 },
                    "intensity": { "intensityId": 1, "intensityKey": "active" },
                    "targetType": { "stepTargetId": 3, "stepTargetKey": "speed" }
                }]
            }]
        })
    );
}

#[test]
fn test_heart_rate_target_uses_import_id() {
    let document = build_interchange_document(&bike_session());
    let steps: Vec<_> = document.steps().collect();

    let warm_up = steps[0].target_type.as_ref().unwrap();
    assert_eq!(warm_up.step_target_id, 2);
    assert_eq!(warm_up.step_target_key, "heartRate");

    let tempo = steps[1].target_type.as_ref().unwrap();
    assert_eq!(tempo.step_target_id, 5);
    assert_eq!(document.sport_type.sport_type_id, 2);
}

#[test]
fn test_step_without_target_omits_target_type() {
    let document = build_interchange_document(&untargeted_walk());
    let value = serde_json::to_value(&document).unwrap();
    let step = &value["workoutSegments"][0]["workoutSteps"][0];

    assert!(step.get("targetType").is_none());
    assert_eq!(step["stepId"], Value::Null);
    assert_eq!(value["sportType"]["sportTypeId"], 8);
}

#[test]
fn test_unknown_target_becomes_no_target() {
    let mut workout = untargeted_walk();
    workout.steps = vec![StepDescription::new("Climb", 600).with_target("lactate", 2.0, 4.0)];

    let document = build_interchange_document(&workout);
    let target = document.steps().next().unwrap().target_type.clone().unwrap();
    assert_eq!(target.step_target_id, 0);
    assert_eq!(target.step_target_key, "noTarget");
}

#[test]
fn test_distance_step_sets_step_type_but_duration_stays_time() {
    let mut workout = easy_run();
    workout.steps = vec![StepDescription::new("Repeat", 400).with_duration_type("distance")];

    let document = build_interchange_document(&workout);
    let step = document.steps().next().unwrap();
    assert_eq!(step.step_type.step_type_id, 1);
    assert_eq!(step.step_type.step_type_key, "distance");
    assert_eq!(step.duration.kind, "time");

    let value = serde_json::to_value(&document).unwrap();
    assert_eq!(
        value["workoutSegments"][0]["workoutSteps"][0]["duration"],
        json!({ "type": "time", "value": 400 })
    );
}

#[test]
fn test_fractional_duration_is_preserved() {
    let mut workout = easy_run();
    workout.steps = vec![serde_json::from_value(json!({
        "name": "Strides",
        "duration": 22.5
    }))
    .unwrap()];

    let value = serde_json::to_value(build_interchange_document(&workout)).unwrap();
    assert_eq!(
        value["workoutSegments"][0]["workoutSteps"][0]["duration"]["value"],
        json!(22.5)
    );
}

#[test]
fn test_pretty_json_uses_two_space_indent_and_round_trips() {
    let document = build_interchange_document(&hiit_session());
    let text = to_pretty_json(&document).unwrap();

    assert!(text.starts_with("{\n  \"workoutName\": \"HIIT Session\""));
    let parsed: InterchangeDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, document);
}

#[test]
fn test_repeated_builds_are_identical() {
    for workout in [easy_run(), hiit_session(), bike_session(), untargeted_walk()] {
        let first = build_interchange_document(&workout);
        let second = build_interchange_document(&workout);

        assert_eq!(first, second);
        assert_eq!(to_pretty_json(&first).unwrap(), to_pretty_json(&second).unwrap());
    }
}
