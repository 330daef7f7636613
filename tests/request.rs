//! Integration tests for the JSON bracket request.

use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use tournament_bracket::{generate_bracket, BracketRequest, BracketType, TournamentSettings};

#[test]
fn minimal_request_fills_in_ids_and_defaults() {
    let request = BracketRequest::from_json(r#"{"teams": [{"name": "A"}, {"name": "B"}, {"name": "C"}]}"#).unwrap();

    assert_eq!(request.teams.len(), 3);
    let ids: HashSet<_> = request.teams.iter().map(|t| t.id).collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(request.settings, TournamentSettings::default());
    assert_eq!(request.start_date, None);

    let today = Local::now().date_naive();
    let start = request.start_date_or_today();
    assert!(start == today || start == today.succ_opt().unwrap());
}

#[test]
fn full_request_drives_generation() {
    let request = BracketRequest::from_json(
        r#"{
            "teams": [
                {"id": "6f1c9a64-2b8e-4c1a-9a3e-1d2f3a4b5c6d", "name": "A"},
                {"name": "B"}, {"name": "C"}, {"name": "D"}
            ],
            "settings": {"bracket_type": "single_elimination", "fields": ["Court 1"]},
            "start_date": "2024-06-01"
        }"#,
    )
    .unwrap();

    assert_eq!(request.teams[0].id.to_string(), "6f1c9a64-2b8e-4c1a-9a3e-1d2f3a4b5c6d");
    assert_eq!(request.settings.bracket_type, BracketType::SingleElimination);
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert_eq!(request.start_date_or_today(), start);

    let bracket = generate_bracket(&request.teams, &request.settings, request.start_date_or_today());
    assert_eq!(bracket.matches.len(), 3);
    assert!(bracket.matches.iter().all(|m| m.field.as_deref() == Some("Court 1")));
    assert_eq!(bracket.matches[0].scheduled_time, Some(start.and_hms_opt(9, 0, 0).unwrap()));
}

#[test]
fn request_without_teams_is_rejected() {
    assert!(BracketRequest::from_json(r#"{"settings": {}}"#).is_err());
}
