//! Integration tests for settings defaults, JSON shape and validation.

use chrono::NaiveTime;
use tournament_bracket::{BracketType, DayRollover, SettingsError, TournamentSettings};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn defaults() {
    let s = TournamentSettings::default();
    assert_eq!(s.bracket_type, BracketType::RoundRobin);
    assert_eq!(s.match_duration_minutes, 90);
    assert_eq!(s.break_time_minutes, 10);
    assert_eq!(s.fields, vec!["Field 1", "Field 2"]);
    assert_eq!(s.start_time, hm(9, 0));
    assert_eq!(s.end_time, hm(18, 0));
    assert_eq!(s.pool_count_or_default(), 4);
    assert_eq!(s.pool_size_or_default(), 4);
    assert_eq!(s.day_rollover, DayRollover::NextDayStart);
    assert_eq!(s.validate(), Ok(()));
}

#[test]
fn parses_json_with_hh_mm_times() {
    let s: TournamentSettings = serde_json::from_str(
        r#"{
            "bracket_type": "pools",
            "match_duration_minutes": 45,
            "fields": ["North", "South", "East"],
            "start_time": "08:30",
            "end_time": "20:15",
            "pool_count": 3,
            "day_rollover": "flat_24_hours"
        }"#,
    )
    .unwrap();
    assert_eq!(s.bracket_type, BracketType::Pools);
    assert_eq!(s.match_duration_minutes, 45);
    assert_eq!(s.break_time_minutes, 10);
    assert_eq!(s.start_time, hm(8, 30));
    assert_eq!(s.end_time, hm(20, 15));
    assert_eq!(s.pool_count_or_default(), 3);
    assert_eq!(s.day_rollover, DayRollover::Flat24Hours);

    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["start_time"], "08:30");
    assert_eq!(json["bracket_type"], "pools");
}

#[test]
fn rejects_malformed_time() {
    let result: Result<TournamentSettings, _> = serde_json::from_str(r#"{"start_time": "9am"}"#);
    assert!(result.is_err());
}

#[test]
fn validation_errors() {
    let base = TournamentSettings::default();

    let s = TournamentSettings { fields: vec![], ..base.clone() };
    assert_eq!(s.validate(), Err(SettingsError::NoFields));

    let s = TournamentSettings {
        fields: vec!["A".into(), "B".into(), "A".into()],
        ..base.clone()
    };
    assert_eq!(s.validate(), Err(SettingsError::DuplicateField("A".into())));

    let s = TournamentSettings { match_duration_minutes: 0, ..base.clone() };
    assert_eq!(s.validate(), Err(SettingsError::ZeroMatchDuration));

    let s = TournamentSettings { end_time: hm(9, 0), ..base.clone() };
    assert_eq!(
        s.validate(),
        Err(SettingsError::EmptyWindow { start: hm(9, 0), end: hm(9, 0) })
    );

    let s = TournamentSettings { pool_count: Some(0), ..base.clone() };
    assert_eq!(s.validate(), Err(SettingsError::ZeroPoolCount));

    let s = TournamentSettings { pool_size: Some(0), ..base };
    assert_eq!(s.validate(), Err(SettingsError::ZeroPoolSize));
}

#[test]
fn error_messages() {
    let err = SettingsError::EmptyWindow { start: hm(9, 0), end: hm(8, 0) };
    assert_eq!(err.to_string(), "End time 08:00 must be after start time 09:00");
}
