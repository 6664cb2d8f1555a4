use chrono::NaiveDate;
use marinerlog::core::aggregate::{
    Dashboard, active_rotation_queue, days_onboard_in_year, historical_total_days, next_rotation,
    total_career_days, urgent_documents,
};
use marinerlog::core::calendar::month_agenda;
use marinerlog::core::interval::{DateRange, inclusive_day_count, past_overlap_days};
use marinerlog::core::scheduler::{MAX_PERIODS, RotationTemplate, end_date_for, generate_schedule};
use marinerlog::core::status::{DocStatus, RotationStatus, document_status, rotation_status};
use marinerlog::errors::AppError;
use marinerlog::models::{
    DocKind, Leave, LeaveKind, LeaveStatus, Regime, Rotation, SeaTimeEntry, TrainingDocument,
};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

fn rotation(id: &str, start: &str, end: &str) -> Rotation {
    RotationTemplate {
        vessel_name: format!("Vessel {id}"),
        ..Default::default()
    }
    .into_rotation(id.to_string(), d(start), d(end), Regime::FourteenFourteen)
}

fn sea_time(start: &str, end: &str) -> SeaTimeEntry {
    SeaTimeEntry {
        id: format!("h-{start}"),
        vessel_name: "Old ship".to_string(),
        start_date: d(start),
        end_date: d(end),
    }
}

fn document(id: &str, expiry: Option<&str>) -> TrainingDocument {
    TrainingDocument {
        id: id.to_string(),
        name: format!("Doc {id}"),
        kind: DocKind::Certificate,
        institution: String::new(),
        issue_date: d("2020-01-01"),
        expiry_date: expiry.map(d),
        doc_number: None,
        notes: String::new(),
        attachment: None,
    }
}

#[test]
fn test_inclusive_day_count_same_day_is_one() {
    assert_eq!(inclusive_day_count(d("2024-03-10"), d("2024-03-10")), 1);
}

#[test]
fn test_inclusive_day_count_is_symmetric() {
    let a = d("2024-01-01");
    let b = d("2024-01-14");
    assert_eq!(inclusive_day_count(a, b), 14);
    assert_eq!(inclusive_day_count(b, a), 14);
}

#[test]
fn test_inclusive_day_count_across_leap_day() {
    assert_eq!(inclusive_day_count(d("2024-02-28"), d("2024-03-01")), 3);
}

#[test]
fn test_past_overlap_ignores_future_interval() {
    let today = d("2024-06-01");
    assert_eq!(past_overlap_days(d("2024-07-01"), d("2024-07-14"), None, today), 0);
}

#[test]
fn test_past_overlap_clips_to_today_and_window() {
    let today = d("2024-01-10");
    // started last year, still running
    assert_eq!(
        past_overlap_days(d("2023-12-25"), d("2024-01-20"), Some(d("2024-01-01")), today),
        10
    );
    // without window the December days count too
    assert_eq!(past_overlap_days(d("2023-12-25"), d("2024-01-20"), None, today), 17);
}

#[test]
fn test_date_range_rejects_reversed_dates() {
    let err = DateRange::new(d("2024-02-01"), d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::InvalidRange { .. }));

    let ok = DateRange::new(d("2024-01-01"), d("2024-01-01")).unwrap();
    assert_eq!(ok.days(), 1);
    assert!(ok.overlaps(&DateRange::single(d("2024-01-01"))));
}

#[test]
fn test_document_status_thresholds() {
    let today = d("2024-06-01");
    assert_eq!(document_status(None, today), DocStatus::Valid);
    assert_eq!(document_status(Some(d("2024-05-31")), today), DocStatus::Expired);
    assert_eq!(document_status(Some(today), today), DocStatus::Expiring);
    assert_eq!(document_status(Some(d("2024-08-30")), today), DocStatus::Expiring); // +90
    assert_eq!(document_status(Some(d("2024-08-31")), today), DocStatus::Valid); // +91
}

#[test]
fn test_rotation_status_boundaries() {
    let start = d("2024-01-01");
    let end = d("2024-01-14");
    assert_eq!(rotation_status(start, end, d("2024-01-07")), RotationStatus::Ongoing);
    assert_eq!(rotation_status(start, end, d("2023-12-31")), RotationStatus::Planned);
    assert_eq!(rotation_status(start, end, start), RotationStatus::Ongoing);
    assert_eq!(rotation_status(start, end, end), RotationStatus::Ongoing);
    assert_eq!(rotation_status(start, end, d("2024-01-15")), RotationStatus::Completed);
}

#[test]
fn test_regime_parsing() {
    assert_eq!(Regime::parse("14x14"), Regime::FourteenFourteen);
    assert_eq!(Regime::parse(" 28X28 "), Regime::TwentyEightTwentyEight);
    assert_eq!(Regime::parse("35x20"), Regime::Custom { on: 35, off: 20 });
    assert_eq!(Regime::parse("nonsense"), Regime::FourteenFourteen);
    assert_eq!(Regime::parse("0x14"), Regime::FourteenFourteen);
    assert_eq!(Regime::parse_strict("21"), None);
    assert_eq!(Regime::Custom { on: 35, off: 20 }.label(), "35x20");
}

#[test]
fn test_schedule_14x14_from_new_year() {
    let start = d("2024-01-01");
    let schedule = generate_schedule(&RotationTemplate::default(), Regime::FourteenFourteen, start);

    assert_eq!(schedule.len(), MAX_PERIODS);
    assert_eq!(schedule[0].start_date, d("2024-01-01"));
    assert_eq!(schedule[0].end_date, d("2024-01-15"));
    assert_eq!(schedule[1].start_date, d("2024-01-29"));
    assert!(schedule.iter().all(|r| r.start_date <= d("2025-01-01")));
    assert!(schedule.iter().all(|r| r.regime == Regime::FourteenFourteen));
}

#[test]
fn test_schedule_stops_after_one_year() {
    let start = d("2024-01-01");
    let schedule =
        generate_schedule(&RotationTemplate::default(), Regime::FortyFiveFortyFive, start);

    // starts at +0, +90, +180, +270, +360 days
    assert_eq!(schedule.len(), 5);
    assert_eq!(schedule[4].start_date, d("2024-12-26"));
}

#[test]
fn test_schedule_ids_are_unique_and_notes_filled() {
    let template = RotationTemplate {
        vessel_name: "Maersk Kobe".to_string(),
        ..Default::default()
    };
    let schedule = generate_schedule(&template, Regime::TwentyEightTwentyEight, d("2024-03-01"));

    let mut ids: Vec<&str> = schedule.iter().map(|r| r.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), schedule.len());

    assert!(schedule.iter().all(|r| r.vessel_name == "Maersk Kobe"));
    assert!(schedule[0].notes.starts_with("Auto-generated schedule (1/"));
}

#[test]
fn test_end_date_prefill_follows_regime() {
    assert_eq!(end_date_for(d("2024-01-01"), Regime::FourteenFourteen), d("2024-01-15"));
    assert_eq!(
        end_date_for(d("2024-01-01"), Regime::Custom { on: 35, off: 20 }),
        d("2024-02-05")
    );
}

#[test]
fn test_active_queue_drops_finished_rotations() {
    let rotations = vec![
        rotation("old", "2022-12-20", "2023-01-01"),
        rotation("new", "2024-12-20", "2025-01-01"),
    ];
    let queue = active_rotation_queue(&rotations, d("2024-06-01"));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, "new");
}

#[test]
fn test_active_queue_keeps_rotation_ending_today() {
    let rotations = vec![rotation("a", "2024-05-20", "2024-06-01")];
    assert_eq!(active_rotation_queue(&rotations, d("2024-06-01")).len(), 1);
}

#[test]
fn test_next_rotation_is_earliest_active() {
    let rotations = vec![
        rotation("later", "2024-08-01", "2024-08-14"),
        rotation("now", "2024-05-25", "2024-06-07"),
        rotation("done", "2024-01-01", "2024-01-14"),
    ];
    let (next, status) = next_rotation(&rotations, d("2024-06-01")).expect("a rotation");
    assert_eq!(next.id, "now");
    assert_eq!(status, RotationStatus::Ongoing);

    assert!(next_rotation(&rotations, d("2025-01-01")).is_none());
}

#[test]
fn test_total_career_days_sums_both_sources() {
    let historical = vec![sea_time("2020-01-01", "2020-01-10")];
    let rotations = vec![rotation("r", "2024-01-01", "2024-01-05")];
    assert_eq!(total_career_days(&rotations, &historical, d("2024-06-01")), 15);
}

#[test]
fn test_total_career_days_counts_overlap_twice() {
    let historical = vec![sea_time("2024-01-01", "2024-01-05")];
    let rotations = vec![rotation("r", "2024-01-01", "2024-01-05")];
    assert_eq!(total_career_days(&rotations, &historical, d("2024-06-01")), 10);
}

#[test]
fn test_days_onboard_in_year_excludes_future_and_previous_year() {
    let rotations = vec![
        rotation("span", "2023-12-25", "2024-01-07"),
        rotation("future", "2024-07-01", "2024-07-14"),
    ];
    assert_eq!(days_onboard_in_year(&rotations, 2024, d("2024-06-01")), 7);
}

#[test]
fn test_historical_total_counts_full_length() {
    let historical = vec![
        sea_time("2019-03-01", "2019-03-31"),
        sea_time("2020-01-01", "2020-01-10"),
    ];
    assert_eq!(historical_total_days(&historical), 41);
}

#[test]
fn test_urgent_documents_sorted_by_expiry() {
    let docs = vec![
        document("never", None),
        document("soon", Some("2024-07-01")),
        document("gone", Some("2024-02-01")),
        document("far", Some("2026-01-01")),
    ];
    let urgent = urgent_documents(&docs, d("2024-06-01"));
    let ids: Vec<&str> = urgent.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["gone", "soon"]);
}

#[test]
fn test_dashboard_summary() {
    let rotations = vec![
        rotation("done", "2024-01-01", "2024-01-14"),
        rotation("next", "2024-07-01", "2024-07-14"),
    ];
    let historical = vec![sea_time("2020-01-01", "2020-01-10")];
    let docs = vec![
        document("a", Some("2024-06-10")),
        document("b", Some("2024-06-20")),
        document("c", Some("2024-05-01")),
    ];

    let dash = Dashboard::build(&rotations, &historical, &docs, d("2024-06-01"), 2);

    assert_eq!(dash.year, 2024);
    assert_eq!(dash.days_onboard_this_year, 14);
    assert_eq!(dash.total_career_days, 24);
    assert_eq!(dash.next.map(|(r, _)| r.id.as_str()), Some("next"));
    assert_eq!(dash.urgent_count, 3);
    assert_eq!(dash.urgent_preview.len(), 2);
    assert_eq!(dash.urgent_preview[0].id, "c");
}

#[test]
fn test_month_agenda_places_entries() {
    let rotations = vec![rotation("r", "2024-01-30", "2024-02-03")];
    let leaves = vec![Leave {
        id: "l".to_string(),
        title: "STCW refresher".to_string(),
        kind: LeaveKind::Course,
        start_date: d("2024-02-10"),
        end_date: d("2024-02-11"),
        status: LeaveStatus::Approved,
        notes: String::new(),
    }];
    let docs = vec![document("doc", Some("2024-02-20"))];

    let agenda = month_agenda(2024, 2, &rotations, &leaves, &docs, d("2024-02-15")).unwrap();

    assert_eq!(agenda.days.len(), 29);
    // 2024-02-01 is a Thursday
    assert_eq!(agenda.leading_blanks, 4);

    let with_rotation: Vec<u32> = agenda
        .days
        .iter()
        .filter(|day| !day.rotations.is_empty())
        .map(|day| chrono::Datelike::day(&day.date))
        .collect();
    assert_eq!(with_rotation, vec![1, 2, 3]);

    assert_eq!(agenda.days[9].leaves.len(), 1);
    assert_eq!(agenda.days[10].leaves.len(), 1);
    assert_eq!(agenda.days[19].expiring_docs.len(), 1);
    assert!(agenda.days[14].is_today);
    assert!(agenda.days[14].is_empty());
}

#[test]
fn test_month_agenda_rejects_bad_month() {
    assert!(month_agenda(2024, 13, &[], &[], &[], d("2024-01-01")).is_err());
}
