//! Tests for sweep-line slot computation.

use huddle_engine::sweep::{find_slots, find_slots_with, Baseline, Slot, SweepOptions};
use huddle_engine::{BusySpan, HuddleError, OpeningHours, PartySchedule};

/// Helper to build a party from `(from, to)` string pairs.
fn party(id: &str, spans: &[(&str, &str)]) -> PartySchedule {
    PartySchedule {
        party_id: id.to_string(),
        busy: spans
            .iter()
            .map(|&(from, to)| BusySpan {
                from: from.to_string(),
                to: to.to_string(),
            })
            .collect(),
    }
}

fn hours(from: &str, to: &str) -> OpeningHours {
    OpeningHours {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn slot(start: i32, end: i32) -> Slot {
    Slot { start, end }
}

/// The planning fixture used throughout: three colleagues and a venue open
/// 10:00-18:00 at +5 on the first three weekdays.
fn crew() -> Vec<PartySchedule> {
    vec![
        party(
            "Danny",
            &[
                ("ПН 12:00+5", "ПН 17:00+5"),
                ("ВТ 13:00+5", "ВТ 16:00+5"),
            ],
        ),
        party(
            "Rusty",
            &[
                ("ПН 11:30+5", "ПН 16:30+5"),
                ("ВТ 13:00+5", "ВТ 16:00+5"),
            ],
        ),
        party(
            "Linus",
            &[
                ("ПН 09:00+3", "ПН 14:00+3"),
                ("ПН 21:00+3", "ВТ 09:30+3"),
                ("СР 09:30+3", "СР 15:00+3"),
            ],
        ),
    ]
}

fn bank() -> OpeningHours {
    hours("10:00+5", "18:00+5")
}

// ---------------------------------------------------------------------------
// Reference fixture
// ---------------------------------------------------------------------------

#[test]
fn crew_has_three_ninety_minute_slots() {
    let slots = find_slots(&crew(), &bank(), 90).unwrap();

    // Tuesday 11:30-13:00, Tuesday 16:00-18:00, Wednesday 10:00-11:30,
    // all in venue local time (+5).
    assert_eq!(
        slots,
        vec![slot(1830, 1920), slot(2100, 2220), slot(3180, 3270)]
    );
}

#[test]
fn crew_has_no_slot_longer_than_two_hours() {
    // The longest simultaneous window is exactly 120 minutes.
    assert!(find_slots(&crew(), &bank(), 121).unwrap().is_empty());
    assert_eq!(
        find_slots(&crew(), &bank(), 120).unwrap(),
        vec![slot(2100, 2220)]
    );
}

#[test]
fn span_exactly_matching_duration_is_kept() {
    let slots = find_slots(&crew(), &bank(), 90).unwrap();
    assert_eq!(slots[0].duration_minutes(), 90);
}

// ---------------------------------------------------------------------------
// Degenerate schedules
// ---------------------------------------------------------------------------

#[test]
fn no_busy_spans_yields_the_venue_spans() {
    let people = vec![party("a", &[]), party("b", &[]), party("c", &[])];
    let slots = find_slots(&people, &bank(), 90).unwrap();

    assert_eq!(
        slots,
        vec![slot(300, 780), slot(1740, 2220), slot(3180, 3660)]
    );
    assert!(slots.iter().all(|s| s.duration_minutes() == 480));
}

#[test]
fn nearly_all_day_hours_leave_a_gap_at_midnight() {
    // 00:00-23:59 opens 1439 of 1440 minutes; the closed minute before
    // each midnight keeps the spans from fusing.
    let people = vec![party("a", &[]), party("b", &[]), party("c", &[])];
    let slots = find_slots(&people, &hours("00:00+5", "23:59+5"), 121).unwrap();

    assert_eq!(
        slots,
        vec![slot(-300, 1139), slot(1140, 2579), slot(2580, 4019)]
    );
    assert!(slots.iter().all(|s| s.duration_minutes() == 1439));
}

#[test]
fn no_parties_at_all_still_respects_the_venue() {
    let slots = find_slots(&[], &bank(), 480).unwrap();
    assert_eq!(slots.len(), 3);

    assert!(find_slots(&[], &bank(), 481).unwrap().is_empty());
}

#[test]
fn fully_booked_party_blocks_everything() {
    let people = vec![party("a", &[("ПН 00:00+0", "ВС 23:59+0")])];
    assert!(find_slots(&people, &bank(), 1).unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Boundary behavior
// ---------------------------------------------------------------------------

#[test]
fn back_to_back_spans_of_two_parties_leave_no_gap() {
    // a hands over to b at exactly 12:00; the touching boundary must not
    // read as a free instant.
    let people = vec![
        party("a", &[("ПН 10:00+0", "ПН 12:00+0")]),
        party("b", &[("ПН 12:00+0", "ПН 14:00+0")]),
    ];
    let slots = find_slots_with(
        &people,
        &hours("00:00+0", "23:59+0"),
        60,
        &SweepOptions {
            open_days: 1,
            ..SweepOptions::default()
        },
    )
    .unwrap();

    assert_eq!(slots, vec![slot(0, 600), slot(840, 1439)]);
}

#[test]
fn overlapping_spans_of_one_party_release_only_at_the_latest_end() {
    let people = vec![party("a", &[("ПН 10:00+0", "ПН 12:00+0"), ("ПН 11:00+0", "ПН 13:00+0")])];
    let slots = find_slots_with(
        &people,
        &hours("09:00+0", "18:00+0"),
        60,
        &SweepOptions {
            open_days: 1,
            ..SweepOptions::default()
        },
    )
    .unwrap();

    assert_eq!(slots, vec![slot(540, 600), slot(780, 1080)]);
}

#[test]
fn busy_span_flush_with_venue_close_truncates_the_evening() {
    let people = vec![party("a", &[("ПН 16:00+5", "ПН 18:00+5")])];
    let slots = find_slots_with(
        &people,
        &bank(),
        60,
        &SweepOptions {
            open_days: 1,
            ..SweepOptions::default()
        },
    )
    .unwrap();

    // Free time runs 10:00-16:00 local; nothing after the span because the
    // venue closes at the same instant the span ends.
    assert_eq!(slots, vec![slot(300, 660)]);
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[test]
fn open_days_widen_or_narrow_the_searchable_range() {
    let people = vec![party("a", &[])];

    let week = find_slots_with(
        &people,
        &bank(),
        60,
        &SweepOptions {
            open_days: 7,
            ..SweepOptions::default()
        },
    )
    .unwrap();
    assert_eq!(week.len(), 7);

    let none = find_slots_with(
        &people,
        &bank(),
        60,
        &SweepOptions {
            open_days: 0,
            ..SweepOptions::default()
        },
    )
    .unwrap();
    assert!(none.is_empty());
}

#[test]
fn busy_baseline_blocks_parties_without_a_schedule() {
    let people = vec![party("a", &[]), party("b", &[("ВТ 10:00+5", "ВТ 11:00+5")])];
    let options = SweepOptions {
        baseline: Baseline::Busy,
        ..SweepOptions::default()
    };

    assert!(find_slots_with(&people, &bank(), 60, &options)
        .unwrap()
        .is_empty());
}

#[test]
fn busy_baseline_keeps_declared_schedules_meaningful() {
    let options = SweepOptions {
        baseline: Baseline::Busy,
        ..SweepOptions::default()
    };
    let with_policy = find_slots_with(&crew(), &bank(), 90, &options).unwrap();

    // Every crew member declared spans, so the policy changes nothing.
    assert_eq!(with_policy, find_slots(&crew(), &bank(), 90).unwrap());
}

// ---------------------------------------------------------------------------
// Failure modes
// ---------------------------------------------------------------------------

#[test]
fn malformed_span_fails_the_whole_sweep() {
    let people = vec![
        party("a", &[("ПН 10:00+5", "ПН 11:00+5")]),
        party("b", &[("ВТ 10:00+5", "ВТ 25:00+5")]),
    ];
    let err = find_slots(&people, &bank(), 60).unwrap_err();

    match err {
        HuddleError::MalformedTime { text, .. } => assert_eq!(text, "ВТ 25:00+5"),
    }
}

#[test]
fn malformed_venue_hours_fail_the_whole_sweep() {
    let people = vec![party("a", &[])];
    assert!(find_slots(&people, &hours("10:00", "18:00+5"), 60).is_err());
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[test]
fn schedules_deserialize_from_plan_json() {
    let json = r#"{
        "parties": [
            {"party_id": "Danny", "busy": [{"from": "ПН 12:00+5", "to": "ПН 17:00+5"}]},
            {"party_id": "Rusty", "busy": []}
        ],
        "hours": {"from": "10:00+5", "to": "18:00+5"}
    }"#;

    #[derive(serde::Deserialize)]
    struct Plan {
        parties: Vec<PartySchedule>,
        hours: OpeningHours,
    }

    let plan: Plan = serde_json::from_str(json).unwrap();
    let slots = find_slots(&plan.parties, &plan.hours, 60).unwrap();

    // Monday free 10:00-12:00 and 17:00-18:00 local, then Tuesday and
    // Wednesday wide open.
    assert_eq!(
        slots,
        vec![
            slot(300, 420),
            slot(720, 780),
            slot(1740, 2220),
            slot(3180, 3660)
        ]
    );
}
