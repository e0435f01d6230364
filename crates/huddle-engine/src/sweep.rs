//! Sweep-line intersection of party busy spans and venue opening hours.
//!
//! Every interval contributes two events on the shared week timeline, one
//! per boundary. A single left-to-right pass maintains one occupancy
//! counter per party; a slot opens at the event where the last blocked
//! party unblocks and closes at the event where any party blocks again.
//! Candidate spans shorter than the required duration are dropped during
//! the pass, so the output needs no post-filtering.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schedule::{OpeningHours, PartySchedule};
use crate::weektime::{self, WeekMinute, MINUTES_PER_DAY, MINUTES_PER_WEEK};

/// How many leading weekdays the venue hours cover by default.
pub const DEFAULT_OPEN_DAYS: usize = 3;

/// Availability assumed for a person outside their declared busy spans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Baseline {
    /// Free wherever no declared span covers the instant.
    #[default]
    Free,
    /// A party that declared no spans at all is never available; a missing
    /// schedule is treated as an input, not as consent. Parties with at
    /// least one span keep their declared meaning.
    Busy,
}

/// Sweep parameters beyond the required duration.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Weekdays (Monday-first) the venue hours replicate over.
    pub open_days: usize,
    /// Baseline availability for people.
    pub baseline: Baseline,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            open_days: DEFAULT_OPEN_DAYS,
            baseline: Baseline::Free,
        }
    }
}

/// A maximal span where every party is simultaneously available.
///
/// Produced ordered by `start` and non-overlapping; `end - start` is at
/// least the duration the sweep was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: WeekMinute,
    pub end: WeekMinute,
}

impl Slot {
    pub fn duration_minutes(&self) -> i32 {
        self.end - self.start
    }
}

/// One transition boundary on the shared timeline.
///
/// `delta = +1` begins the party's unavailability, `-1` ends it. The
/// venue's synthetic schedule carries the flipped sign already: its open
/// boundary emits `-1`, so being within hours reads as free.
#[derive(Debug, Clone, Copy)]
struct SweepEvent {
    time: WeekMinute,
    party: usize,
    delta: i32,
}

/// Compute all meeting slots with default options.
pub fn find_slots(
    parties: &[PartySchedule],
    hours: &OpeningHours,
    min_duration: i32,
) -> Result<Vec<Slot>> {
    find_slots_with(parties, hours, min_duration, &SweepOptions::default())
}

/// Compute all meeting slots.
///
/// Every time string is parsed while the event list is built, so a
/// malformed string fails the call before any sweep state exists. A span
/// of exactly `min_duration` minutes qualifies.
pub fn find_slots_with(
    parties: &[PartySchedule],
    hours: &OpeningHours,
    min_duration: i32,
    options: &SweepOptions,
) -> Result<Vec<Slot>> {
    let venue = parties.len();
    let mut events = Vec::new();

    for (party, schedule) in parties.iter().enumerate() {
        for span in &schedule.busy {
            events.push(SweepEvent {
                time: weektime::parse_week_minute(&span.from)?,
                party,
                delta: 1,
            });
            events.push(SweepEvent {
                time: weektime::parse_week_minute(&span.to)?,
                party,
                delta: -1,
            });
        }
        if options.baseline == Baseline::Busy && schedule.busy.is_empty() {
            // Occupied before any real event and never released.
            events.push(SweepEvent {
                time: -MINUTES_PER_WEEK,
                party,
                delta: 1,
            });
        }
    }

    // The venue starts closed at a point guaranteed to precede every real
    // event (timezone normalization reaches back 99 hours at most); each
    // open span then lifts its counter back to zero for the open hours.
    events.push(SweepEvent {
        time: -MINUTES_PER_WEEK,
        party: venue,
        delta: 1,
    });
    let open = weektime::parse_clock(&hours.from)?;
    let close = weektime::parse_clock(&hours.to)?;
    for day in 0..options.open_days {
        let base = day as i32 * MINUTES_PER_DAY;
        events.push(SweepEvent {
            time: base + open.minute,
            party: venue,
            delta: -1,
        });
        events.push(SweepEvent {
            time: base + close.minute,
            party: venue,
            delta: 1,
        });
    }

    // Time ascending, delta descending on ties: a span beginning at the
    // same instant another ends is processed begin-first, so contiguous
    // coverage never reads as a gap and a touching pair never reads as
    // free.
    events.sort_by(|a, b| a.time.cmp(&b.time).then(b.delta.cmp(&a.delta)));

    let mut counters = vec![0i32; venue + 1];
    let mut blocked = 0usize;
    let mut active = true;
    let mut candidate: Option<WeekMinute> = None;
    let mut slots = Vec::new();

    for event in &events {
        let counter = &mut counters[event.party];
        let was_blocked = *counter > 0;
        *counter += event.delta;
        let is_blocked = *counter > 0;
        if is_blocked != was_blocked {
            if is_blocked {
                blocked += 1;
            } else {
                blocked -= 1;
            }
        }

        let now_active = blocked == 0;
        if active && !now_active {
            if let Some(start) = candidate {
                if event.time - start >= min_duration {
                    slots.push(Slot {
                        start,
                        end: event.time,
                    });
                }
            }
            candidate = None;
        } else if !active && now_active {
            candidate = Some(event.time);
        }
        active = now_active;
    }

    // The venue counter ends at 1 (its last event is a close or the
    // sentinel), so the sweep always finishes inactive and no candidate
    // can leak past the end.
    Ok(slots)
}
