//! Schedule data model: party busy spans and venue opening hours.
//!
//! All fields hold raw time strings in the input grammar; parsing happens
//! inside the sweep so that construction fails atomically on the first
//! malformed string. The types derive serde traits so binding crates and
//! the CLI read them from JSON directly.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::weektime;

/// One busy interval, `"<day> HH:MM+TZ"` on both ends.
///
/// The owner is unavailable in `[from, to)`. Callers must supply spans
/// whose `from` is earlier than `to` once UTC-normalized; the engine does
/// not validate the ordering and the sweep result is unspecified when it
/// is violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusySpan {
    pub from: String,
    pub to: String,
}

/// Declared busy spans for one party.
///
/// Any number of parties may take part in a sweep; the venue constraint is
/// supplied separately as [`OpeningHours`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartySchedule {
    pub party_id: String,
    pub busy: Vec<BusySpan>,
}

/// Venue opening hours, day-less (`"10:00+5"`).
///
/// The same hours repeat over the leading weekdays of the planning range.
/// The offset on `from` doubles as the venue timezone used for all
/// formatted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub from: String,
    pub to: String,
}

impl OpeningHours {
    /// The venue's UTC offset in hours, parsed from the opening time.
    pub fn timezone_hours(&self) -> Result<i32> {
        weektime::parse_clock(&self.from).map(|clock| clock.tz_hours)
    }
}
