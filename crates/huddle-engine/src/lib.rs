//! # huddle-engine
//!
//! Weekly free/busy intersection for meeting planning.
//!
//! Given busy spans for any number of parties plus one venue's opening
//! hours, the engine computes every maximal window of the 7-day cycle in
//! which all of them are simultaneously available for a required duration,
//! then lets the caller walk candidate start times through a cursor in
//! fixed 30-minute steps.
//!
//! ## Modules
//!
//! - [`weektime`] — time string codec over the integer week-minute timeline
//! - [`schedule`] — party busy spans and venue opening hours
//! - [`sweep`] — sweep-line computation of available slots
//! - [`cursor`] — stateful walk over the computed slots
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use huddle_engine::{plan_meeting, BusySpan, OpeningHours, PartySchedule};
//!
//! let parties = vec![PartySchedule {
//!     party_id: "ada".into(),
//!     busy: vec![BusySpan {
//!         from: "ПН 12:00+5".into(),
//!         to: "ПН 17:00+5".into(),
//!     }],
//! }];
//! let hours = OpeningHours {
//!     from: "10:00+5".into(),
//!     to: "18:00+5".into(),
//! };
//!
//! let mut moment = plan_meeting(&parties, &hours, 60)?;
//! assert!(moment.exists());
//! assert_eq!(moment.format("%DD %HH:%MM"), "ПН 10:00");
//! assert!(moment.try_later());
//! # Ok::<(), huddle_engine::HuddleError>(())
//! ```

pub mod cursor;
pub mod error;
pub mod schedule;
pub mod sweep;
pub mod weektime;

pub use cursor::{plan_meeting, plan_meeting_with, SlotCursor, DEFAULT_STEP_MINUTES};
pub use error::HuddleError;
pub use schedule::{BusySpan, OpeningHours, PartySchedule};
pub use sweep::{find_slots, find_slots_with, Baseline, Slot, SweepOptions, DEFAULT_OPEN_DAYS};
pub use weektime::{
    format_week_minute, parse_week_minute, WeekMinute, DAY_CODES, MINUTES_PER_DAY,
    MINUTES_PER_WEEK,
};
