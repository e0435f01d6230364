//! Stateful walk over the slots a sweep produced.

use crate::error::Result;
use crate::schedule::{OpeningHours, PartySchedule};
use crate::sweep::{self, Slot, SweepOptions};
use crate::weektime::{self, WeekMinute};

/// Default advance step, in minutes.
pub const DEFAULT_STEP_MINUTES: i32 = 30;

/// Cursor over the slot sequence, earliest to latest, in fixed steps.
///
/// Built once after the sweep and mutated only by [`try_later`]; querying
/// an empty or exhausted cursor is an ordinary outcome, never an error.
/// Each caller owns its cursor; advancing one never affects another.
///
/// [`try_later`]: SlotCursor::try_later
#[derive(Debug, Clone)]
pub struct SlotCursor {
    slots: Vec<Slot>,
    index: usize,
    offset: i32,
    min_duration: i32,
    step: i32,
    tz_hours: i32,
}

impl SlotCursor {
    /// Wrap precomputed slots, advancing by the default 30-minute step.
    ///
    /// `tz_hours` is the timezone every formatted rendering uses, normally
    /// the venue's.
    pub fn new(slots: Vec<Slot>, min_duration: i32, tz_hours: i32) -> Self {
        Self::with_step(slots, min_duration, tz_hours, DEFAULT_STEP_MINUTES)
    }

    /// Wrap precomputed slots with an explicit advance step.
    pub fn with_step(slots: Vec<Slot>, min_duration: i32, tz_hours: i32, step: i32) -> Self {
        Self {
            slots,
            index: 0,
            offset: 0,
            min_duration,
            step,
            tz_hours,
        }
    }

    /// Whether any slot satisfied the required duration.
    pub fn exists(&self) -> bool {
        !self.slots.is_empty()
    }

    /// The current candidate start as a raw week minute.
    pub fn current(&self) -> Option<WeekMinute> {
        self.slots.get(self.index).map(|slot| slot.start + self.offset)
    }

    /// Render the current candidate start through `template` in the
    /// cursor's timezone, or an empty string when no slot exists.
    pub fn format(&self, template: &str) -> String {
        match self.current() {
            Some(minute) => weektime::format_week_minute(minute, template, self.tz_hours),
            None => String::new(),
        }
    }

    /// Shift the cursor one step later.
    ///
    /// Stays inside the current slot while the remainder after the shift
    /// still holds the required duration, then hops to the next slot's
    /// start. Once neither is possible it returns false and leaves the
    /// state unchanged; every later call keeps returning false. Candidate
    /// starts therefore come out in strictly increasing time order.
    pub fn try_later(&mut self) -> bool {
        let slot = match self.slots.get(self.index) {
            Some(slot) => slot,
            None => return false,
        };
        if slot.end - (slot.start + self.offset + self.step) >= self.min_duration {
            self.offset += self.step;
            return true;
        }
        if self.index + 1 < self.slots.len() {
            self.index += 1;
            self.offset = 0;
            return true;
        }
        false
    }
}

/// Run the whole pipeline once and wrap the result in a cursor.
///
/// Parsing, the sweep, and the venue timezone lookup all happen here,
/// eagerly; afterwards every cursor query is O(1). A malformed time string
/// fails the call before a cursor exists.
pub fn plan_meeting(
    parties: &[PartySchedule],
    hours: &OpeningHours,
    min_duration: i32,
) -> Result<SlotCursor> {
    plan_meeting_with(
        parties,
        hours,
        min_duration,
        &SweepOptions::default(),
        DEFAULT_STEP_MINUTES,
    )
}

/// [`plan_meeting`] with explicit sweep options and advance step.
pub fn plan_meeting_with(
    parties: &[PartySchedule],
    hours: &OpeningHours,
    min_duration: i32,
    options: &SweepOptions,
    step: i32,
) -> Result<SlotCursor> {
    let tz_hours = hours.timezone_hours()?;
    let slots = sweep::find_slots_with(parties, hours, min_duration, options)?;
    Ok(SlotCursor::with_step(slots, min_duration, tz_hours, step))
}
