//! WASM bindings for huddle-engine.
//!
//! Exposes slot search and bookable start times to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p huddle-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/huddle_engine_wasm.wasm
//! ```

use huddle_engine::{OpeningHours, PartySchedule};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for plans passed from JavaScript: everybody's busy spans
/// plus the venue opening hours.
#[derive(Deserialize)]
struct PlanInput {
    parties: Vec<PartySchedule>,
    hours: OpeningHours,
}

#[derive(Serialize)]
struct SlotDto {
    start: i32,
    end: i32,
    starts_at: String,
}

/// Parse a JSON plan document into its schedule and hours parts.
fn parse_plan_json(json: &str) -> Result<PlanInput, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid plan JSON: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every window long enough for the meeting.
///
/// Returns a JSON string containing an array of `{start, end, starts_at}`
/// objects; `start` and `end` are raw week minutes (UTC, Monday origin) and
/// `starts_at` is the start rendered in the venue's timezone.
///
/// # Arguments
/// - `plan_json` -- JSON document with `parties` (party id plus busy spans)
///   and `hours` (venue opening hours, e.g., `"10:00+5"`)
/// - `min_duration` -- required meeting length in minutes
#[wasm_bindgen(js_name = "findSlots")]
pub fn find_slots(plan_json: &str, min_duration: i32) -> Result<String, JsValue> {
    let plan = parse_plan_json(plan_json)?;

    let tz_hours = plan
        .hours
        .timezone_hours()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let slots = huddle_engine::find_slots(&plan.parties, &plan.hours, min_duration)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let dtos: Vec<SlotDto> = slots
        .iter()
        .map(|s| SlotDto {
            start: s.start,
            end: s.end,
            starts_at: huddle_engine::format_week_minute(s.start, "%DD %HH:%MM", tz_hours),
        })
        .collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Render the earliest bookable start time through `template`.
///
/// Returns the formatted string, or an empty string when no window fits the
/// duration. `%DD`, `%HH` and `%MM` in the template are substituted with the
/// weekday code and zero-padded clock digits in the venue's timezone.
#[wasm_bindgen(js_name = "firstMoment")]
pub fn first_moment(
    plan_json: &str,
    min_duration: i32,
    template: &str,
) -> Result<String, JsValue> {
    let plan = parse_plan_json(plan_json)?;

    let cursor = huddle_engine::plan_meeting(&plan.parties, &plan.hours, min_duration)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(cursor.format(template))
}

/// Walk the candidate start times in half-hour strides.
///
/// Returns a JSON string containing an array of formatted start times, at
/// most `limit` of them, in strictly increasing time order. The array is
/// empty when no window fits the duration.
#[wasm_bindgen(js_name = "momentSequence")]
pub fn moment_sequence(
    plan_json: &str,
    min_duration: i32,
    template: &str,
    limit: u32,
) -> Result<String, JsValue> {
    let plan = parse_plan_json(plan_json)?;

    let mut cursor = huddle_engine::plan_meeting(&plan.parties, &plan.hours, min_duration)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let mut moments = Vec::new();
    while moments.len() < limit as usize {
        if cursor.current().is_none() {
            break;
        }
        moments.push(cursor.format(template));
        if !cursor.try_later() {
            break;
        }
    }

    serde_json::to_string(&moments)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
