//! `huddle` CLI — find when everybody can meet, from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List every slot that fits 90 minutes (plan JSON on stdin)
//! cat plan.json | huddle slots --duration 90
//!
//! # Same, from file to file, as JSON
//! huddle slots -i plan.json -o slots.json --duration 90 --json
//!
//! # First bookable start time, formatted
//! huddle moment -i plan.json --duration 90
//!
//! # Third candidate start, stepping in 15-minute strides
//! huddle moment -i plan.json --duration 90 --later 2 --step 15
//!
//! # Russian sentence template
//! huddle moment -i plan.json -d 60 -t "Метим на %DD, старт в %HH:%MM!"
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use huddle_engine::{
    find_slots_with, format_week_minute, plan_meeting_with, OpeningHours, PartySchedule, Slot,
    SweepOptions, DEFAULT_OPEN_DAYS, DEFAULT_STEP_MINUTES,
};
use serde::Deserialize;
use std::io::{self, Read};
use std::process;

/// Input document: everybody's busy spans plus the venue hours.
#[derive(Deserialize)]
struct Plan {
    parties: Vec<PartySchedule>,
    hours: OpeningHours,
}

#[derive(Parser)]
#[command(name = "huddle", version, about = "Find when everybody can meet")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every window long enough for the meeting
    Slots {
        /// Input plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i32,
        /// How many weekdays of venue hours to consider, starting Monday
        #[arg(long, default_value_t = DEFAULT_OPEN_DAYS)]
        open_days: usize,
        /// Emit the slots as a JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print one bookable start time
    Moment {
        /// Input plan file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: i32,
        /// Template for the start time; %DD, %HH and %MM are substituted
        #[arg(short, long, default_value = "%DD %HH:%MM")]
        template: String,
        /// Skip this many earlier candidate starts
        #[arg(long, default_value_t = 0)]
        later: u32,
        /// Stride between candidate starts, in minutes
        #[arg(long, default_value_t = DEFAULT_STEP_MINUTES)]
        step: i32,
        /// How many weekdays of venue hours to consider, starting Monday
        #[arg(long, default_value_t = DEFAULT_OPEN_DAYS)]
        open_days: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            input,
            output,
            duration,
            open_days,
            json,
        } => {
            let plan = read_plan(input.as_deref())?;
            let options = SweepOptions {
                open_days,
                ..SweepOptions::default()
            };
            let slots = find_slots_with(&plan.parties, &plan.hours, duration, &options)
                .context("Failed to compute slots")?;

            let rendered = if json {
                serde_json::to_string_pretty(&slots)?
            } else {
                render_slots(&slots, &plan.hours)?
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Moment {
            input,
            duration,
            template,
            later,
            step,
            open_days,
        } => {
            let plan = read_plan(input.as_deref())?;
            let options = SweepOptions {
                open_days,
                ..SweepOptions::default()
            };
            let mut cursor =
                plan_meeting_with(&plan.parties, &plan.hours, duration, &options, step)
                    .context("Failed to compute slots")?;

            if !cursor.exists() {
                eprintln!("No slot fits {} minutes", duration);
                process::exit(1);
            }
            for _ in 0..later {
                if !cursor.try_later() {
                    eprintln!("No later start available");
                    process::exit(1);
                }
            }
            println!("{}", cursor.format(&template));
        }
    }

    Ok(())
}

/// One line per slot, start and end rendered in the venue's timezone.
fn render_slots(slots: &[Slot], hours: &OpeningHours) -> Result<String> {
    let tz = hours.timezone_hours()?;
    if slots.is_empty() {
        return Ok("No common slots\n".to_string());
    }
    let lines: Vec<String> = slots
        .iter()
        .map(|slot| {
            format!(
                "{} .. {} ({} min)",
                format_week_minute(slot.start, "%DD %HH:%MM", tz),
                format_week_minute(slot.end, "%DD %HH:%MM", tz),
                slot.duration_minutes()
            )
        })
        .collect();
    Ok(lines.join("\n") + "\n")
}

fn read_plan(path: Option<&str>) -> Result<Plan> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse plan JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
