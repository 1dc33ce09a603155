//! Schedule rendering.
//!
//! Writes a summary block followed by the day-by-day listing, either as
//! plain text or as JSON, to standard output or to a file. The file is
//! truncated on every run.
//!
//! # Text layout
//!
//! ```text
//! Summary of Coffee Buying Schedule:
//! Strategy: proportional
//! Total Plan Duration (visits): 68
//! Employee: Jim
//!  Visits planned: 6
//!  Store displayed price for preferred drink: $3.00
//!  Total paid: $204.00
//!  Price paid averaged over time: $3.00
//! ...
//!
//! --------Buying Schedule--------
//! Day 1: Black Panther buys coffee for the group.
//! ```
//!
//! A blank line follows every day whose number is a multiple of 10.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::allocation::Allocation;
use crate::error::PlannerError;
use crate::models::{Plan, PriceVector};

/// Where the user asked the schedule to go.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    #[default]
    Console,
    File,
}

/// Rendering format.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Resolved output target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Standard output.
    Console,
    /// A file, created or truncated.
    File(PathBuf),
}

impl OutputTarget {
    /// Resolves a destination choice against the configured file path.
    pub fn resolve(destination: Destination, file: impl Into<PathBuf>) -> Self {
        match destination {
            Destination::Console => OutputTarget::Console,
            Destination::File => OutputTarget::File(file.into()),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    roster: Vec<&'a str>,
    prices: &'a PriceVector,
    duration_days: u32,
    #[serde(flatten)]
    allocation: &'a Allocation,
}

/// Renders the summary block and day listing as text.
pub fn render_text<W: Write>(w: &mut W, plan: &Plan, allocation: &Allocation) -> io::Result<()> {
    writeln!(w, "Summary of Coffee Buying Schedule:")?;
    writeln!(w, "Strategy: {}", allocation.strategy)?;
    writeln!(w, "Total Plan Duration (visits): {}", plan.duration_days)?;
    for totals in &allocation.totals.participants {
        writeln!(w, "Employee: {}", plan.roster.name(totals.participant))?;
        writeln!(w, " Visits planned: {}", totals.visits)?;
        writeln!(
            w,
            " Store displayed price for preferred drink: ${:.2}",
            totals.listed_price
        )?;
        writeln!(w, " Total paid: ${:.2}", totals.total_paid)?;
        writeln!(w, " Price paid averaged over time: ${:.2}", totals.average_paid)?;
    }
    writeln!(w)?;
    writeln!(w, "--------Buying Schedule--------")?;

    for a in allocation.schedule.iter() {
        writeln!(
            w,
            "Day {}: {} buys coffee for the group.",
            a.day,
            plan.roster.name(a.participant)
        )?;
        if a.day % 10 == 0 {
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Renders the plan and allocation as pretty-printed JSON.
pub fn render_json<W: Write>(w: &mut W, plan: &Plan, allocation: &Allocation) -> io::Result<()> {
    let report = Report {
        roster: plan.roster.names(),
        prices: &plan.prices,
        duration_days: plan.duration_days,
        allocation,
    };
    serde_json::to_writer_pretty(&mut *w, &report)?;
    writeln!(w)
}

/// Renders in the requested format.
pub fn render<W: Write>(
    w: &mut W,
    format: OutputFormat,
    plan: &Plan,
    allocation: &Allocation,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(w, plan, allocation),
        OutputFormat::Json => render_json(w, plan, allocation),
    }
}

/// Writes the rendered schedule to its target.
pub fn write_schedule(
    target: &OutputTarget,
    format: OutputFormat,
    plan: &Plan,
    allocation: &Allocation,
) -> Result<(), PlannerError> {
    match target {
        OutputTarget::Console => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            render(&mut w, format, plan, allocation).map_err(PlannerError::Write)?;
            w.flush().map_err(PlannerError::Write)
        }
        OutputTarget::File(path) => {
            let io_err = |source: io::Error| PlannerError::Io {
                path: path.clone(),
                source,
            };
            let file = File::create(path).map_err(io_err)?;
            let mut w = BufWriter::new(file);
            render(&mut w, format, plan, allocation).map_err(io_err)?;
            w.flush().map_err(io_err)?;
            tracing::info!(path = %path.display(), "schedule written");
            Ok(())
        }
    }
}
