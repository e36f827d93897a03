use super::Format;
use crate::{AppConfig, Overrides, Report};
use std::io::Write;
use tracing::{Level, event};

/// Simulates each of the given categories.
///
/// Every key is resolved to a scenario before any simulation starts, so an
/// unknown category or a bad override fails the whole batch up front. The
/// simulations then run on the blocking pool and all of them are awaited;
/// the reports come back in the order the keys were given.
pub async fn simulate(
    config: &AppConfig,
    keys: Vec<String>,
    overrides: &Overrides,
) -> anyhow::Result<Vec<Report>> {
    let scenarios = keys
        .iter()
        .map(|key| config.preset(key)?.scenario(&config.model, overrides))
        .collect::<Result<Vec<_>, _>>()?;

    let tasks = keys
        .into_iter()
        .zip(scenarios)
        .map(|(key, scenario)| {
            event!(Level::DEBUG, category = %key, "queueing simulation");
            tokio::task::spawn_blocking(move || Report::from_scenario(scenario))
        })
        .collect::<Vec<_>>();

    let mut outcomes = Vec::with_capacity(tasks.len());
    for task in tasks {
        outcomes.push(task.await);
    }

    let mut reports = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        reports.push(outcome??);
    }
    Ok(reports)
}

/// Writes a batch of reports, as text separated by blank lines or as JSON.
///
/// A single report is written as a JSON object, several as an array.
pub fn write_reports(
    reports: &[Report],
    format: Format,
    buffer: &mut impl Write,
) -> anyhow::Result<()> {
    match (format, reports) {
        (Format::Json, [report]) => serde_json::to_writer_pretty(&mut *buffer, report)?,
        (Format::Json, reports) => serde_json::to_writer_pretty(&mut *buffer, reports)?,
        (Format::Text, reports) => {
            for (i, report) in reports.iter().enumerate() {
                if i > 0 {
                    writeln!(buffer)?;
                }
                report.render(&mut *buffer)?;
            }
            return Ok(());
        }
    }
    writeln!(buffer)?;
    Ok(())
}
