//! MySQL persistence and run orchestration.

use anyhow::{Context, Result};
use chrono::Local;
use log::debug;
use mysql::prelude::Queryable;
use mysql::{Conn, TxOpts};
use std::path::Path;

use crate::config::DbConfig;
use crate::report::{Phase, Reporter, RunStats, LIVE_ERROR_LIMIT};
use crate::schema::{column_names, UNITS};
use crate::source::{read_units, SourceRow};
use crate::transform::{transform_row, RowOutcome};

/// Processed rows per commit checkpoint
pub const COMMIT_INTERVAL: usize = 100;

/// Holds the single database connection for the whole run
pub struct UnitWriter {
    conn: Conn,
    insert_sql: String,
}

impl UnitWriter {
    pub fn connect(config: &DbConfig) -> Result<Self> {
        let conn = Conn::new(config.opts()).context("Failed to connect to database")?;
        debug!("connected to {} on {}:{}", config.database, config.host, config.port);

        let columns = column_names(&UNITS);
        let placeholders = vec!["?"; columns.len()].join(", ");
        let insert_sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            UNITS.name,
            columns.join(", "),
            placeholders
        );

        Ok(Self { conn, insert_sql })
    }

    /// Count of rows already in the table. Informational only; the importer
    /// does not detect duplicates.
    pub fn existing_count(&mut self) -> Result<u64> {
        let count: Option<u64> = self
            .conn
            .query_first("SELECT COUNT(*) FROM units")
            .context("Failed to count existing units")?;
        Ok(count.unwrap_or(0))
    }

    /// Import all rows in source order, committing every [`COMMIT_INTERVAL`]
    /// processed rows and once more for the final partial chunk.
    ///
    /// Row-level problems (unmapped project, bad cell, insert error) are
    /// recorded in the stats and never abort the run; only connection-level
    /// failures propagate. Skips and failures count toward the checkpoint
    /// boundary just like successful inserts.
    pub fn import(&mut self, rows: &[SourceRow], reporter: &mut impl Reporter) -> Result<RunStats> {
        let mut stats = RunStats::new();
        let now = Local::now().naive_local();

        for chunk in rows.chunks(COMMIT_INTERVAL) {
            let mut tx = self
                .conn
                .start_transaction(TxOpts::default())
                .context("Failed to start transaction")?;

            for row in chunk {
                stats.total += 1;

                match transform_row(row) {
                    RowOutcome::Unit(unit) => {
                        match tx.exec_drop(&self.insert_sql, unit.insert_values(now)) {
                            Ok(()) => stats.record_success(),
                            Err(e) => record_failure(
                                &mut stats,
                                reporter,
                                format!("Row {}: {}", row.row_number, e),
                            ),
                        }
                    }
                    RowOutcome::Skipped(diagnostic) => stats.record_skipped(diagnostic),
                    RowOutcome::Failed(diagnostic) => {
                        record_failure(&mut stats, reporter, diagnostic)
                    }
                }
            }

            tx.commit().context("Failed to commit batch")?;
            debug!("committed at {} rows", stats.total);

            if chunk.len() == COMMIT_INTERVAL {
                reporter.progress(&stats, rows.len());
            }
        }

        Ok(stats)
    }
}

fn record_failure(stats: &mut RunStats, reporter: &mut impl Reporter, diagnostic: String) {
    stats.record_failed(diagnostic.clone());
    if stats.failed <= LIVE_ERROR_LIMIT {
        reporter.row_error(&diagnostic);
    }
}

/// Run the whole import: read the spreadsheet, connect, import, report.
///
/// Reading and connecting failures are fatal and propagate to the caller; the
/// connection is released on every exit path.
pub fn run_import(input: &Path, config: &DbConfig, reporter: &mut impl Reporter) -> Result<RunStats> {
    reporter.phase(Phase::Reading);
    let rows = read_units(input)?;
    reporter.info(format!("[OK] Loaded {} units from {}", rows.len(), input.display()));

    reporter.phase(Phase::Connecting);
    let mut writer = UnitWriter::connect(config)?;
    reporter.info(format!("[OK] Connected to {}", config.database));

    reporter.phase(Phase::Checking);
    let existing = writer.existing_count()?;
    reporter.info(format!("[INFO] Found {} existing units", existing));

    reporter.phase(Phase::Importing);
    let stats = writer.import(&rows, reporter)?;

    reporter.phase(Phase::Reporting);
    reporter.summary(&stats);

    Ok(stats)
}
