//! Run reporting: phases, statistics, and console output.
//!
//! The importer talks to a [`Reporter`] rather than stdout directly, so the
//! pipeline can run silently under test.

/// Sequential phases of an import run, shown as numbered steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Reading,
    Connecting,
    Checking,
    Importing,
    Reporting,
}

impl Phase {
    /// 1-based step number for the `[n/5]` banner
    pub fn step(&self) -> usize {
        match self {
            Phase::Reading => 1,
            Phase::Connecting => 2,
            Phase::Checking => 3,
            Phase::Importing => 4,
            Phase::Reporting => 5,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Reading => write!(f, "Reading Excel file..."),
            Phase::Connecting => write!(f, "Connecting to database..."),
            Phase::Checking => write!(f, "Checking existing units..."),
            Phase::Importing => write!(f, "Importing units..."),
            Phase::Reporting => write!(f, "Import completed!"),
        }
    }
}

/// Number of row failures echoed to the console as they happen
pub const LIVE_ERROR_LIMIT: usize = 10;

/// The final summary lists the accumulated errors only when there are at most
/// this many of them
pub const ERROR_DISPLAY_LIMIT: usize = 20;

/// Counters and diagnostics accumulated over one run
#[derive(Debug, Default, Clone)]
pub struct RunStats {
    pub total: usize,
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Skip and failure diagnostics, in row order
    pub errors: Vec<String>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_skipped(&mut self, diagnostic: String) {
        self.skipped += 1;
        self.errors.push(diagnostic);
    }

    pub fn record_failed(&mut self, diagnostic: String) {
        self.failed += 1;
        self.errors.push(diagnostic);
    }
}

/// Trait for run output - allows both console and silent/test modes
pub trait Reporter {
    fn phase(&mut self, phase: Phase);
    fn info(&mut self, message: impl Into<String>);
    /// A row-level failure diagnostic, echoed as it happens
    fn row_error(&mut self, message: &str);
    /// Checkpoint progress line; `total` is the overall source row count
    fn progress(&mut self, stats: &RunStats, total: usize);
    fn summary(&mut self, stats: &RunStats);
}

/// Prints the fixed-format report the importer is expected to produce
#[derive(Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn phase(&mut self, phase: Phase) {
        println!("\n[{}/5] {}", phase.step(), phase);
    }

    fn info(&mut self, message: impl Into<String>) {
        println!("   {}", message.into());
    }

    fn row_error(&mut self, message: &str) {
        println!("   [ERROR] {}", message);
    }

    fn progress(&mut self, stats: &RunStats, total: usize) {
        let percent = if total == 0 {
            0.0
        } else {
            stats.total as f64 / total as f64 * 100.0
        };
        println!(
            "   [PROGRESS] {}/{} ({:.1}%) - {} success, {} skipped, {} failed",
            stats.total, total, percent, stats.success, stats.skipped, stats.failed
        );
    }

    fn summary(&mut self, stats: &RunStats) {
        println!("{}", "=".repeat(80));
        println!("Import Statistics:");
        println!("{}", "=".repeat(80));
        println!("  Total rows processed:       {}", stats.total);
        println!("  [OK] Successfully imported: {}", stats.success);
        println!("  [SKIP] Skipped:             {}", stats.skipped);
        println!("  [FAIL] Failed:              {}", stats.failed);
        println!("{}", "=".repeat(80));

        if !stats.errors.is_empty() && stats.errors.len() <= ERROR_DISPLAY_LIMIT {
            println!("\nErrors:");
            for error in &stats.errors {
                println!("  - {}", error);
            }
        }
    }
}

/// Silent reporter for testing and non-interactive use
#[derive(Default)]
pub struct SilentReporter;

impl SilentReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentReporter {
    fn phase(&mut self, _phase: Phase) {}
    fn info(&mut self, _message: impl Into<String>) {}
    fn row_error(&mut self, _message: &str) {}
    fn progress(&mut self, _stats: &RunStats, _total: usize) {}
    fn summary(&mut self, _stats: &RunStats) {}
}
