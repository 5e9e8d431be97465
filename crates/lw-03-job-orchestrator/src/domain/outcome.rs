//! Terminal job outcomes.

use shared_types::Matrix;
use std::fmt;

/// A finished multiplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub size: usize,
    /// Generation plus multiplication wall time
    pub elapsed_ms: u64,
    pub matrix: Matrix,
}

/// How a job ended.
///
/// `Display` renders the exact plain-text response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Completed(JobReport),
    /// Superseded (or disconnected) during or after computation.
    Cancelled,
    /// Oversize request released by cancellation.
    RejectedOversize,
    /// The compute task itself failed.
    Failed(String),
}

impl JobOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, JobOutcome::Cancelled | JobOutcome::RejectedOversize)
    }

    pub fn report(&self) -> Option<&JobReport> {
        match self {
            JobOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            JobOutcome::Completed(_) => "completed",
            JobOutcome::Cancelled => "cancelled",
            JobOutcome::RejectedOversize => "rejected_oversize",
            JobOutcome::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobOutcome::Completed(report) => {
                writeln!(
                    f,
                    "Matrix multiplication (size: {}) completed in {} milliseconds",
                    report.size, report.elapsed_ms
                )?;
                writeln!(f, "Resulting Matrix:")?;
                for row in 0..report.matrix.size() {
                    writeln!(f, "{}", report.matrix.render_row(row))?;
                }
                Ok(())
            }
            JobOutcome::Cancelled => writeln!(f, "Request was cancelled"),
            JobOutcome::RejectedOversize => {
                writeln!(f, "Request was cancelled due to large number")
            }
            JobOutcome::Failed(reason) => writeln!(f, "Request failed: {reason}"),
        }
    }
}
