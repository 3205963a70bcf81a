//! Run verdict and final exit status.

/// Exit status for a clean run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status for any failure.
pub const EXIT_FAILURE: i32 = 1;

/// Whether the probing phase failed.
///
/// Starts clean and can only be marked failed, never cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunVerdict {
    failed: bool,
}

impl RunVerdict {
    /// A clean verdict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run failed.
    pub fn mark_failed(&mut self) {
        self.failed = true;
    }

    /// Whether the run has been marked failed.
    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// Consume the verdict, combining it with the downstream failure count.
    pub fn finish(self, downstream_failures: usize) -> i32 {
        combine(self.failed, downstream_failures)
    }
}

/// Combine the probing verdict with the downstream failure count.
///
/// Zero iff the run did not fail and nothing downstream failed. The failure
/// count's magnitude does not change the status.
pub fn combine(run_failed: bool, downstream_failures: usize) -> i32 {
    if run_failed || downstream_failures > 0 {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}
