use chrono::{DateTime, Local, TimeDelta};

use crate::core::invoke::PredictorExit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Succeeded,
    /// Carries the exit code this process should terminate with.
    Crashed { code: i32 },
}

impl From<PredictorExit> for RunOutcome {
    fn from(exit: PredictorExit) -> Self {
        if exit.success() {
            RunOutcome::Succeeded
        } else {
            RunOutcome::Crashed { code: exit.code() }
        }
    }
}

/// Closing summary printed once the predictor stage is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub elapsed: TimeDelta,
}

impl RunReport {
    pub fn new(outcome: RunOutcome, elapsed: TimeDelta) -> Self {
        Self { outcome, elapsed }
    }

    pub fn since(outcome: RunOutcome, started: DateTime<Local>) -> Self {
        Self::new(outcome, Local::now() - started)
    }

    pub fn exit_code(&self) -> i32 {
        match self.outcome {
            RunOutcome::Succeeded => 0,
            RunOutcome::Crashed { code } => code,
        }
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let how = match self.outcome {
            RunOutcome::Succeeded => "successfully",
            RunOutcome::Crashed { .. } => "and then crashed",
        };
        write!(
            f,
            "BIBSnet for this subject took this long to run {}: {}",
            how,
            format_elapsed(self.elapsed)
        )
    }
}

/// `H:MM:SS[.ffffff]`, fractional part only when non-zero. Negative spans clamp to zero.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let elapsed = elapsed.max(TimeDelta::zero());
    let secs = elapsed.num_seconds();
    let micros = elapsed.subsec_nanos() / 1_000;
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if micros == 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros)
    }
}
