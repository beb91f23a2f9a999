//! Subprocess adapter spawning one external process per job.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::dispatch::{DispatchError, JobSpec};

use super::{JobError, JobRunner};

/// Runs each job by spawning a configured external command.
///
/// The command prefix (program plus leading arguments) comes from
/// configuration; each invocation appends five arguments in a fixed order:
/// ticker, output file path, start date, end date, lookback window length.
#[derive(Debug, Clone)]
pub struct SubprocessRunner {
    program: String,
    base_args: Vec<String>,
}

impl SubprocessRunner {
    /// Create a runner from a command prefix.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::EmptyJobCommand` when `command` is empty.
    pub fn new(command: &[String]) -> Result<Self, DispatchError> {
        let (program, base_args) = command
            .split_first()
            .ok_or(DispatchError::EmptyJobCommand)?;

        Ok(Self {
            program: program.clone(),
            base_args: base_args.to_vec(),
        })
    }

    /// Program this runner spawns.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl JobRunner for SubprocessRunner {
    fn run(&self, job: &JobSpec) -> Result<(), JobError> {
        debug!(
            program = %self.program,
            ticker = %job.ticker,
            output = %job.output_path.display(),
            "Spawning job process"
        );

        let status = Command::new(&self.program)
            .args(&self.base_args)
            .arg(&job.ticker)
            .arg(&job.output_path)
            .arg(job.start_iso())
            .arg(job.end_iso())
            .arg(job.lookback_window.to_string())
            .stdin(Stdio::null())
            .status()
            .map_err(|e| JobError::Launch {
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(JobError::Failed { code }),
                None => Err(JobError::Terminated),
            }
        }
    }
}
