use std::process::ExitCode;

/// Process exit status for the xpot binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Extraction completed with no errors.
    Success,
    /// Extraction completed but some files were skipped with errors.
    Failure,
    /// The command itself failed to run.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
