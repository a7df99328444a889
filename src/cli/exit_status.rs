use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// batch-reporting tools.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Command completed but found nothing to report
///   (e.g. `lookup` on a word absent from the dictionary)
/// - `Error` (2): Command failed due to an internal error (config error,
///   unreadable dataset, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_code_values() {
        // ExitCode has no PartialEq; compare through Debug
        for (status, code) in [
            (ExitStatus::Success, 0u8),
            (ExitStatus::Failure, 1),
            (ExitStatus::Error, 2),
        ] {
            assert_eq!(
                format!("{:?}", ExitCode::from(status)),
                format!("{:?}", ExitCode::from(code))
            );
        }
    }
}
