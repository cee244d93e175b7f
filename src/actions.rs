//! Failure reporting through the GitHub Actions workflow-command channel.
use log::*;
use std::{env, io::Write};

/// Whether the process runs inside a GitHub Actions job.
pub fn is_actions_runner() -> bool {
    env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Escapes a message for use as workflow command data.
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Formats an `::error::` workflow command.
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

/// Marks the job step as failed with `message` when running under Actions.
/// Outside of Actions this is a no-op; the caller still logs the error and
/// exits with a failure status.
pub fn set_failed(message: &str, out: &mut impl Write) -> std::io::Result<()> {
    if is_actions_runner() {
        writeln!(out, "{}", error_command(message))?;
    }
    Ok(())
}

/// Reports a run failure exactly once: as a workflow command under Actions,
/// otherwise as an error log line. A failed write falls back to the log so
/// the run failure is never lost.
pub fn report_failure(message: &str, out: &mut impl Write) {
    if !is_actions_runner() {
        error!("{message}");
        return;
    }

    if let Err(err) = set_failed(message, out) {
        error!("{message}");
        warn!("unable to write workflow command: {err}");
    }
}
