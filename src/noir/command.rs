use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error};

/// Captured output of a finished tool invocation
#[derive(Debug)]
pub(crate) struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs `cmd` with piped stdio so nothing reaches the parent's stdout.
///
/// Returns a printable failure description on spawn errors or non-zero exit.
pub(crate) async fn run_tool(name: &str, mut cmd: Command) -> Result<ToolOutput, String> {
    debug!("Running {}: {:?}", name, cmd);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());
    cmd.kill_on_drop(true);

    let result = cmd
        .output()
        .await
        .map_err(|e| format!("failed to run `{}`: {}", name, e))?;

    let output = ToolOutput {
        stdout: String::from_utf8_lossy(&result.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
    };

    if !result.status.success() {
        error!("`{}` exited with {}", name, result.status);
        debug!("{} stdout: {}", name, output.stdout);
        let detail = if output.stderr.trim().is_empty() {
            output.stdout.trim()
        } else {
            output.stderr.trim()
        };
        return Err(format!("`{}` exited with {}: {}", name, result.status, detail));
    }

    debug!("{} stdout: {}", name, output.stdout);
    debug!("{} stderr: {}", name, output.stderr);
    Ok(output)
}
