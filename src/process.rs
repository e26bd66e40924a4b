use eyre::{Context, Result};
use log::{debug, error, info};
use std::process::Command;

/// Run a command to completion and mirror its captured output into the log.
///
/// Stdout is logged at info level whenever non-empty; stderr is logged at
/// error level when the command fails. Returns the command's exit code, -1 if
/// it was terminated without one.
pub fn run_logged(cmd: &mut Command) -> Result<i32> {
    let rendered = render(cmd);
    debug!("Running: {rendered}");

    let output = cmd
        .output()
        .context(format!("Failed to run {rendered}"))?;

    let stdout = decode_ascii(&output.stdout)
        .context(format!("stdout of `{rendered}` was not plain text"))?;
    if !stdout.is_empty() {
        info!("{}", stdout.trim_end());
    }

    let code = output.status.code().unwrap_or(-1);
    if !output.status.success() {
        // Stderr is only decoded on the failure path.
        let stderr = decode_ascii(&output.stderr)
            .context(format!("stderr of `{rendered}` was not plain text"))?;
        error!("`{rendered}` failed with exit code {code}: {}", stderr.trim_end());
    }

    Ok(code)
}

/// Subprocess output is expected to be plain ASCII text; anything else is an
/// error rather than being replaced or passed through.
fn decode_ascii(bytes: &[u8]) -> Result<String> {
    if !bytes.is_ascii() {
        return Err(eyre::eyre!("output contains non-ASCII bytes"));
    }
    Ok(String::from_utf8_lossy(bytes).into_owned())
}

fn render(cmd: &Command) -> String {
    let mut rendered = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }
    rendered
}
