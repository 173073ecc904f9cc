//! Command execution utilities

use crate::error::{Result, SysgrabError};
use crate::utils::file::select_line;
use crate::utils::parsing::clean;
use std::process::{Command, Stdio};

/// Run a command and return the cleaned line of interest from its stdout.
///
/// Line selection follows [`read_file`](crate::utils::file::read_file): the
/// first line matching `lookup`, or the first line when no lookup is given.
/// The child is always waited on before returning.
pub fn read_command(
    program: &str,
    args: &[&str],
    lookup: Option<&str>,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    let stdout = run_command(program, args)?;
    let line = select_line(stdout.as_slice(), lookup)?;

    Ok(line
        .map(|l| clean(&l, prefix, suffix))
        .unwrap_or_default())
}

/// Execute a command and return its raw stdout
pub fn run_command(program: &str, args: &[&str]) -> Result<Vec<u8>> {
    let command_line = || std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| SysgrabError::CommandFailed {
            command: command_line(),
            reason: e.to_string(),
        })?;

    if output.status.success() {
        Ok(output.stdout)
    } else {
        Err(SysgrabError::CommandFailed {
            command: command_line(),
            reason: format!("exit code {:?}", output.status.code()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_line_of_stdout() {
        let out = read_command("sh", &["-c", "printf 'first  \\nsecond\\n'"], None, None, None).unwrap();
        assert_eq!(out, "first");
    }

    #[test]
    fn lookup_in_stdout() {
        let script = "printf 'Architecture: x86_64\\nCPU(s):   8\\nModel name:   Some CPU\\n'";
        let threads = read_command("sh", &["-c", script], Some("CPU(s):"), Some("CPU(s): "), None).unwrap();
        assert_eq!(threads, "8");
        let missing = read_command("sh", &["-c", script], Some("CPU max MHz"), None, None).unwrap();
        assert_eq!(missing, "");
    }

    #[test]
    fn missing_program_is_command_failed() {
        let err = read_command("definitely-not-a-real-program-sysgrab", &[], None, None, None).unwrap_err();
        assert!(matches!(err, SysgrabError::CommandFailed { .. }));
    }

    #[test]
    fn unsuccessful_exit_is_command_failed() {
        let err = run_command("sh", &["-c", "exit 3"]).unwrap_err();
        assert!(matches!(err, SysgrabError::CommandFailed { .. }));
    }
}
