use crate::core::{
    environment::Evaluator,
    error::{Result, ScmpuffError},
    expander::ArgExpander,
};
use log::debug;
use std::process::{Command, ExitStatus};

/// Expand shortcuts, run the resulting command with inherited stdio and
/// return its exit code.
pub fn execute_exec(args: Vec<String>, relative: bool) -> Result<i32> {
    let evaluator = Evaluator::new(relative);
    let argv: Vec<String> = ArgExpander::from_env()
        .expand(&args)
        .iter()
        .map(|token| evaluator.evaluate(token))
        .collect();

    let (program, rest) = argv.split_first().ok_or(ScmpuffError::EmptyCommand)?;
    debug!("Executing {program} {rest:?}");

    let status = Command::new(program)
        .args(rest)
        .status()
        .map_err(|e| ScmpuffError::exec_failed(program, e))?;
    Ok(exit_code(status))
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
