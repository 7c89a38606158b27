use crate::core::{
    environment::{shell_escape, Evaluator},
    error::Result,
    expander::ArgExpander,
};
use std::io::{self, Write};

/// Expand shortcuts and print the shell-escaped, TAB-joined argv with no trailing newline.
pub fn execute_expand(args: Vec<String>, relative: bool) -> Result<()> {
    let line = expand_line(&args, relative);
    let mut stdout = io::stdout().lock();
    stdout.write_all(line.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

pub fn expand_line(args: &[String], relative: bool) -> String {
    let evaluator = Evaluator::new(relative);
    ArgExpander::from_env()
        .expand(args)
        .iter()
        .map(|token| shell_escape(&evaluator.evaluate(token)))
        .collect::<Vec<_>>()
        .join("\t")
}
