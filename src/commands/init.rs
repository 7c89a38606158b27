use crate::core::{error::Result, shell_init::collection_for};

/// Print the integration script for `shell`.
pub fn execute_init(shell: &str, wrap_git: bool, include_aliases: bool) -> Result<()> {
    println!("{}", init_script(shell, wrap_git, include_aliases)?);
    Ok(())
}

pub fn init_script(shell: &str, wrap_git: bool, include_aliases: bool) -> Result<String> {
    Ok(collection_for(shell)?.output(wrap_git, include_aliases))
}
