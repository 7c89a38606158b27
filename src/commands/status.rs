use crate::core::{
    error::Result,
    git::GitCli,
    porcelain::PorcelainParser,
    render::{RenderOptions, Renderer},
};
use log::debug;
use std::io;

/// Run `git status`, parse the porcelain stream and print the numbered display.
pub fn execute_status(options: RenderOptions) -> Result<()> {
    let git = GitCli::from_env()?;
    let root = git.project_root()?;
    let output = git.status_output()?;

    let info = PorcelainParser::parse(&output)?;
    debug!(
        "Rendering {} items (filelist: {}, display: {})",
        info.items.len(),
        options.include_filelist,
        options.include_display
    );

    let renderer = Renderer::new(info, root, git.cwd());
    renderer.display(io::stdout().lock(), options)
}
