//! Status display rendering.
//!
//! [`Renderer`] orders a [`StatusInfo`] by group, assigns display numbers and
//! writes two kinds of output:
//!
//! - **Filelist**: one TAB-separated line of absolute paths in display order,
//!   read by the shell integration to export `e1`, `e2`, ...
//! - **Display**: the colored banner, group headers and numbered items.
//!
//! Both are capped at [`MAX_SHORTCUT_FILES`] items; anything beyond is
//! reported in a trailer line.
//!
//! # Public API
//! - [`Renderer`]: Groups items and writes output
//! - [`RenderOptions`]: Selects filelist and/or display output
//! - [`MAX_SHORTCUT_FILES`]: Shortcut cap

use crate::core::colors::{
    group_bold_color, group_color, state_color, BOLD, DIM, GREEN, RESET, YELLOW,
};
use crate::core::error::Result;
use crate::core::git_status::StatusGroup;
use crate::core::state::{BranchInfo, StatusInfo, StatusItem};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Upper bound on numbered items, keeping exported variables under ARG_MAX.
pub const MAX_SHORTCUT_FILES: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_filelist: bool,
    pub include_display: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_filelist: true,
            include_display: true,
        }
    }
}

pub struct Renderer {
    branch: BranchInfo,
    groups: [Vec<StatusItem>; 4],
    root: PathBuf,
    cwd: PathBuf,
}

impl Renderer {
    /// Build a renderer; `root` and `cwd` are used to compute displayed paths.
    pub fn new(info: StatusInfo, root: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        let mut groups: [Vec<StatusItem>; 4] = Default::default();
        for item in info.items {
            groups[item.change_type.group().index()].push(item);
        }
        Self {
            branch: info.branch,
            groups,
            root: root.into(),
            cwd: cwd.into(),
        }
    }

    /// Total items across all groups, including any beyond the cap.
    pub fn num_items(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// True when the working tree has no changes to number.
    pub fn is_clean(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    /// Items in display order, truncated to [`MAX_SHORTCUT_FILES`].
    pub fn ordered_items(&self) -> impl Iterator<Item = &StatusItem> {
        self.groups
            .iter()
            .flat_map(|items| items.iter())
            .take(MAX_SHORTCUT_FILES)
    }

    /// Machine-readable filelist line, without the trailing newline.
    pub fn filelist(&self) -> String {
        self.ordered_items()
            .map(|item| item.abs_path(&self.root))
            .collect::<Vec<_>>()
            .join("\t")
    }

    /// Write the selected outputs to `w` through a buffer flushed once.
    pub fn display<W: Write>(&self, w: W, options: RenderOptions) -> Result<()> {
        let mut out = BufWriter::new(w);

        if options.include_filelist {
            writeln!(out, "{}", self.filelist())?;
        }
        if options.include_display {
            self.write_display(&mut out)?;
        }

        out.flush()?;
        Ok(())
    }

    fn write_display<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.banner())?;

        let mut number = 1;
        for group in StatusGroup::ORDERED {
            let remaining = (MAX_SHORTCUT_FILES + 1).saturating_sub(number);
            let items = &self.groups[group.index()];
            if items.is_empty() || remaining == 0 {
                continue;
            }

            out.write_all(group_header(group).as_bytes())?;
            for item in items.iter().take(remaining) {
                out.write_all(self.item_line(item, number).as_bytes())?;
                number += 1;
            }
            out.write_all(group_footer(group).as_bytes())?;
        }

        let total = self.num_items();
        if total > MAX_SHORTCUT_FILES {
            writeln!(
                out,
                "... showing {MAX_SHORTCUT_FILES} of {total} files (use git directly for bulk operations)"
            )?;
        }
        Ok(())
    }

    fn banner(&self) -> String {
        let prelude = banner_prelude(&self.branch);
        if self.is_clean() {
            format!("{prelude}{GREEN}No changes (working directory clean){RESET}")
        } else {
            format!("{prelude}[{RESET}*{DIM}]{RESET} => $e*\n{DIM}#{RESET}")
        }
    }

    fn item_line(&self, item: &StatusItem, number: usize) -> String {
        let group = group_color(item.change_type.group());
        let state = state_color(item.change_type.state());
        let width = if item.change_type.group() == StatusGroup::Unmerged {
            15
        } else {
            10
        };
        let message = format!("{:>width$}", item.change_type.message());
        let padding = if number < 10 { " " } else { "" };
        let path = item.display_path(&self.root, &self.cwd);

        format!(
            "{group}#{RESET}     {state}{message}:{padding}{DIM} [{RESET}{number}{DIM}] {group}{path}{RESET}\n"
        )
    }
}

fn banner_prelude(branch: &BranchInfo) -> String {
    let divergence = branch
        .divergence()
        .map(|diff| format!("  {DIM}|  {YELLOW}{diff}{RESET}"))
        .unwrap_or_default();

    format!(
        "{DIM}#{RESET} On branch: {BOLD}{}{divergence}  {DIM}|  ",
        branch.name
    )
}

fn group_header(group: StatusGroup) -> String {
    format!(
        "{}➤{RESET} {}\n{}#{RESET}\n",
        group_bold_color(group),
        group.description(),
        group_color(group)
    )
}

fn group_footer(group: StatusGroup) -> String {
    format!("{}#{RESET}\n", group_color(group))
}
