//! Fixed ANSI palette for the status display.
//!
//! The status banner and item lines are parsed by humans and compared
//! byte-for-byte in tests, so the escape sequences are spelled out literally
//! instead of going through a styling crate that may pick different SGR codes.
//!
//! # Public API
//! - Palette constants ([`RESET`], [`DIM`], [`BOLD`], and the six base colors)
//! - [`group_color`]: Color for a group's gutter and paths
//! - [`group_bold_color`]: Color for a group's header arrow
//! - [`state_color`]: Color for an item's status message

use crate::core::git_status::{ChangeState, StatusGroup};

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[2;37m";
pub const BOLD: &str = "\x1b[1m";

pub const RED: &str = "\x1b[0;31m";
pub const GREEN: &str = "\x1b[0;32m";
pub const YELLOW: &str = "\x1b[0;33m";
pub const BLUE: &str = "\x1b[0;34m";
pub const MAGENTA: &str = "\x1b[0;35m";
pub const CYAN: &str = "\x1b[0;36m";

const BOLD_RED: &str = "\x1b[1;31m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_YELLOW: &str = "\x1b[1;33m";
const BOLD_CYAN: &str = "\x1b[1;36m";

pub fn group_color(group: StatusGroup) -> &'static str {
    match group {
        StatusGroup::Staged => YELLOW,
        StatusGroup::Unmerged => RED,
        StatusGroup::Unstaged => GREEN,
        StatusGroup::Untracked => CYAN,
    }
}

pub fn group_bold_color(group: StatusGroup) -> &'static str {
    match group {
        StatusGroup::Staged => BOLD_YELLOW,
        StatusGroup::Unmerged => BOLD_RED,
        StatusGroup::Unstaged => BOLD_GREEN,
        StatusGroup::Untracked => BOLD_CYAN,
    }
}

pub fn state_color(state: ChangeState) -> &'static str {
    match state {
        ChangeState::New => YELLOW,
        ChangeState::Modified => GREEN,
        ChangeState::Deleted => RED,
        ChangeState::Untracked => CYAN,
        ChangeState::Renamed => BLUE,
        ChangeState::Copied => YELLOW,
        ChangeState::TypeChanged => MAGENTA,
    }
}
