//! Type-safe change-type taxonomy for git status entries.
//!
//! This module defines [`ChangeType`], a closed enumeration of every change a
//! porcelain v1 status entry can describe, together with a constant metadata
//! table carrying the display message, [`ChangeState`] and [`StatusGroup`] of
//! each member.
//!
//! # Public API
//! - [`ChangeType`]: The 17 change types (unmerged, staged, unstaged, untracked)
//! - [`ChangeState`]: Nature of a change, used for color selection
//! - [`StatusGroup`]: Display section a change belongs to
//!
//! # Decoding
//! The XY code tables below are the only place that maps porcelain letters to
//! change types. [`ChangeType::primary`] and [`ChangeType::secondary`] are the
//! two decoders run in order by the porcelain parser.

use std::fmt;

/// Every change type a porcelain v1 status entry can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeType {
    // Unmerged (conflicts)
    UnmergedDeletedBoth,
    UnmergedAddedUs,
    UnmergedDeletedThem,
    UnmergedAddedThem,
    UnmergedDeletedUs,
    UnmergedAddedBoth,
    UnmergedModifiedBoth,
    // Staged (index)
    StagedModified,
    StagedNewFile,
    StagedDeleted,
    StagedRenamed,
    StagedCopied,
    StagedTypeChange,
    // Unstaged (worktree)
    UnstagedModified,
    UnstagedDeleted,
    UnstagedTypeChange,
    // Untracked
    Untracked,
}

/// Nature of a change, independent of the staging area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeState {
    New,
    Modified,
    Deleted,
    Untracked,
    Renamed,
    Copied,
    TypeChanged,
}

/// Section a change is rendered under. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusGroup {
    Staged,
    Unmerged,
    Unstaged,
    Untracked,
}

struct ChangeTypeMetadata {
    message: &'static str,
    state: ChangeState,
    group: StatusGroup,
}

const fn meta(message: &'static str, state: ChangeState, group: StatusGroup) -> ChangeTypeMetadata {
    ChangeTypeMetadata {
        message,
        state,
        group,
    }
}

/// Indexed by `ChangeType as usize`; order must match the enum declaration.
static CHANGE_TYPE_DATA: [ChangeTypeMetadata; 17] = [
    meta("both deleted", ChangeState::Deleted, StatusGroup::Unmerged),
    meta("added by us", ChangeState::New, StatusGroup::Unmerged),
    meta("deleted by them", ChangeState::Deleted, StatusGroup::Unmerged),
    meta("added by them", ChangeState::New, StatusGroup::Unmerged),
    meta("deleted by us", ChangeState::Deleted, StatusGroup::Unmerged),
    meta("both added", ChangeState::New, StatusGroup::Unmerged),
    meta("both modified", ChangeState::Modified, StatusGroup::Unmerged),
    meta("modified", ChangeState::Modified, StatusGroup::Staged),
    meta("new file", ChangeState::New, StatusGroup::Staged),
    meta("deleted", ChangeState::Deleted, StatusGroup::Staged),
    meta("renamed", ChangeState::Renamed, StatusGroup::Staged),
    meta("copied", ChangeState::Copied, StatusGroup::Staged),
    meta("typechange", ChangeState::TypeChanged, StatusGroup::Staged),
    meta("modified", ChangeState::Modified, StatusGroup::Unstaged),
    meta("deleted", ChangeState::Deleted, StatusGroup::Unstaged),
    meta("typechange", ChangeState::TypeChanged, StatusGroup::Unstaged),
    meta("untracked", ChangeState::Untracked, StatusGroup::Untracked),
];

/// Two-letter codes that fully determine the change on their own.
const PRIMARY_DYADS: [(u8, u8, ChangeType); 8] = [
    (b'D', b'D', ChangeType::UnmergedDeletedBoth),
    (b'A', b'U', ChangeType::UnmergedAddedUs),
    (b'U', b'D', ChangeType::UnmergedDeletedThem),
    (b'U', b'A', ChangeType::UnmergedAddedThem),
    (b'D', b'U', ChangeType::UnmergedDeletedUs),
    (b'A', b'A', ChangeType::UnmergedAddedBoth),
    (b'U', b'U', ChangeType::UnmergedModifiedBoth),
    (b'?', b'?', ChangeType::Untracked),
];

/// Index (X) letters for staged changes.
const STAGED_CODES: [(u8, ChangeType); 6] = [
    (b'M', ChangeType::StagedModified),
    (b'A', ChangeType::StagedNewFile),
    (b'D', ChangeType::StagedDeleted),
    (b'R', ChangeType::StagedRenamed),
    (b'C', ChangeType::StagedCopied),
    (b'T', ChangeType::StagedTypeChange),
];

/// Worktree (Y) letters for unstaged changes, with the X letters that suppress
/// them. Deletions are hidden during a merge conflict.
const UNSTAGED_CODES: [(u8, &[u8], ChangeType); 3] = [
    (b'M', &[], ChangeType::UnstagedModified),
    (b'D', &[b'D', b'U'], ChangeType::UnstagedDeleted),
    (b'T', &[], ChangeType::UnstagedTypeChange),
];

impl ChangeType {
    /// All change types, in declaration order.
    pub const ALL: [ChangeType; 17] = [
        ChangeType::UnmergedDeletedBoth,
        ChangeType::UnmergedAddedUs,
        ChangeType::UnmergedDeletedThem,
        ChangeType::UnmergedAddedThem,
        ChangeType::UnmergedDeletedUs,
        ChangeType::UnmergedAddedBoth,
        ChangeType::UnmergedModifiedBoth,
        ChangeType::StagedModified,
        ChangeType::StagedNewFile,
        ChangeType::StagedDeleted,
        ChangeType::StagedRenamed,
        ChangeType::StagedCopied,
        ChangeType::StagedTypeChange,
        ChangeType::UnstagedModified,
        ChangeType::UnstagedDeleted,
        ChangeType::UnstagedTypeChange,
        ChangeType::Untracked,
    ];

    /// Primary decoder: unmerged dyads, untracked, then single-X staged codes.
    pub fn primary(x: u8, y: u8) -> Option<ChangeType> {
        PRIMARY_DYADS
            .iter()
            .find(|(dx, dy, _)| *dx == x && *dy == y)
            .map(|(_, _, change)| *change)
            .or_else(|| {
                STAGED_CODES
                    .iter()
                    .find(|(code, _)| *code == x)
                    .map(|(_, change)| *change)
            })
    }

    /// Secondary decoder: worktree divergence reported in Y.
    pub fn secondary(x: u8, y: u8) -> Option<ChangeType> {
        UNSTAGED_CODES
            .iter()
            .find(|(code, excluded_x, _)| *code == y && !excluded_x.contains(&x))
            .map(|(_, _, change)| *change)
    }

    fn metadata(self) -> &'static ChangeTypeMetadata {
        &CHANGE_TYPE_DATA[self as usize]
    }

    /// Display message, unpadded (e.g. "modified", "deleted by them").
    pub fn message(self) -> &'static str {
        self.metadata().message
    }

    /// Change state used for color selection.
    pub fn state(self) -> ChangeState {
        self.metadata().state
    }

    /// Status group used for section assignment and ordering.
    pub fn group(self) -> StatusGroup {
        self.metadata().group
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl StatusGroup {
    /// Groups in display order.
    pub const ORDERED: [StatusGroup; 4] = [
        StatusGroup::Staged,
        StatusGroup::Unmerged,
        StatusGroup::Unstaged,
        StatusGroup::Untracked,
    ];

    /// Header text shown above the group's items.
    pub fn description(self) -> &'static str {
        match self {
            StatusGroup::Staged => "Changes to be committed",
            StatusGroup::Unmerged => "Unmerged paths",
            StatusGroup::Unstaged => "Changes not staged for commit",
            StatusGroup::Untracked => "Untracked files",
        }
    }

    /// Position in [`StatusGroup::ORDERED`].
    pub fn index(self) -> usize {
        self as usize
    }
}
