//! Parser for `git status -z -b` porcelain v1 output.
//!
//! This module turns the raw NUL-framed byte stream into a [`StatusInfo`].
//! The first record is the branch header; every following record is an XY
//! code, a space, and a path. Rename and copy records carry a second
//! NUL-terminated segment holding the original path, so framing is handled by
//! a small scanner rather than a plain split.
//!
//! # Public API
//! - [`PorcelainParser`]: Stateless parser with associated functions
//!
//! # Examples
//! ```
//! use scmpuff::core::porcelain::PorcelainParser;
//!
//! let info = PorcelainParser::parse(b"## main\0AM f.go\0").unwrap();
//! assert_eq!(info.branch.name, "main");
//! assert_eq!(info.items.len(), 2);
//! ```

use crate::core::error::{Result, ScmpuffError};
use crate::core::git_status::{ChangeType, StatusGroup};
use crate::core::state::{BranchInfo, StatusInfo, StatusItem};
use log::{debug, warn};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static BRANCH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^## (?:Initial commit on )?(?:No commits yet on )?(\S+?)(?:\.{3}|$)")
        .expect("valid branch name regex")
});
static DETACHED_BRANCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## (HEAD \(no branch\))").expect("valid detached regex"));
static AHEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[ahead ?(\d+).*\]").expect("valid ahead regex"));
static BEHIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*behind ?(\d+)\]").expect("valid behind regex"));

pub struct PorcelainParser;

impl PorcelainParser {
    /// Parse a complete status stream: branch header followed by records.
    pub fn parse(output: &[u8]) -> Result<StatusInfo> {
        let mut scanner = SegmentScanner::new(output);
        let header = scanner.next_segment().ok_or(ScmpuffError::MissingBranchHeader)?;
        let branch = Self::parse_branch(&String::from_utf8_lossy(header))?;
        debug!(
            "Parsed branch '{}' (+{}/-{})",
            branch.name, branch.commits_ahead, branch.commits_behind
        );

        let mut items = Vec::new();
        while let Some(record) = scanner.next_record()? {
            let changes = Self::decode(record.x, record.y)?;
            for change_type in changes {
                let mut item = StatusItem::new(change_type, record.path.clone());
                if let Some(orig) = &record.orig_path {
                    item = item.with_orig_path(orig.clone());
                }
                items.push(item);
            }
        }

        debug!("Parsed {} status items", items.len());
        Ok(StatusInfo { branch, items })
    }

    /// Parse the `## ...` branch header line.
    pub fn parse_branch(header: &str) -> Result<BranchInfo> {
        let name = BRANCH_NAME
            .captures(header)
            .or_else(|| DETACHED_BRANCH.captures(header))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ScmpuffError::invalid_branch_header(header))?;

        Ok(BranchInfo {
            name,
            commits_ahead: capture_count(&AHEAD, header),
            commits_behind: capture_count(&BEHIND, header),
        })
    }

    /// Map an XY code to one or two change types.
    ///
    /// The worktree decoder is skipped when the index decoder already matched
    /// an unmerged or untracked code, since those dyads describe both sides.
    pub fn decode(x: u8, y: u8) -> Result<Vec<ChangeType>> {
        let mut changes = Vec::with_capacity(2);
        let primary = ChangeType::primary(x, y);
        changes.extend(primary);

        let whole_entry = primary
            .map(|c| matches!(c.group(), StatusGroup::Unmerged | StatusGroup::Untracked))
            .unwrap_or(false);
        if !whole_entry {
            changes.extend(ChangeType::secondary(x, y));
        }

        if changes.is_empty() {
            return Err(ScmpuffError::unknown_change_code(x, y));
        }
        Ok(changes)
    }
}

fn capture_count(re: &Regex, header: &str) -> u32 {
    re.captures(header)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// One logical status record, possibly spanning two NUL segments.
#[derive(Debug)]
struct RawRecord {
    x: u8,
    y: u8,
    path: String,
    orig_path: Option<String>,
}

/// Byte scanner over NUL-terminated segments.
struct SegmentScanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SegmentScanner<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn next_segment(&mut self) -> Option<&'a [u8]> {
        if self.pos >= self.buf.len() {
            return None;
        }
        let rest = &self.buf[self.pos..];
        match rest.iter().position(|b| *b == 0) {
            Some(end) => {
                self.pos += end + 1;
                Some(&rest[..end])
            }
            None => {
                self.pos = self.buf.len();
                Some(rest)
            }
        }
    }

    /// Yield the next record, consuming the extra segment for renames and copies.
    fn next_record(&mut self) -> Result<Option<RawRecord>> {
        let segment = loop {
            match self.next_segment() {
                None => return Ok(None),
                Some([]) => continue,
                Some(segment) => break segment,
            }
        };

        if segment.len() < 4 || segment[2] != b' ' {
            return Err(ScmpuffError::truncated_record(segment));
        }
        let (x, y) = (segment[0], segment[1]);
        let path = path_string(&segment[3..]);

        let orig_path = if x == b'R' || x == b'C' {
            match self.next_segment() {
                Some(orig) if !orig.is_empty() => Some(path_string(orig)),
                _ => return Err(ScmpuffError::missing_orig_path(path)),
            }
        } else {
            None
        };

        Ok(Some(RawRecord {
            x,
            y,
            path,
            orig_path,
        }))
    }
}

fn path_string(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => {
            warn!("Path is not valid UTF-8, displaying lossily: {s}");
            s
        }
    }
}
