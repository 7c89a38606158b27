//! Allowlist of git flags whose numeric values are not file shortcuts.
//!
//! `git log -n 1` asks for one commit and `git checkout -b 713` names a branch.
//! Expanding those values to `$e1` or `$e713` would be wrong, so positions
//! directly after one of these flags are passed through verbatim.
//!
//! The guard only applies when argv[0] equals `SCMPUFF_GIT_CMD`, i.e. the
//! command was routed through the shell wrapper. Glued values such as `-n1`
//! never match the digit pattern and need no entry here.

/// Per-subcommand flags taking a space-separated value that may be numeric.
const GUARDED_FLAGS: &[(&str, &[&str])] = &[
    (
        "log",
        &["-n", "--max-count", "--skip", "--min-parents", "--max-parents"],
    ),
    ("checkout", &["-b", "-B", "--orphan"]),
    ("blame", &["-L"]),
    ("rebase", &["-C"]),
];

pub struct FlagGuard;

impl FlagGuard {
    /// Whether `args[pos]` is the value of a guarded flag and must not be expanded.
    pub fn protects(args: &[String], pos: usize, git_cmd: Option<&str>) -> bool {
        let Some(git_cmd) = git_cmd.filter(|cmd| !cmd.is_empty()) else {
            return false;
        };
        if pos < 2 || pos >= args.len() || args[0] != git_cmd {
            return false;
        }

        let previous = args[pos - 1].as_str();
        GUARDED_FLAGS
            .iter()
            .find(|(subcommand, _)| *subcommand == args[1])
            .is_some_and(|(_, flags)| flags.contains(&previous))
    }
}
