use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::repository::*;

#[cfg(test)]
mod expand_command_tests {
    use super::*;

    #[test]
    fn test_expand_digits_and_ranges() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;

        scmpuff_cmd()?
            .args(["expand", "--", "git", "add", "1", "3-4"])
            .env("e1", "/repo/a.txt")
            .env("e3", "/repo/c.txt")
            .env("e4", "/repo/d.txt")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout("git\tadd\t/repo/a.txt\t/repo/c.txt\t/repo/d.txt");

        Ok(())
    }

    #[test]
    fn test_expand_escapes_shell_characters() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;

        scmpuff_cmd()?
            .args(["expand", "--", "git", "add", "1"])
            .env("e1", "/repo/my file (1).txt")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout("git\tadd\t/repo/my\\ file\\ \\(1\\).txt");

        Ok(())
    }

    #[test]
    fn test_expand_unset_shortcut_is_quoted_empty() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;

        scmpuff_cmd()?
            .args(["expand", "7"])
            .env_remove("e7")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout("''");

        Ok(())
    }

    #[test]
    fn test_expand_numeric_file_passes_through() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        std::fs::write(dir.path().join("2"), "")?;

        scmpuff_cmd()?
            .args(["expand", "1", "2"])
            .env("e1", "/repo/a.txt")
            .env("e2", "/repo/b.txt")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout("/repo/a.txt\t2");

        Ok(())
    }

    #[test]
    fn test_expand_relative() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;
        let root = dir.path().canonicalize()?;
        std::fs::create_dir(root.join("sub"))?;
        std::fs::write(root.join("sub").join("a.txt"), "")?;

        scmpuff_cmd()?
            .args(["expand", "--relative", "--", "git", "diff", "1"])
            .env("e1", root.join("sub").join("a.txt"))
            .current_dir(&root)
            .assert()
            .success()
            .stdout("git\tdiff\tsub/a.txt");

        Ok(())
    }

    #[test]
    fn test_expand_flag_guard() -> anyhow::Result<()> {
        let dir = tempfile::TempDir::new()?;

        scmpuff_cmd()?
            .args(["expand", "--", "vcs", "log", "-n", "1", "2"])
            .env("SCMPUFF_GIT_CMD", "vcs")
            .env("e2", "/repo/b.txt")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout("vcs\tlog\t-n\t1\t/repo/b.txt");

        Ok(())
    }

    #[test]
    fn test_expand_requires_arguments() -> anyhow::Result<()> {
        scmpuff_cmd()?
            .arg("expand")
            .assert()
            .failure()
            .stderr(predicate::str::contains("required"));

        Ok(())
    }
}
