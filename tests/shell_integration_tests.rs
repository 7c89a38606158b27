use std::process::Command;

mod common;
use common::repository::*;

#[cfg(all(test, unix))]
mod shell_integration_tests {
    use super::*;

    /// Source the bash script, run `scmpuff_status` and print the exports.
    fn run_bash_status(repo: &TestRepo) -> anyhow::Result<String> {
        let bin = assert_cmd::cargo::cargo_bin("scmpuff");
        let bin_dir = bin
            .parent()
            .ok_or_else(|| anyhow::anyhow!("binary has no parent directory"))?;
        let path = format!(
            "{}:{}",
            bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );

        let script = r#"
            eval "$(scmpuff init --shell=bash --wrap=false --aliases=false)"
            scmpuff_status >/dev/null
            printf '%s\n' "$e1" "$e2" "$e3" "${e4-unset}"
            case $- in *f*) echo "globbing left disabled" ;; esac
        "#;

        let output = Command::new("bash")
            .args(["--norc", "--noprofile", "-c", script])
            .current_dir(&repo.path)
            .env("PATH", path)
            .env_remove("SCMPUFF_GIT_CMD")
            .env_remove("RUST_LOG")
            .output()?;
        anyhow::ensure!(output.status.success(), "bash exited with {}", output.status);
        Ok(String::from_utf8(output.stdout)?)
    }

    #[test]
    fn test_exports_match_numbers_with_glob_characters() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_test_files(&repo.path, &["*.md", "a.md", "z.txt"])?;

        let stdout = run_bash_status(&repo)?;
        let lines: Vec<&str> = stdout.lines().collect();
        let root = repo.path.display();

        assert_eq!(
            lines,
            vec![
                format!("{root}/*.md"),
                format!("{root}/a.md"),
                format!("{root}/z.txt"),
                "unset".to_string(),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_unused_shortcuts_stay_unset() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        create_test_files(&repo.path, &["one.txt"])?;

        let stdout = run_bash_status(&repo)?;
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines[0], format!("{}/one.txt", repo.path.display()));
        assert_eq!(&lines[1..], &["", "", "unset"]);

        Ok(())
    }
}
