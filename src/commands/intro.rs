pub const INTRO_TEXT: &str = r#"Hello there!

If you are just getting started, you probably want to make sure scmpuff is
loaded automatically in your shell. See 'scmpuff init' for details; for most
shells it comes down to adding a line like this to ~/.zshrc or ~/.bashrc:

  eval "$(scmpuff init -s)"

Once loaded, the function you will use most is 'scmpuff_status', aliased to
'gs' for short. It replaces 'git status' with a compact listing that puts a
number next to each file:

  $ gs
  # On branch: main  |  +1  |  [*] => $e*
  #
  ➤ Changes not staged for commit
  #
  #       modified:  [1] src/main.rs
  #
  ➤ Untracked files
  #
  #      untracked:  [2] NOTES.txt
  #      untracked:  [3] src/render.rs
  #

Those numbers can stand in for file names in ordinary git commands, such as
'git add 2 3' or 'git checkout 1'.

Numeric ranges work too, e.g. 'git reset 2-4', and can be mixed freely with
single numbers and regular arguments.

By default a few short aliases are defined as well, such as 'ga', 'gd' and
'gco'. Check your aliases to see the full list."#;

pub fn execute_intro() {
    println!("{INTRO_TEXT}");
}
