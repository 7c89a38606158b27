use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::LevelFilter;
use scmpuff::commands::*;
use scmpuff::core::{
    error::ScmpuffError,
    output::{print_error, print_not_a_repository, print_parse_failure},
    render::RenderOptions,
    shell_init::default_shell_type,
};
use std::process;

/// Exit status for "not a git repository", matching git itself.
const EXIT_NOT_A_REPOSITORY: i32 = 128;

#[derive(Parser)]
#[command(name = "scmpuff")]
#[command(about = "Numeric file shortcuts for common git commands")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set and display numbered git status
    Status {
        /// Include machine-parseable filelist
        #[arg(short = 'f', long)]
        filelist: bool,
        /// Display the formatted status output
        #[arg(
            long,
            default_value_t = true,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            action = ArgAction::Set
        )]
        display: bool,
        /// Forwarded shell arguments (ignored)
        #[arg(hide = true)]
        args: Vec<String>,
    },
    /// Expand numeric shortcuts into shell-escaped arguments
    Expand {
        /// Rewrite shortcut paths relative to the working directory
        #[arg(short, long)]
        relative: bool,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Expand numeric shortcuts and execute the resulting command
    #[command(alias = "execute")]
    Exec {
        /// Rewrite shortcut paths relative to the working directory
        #[arg(short, long)]
        relative: bool,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Output the shell initialization script
    #[command(long_about = INIT_LONG_ABOUT)]
    Init {
        /// Output shell type: sh | bash | zsh | fish
        #[arg(short, long, num_args = 0..=1, require_equals = true)]
        shell: Option<Option<String>>,
        /// Include short git aliases
        #[arg(
            short,
            long,
            default_value_t = true,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            action = ArgAction::Set
        )]
        aliases: bool,
        /// Wrap standard git commands
        #[arg(
            short,
            long,
            default_value_t = true,
            num_args = 0..=1,
            require_equals = true,
            default_missing_value = "true",
            action = ArgAction::Set
        )]
        wrap: bool,
        /// Deprecated: use --shell instead
        #[arg(long, hide = true)]
        show: bool,
    },
    /// Display an introduction to scmpuff
    Intro,
    /// Print the version number
    Version,
}

const INIT_LONG_ABOUT: &str = "\
Outputs the shell initialization script for scmpuff.

Initialize scmpuff by adding the following to your ~/.bashrc or ~/.zshrc:

    eval \"$(scmpuff init --shell=sh)\"

For fish shell, add the following to ~/.config/fish/config.fish instead:

    scmpuff init --shell=fish | source";

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Print the long help of `init`, which explains how to load the script.
fn print_init_help() -> Result<(), ScmpuffError> {
    let mut cmd = Cli::command();
    cmd.build();
    if let Some(init) = cmd.find_subcommand_mut("init") {
        init.print_long_help()?;
    }
    Ok(())
}

/// Report `error` on stderr and exit with the matching status.
fn exit_with(error: ScmpuffError) -> ! {
    match error {
        ScmpuffError::NotInGitRepo => {
            print_not_a_repository();
            process::exit(EXIT_NOT_A_REPOSITORY);
        }
        e if e.is_parse_error() => print_parse_failure(&e.to_string()),
        e => print_error(&e.to_string()),
    }
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Status {
            filelist, display, ..
        } => {
            let options = RenderOptions {
                include_filelist: filelist,
                include_display: display,
            };
            if let Err(e) = execute_status(options) {
                exit_with(e);
            }
        }
        Commands::Expand { relative, args } => {
            if let Err(e) = execute_expand(args, relative) {
                exit_with(e);
            }
        }
        Commands::Exec { relative, args } => match execute_exec(args, relative) {
            Ok(code) => process::exit(code),
            Err(e) => exit_with(e),
        },
        Commands::Init {
            shell,
            aliases,
            wrap,
            show,
        } => {
            let shell = match (shell, show) {
                (Some(Some(shell)), _) => shell,
                (Some(None), _) | (None, true) => default_shell_type(),
                (None, false) => {
                    if let Err(e) = print_init_help() {
                        exit_with(e);
                    }
                    return;
                }
            };
            if let Err(e) = execute_init(&shell, wrap, aliases) {
                exit_with(e);
            }
        }
        Commands::Intro => execute_intro(),
        Commands::Version => execute_version(),
    }
}
