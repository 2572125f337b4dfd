// ABOUTME: Tests for shell completion generation functionality
// ABOUTME: Ensures completions for the real imgsearch command tree work for all supported shells

use clap::CommandFactory;
use imgsearch_cli::cli::Cli;
use imgsearch_cli::completions::{generate_completions, Shell};
use std::io::Cursor;

fn completions_for(shell: Shell) -> String {
    let mut output = Cursor::new(Vec::new());
    let mut cmd = Cli::command();

    generate_completions(shell, &mut cmd, &mut output);

    String::from_utf8(output.into_inner()).expect("Should be valid UTF-8")
}

#[test]
fn test_completion_shell_parsing() {
    assert_eq!("bash".parse::<Shell>().unwrap(), Shell::Bash);
    assert_eq!("zsh".parse::<Shell>().unwrap(), Shell::Zsh);
    assert_eq!("fish".parse::<Shell>().unwrap(), Shell::Fish);
    assert_eq!("powershell".parse::<Shell>().unwrap(), Shell::PowerShell);

    // Case insensitive
    assert_eq!("BASH".parse::<Shell>().unwrap(), Shell::Bash);
    assert_eq!("Zsh".parse::<Shell>().unwrap(), Shell::Zsh);

    assert!("invalid".parse::<Shell>().is_err());
}

#[test]
fn test_bash_completion_generation() {
    let output = completions_for(Shell::Bash);

    assert!(output.contains("_imgsearch()"));
    assert!(output.contains("complete -F _imgsearch"));
}

#[test]
fn test_zsh_completion_generation() {
    let output = completions_for(Shell::Zsh);

    assert!(output.contains("#compdef"));
    assert!(output.contains("_imgsearch"));
}

#[test]
fn test_fish_completion_generation() {
    let output = completions_for(Shell::Fish);

    assert!(output.contains("complete"));
    assert!(output.contains("-c imgsearch"));
}

#[test]
fn test_powershell_completion_generation() {
    let output = completions_for(Shell::PowerShell);

    assert!(output.contains("Register-ArgumentCompleter"));
    assert!(output.contains("imgsearch"));
}

#[test]
fn test_completion_output_contains_commands_and_flags() {
    let output = completions_for(Shell::Bash);

    for command in ["classify", "search", "signatures", "completions"] {
        assert!(output.contains(command), "missing {}", command);
    }
    assert!(output.contains("--no-open"));
    assert!(output.contains("--force"));
    assert!(output.contains("--help"));
}
