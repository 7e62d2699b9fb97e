//! `pkg-to-jsr` command

use anyhow::{Context, Result};

use crate::cli::Cli;
use pkg_to_jsr::ops::{generate_jsr_json, GenerateOptions};
use pkg_to_jsr::util::fs::resolve_root;
use pkg_to_jsr::util::shell::{Shell, Status};

pub fn execute(cli: &Cli, shell: &Shell) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    let root = resolve_root(&cwd, cli.root.as_deref())?;

    let result = generate_jsr_json(&GenerateOptions { root })?;

    if shell.is_verbose() {
        shell.note(format!("read {}", result.package_json_path.display()));
    }
    shell.status(Status::Generated, result.jsr_json_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::Parser;
    use pkg_to_jsr::util::shell::ColorChoice;
    use std::path::PathBuf;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pkg-to-jsr"]);
        assert!(!cli.silent);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_cli_root_and_silent() {
        let cli = Cli::parse_from(["pkg-to-jsr", "--root", "packages/core", "-s"]);
        assert_eq!(cli.root, Some(PathBuf::from("packages/core")));
        assert!(cli.silent);
    }

    #[test]
    fn test_cli_silent_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pkg-to-jsr", "--silent", "--verbose"]).is_err());
    }

    #[test]
    fn test_cli_color() {
        let cli = Cli::parse_from(["pkg-to-jsr", "--color", "never"]);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(Cli::try_parse_from(["pkg-to-jsr", "--color", "rainbow"]).is_err());
    }
}
