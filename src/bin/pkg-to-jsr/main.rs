//! pkg-to-jsr CLI - Generate jsr.json from package.json

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::Cli;
use pkg_to_jsr::util::diagnostic;
use pkg_to_jsr::util::shell::Shell;
use pkg_to_jsr::GenerateError;

fn main() {
    let cli = Cli::parse();
    let shell = Shell::from_flags(cli.silent, cli.verbose, cli.color);

    if let Err(e) = run(&cli, &shell) {
        match e.downcast_ref::<GenerateError>() {
            Some(err) => diagnostic::emit(&err.to_diagnostic(), shell.use_color()),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, shell: &Shell) -> Result<()> {
    // Set up logging
    let filter = if shell.is_verbose() {
        EnvFilter::new("pkg_to_jsr=debug")
    } else if shell.is_quiet() {
        EnvFilter::new("pkg_to_jsr=warn")
    } else {
        EnvFilter::new("pkg_to_jsr=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(shell.use_color())
        .with_target(false)
        .without_time()
        .init();

    commands::generate::execute(cli, shell)
}
