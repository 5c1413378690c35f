use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cmd::commands::{backends_command, run_script, tree_command};
use cmd::common::{BACKEND_ENV, DEFAULT_BACKEND, ShellContext};
use diagnostics::{log_debug, log_info};
use filestore::BackendRegistry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "memfs")]
struct Cli {
    /// Filestore backend to use
    #[arg(long, global = true, env = BACKEND_ENV, default_value = DEFAULT_BACKEND)]
    backend: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered backends
    Backends,
    /// Print the tree of a freshly initialized store
    Tree {
        /// Directory to start from
        #[arg(default_value = "/")]
        path: String,
    },
    /// Run shell commands from a script file, or stdin when omitted
    Run {
        /// Script with one command per line
        script: Option<PathBuf>,
    },
}

fn read_script(script: Option<&PathBuf>) -> Result<String> {
    match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display())),
        None => {
            let mut text = String::new();
            _ = io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read script from stdin")?;
            Ok(text)
        }
    }
}

/// Execute a parsed command line, returning its output and failure count
async fn dispatch(cli: &Cli, registry: &BackendRegistry) -> Result<(String, usize)> {
    let mut output = String::new();

    let failures = match &cli.command {
        Commands::Backends => {
            backends_command(registry, &mut output)?;
            0
        }
        Commands::Tree { path } => {
            let ctx = ShellContext::open(registry, &cli.backend).await?;
            tree_command(&ctx, path, &mut output).await?;
            0
        }
        Commands::Run { script } => {
            let text = read_script(script.as_ref())?;
            let ctx = ShellContext::open(registry, &cli.backend).await?;
            log_debug!("Running script of {lines} lines", lines: text.lines().count());
            run_script(&ctx, &text, &mut output).await?
        }
    };

    Ok((output, failures))
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    diagnostics::init();

    let cli = Cli::parse();
    let registry = BackendRegistry::with_defaults();

    let (output, failures) = dispatch(&cli, &registry).await?;
    io::stdout().write_all(output.as_bytes())?;

    if failures > 0 {
        log_info!("{failures} command(s) failed", failures: failures);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
