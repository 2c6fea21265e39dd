use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use todo_tui::config::Config;
use todo_tui::headless::{apply_actions, format_items};
use todo_tui::logging::{init_tracing, LogTarget};
use todo_tui::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "todo-tui", version, about = "Terminal todo list backed by a single store")]
struct Cli {
    /// Config file (default: ~/.config/todo-tui/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply JSON actions, one per line, to a fresh list and print the items
    Apply {
        /// Actions file; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Print the items as a JSON array
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    match cli.command {
        None => {
            init_tracing(&config.logging.level, LogTarget::File(config.log_path()))
                .context("Failed to open log file")?;
            runtime::run(&config).context("Terminal UI failed")?;
        }
        Some(Command::Apply { input, json }) => {
            init_tracing(&config.logging.level, LogTarget::Stderr)?;
            let report = match input.filter(|path| path.as_os_str() != "-") {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("Failed to open '{}'", path.display()))?;
                    apply_actions(BufReader::new(file))?
                }
                None => apply_actions(io::stdin().lock())?,
            };

            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", format_items(&report.items, json)?)?;
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }
    Ok(config)
}
