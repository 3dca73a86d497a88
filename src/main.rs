use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use padlaunch::calculator::Key;
use padlaunch::config::Config;
use padlaunch::ui::calculator::render_keypad;
use padlaunch::ui::run_session;

#[derive(Parser, Debug)]
#[command(name = "padlaunch", version, about = "Calculator applet of the padlaunch home screen")]
struct Cli {
    /// Path to the config file (defaults to the user config directory).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the calculator screen, reading button labels from stdin.
    Calc,
    /// Press the given buttons in order and print the display.
    Press {
        #[arg(required = true, allow_hyphen_values = true)]
        labels: Vec<String>,
        /// Print all calculator registers as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the keypad layout.
    Keypad {
        /// Color buttons with ANSI escapes.
        #[arg(long)]
        color: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "padlaunch=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command.unwrap_or(Command::Calc) {
        Command::Calc => {
            let color = io::stdout().is_terminal();
            let outcome = run_session(io::stdin().lock(), io::stdout().lock(), &config, color)?;
            tracing::info!(
                display = %outcome.last_display,
                returned_home = outcome.returned_home,
                "calculator session ended"
            );
        }
        Command::Press { labels, json } => {
            let mut calc = config.calculator.build();
            for label in &labels {
                let key: Key = label.parse()?;
                calc.handle_key(key);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&calc.snapshot())?);
            } else {
                println!("{}", calc.display());
            }
        }
        Command::Keypad { color } => println!("{}", render_keypad(color)),
    }

    Ok(())
}
