use std::{io, path::PathBuf};

use anyhow::Context;
use clap::ArgAction;
use detective_quest::{ColorMode, Config, Session, session::Ending};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML file with presentation settings
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// When to colour output (overrides the config file)
    #[arg(long, value_name = "WHEN")]
    color: Option<ColorChoice>,

    /// Do not list the available paths when entering a room
    #[arg(long)]
    hide_exits: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.resolve_config()?;
        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();

        let mut session = Session::new(&config, stdin, stdout);
        let ending = session.run().context("the game session failed")?;
        if ending == Ending::InputClosed {
            tracing::info!("standard input closed");
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("could not load settings from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(color) = self.color {
            config.set_color(color.into());
        }
        if self.hide_exits {
            config.show_exits = false;
        }
        tracing::debug!(?config, "settings resolved");
        Ok(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the game itself
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
