use crate::config::{AppConfig, Shading};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Interactive electrostatic field viewer.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "charge_field", version)]
pub struct Args {
    /// TOML configuration file (default: ./charge_field.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Arrow grid count along both axes
    #[arg(short, long)]
    pub grid: Option<usize>,

    /// Draw every arrow at full brightness
    #[arg(long)]
    pub flat: bool,
}

impl Args {
    /// Command-line flags take precedence over the file.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(n) = self.grid {
            config.grid.x_count = n;
            config.grid.y_count = n;
        }
        if self.flat {
            config.arrows.shading = Shading::Flat;
        }
    }
}

pub fn init_tracing() {
    // try_init: a second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charge_field=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}
