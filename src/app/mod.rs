pub mod cli;

pub use cli::{init_tracing, Args};

#[cfg(feature = "gui")]
pub fn run() -> anyhow::Result<()> {
    use crate::config::AppConfig;
    use crate::renderer::state::STARTUP_CONFIG;
    use crate::renderer::Renderer;
    use anyhow::Context;
    use clap::Parser;
    use tracing::info;

    init_tracing();
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    args.apply(&mut config);
    config.validate().context("invalid configuration")?;

    // Arrow sampling runs on the global pool; leave a core for the window
    let threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1);
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("failed to build thread pool")?;
    info!(threads, "sampling pool ready");

    STARTUP_CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("startup configuration already set"))?;

    let window = quarkstrom::Config {
        window_mode: quarkstrom::WindowMode::Maximized,
    };
    quarkstrom::run::<Renderer>(window);
    Ok(())
}
