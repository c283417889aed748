use crate::config::AppConfig;
use once_cell::sync::OnceCell;

/// Configuration handed from `app::run` to the window. `quarkstrom` builds
/// the renderer through `Renderer::new()`, which takes no arguments.
pub static STARTUP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

pub fn startup_config() -> AppConfig {
    STARTUP_CONFIG.get().cloned().unwrap_or_default()
}
