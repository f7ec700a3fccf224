pub mod build_info;

use std::{env, path::PathBuf, sync::Once};

pub const HOME_ENV: &str = "FINHEALTH_HOME";
const DEFAULT_HOME_DIR: &str = ".finhealth";

static TRACING_INIT: Once = Once::new();

/// Installs the global fmt subscriber; `RUST_LOG` directives are honoured.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

        let directive = "finhealth=info"
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into());
        let filter = EnvFilter::from_default_env().add_directive(directive);

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}

/// Application home: `$FINHEALTH_HOME`, else `~/.finhealth`, else `./.finhealth`.
pub fn app_home() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_HOME_DIR)
}
