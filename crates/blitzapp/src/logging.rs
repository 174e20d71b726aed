//! Process-wide logger setup.
//!
//! The library only talks to the `log` facade. A client calls [`init_logging`]
//! once at startup to route those records to stderr through `env_logger`.
//! `BLITZ_LOG` (same syntax as `RUST_LOG`) wins over the level passed in.

use once_cell::sync::OnceCell;

pub const LOG_ENV: &str = "BLITZ_LOG";

static INIT: OnceCell<()> = OnceCell::new();

/// Installs the logger. Later calls are ignored, as is a logger installed by
/// someone else first.
pub fn init_logging(default_level: &str) {
    INIT.get_or_init(|| {
        let env = env_logger::Env::new().filter_or(LOG_ENV, default_level);
        let installed = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_target(false)
            .try_init();
        if installed.is_ok() {
            log::debug!("logging initialised at {}", default_level);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging("warn");
        init_logging("debug");
        assert!(INIT.get().is_some());
    }
}
