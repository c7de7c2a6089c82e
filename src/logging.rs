//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Level used when `RUST_LOG` is unset, from the `-v` count
pub fn default_level(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

/// Initialize tracing on stderr. Safe to call multiple times.
pub fn init(verbosity: u8) {
    INIT.call_once(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(default_level(verbosity).into())
            .from_env_lossy();

        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .try_init();

        if let Err(e) = result {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_from_verbosity() {
        assert_eq!(default_level(0), tracing::Level::WARN);
        assert_eq!(default_level(1), tracing::Level::INFO);
        assert_eq!(default_level(2), tracing::Level::DEBUG);
        assert_eq!(default_level(9), tracing::Level::TRACE);
    }
}
