use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "ESTIMATE_LOG";

/// Picks the filter directive: `ESTIMATE_LOG`, then the settings value, then `info`.
pub fn resolve_filter(env_value: Option<String>, configured: &str) -> String {
    env_value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| {
            let configured = configured.trim();
            (!configured.is_empty()).then(|| configured.to_string())
        })
        .unwrap_or_else(|| "info".to_string())
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_tracing(configured: &str) {
    let directive = resolve_filter(std::env::var(LOG_ENV).ok(), configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_settings() {
        assert_eq!(resolve_filter(Some("debug".into()), "warn"), "debug");
        assert_eq!(resolve_filter(Some("  ".into()), "warn"), "warn");
        assert_eq!(resolve_filter(None, ""), "info");
    }
}
