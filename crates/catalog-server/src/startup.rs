//! Server startup utilities.

use catalog_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
   ______      __        __
  / ____/___ _/ /_____ _/ /___  ____ _
 / /   / __ `/ __/ __ `/ / __ \/ __ `/
/ /___/ /_/ / /_/ /_/ / / /_/ / /_/ /
\____/\__,_/\__/\__,_/_/\____/\__, /
                             /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let base = format!("http://{}", config.server.addr());
    let separator = "=".repeat(60);

    info!("{}", separator);
    info!("Environment: {}", config.app.environment);
    info!("Products:    {}/products/{{id}}", base);
    info!("Health:      {}/health", base);
    info!("Readiness:   {}/ready", base);
    info!("API Docs:    {}/api-docs/openapi.json", base);
    info!("Cache:       {} (ttl {}s)", config.cache.backend, config.cache.ttl_secs);
    info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_banner_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_banner();
    }

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }
}
