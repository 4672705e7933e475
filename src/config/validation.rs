use crate::config::types::{Config, CrawlConfig, HttpConfig};
use crate::ConfigError;

/// Validates the entire configuration
///
/// Called both after parsing a config file and after CLI overrides have been
/// applied, so flag values go through the same checks as file values.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates traversal limits
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    // depth_limit and max_children are unsigned, so negative values are
    // rejected at the parsing boundary already

    if config.max_nodes < 1 {
        return Err(ConfigError::Validation(format!(
            "max-nodes must be >= 1, got {}",
            config.max_nodes
        )));
    }

    if config.link_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "link-prefix cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client settings
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if let Some(proxy) = &config.proxy {
        validate_proxy(proxy)?;
    }

    Ok(())
}

/// Validates a proxy address of the form `host:port`
pub fn validate_proxy(proxy: &str) -> Result<(), ConfigError> {
    let (host, port) = proxy.rsplit_once(':').ok_or_else(|| {
        ConfigError::InvalidProxy(format!("'{}' is not of the form host:port", proxy))
    })?;

    if host.is_empty() {
        return Err(ConfigError::InvalidProxy(format!(
            "'{}' has an empty host",
            proxy
        )));
    }

    if host.contains(|c: char| c.is_whitespace() || c == '/') {
        return Err(ConfigError::InvalidProxy(format!(
            "'{}' contains invalid host characters",
            proxy
        )));
    }

    port.parse::<u16>().map_err(|_| {
        ConfigError::InvalidProxy(format!("'{}' has an invalid port '{}'", proxy, port))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_max_nodes_rejected() {
        let mut config = Config::default();
        config.crawl.max_nodes = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut config = Config::default();
        config.crawl.link_prefix = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_timeout_bounds() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(validate(&config).is_err());

        config.http.timeout_secs = 301;
        assert!(validate(&config).is_err());

        config.http.timeout_secs = 300;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = Config::default();
        config.http.user_agent = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_proxy() {
        assert!(validate_proxy("proxy.example.com:8080").is_ok());
        assert!(validate_proxy("127.0.0.1:3128").is_ok());

        assert!(validate_proxy("").is_err());
        assert!(validate_proxy("no-port").is_err());
        assert!(validate_proxy(":8080").is_err());
        assert!(validate_proxy("host:").is_err());
        assert!(validate_proxy("host:notaport").is_err());
        assert!(validate_proxy("host:99999").is_err());
        assert!(validate_proxy("http://host:8080").is_err());
    }

    #[test]
    fn test_config_with_valid_proxy() {
        let mut config = Config::default();
        config.http.proxy = Some("proxy.example.com:8080".to_string());
        assert!(validate(&config).is_ok());
    }
}
