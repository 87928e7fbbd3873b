//! Environment-driven gateway configuration.

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
}

impl GatewayConfig {
    /// Reads `PORT` from the environment; unset or unparseable values fall
    /// back to the default.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self { port }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(GatewayConfig::default().port, 3000);
    }

    // Single test covering every PORT branch: this is the only test that
    // touches the variable, so parallel test threads cannot race it.
    #[test]
    fn test_from_env_port_handling() {
        std::env::remove_var("PORT");
        assert_eq!(GatewayConfig::from_env().port, 3000);

        std::env::set_var("PORT", "8080");
        assert_eq!(GatewayConfig::from_env().port, 8080);

        std::env::set_var("PORT", "not-a-port");
        assert_eq!(GatewayConfig::from_env().port, 3000);

        std::env::remove_var("PORT");
    }
}
