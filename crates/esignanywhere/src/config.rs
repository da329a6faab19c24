//! Configuration for the eSignAnyWhere API client.

use crate::error::{EsignError, Result};
use crate::version::ApiVersion;

/// Domain of the demo (sandbox) installation.
pub const TEST_API_DOMAIN: &str = "https://demo.esignanywhere.net";
/// Domain of the production SaaS installation.
pub const PRODUCTION_API_DOMAIN: &str = "https://saas.esignanywhere.net";

pub const ENV_API_TOKEN: &str = "ESIGNANYWHERE_API_TOKEN";
pub const ENV_API_DOMAIN: &str = "ESIGNANYWHERE_API_DOMAIN";
pub const ENV_ENVIRONMENT: &str = "ESIGNANYWHERE_ENV";
pub const ENV_API_VERSION: &str = "ESIGNANYWHERE_API_VERSION";

/// Which hosted installation to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Test,
    Production,
}

impl Environment {
    pub fn domain(&self) -> &'static str {
        match self {
            Environment::Test => TEST_API_DOMAIN,
            Environment::Production => PRODUCTION_API_DOMAIN,
        }
    }
}

/// Configuration for connecting to the eSignAnyWhere API.
#[derive(Clone)]
pub struct ClientConfig {
    /// Organization API token, sent as the `apiToken` header.
    pub api_token: String,

    /// Test or production installation.
    pub environment: Environment,

    /// Explicit domain (e.g. an on-premise installation); overrides `environment`.
    pub api_domain: Option<String>,

    /// Path segment used for every request.
    pub version: ApiVersion,
}

impl ClientConfig {
    /// Create a configuration for the test environment and the v6 API.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            environment: Environment::default(),
            api_domain: None,
            version: ApiVersion::default(),
        }
    }

    /// Build a configuration from `ESIGNANYWHERE_*` environment variables.
    ///
    /// `ESIGNANYWHERE_API_TOKEN` is required. `ESIGNANYWHERE_ENV` accepts
    /// `test`/`demo` or `production`/`prod`; `ESIGNANYWHERE_API_DOMAIN` and
    /// `ESIGNANYWHERE_API_VERSION` are optional.
    pub fn from_env() -> Result<Self> {
        let api_token = env_var(ENV_API_TOKEN)
            .ok_or_else(|| EsignError::NotConfigured(format!("{ENV_API_TOKEN} is not set")))?;
        let mut config = Self::new(api_token);

        if let Some(env) = env_var(ENV_ENVIRONMENT) {
            config.environment = match env.to_ascii_lowercase().as_str() {
                "test" | "demo" => Environment::Test,
                "production" | "prod" => Environment::Production,
                other => {
                    return Err(EsignError::NotConfigured(format!(
                        "{ENV_ENVIRONMENT} must be 'test' or 'production', got '{other}'"
                    )));
                }
            };
        }
        config.api_domain = env_var(ENV_API_DOMAIN);
        if let Some(version) = env_var(ENV_API_VERSION) {
            config.version = version.parse().map_err(EsignError::NotConfigured)?;
        }

        Ok(config)
    }

    /// Select test or production.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set an explicit API domain.
    pub fn api_domain(mut self, domain: impl Into<String>) -> Self {
        self.api_domain = Some(domain.into());
        self
    }

    /// Set the API version path segment.
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    /// Domain requests go to, without a trailing slash.
    pub fn domain(&self) -> &str {
        self.api_domain
            .as_deref()
            .unwrap_or_else(|| self.environment.domain())
            .trim_end_matches('/')
    }

    /// Root of the REST API, e.g. `https://demo.esignanywhere.net/Api/`.
    pub fn api_uri(&self) -> String {
        format!("{}/Api/", self.domain())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_token", &"<redacted>")
            .field("environment", &self.environment)
            .field("api_domain", &self.api_domain)
            .field("version", &self.version)
            .finish()
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_test_environment_and_v6() {
        let config = ClientConfig::new("token");
        assert_eq!(config.environment, Environment::Test);
        assert_eq!(config.version, ApiVersion::V6);
        assert_eq!(config.api_uri(), "https://demo.esignanywhere.net/Api/");
    }

    #[test]
    fn production_uses_saas_domain() {
        let config = ClientConfig::new("token").environment(Environment::Production);
        assert_eq!(config.api_uri(), "https://saas.esignanywhere.net/Api/");
    }

    #[test]
    fn explicit_domain_wins_over_environment() {
        let config = ClientConfig::new("token")
            .environment(Environment::Production)
            .api_domain("https://esign.example.com/");
        assert_eq!(config.api_uri(), "https://esign.example.com/Api/");
    }

    #[test]
    fn from_env_reads_token_environment_and_version() {
        unsafe {
            std::env::set_var(ENV_API_TOKEN, "env-token");
            std::env::set_var(ENV_ENVIRONMENT, "production");
            std::env::set_var(ENV_API_VERSION, "v5");
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_token, "env-token");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.version, ApiVersion::V5);

        unsafe {
            std::env::set_var(ENV_ENVIRONMENT, "staging");
        }
        assert!(matches!(
            ClientConfig::from_env(),
            Err(EsignError::NotConfigured(_))
        ));

        unsafe {
            std::env::remove_var(ENV_API_TOKEN);
            std::env::remove_var(ENV_ENVIRONMENT);
            std::env::remove_var(ENV_API_VERSION);
        }
        assert!(matches!(
            ClientConfig::from_env(),
            Err(EsignError::NotConfigured(_))
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ClientConfig::new("super-secret");
        let text = format!("{config:?}");
        assert!(!text.contains("super-secret"));
        assert!(text.contains("<redacted>"));
    }
}
