//! Application configuration. API credentials, bind address.

use serde::Deserialize;

/// Default Cohere generate endpoint.
pub const DEFAULT_COHERE_API_URL: &str = "https://api.cohere.ai/v1/generate";

/// Default generation model.
pub const DEFAULT_COHERE_MODEL: &str = "command-xlarge-nightly";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Cohere API key. Read from COHERE_API_KEY (or DRIPGEN_COHERE_API_KEY).
    #[serde(default)]
    pub cohere_api_key: Option<String>,

    /// Cohere API URL. Defaults to the generate endpoint. Read from DRIPGEN_COHERE_API_URL.
    #[serde(default)]
    pub cohere_api_url: Option<String>,

    /// Model name. Defaults to "command-xlarge-nightly". Read from DRIPGEN_COHERE_MODEL.
    #[serde(default)]
    pub cohere_model: Option<String>,

    /// Listen address. Defaults to "0.0.0.0:8000". Read from DRIPGEN_BIND_ADDR.
    #[serde(default)]
    pub bind_addr: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        // variables.env is the service's conventional env file; a plain .env works too
        dotenv::from_filename("variables.env").ok();
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("DRIPGEN"));
        if let Ok(path) = std::env::var("DRIPGEN_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // COHERE_API_KEY is read directly (no DRIPGEN_ prefix) so env files can
        // use the name the Cohere docs use
        if let Ok(key) = std::env::var("COHERE_API_KEY") {
            cfg.cohere_api_key = Some(key);
        }
        Ok(cfg)
    }

    /// Returns the Cohere API key if configured. Reads from config or COHERE_API_KEY env.
    pub fn cohere_api_key(&self) -> Option<String> {
        self.cohere_api_key
            .clone()
            .or_else(|| std::env::var("COHERE_API_KEY").ok())
    }

    /// Returns the Cohere API URL. Defaults to the generate endpoint.
    pub fn cohere_api_url_or_default(&self) -> String {
        self.cohere_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_COHERE_API_URL.to_string())
    }

    /// Returns the model name. Defaults to "command-xlarge-nightly".
    pub fn cohere_model_or_default(&self) -> String {
        self.cohere_model
            .clone()
            .unwrap_or_else(|| DEFAULT_COHERE_MODEL.to_string())
    }

    /// Returns the listen address. Defaults to "0.0.0.0:8000".
    pub fn bind_addr_or_default(&self) -> String {
        self.bind_addr
            .clone()
            .unwrap_or_else(|| "0.0.0.0:8000".to_string())
    }

    /// Returns true if the Cohere API key is present.
    pub fn is_cohere_configured(&self) -> bool {
        self.cohere_api_key().is_some()
    }
}
