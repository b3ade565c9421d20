use crate::domain::ports::{
    ConfigProvider, DEFAULT_ACCEPT_LANGUAGE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use crate::utils::error::{ActError, Result};
use crate::utils::validation::{self, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: String,
    pub token: String,
    pub accept_language: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl TomlConfig {
    /// Load the configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ActError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse the configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ActError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.client.base_url
    }

    fn token(&self) -> &str {
        &self.client.token
    }

    fn accept_language(&self) -> &str {
        self.client
            .accept_language
            .as_deref()
            .unwrap_or(DEFAULT_ACCEPT_LANGUAGE)
    }

    fn timeout_seconds(&self) -> u64 {
        self.client.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    fn user_agent(&self) -> &str {
        self.client.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("client.base_url", &self.client.base_url)?;
        validation::validate_non_empty_string("client.token", &self.client.token)?;
        validation::validate_positive_number("client.timeout_seconds", self.timeout_seconds(), 1)?;
        if let Some(lang) = &self.client.accept_language {
            validation::validate_non_empty_string("client.accept_language", lang)?;
        }
        Ok(())
    }
}
