use crate::utils::error::{Error, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

/// Settings for [`HttpTransport`](crate::adapters::HttpTransport).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_seconds: None,
            headers: HashMap::new(),
            user_agent: None,
        }
    }

    /// Loads a config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(Error::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a config from TOML text after expanding `${VAR}` placeholders.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| Error::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${NAME}` with the environment variable `NAME`; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("base_url", &self.base_url)?;

        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }

        for name in self.headers.keys() {
            validation::validate_non_empty_string("headers", name)?;
        }

        if let Some(user_agent) = &self.user_agent {
            validation::validate_non_empty_string("user_agent", user_agent)?;
        }

        Ok(())
    }
}
