use crate::adapters::{HttpMethod, HttpRequest};
use crate::config::ClientConfig;
use crate::utils::error::{Error, Result};
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fetch-outcome")]
#[command(about = "Send one request and print its classified outcome")]
pub struct CliArgs {
    #[arg(long, help = "TOML file with client settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL, overrides the config file")]
    pub base_url: Option<String>,

    #[arg(long, default_value = "/")]
    pub path: String,

    #[arg(long, value_enum, default_value_t = HttpMethod::Get)]
    pub method: HttpMethod,

    #[arg(long = "query", value_parser = parse_key_val, help = "Query pair as key=value, repeatable")]
    pub query: Vec<(String, String)>,

    #[arg(long, help = "JSON request body")]
    pub body: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliArgs {
    /// Config file first, then command line overrides.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::new(validate_required_field("base_url", &self.base_url)?.clone()),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if self.timeout_seconds.is_some() {
            config.timeout_seconds = self.timeout_seconds;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn request(&self) -> Result<HttpRequest> {
        let body = self
            .body
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()
            .map_err(|e| Error::InvalidConfigValueError {
                field: "body".to_string(),
                value: self.body.clone().unwrap_or_default(),
                reason: format!("Body is not valid JSON: {}", e),
            })?;

        Ok(HttpRequest {
            method: self.method,
            path: self.path.clone(),
            query: self.query.clone(),
            body,
        })
    }
}

fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}
