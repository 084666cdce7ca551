use crate::error::ScdError;

/// Name of the Databricks Model Serving endpoint. Only the name, not a URL.
pub const MODEL_ENDPOINT_NAME: &str = "deepseek-scd-qa";

pub const HOST_VAR: &str = "DATABRICKS_HOST";
pub const TOKEN_VAR: &str = "DATABRICKS_TOKEN";

#[derive(Debug, Clone)]
pub struct ServingConfig {
    pub endpoint_name: String,
}

impl Default for ServingConfig {
    fn default() -> Self {
        Self { endpoint_name: MODEL_ENDPOINT_NAME.to_string() }
    }
}

impl ServingConfig {
    pub fn invocations_url(&self, creds: &Credentials) -> String {
        format!("{}/serving-endpoints/{}/invocations", creds.host, self.endpoint_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Workspace base address, scheme included, no trailing slash.
    pub host: String,
    pub token: String,
}

pub trait CredentialProvider: Send + Sync {
    fn resolve(&self) -> Result<Credentials, ScdError>;
}

/// Reads the workspace address and token from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn resolve(&self) -> Result<Credentials, ScdError> {
        resolve_with(|name| std::env::var(name).ok())
    }
}

fn resolve_with<F>(lookup: F) -> Result<Credentials, ScdError>
where
    F: Fn(&str) -> Option<String>,
{
    let require = |name: &str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ScdError::Config(format!("{name} is not set")))
    };

    let host = require(HOST_VAR)?;
    let token = require(TOKEN_VAR)?;

    Ok(Credentials { host: normalize_host(&host), token })
}

fn normalize_host(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
