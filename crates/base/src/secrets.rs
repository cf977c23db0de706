use anyhow::{Context, Result};
use std::collections::HashMap;

/// Source of credentials. Secrets are looked up by name at the point of use
/// and never stored in settings in encrypted form.
pub trait SecretProvider {
    fn secret(&self, name: &str) -> Result<String>;
}

/// Reads secrets from the process environment (including values loaded from
/// the settings file by `dotenv`).
#[derive(Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Default::default()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn secret(&self, name: &str) -> Result<String> {
        dotenv::var(name).context(format!("secret {} is not set", name))
    }
}

#[derive(Default)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_secret(mut self, name: &str, value: &str) -> Self {
        self.secrets.insert(name.to_string(), value.to_string());
        self
    }
}

impl SecretProvider for StaticSecretProvider {
    fn secret(&self, name: &str) -> Result<String> {
        self.secrets
            .get(name)
            .cloned()
            .context(format!("secret {} is not set", name))
    }
}
