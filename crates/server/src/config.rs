use std::{env, net::SocketAddr};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid BIND_ADDR '{value}': {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub oidc_issuer_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine, the variables may come from the environment
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let oidc_issuer_url = required("OIDC_ISSUER_URL")?;

        let raw_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            database_url,
            bind_addr,
            oidc_issuer_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_bind_addr() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://localhost/sis"),
            ("OIDC_ISSUER_URL", "https://idp.example.edu"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.database_url, "postgres://localhost/sis");
    }

    #[test]
    fn test_missing_and_invalid_values() {
        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[("OIDC_ISSUER_URL", "https://idp.example.edu")])),
            Err(ConfigError::Missing("DATABASE_URL"))
        ));

        assert!(matches!(
            ServerConfig::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://localhost/sis"),
                ("OIDC_ISSUER_URL", "https://idp.example.edu"),
                ("BIND_ADDR", "localhost"),
            ])),
            Err(ConfigError::BindAddr { .. })
        ));
    }
}
