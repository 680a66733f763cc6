use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub sql_logging: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let sql_logging = match lookup("SQL_LOGGING") {
            None => false,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "SQL_LOGGING".to_string(),
                    reason: format!("expected true or false, got {:?}", value),
                })?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            sql_logging,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    /// Expect defaults for every optional variable
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://beacon")]))
            .unwrap();

        assert_eq!(config.database_url, "postgres://beacon");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert!(!config.sql_logging);
    }

    /// Expect Error when the database URL is missing
    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
        );
    }

    /// Expect Error when SQL logging is not a boolean
    #[test]
    fn rejects_invalid_sql_logging() {
        let result = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://beacon"),
            ("SQL_LOGGING", "loud"),
        ]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "SQL_LOGGING"
        ));
    }
}
