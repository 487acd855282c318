use thiserror::Error;

pub const SECRET_KEY_VAR: &str = "SJ_SECRET_KEY";
pub const HH_API_URL_VAR: &str = "HH_API_URL";
pub const SJ_API_URL_VAR: &str = "SJ_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable '{0}' not set")]
    MissingVariable(&'static str),
}

/// Settings read once at startup and handed to the job site clients
pub struct Config {
    pub superjob_secret_key: String,
    pub hh_base_url: String,
    pub superjob_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let superjob_secret_key =
            non_empty(SECRET_KEY_VAR).ok_or(ConfigError::MissingVariable(SECRET_KEY_VAR))?;
        Ok(Config {
            superjob_secret_key,
            hh_base_url: non_empty(HH_API_URL_VAR)
                .unwrap_or_else(|| job_scraper::hh::DEFAULT_BASE_URL.to_owned()),
            superjob_base_url: non_empty(SJ_API_URL_VAR)
                .unwrap_or_else(|| job_scraper::superjob::DEFAULT_BASE_URL.to_owned()),
        })
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_secret_key() {
        let result = Config::from_lookup(lookup(&[]));
        assert!(matches!(result, Err(ConfigError::MissingVariable(SECRET_KEY_VAR))));
    }

    #[test]
    fn test_blank_secret_key() {
        let result = Config::from_lookup(lookup(&[(SECRET_KEY_VAR, "  ")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_urls() {
        let config = Config::from_lookup(lookup(&[(SECRET_KEY_VAR, "v3.r.secret")]))
            .expect("Config should load");
        assert_eq!(config.superjob_secret_key, "v3.r.secret");
        assert_eq!(config.hh_base_url, "https://api.hh.ru");
        assert_eq!(config.superjob_base_url, "https://api.superjob.ru");
    }

    #[test]
    fn test_url_overrides() {
        let config = Config::from_lookup(lookup(&[
            (SECRET_KEY_VAR, "v3.r.secret"),
            (HH_API_URL_VAR, "http://localhost:8080"),
            (SJ_API_URL_VAR, "http://localhost:8081"),
        ]))
        .expect("Config should load");
        assert_eq!(config.hh_base_url, "http://localhost:8080");
        assert_eq!(config.superjob_base_url, "http://localhost:8081");
    }
}
