use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime settings for the HTTP service, read from the environment
/// (and from a `.env` file when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: String,
    /// Serve Swagger UI and the OpenAPI document.
    pub swagger: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            swagger: true,
        }
    }
}

/// A message produced while reading the config. Config is read before the
/// logger is set up, so these are handed back and logged by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: log::Level,
    pub message: String,
}

impl Notice {
    fn new(level: log::Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn log(&self) {
        log::log!(self.level, "{}", self.message);
    }
}

impl AppConfig {
    /// Loads `.env` into the process environment, then reads the config.
    /// `.env` may set `RUST_LOG`, so call this before initialising the logger
    /// and log the returned notices afterwards.
    pub fn from_env() -> (Self, Vec<Notice>) {
        let dotenv = dotenvy::dotenv();
        let (config, mut notices) = Self::from_lookup(|key| env::var(key).ok());
        if let Err(e) = dotenv {
            notices.insert(0, Notice::new(log::Level::Debug, format!("No .env file loaded: {e}")));
        }
        (config, notices)
    }

    /// Builds the config from an arbitrary key lookup. Unset or blank values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<Notice>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut notices = Vec::new();
        let bind_addr = lookup("GARDEN_BIND_ADDR")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.bind_addr);
        let swagger = match lookup("GARDEN_SWAGGER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                notices.push(Notice::new(
                    log::Level::Warn,
                    format!(
                        "GARDEN_SWAGGER: unrecognised boolean '{}', using {}",
                        raw.trim(),
                        defaults.swagger
                    ),
                ));
                defaults.swagger
            }),
            None => defaults.swagger,
        };
        (Self { bind_addr, swagger }, notices)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let (config, notices) = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AppConfig::default());
        assert!(notices.is_empty());
    }

    #[test]
    fn test_overrides_from_env() {
        let (config, notices) = AppConfig::from_lookup(lookup_from(&[
            ("GARDEN_BIND_ADDR", "127.0.0.1:9000"),
            ("GARDEN_SWAGGER", "off"),
        ]));
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert!(!config.swagger);
        assert!(notices.is_empty());
    }

    #[test]
    fn test_blank_bind_addr_and_bad_flag_fall_back() {
        let (config, _) = AppConfig::from_lookup(lookup_from(&[
            ("GARDEN_BIND_ADDR", "   "),
            ("GARDEN_SWAGGER", "maybe"),
        ]));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.swagger);
    }

    #[test]
    fn test_bad_flag_is_reported_not_logged() {
        let (_, notices) = AppConfig::from_lookup(lookup_from(&[("GARDEN_SWAGGER", " maybe ")]));
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, log::Level::Warn);
        assert!(notices[0].message.contains("'maybe'"));
        assert!(notices[0].message.contains("GARDEN_SWAGGER"));
    }
}
