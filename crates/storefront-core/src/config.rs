use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Largest page the storefront API accepts for a `products(first: ...)` connection.
const MAX_COLLECTION_PAGE_SIZE: usize = 250;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let defaults = AppConfig::default();

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(default),
        }
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;
    let log_level = or_default("STOREFRONT_LOG_LEVEL", &defaults.log_level);

    let root_category_handle = or_default(
        "STOREFRONT_ROOT_CATEGORY_HANDLE",
        &defaults.root_category_handle,
    );
    if root_category_handle.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ROOT_CATEGORY_HANDLE".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let max_category_depth =
        parse_usize("STOREFRONT_MAX_CATEGORY_DEPTH", defaults.max_category_depth)?;
    if max_category_depth == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_MAX_CATEGORY_DEPTH".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let collection_page_size = parse_usize(
        "STOREFRONT_COLLECTION_PAGE_SIZE",
        defaults.collection_page_size,
    )?;
    if !(1..=MAX_COLLECTION_PAGE_SIZE).contains(&collection_page_size) {
        return Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_COLLECTION_PAGE_SIZE".to_string(),
            reason: format!("must be between 1 and {MAX_COLLECTION_PAGE_SIZE}"),
        });
    }

    let fixtures_dir = lookup("STOREFRONT_FIXTURES_DIR")
        .map_or(defaults.fixtures_dir, PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        root_category_handle,
        max_category_depth,
        collection_page_size,
        fixtures_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;
    use std::path::Path;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    fn rejected_var(result: Result<AppConfig, ConfigError>) -> String {
        match result {
            Err(ConfigError::InvalidEnvVar { var, .. }) => var,
            other => panic!("expected InvalidEnvVar, got: {other:?}"),
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(
            parse_environment("development").unwrap(),
            Environment::Development
        );
        assert_eq!(parse_environment("test").unwrap(), Environment::Test);
        assert_eq!(
            parse_environment("production").unwrap(),
            Environment::Production
        );
    }

    #[test]
    fn parse_environment_unknown_fails() {
        let err = parse_environment("staging").unwrap_err();
        let ConfigError::InvalidEnvVar { var, .. } = err;
        assert_eq!(var, "STOREFRONT_ENV");
    }

    #[test]
    fn build_app_config_uses_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.root_category_handle, "hardware");
        assert_eq!(cfg.max_category_depth, 8);
        assert_eq!(cfg.collection_page_size, 50);
        assert_eq!(cfg.fixtures_dir, Path::new("./fixtures"));
    }

    #[test]
    fn build_app_config_reads_overrides() {
        let mut map = HashMap::new();
        map.insert("STOREFRONT_ENV", "production");
        map.insert("STOREFRONT_LOG_LEVEL", "debug");
        map.insert("STOREFRONT_ROOT_CATEGORY_HANDLE", "tools");
        map.insert("STOREFRONT_MAX_CATEGORY_DEPTH", "4");
        map.insert("STOREFRONT_COLLECTION_PAGE_SIZE", "250");
        map.insert("STOREFRONT_FIXTURES_DIR", "/srv/fixtures");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.root_category_handle, "tools");
        assert_eq!(cfg.max_category_depth, 4);
        assert_eq!(cfg.collection_page_size, 250);
        assert_eq!(cfg.fixtures_dir, Path::new("/srv/fixtures"));
    }

    #[test]
    fn build_app_config_rejects_invalid_depth() {
        let mut map = HashMap::new();
        map.insert("STOREFRONT_MAX_CATEGORY_DEPTH", "deep");
        let result = build_app_config(lookup_from_map(&map));
        assert_eq!(rejected_var(result), "STOREFRONT_MAX_CATEGORY_DEPTH");
    }

    #[test]
    fn build_app_config_rejects_zero_depth() {
        let mut map = HashMap::new();
        map.insert("STOREFRONT_MAX_CATEGORY_DEPTH", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert_eq!(rejected_var(result), "STOREFRONT_MAX_CATEGORY_DEPTH");
    }

    #[test]
    fn build_app_config_rejects_page_size_out_of_range() {
        for raw in ["0", "251"] {
            let mut map = HashMap::new();
            map.insert("STOREFRONT_COLLECTION_PAGE_SIZE", raw);
            let result = build_app_config(lookup_from_map(&map));
            assert_eq!(rejected_var(result), "STOREFRONT_COLLECTION_PAGE_SIZE");
        }
    }

    #[test]
    fn build_app_config_rejects_blank_root_handle() {
        let mut map = HashMap::new();
        map.insert("STOREFRONT_ROOT_CATEGORY_HANDLE", "  ");
        let result = build_app_config(lookup_from_map(&map));
        assert_eq!(rejected_var(result), "STOREFRONT_ROOT_CATEGORY_HANDLE");
    }
}
