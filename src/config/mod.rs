use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::tokens::{TokenStore, TokenValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

const APP_DIR: &str = "sheetkit";
const TOKENS_CONFIG_FILE: &str = "tokens.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read token config: {path}")]
    ReadConfig { path: PathBuf, source: io::Error },
    #[error("failed to parse token config")]
    ParseConfig(#[from] serde_json::Error),
}

/// Token values read from `tokens.json`, keyed by token name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenOverrides {
    pub values: BTreeMap<String, TokenValue>,
    /// Entries whose value is neither a string nor a number.
    pub invalid: Vec<String>,
}

/// Outcome of applying overrides to a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideReport {
    pub applied: Vec<String>,
    pub unknown: Vec<String>,
    pub invalid: Vec<String>,
}

impl TokenOverrides {
    pub fn parse(serialized: &str) -> ConfigResult<Self> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(serialized)?;
        let mut overrides = Self::default();
        for (name, value) in raw {
            match serde_json::from_value::<TokenValue>(value) {
                Ok(value) => {
                    overrides.values.insert(name, value);
                }
                Err(_) => overrides.invalid.push(name),
            }
        }
        Ok(overrides)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.invalid.is_empty()
    }

    /// Writes every override into `store`. Names the registry does not
    /// declare are skipped, never added.
    pub fn apply(&self, store: &mut TokenStore) -> OverrideReport {
        let mut report = OverrideReport {
            invalid: self.invalid.clone(),
            ..OverrideReport::default()
        };
        for (name, value) in &self.values {
            if store.set(name, value.clone()) {
                report.applied.push(name.clone());
            } else {
                report.unknown.push(name.clone());
            }
        }
        for name in &report.invalid {
            tracing::warn!(
                token = name.as_str(),
                "token override must be a string or number; ignoring"
            );
        }
        report
    }
}

pub fn load_token_overrides() -> ConfigResult<TokenOverrides> {
    let (xdg_config_home, home) = config_env_dirs();
    load_token_overrides_with(xdg_config_home.as_deref(), home.as_deref())
}

fn load_token_overrides_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<TokenOverrides> {
    let path = app_config_path(APP_DIR, TOKENS_CONFIG_FILE, xdg_config_home, home).map_err(
        |error| match error {
            ConfigPathError::MissingHomeDirectory => ConfigError::MissingHomeDirectory,
        },
    )?;
    if !path.exists() {
        tracing::debug!(?path, "no token config; using registry defaults");
        return Ok(TokenOverrides::default());
    }

    let serialized = fs::read_to_string(&path).map_err(|source| ConfigError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    TokenOverrides::parse(&serialized)
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{names, resolve_ms};

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("sheetkit-config-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn write_tokens(root: &Path, contents: &str) {
        let dir = root.join(APP_DIR);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(TOKENS_CONFIG_FILE), contents).unwrap();
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "sheetkit",
            "tokens.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/sheetkit/tokens.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("sheetkit", "tokens.json", None, Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/sheetkit/tokens.json"));
    }

    #[test]
    fn app_config_path_ignores_empty_xdg_config_home() {
        let path = app_config_path(
            "sheetkit",
            "tokens.json",
            Some(Path::new("")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/sheetkit/tokens.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("sheetkit", "tokens.json", None, None).unwrap_err();
        assert_eq!(error, ConfigPathError::MissingHomeDirectory);
    }

    #[test]
    fn missing_token_config_yields_no_overrides() {
        with_temp_root(|root| {
            let overrides = load_token_overrides_with(Some(root), None).unwrap();
            assert!(overrides.is_empty());
        });
    }

    #[test]
    fn token_config_overrides_are_applied_to_known_tokens_only() {
        with_temp_root(|root| {
            write_tokens(
                root,
                r#"{
                    "BOTTOM_SHEET_EXIT_DURATION": "450ms",
                    "SPRING_STIFFNESS_MEDIUM": 300,
                    "BOTTOM_SHEET_BLUR": "12px",
                    "BOTTOM_SHEET_OVERLAY_EXIT_EASING": ["ease"]
                }"#,
            );
            let overrides = load_token_overrides_with(Some(root), None).unwrap();
            let mut store = TokenStore::with_defaults();
            let key_count = store.len();

            let report = overrides.apply(&mut store);

            assert_eq!(
                report.applied,
                vec![
                    names::EXIT_DURATION.to_string(),
                    names::SPRING_STIFFNESS.to_string()
                ]
            );
            assert_eq!(report.unknown, vec!["BOTTOM_SHEET_BLUR".to_string()]);
            assert_eq!(
                report.invalid,
                vec![names::OVERLAY_EXIT_EASING.to_string()]
            );
            assert_eq!(store.len(), key_count);
            assert_eq!(resolve_ms(&store, names::EXIT_DURATION, 0), 450);
            assert_eq!(
                store.get(names::SPRING_STIFFNESS),
                Some(&TokenValue::Number(300.0))
            );
        });
    }

    #[test]
    fn token_config_reports_every_non_scalar_value() {
        let overrides = TokenOverrides::parse(
            r#"{
                "BOTTOM_SHEET_ENTER_DURATION": "640ms",
                "SPRING_MASS_DEFAULT": 2,
                "A": true,
                "B": null,
                "C": {"ms": 300},
                "D": ["300ms"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            overrides.values.get(names::ENTER_DURATION),
            Some(&TokenValue::from("640ms"))
        );
        assert_eq!(
            overrides.values.get(names::SPRING_MASS),
            Some(&TokenValue::Number(2.0))
        );
        assert_eq!(overrides.values.len(), 2);
        assert_eq!(overrides.invalid, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn token_config_rejects_non_object_payload() {
        with_temp_root(|root| {
            write_tokens(root, r#"["300ms"]"#);
            let error = load_token_overrides_with(Some(root), None).unwrap_err();
            assert!(matches!(error, ConfigError::ParseConfig(_)));
        });
    }

    #[test]
    fn token_config_requires_home_or_xdg() {
        let error = load_token_overrides_with(None, None).unwrap_err();
        assert!(matches!(error, ConfigError::MissingHomeDirectory));
    }
}
