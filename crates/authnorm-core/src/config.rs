//! Configuration loaded from `config.toml` under the XDG config dir.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::assign::AssignStrategy;
use crate::case::CaseOptions;

/// Key-casing defaults (optional `[case]` section in config.toml).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseConfig {
    /// Keys never renamed by snake/camel conversion.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Keep the original key next to the renamed one.
    #[serde(default)]
    pub keep_original: bool,
}

impl CaseConfig {
    pub fn options(&self) -> CaseOptions {
        CaseOptions {
            keep_original: self.keep_original,
        }
    }
}

/// Global configuration loaded from `~/.config/authnorm/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthnormConfig {
    /// Key copy strategy: "native" (default) or "polyfill".
    #[serde(default)]
    pub assign_strategy: Option<AssignStrategy>,
    /// Optional casing defaults; if missing, nothing is excluded.
    #[serde(default)]
    pub case: Option<CaseConfig>,
}

impl AuthnormConfig {
    /// Casing section, or its defaults when absent.
    pub fn case_config(&self) -> CaseConfig {
        self.case.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("authnorm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AuthnormConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AuthnormConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<AuthnormConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: AuthnormConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = AuthnormConfig::default();
        assert!(cfg.assign_strategy.is_none());
        assert_eq!(cfg.case_config(), CaseConfig::default());
    }

    #[test]
    fn default_config_file_omits_trim_fields() {
        let toml = toml::to_string_pretty(&AuthnormConfig::default()).unwrap();
        assert!(!toml.contains("trim_fields"));
        let parsed: AuthnormConfig = toml::from_str(&toml).unwrap();
        assert!(parsed.assign_strategy.is_none());
        assert!(parsed.case.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = AuthnormConfig {
            assign_strategy: Some(AssignStrategy::Polyfill),
            case: Some(CaseConfig {
                exclude: vec!["rawId".into()],
                keep_original: true,
            }),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AuthnormConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.assign_strategy, cfg.assign_strategy);
        assert_eq!(parsed.case, cfg.case);
    }

    #[test]
    fn config_toml_empty_uses_defaults() {
        let cfg: AuthnormConfig = toml::from_str("").unwrap();
        assert!(cfg.case.is_none());
        assert!(cfg.assign_strategy.is_none());
    }

    #[test]
    fn config_toml_case_and_strategy() {
        let toml = r#"
            assign_strategy = "polyfill"

            [case]
            exclude = ["rawId", "client_id"]
            keep_original = true
        "#;
        let cfg: AuthnormConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.assign_strategy, Some(AssignStrategy::Polyfill));
        let case = cfg.case_config();
        assert_eq!(case.exclude, ["rawId", "client_id"]);
        assert!(case.options().keep_original);
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"assign_strategy = \"native\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.assign_strategy, Some(AssignStrategy::Native));
    }

    #[test]
    fn load_from_rejects_unknown_strategy() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"assign_strategy = \"turbo\"\n").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config file"));
    }
}
