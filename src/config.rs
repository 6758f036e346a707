//! Numeric settings for the Titan functional calculus: built-in defaults + optional TOML config.
//!
//! - `FunmSettings::default()` → tolerances that suit `f64` work
//! - `FunmSettings::from_toml_file(path)` → load user overrides
//! - `FunmSettings::from_user_default_or_builtin()` → `funm.toml` in the config dir if present

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FunmSettings {
    /// Convergence tolerance of the Schur iteration.
    pub schur_eps: f64,
    /// Iteration cap of the Schur iteration; 0 means no cap.
    pub max_iterations: usize,
    /// Smallest pivot used when back-substituting triangular eigenvectors,
    /// relative to the largest entry of the Schur form.
    pub pivot_floor: f64,
}

impl Default for FunmSettings {
    fn default() -> Self {
        Self {
            schur_eps: f64::EPSILON,
            max_iterations: 0,
            pivot_floor: f64::EPSILON,
        }
    }
}

impl FunmSettings {
    /// Load from TOML file. Keys left out keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let cfg: FunmSettings = toml::from_str(&txt)
            .with_context(|| format!("parsing {}", path.display()))?;
        anyhow::ensure!(
            cfg.schur_eps > 0.0 && cfg.pivot_floor > 0.0,
            "{}: schur_eps and pivot_floor must be positive",
            path.display()
        );
        Ok(cfg)
    }

    /// Use the user config if present; otherwise built-in.
    pub fn from_user_default_or_builtin() -> Self {
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => return cfg,
                    Err(e) => eprintln!("(warn) {e:#}; using builtin settings"),
                }
            }
        }
        Self::default()
    }
}

/// `$TITAN_CONFIG_DIR/funm.toml`, else `~/.titan/funm.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("TITAN_CONFIG_DIR") {
        return Some(PathBuf::from(base).join("funm.toml"));
    }
    dirs_next::home_dir().map(|h| h.join(".titan").join("funm.toml"))
}
