use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ncg_core::{GaussianInt, ModelParameters};
use serde::Deserialize;

/// Env var naming a default config file when `--config` is absent.
pub const CONFIG_ENV: &str = "NCG_CONFIG";

/// Contents of a TOML config file:
///
/// ```toml
/// [model]
/// p = 1
/// q = 3
/// gamma5_prefactor = "i"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub model: ModelSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelSection {
    pub p: Option<usize>,
    pub q: Option<usize>,
    pub gamma5_prefactor: Option<GaussianInt>,
}

impl Config {
    /// Load from `path`, falling back to `$NCG_CONFIG`, then to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Merge command-line values over the file. Missing p or q count as 0;
    /// a missing prefactor is the one that makes the Euclidean gamma5
    /// square to +1.
    pub fn resolve(
        &self,
        p: Option<usize>,
        q: Option<usize>,
        prefactor: Option<GaussianInt>,
    ) -> ModelParameters {
        let p = p.or(self.model.p).unwrap_or(0);
        let q = q.or(self.model.q).unwrap_or(0);
        let params = ModelParameters::new(p, q);
        match prefactor.or(self.model.gamma5_prefactor) {
            Some(c) => params.with_gamma5_prefactor(c),
            None => params,
        }
    }
}
