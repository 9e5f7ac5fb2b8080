use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use std::path::PathBuf;

/// Layered application configuration.
///
/// Every field has a default, so the binary runs without a config file;
/// `config/default.toml` and `THERMOSTAT__`-prefixed environment variables
/// override it (e.g. `THERMOSTAT__GRID__DEFAULT_OUTPUT=sweep.csv`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub grid: GridConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Sample spacing of every variable's universe.
    pub universe_step: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Output file used when the CSV prompt is left empty.
    pub default_output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { universe_step: 1.0 }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_output: PathBuf::from("grid.csv"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("THERMOSTAT__").split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_any_source() {
        let cfg = Config::default();
        assert_eq!(cfg.engine.universe_step, 1.0);
        assert_eq!(cfg.grid.default_output, PathBuf::from("grid.csv"));
    }

    #[test]
    fn toml_overrides_defaults() {
        let cfg: Config = Figment::new()
            .merge(Toml::string("[engine]\nuniverse_step = 0.5"))
            .extract()
            .unwrap();
        assert_eq!(cfg.engine.universe_step, 0.5);
        assert_eq!(cfg.grid.default_output, PathBuf::from("grid.csv"));
    }
}
