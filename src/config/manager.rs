use super::{
    corpus::CorpusConfig, evolution::EvolutionConfig, output::OutputConfig, scoring::ScoringConfig,
    traits::ConfigSection,
};
use crate::error::{MelodevoError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of environment overrides, e.g. `MELODEVO__EVOLUTION__GENERATIONS=20`.
pub const ENV_PREFIX: &str = "MELODEVO";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub scoring: ScoringConfig,
    pub corpus: CorpusConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.evolution.validate()?;
        self.scoring.validate()?;
        self.corpus.validate()?;
        self.output.validate()?;
        Ok(())
    }

    /// Layer an optional TOML file and `MELODEVO__*` environment variables
    /// over the defaults, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(MelodevoError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Parse a TOML document without consulting the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::connectors::CorpusMode;
    use crate::engines::generation::objective::OptimizationDirection;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [evolution]
            generations = 5
            seed = 42
            direction = "maximize"

            [scoring]
            key_name = "G"
            scale_type = "mixolydian"

            [corpus]
            path = "songs"
            mode = "main_tracks"
            "#,
        )
        .unwrap();

        assert_eq!(config.evolution.generations, 5);
        assert_eq!(config.evolution.seed, Some(42));
        assert_eq!(config.evolution.direction, OptimizationDirection::Maximize);
        assert_eq!(config.evolution.crossover_rate, 0.8);
        assert_eq!(config.scoring.key_name, "G");
        assert_eq!(config.scoring.alpha, 1.0);
        assert_eq!(config.corpus.mode, CorpusMode::MainTracks);
        assert_eq!(config.corpus.min_notes, 5);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_toml_values_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [evolution]
            mutation_rate = 2.0
            "#,
        );
        assert!(matches!(result, Err(MelodevoError::Configuration(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir().join(format!("melodevo-config-{}.toml", std::process::id()));

        let mut config = AppConfig::default();
        config.evolution.generations = 7;
        config.scoring.scale_type = "dorian".to_string();
        config.save_to_file(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let reloaded = AppConfig::from_toml_str(&contents).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_missing_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/melodevo.toml")));
        assert!(matches!(result, Err(MelodevoError::Configuration(_))));
    }
}
