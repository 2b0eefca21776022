//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level simulation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation settings.
    pub terrain: TerrainConfig,
    /// Simulation clock settings.
    pub clock: ClockConfig,
    /// Rain and cloud settings.
    pub weather: WeatherConfig,
    /// Light/object placement settings.
    pub scene: SceneConfig,
    /// Creature population settings.
    pub creatures: CreatureConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Terrain configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Seed for the noise field and every derived random stream.
    pub seed: u64,
    /// Side length of the square heightfield in world units.
    pub size: f32,
    /// Grid segments per side. The mesh has `(segments + 1)^2` vertices.
    pub segments: u32,
    /// Noise octaves as `(frequency, amplitude)` pairs.
    pub octaves: Vec<(f64, f64)>,
    /// Side length of the flat fallback ground plane.
    pub ground_size: f32,
    /// Number of decorative trees scattered around the origin.
    pub tree_count: u32,
    /// Minimum scatter radius for trees.
    pub tree_min_radius: f32,
    /// Maximum scatter radius for trees.
    pub tree_max_radius: f32,
}

/// Simulation clock configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Hour of day at startup, in `[0, 24)`.
    pub start_hour: f32,
    /// Initial speed multiplier.
    pub speed_multiplier: f32,
    /// Whether the clock runs at startup.
    pub playing: bool,
    /// Simulated hours per wall-clock second at speed 1.
    pub hours_per_second: f32,
    /// Radius of the sun/moon orbit circle.
    pub orbit_radius: f32,
}

/// Rain and cloud configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
    /// Whether rain is falling at startup.
    pub rain_enabled: bool,
    /// Number of rain particles. Fixed for the process lifetime.
    pub rain_count: u32,
    /// Fall speed multiplier (0.1 - 3.0).
    pub rain_intensity: f32,
    /// Linear RGB color of rain drops.
    pub rain_color: [f32; 3],
    /// Rain drop opacity (0.0 - 1.0).
    pub rain_opacity: f32,
    /// Rendered drop size.
    pub rain_drop_size: f32,
    /// Number of clouds.
    pub cloud_count: u32,
    /// Cloud drift speed in world units per second.
    pub wind_speed: f32,
}

/// Light/object placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Half-extent of the random horizontal offset applied to new entities.
    pub placement_spread: f32,
}

/// Creature population configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CreatureConfig {
    /// Number of birds.
    pub bird_count: u32,
    /// Number of frogs.
    pub frog_count: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Log a celestial summary every time the simulated hour crosses an integer.
    pub log_hourly: bool,
}

// --- Default implementations ---

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            size: 200.0,
            segments: 128,
            octaves: vec![(0.01, 10.0), (0.05, 5.0), (0.1, 2.0)],
            ground_size: 200.0,
            tree_count: 50,
            tree_min_radius: 20.0,
            tree_max_radius: 80.0,
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_hour: 12.0,
            speed_multiplier: 1.0,
            playing: true,
            hours_per_second: 0.1,
            orbit_radius: 100.0,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            rain_enabled: false,
            rain_count: 1000,
            rain_intensity: 1.0,
            rain_color: [0.67, 0.67, 0.67],
            rain_opacity: 0.6,
            rain_drop_size: 0.1,
            cloud_count: 20,
            wind_speed: 1.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            placement_spread: 10.0,
        }
    }
}

impl Default for CreatureConfig {
    fn default() -> Self {
        Self {
            bird_count: 5,
            frog_count: 3,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_hourly: true,
        }
    }
}

/// Platform config directory for Glade (`<config_dir>/glade`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("glade"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(false)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("segments: 128"));
        assert!(ron_str.contains("rain_count: 1000"));
    }

    #[test]
    fn test_default_octaves_match_terrain_layers() {
        let terrain = TerrainConfig::default();
        assert_eq!(terrain.octaves, vec![(0.01, 10.0), (0.05, 5.0), (0.1, 2.0)]);
        assert_eq!(terrain.tree_count, 50);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(terrain: (), clock: (), weather: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.creatures, CreatureConfig::default());
        assert_eq!(config.scene, SceneConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let ron_str = "(clock: (start_hour: 5.5))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.clock.start_hour, 5.5);
        assert_eq!(config.clock.hours_per_second, 0.1);
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.seed = 1234;
        config.weather.rain_enabled = true;
        config.creatures.bird_count = 9;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.weather.wind_speed = 4.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().weather.wind_speed, 4.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_ron_comments_preserved() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
