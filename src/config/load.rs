use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then overlays environment
/// variables (prefix `HOI4_RADIO__`) and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("HOI4_RADIO")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let game_dir = self.output.game_dir.trim();
        if game_dir.is_empty() {
            return Err("output.game_dir must not be empty".to_string());
        }
        if game_dir.contains(['/', '\\']) {
            return Err("output.game_dir must be a single directory name".to_string());
        }
        if self.transcode.ffmpeg_path.as_os_str().is_empty() {
            return Err("transcode.ffmpeg_path must not be empty".to_string());
        }
        if self.transcode.codec.trim().is_empty() {
            return Err("transcode.codec must not be empty".to_string());
        }
        if let Some(q) = self.transcode.quality {
            if !(-1..=10).contains(&q) {
                return Err(format!("transcode.quality must be in -1..=10, got {q}"));
            }
        }
        Ok(())
    }

    /// Render the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `HOI4_RADIO_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("HOI4_RADIO_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/hoi4-radio/config.toml`
/// or `~/.config/hoi4-radio/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("hoi4-radio").join("config.toml"))
}
