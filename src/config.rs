use crate::sounds::Sound;
use anyhow::{bail, Context};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_SOUND_LIMIT: usize = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_volume")]
    pub volume: f32,
    #[serde(default)]
    pub quality: Quality,
    #[serde(default = "default_true")]
    pub trigger_when_unfocused: bool,
    #[serde(default = "default_true")]
    pub ignore_bots: bool,
    #[serde(default = "default_true")]
    pub ignore_blocked: bool,
    #[serde(default = "default_sound_limit")]
    pub emoji_sound_limit: usize,
    #[serde(default)]
    pub sounds_dir: Option<PathBuf>,
    #[serde(default)]
    pub sounds: HashMap<Sound, SoundConfig>,
    #[serde(default)]
    pub blocked_users: Vec<String>,
    #[serde(default)]
    pub bot_users: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    #[serde(alias = "normal")]
    Normal,
    #[serde(rename = "HD", alias = "hd")]
    Hd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub locator: Option<String>,
    #[serde(default)]
    pub hd_locator: Option<String>,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            locator: None,
            hd_locator: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        if let Some(path) = Self::project_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        if let Ok(path) = Self::default_path() {
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }

        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config at {}", path.display()))?;
        let mut config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("parse config at {}", path.display()))?;
        config.apply_defaults();
        Ok(config)
    }

    pub fn init_default() -> anyhow::Result<PathBuf> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config = Self::default();
        fs::write(&path, serde_json::to_string_pretty(&config)?)?;
        Ok(path)
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        let base = BaseDirs::new().context("unable to resolve home directory")?;
        Ok(base.config_dir().join("emoji-chime").join("config.json"))
    }

    pub fn default_sounds_dir(&self) -> PathBuf {
        if let Some(dir) = &self.sounds_dir {
            return dir.clone();
        }
        PathBuf::from("sounds")
    }

    pub fn sound_enabled(&self, sound: Sound) -> bool {
        self.sounds.get(&sound).map(|cfg| cfg.enabled).unwrap_or(true)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.volume) {
            bail!("volume must be between 0.0 and 1.0");
        }

        if self.emoji_sound_limit > MAX_SOUND_LIMIT {
            bail!("emoji_sound_limit must be at most {MAX_SOUND_LIMIT}");
        }

        if let Some(dir) = &self.sounds_dir {
            if !dir.is_dir() {
                bail!("sounds_dir not found: {}", dir.display());
            }
        }

        Ok(())
    }

    fn apply_defaults(&mut self) {
        for sound in Sound::ALL {
            self.sounds.entry(sound).or_default();
        }
    }

    fn project_path() -> Option<PathBuf> {
        Some(PathBuf::from("emoji-chime.json"))
    }
}

impl Default for Config {
    fn default() -> Self {
        let sounds = Sound::ALL
            .into_iter()
            .map(|sound| (sound, SoundConfig::default()))
            .collect();

        Self {
            volume: default_volume(),
            quality: Quality::Normal,
            trigger_when_unfocused: true,
            ignore_bots: true,
            ignore_blocked: true,
            emoji_sound_limit: default_sound_limit(),
            sounds_dir: None,
            sounds,
            blocked_users: Vec::new(),
            bot_users: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f32 {
    0.5
}

fn default_sound_limit() -> usize {
    10
}
