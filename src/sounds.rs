use crate::config::{Config, Quality};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// File path or URL, whatever the sink knows how to play.
pub type Locator = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    #[value(alias = "🗿")]
    Moyai,
    Huhcat,
    What,
    Chadge,
    Gayge,
    Pipe,
    Bonk,
    Sus,
}

impl Sound {
    pub const ALL: [Sound; 8] = [
        Sound::Moyai,
        Sound::Huhcat,
        Sound::What,
        Sound::Chadge,
        Sound::Gayge,
        Sound::Pipe,
        Sound::Bonk,
        Sound::Sus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sound::Moyai => "moyai",
            Sound::Huhcat => "huhcat",
            Sound::What => "what",
            Sound::Chadge => "chadge",
            Sound::Gayge => "gayge",
            Sound::Pipe => "pipe",
            Sound::Bonk => "bonk",
            Sound::Sus => "sus",
        }
    }

    pub fn default_file(self) -> &'static str {
        match self {
            Sound::Moyai => "moyai.mp3",
            Sound::Huhcat => "huhcat.mp3",
            Sound::What => "prowler.mp3",
            Sound::Chadge => "rizz.mp3",
            Sound::Gayge => "gay.mp3",
            Sound::Pipe => "metalpipe.mp3",
            Sound::Bonk => "bonk.mp3",
            Sound::Sus => "sus.mp3",
        }
    }

    pub fn default_hd_file(self) -> Option<&'static str> {
        match self {
            Sound::Moyai => Some("moyai_hd.wav"),
            _ => None,
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct SoundLibrary {
    normal: HashMap<Sound, Locator>,
    hd: HashMap<Sound, Locator>,
}

impl SoundLibrary {
    pub fn from_config(config: &Config) -> Self {
        let dir = config.default_sounds_dir();
        let mut normal = HashMap::new();
        let mut hd = HashMap::new();

        for sound in Sound::ALL {
            let overrides = config.sounds.get(&sound);

            let locator = overrides
                .and_then(|cfg| cfg.locator.clone())
                .unwrap_or_else(|| resolve(&dir, sound.default_file()));
            normal.insert(sound, locator);

            let hd_locator = overrides
                .and_then(|cfg| cfg.hd_locator.clone())
                .or_else(|| sound.default_hd_file().map(|file| resolve(&dir, file)));
            if let Some(hd_locator) = hd_locator {
                hd.insert(sound, hd_locator);
            }
        }

        Self { normal, hd }
    }

    pub fn dispatch(&self, sound: Sound, config: &Config) -> Option<Locator> {
        if !config.sound_enabled(sound) {
            tracing::debug!(sound = %sound, "sound disabled; skipping");
            return None;
        }

        if config.quality == Quality::Hd {
            if let Some(locator) = self.hd.get(&sound) {
                return Some(locator.clone());
            }
        }

        self.normal.get(&sound).cloned()
    }
}

fn resolve(dir: &Path, file: &str) -> Locator {
    let path: PathBuf = dir.join(file);
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SoundConfig;

    fn config() -> Config {
        let mut config = Config::default();
        config.sounds_dir = Some(PathBuf::from("/srv/sounds"));
        config
    }

    #[test]
    fn hd_quality_selects_hd_moyai() {
        let mut config = config();
        let library = SoundLibrary::from_config(&config);

        let normal = library.dispatch(Sound::Moyai, &config).unwrap();
        assert!(normal.ends_with("moyai.mp3"));

        config.quality = Quality::Hd;
        let hd = library.dispatch(Sound::Moyai, &config).unwrap();
        assert!(hd.ends_with("moyai_hd.wav"));
    }

    #[test]
    fn hd_quality_falls_back_when_no_variant() {
        let mut config = config();
        config.quality = Quality::Hd;
        let library = SoundLibrary::from_config(&config);
        let locator = library.dispatch(Sound::Bonk, &config).unwrap();
        assert!(locator.ends_with("bonk.mp3"));
    }

    #[test]
    fn disabled_sound_resolves_nothing() {
        let mut config = config();
        config.sounds.insert(
            Sound::Moyai,
            SoundConfig {
                enabled: false,
                ..SoundConfig::default()
            },
        );
        let library = SoundLibrary::from_config(&config);
        assert_eq!(library.dispatch(Sound::Moyai, &config), None);
        assert!(library.dispatch(Sound::Sus, &config).is_some());
    }

    #[test]
    fn locator_override_is_used_verbatim() {
        let mut config = config();
        config.sounds.insert(
            Sound::Pipe,
            SoundConfig {
                locator: Some("https://cdn.example/pipe.ogg".to_string()),
                ..SoundConfig::default()
            },
        );
        let library = SoundLibrary::from_config(&config);
        assert_eq!(
            library.dispatch(Sound::Pipe, &config).as_deref(),
            Some("https://cdn.example/pipe.ogg")
        );
    }
}
