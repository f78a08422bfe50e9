use crate::audio::{AudioSink, PlaybackRequest};
use crate::config::Config;
use crate::detect::PatternTable;
use crate::error::DetectError;
use crate::events::{HostEvent, MessageCreate, MessageState, ReactionAdd, VoiceChannelEffect};
use crate::host::Host;
use crate::sounds::{Sound, SoundLibrary};
use std::cell::RefCell;
use std::time::Duration;

pub const REPEAT_DELAY: Duration = Duration::from_millis(300);

// Locators are derived from config, so both are swapped together.
#[derive(Clone)]
struct Settings {
    config: Config,
    library: SoundLibrary,
}

impl Settings {
    fn new(config: Config) -> Self {
        let library = SoundLibrary::from_config(&config);
        Self { config, library }
    }
}

/// Turns chat events into playback requests. Each event works on the
/// settings current when it started; [`Driver::update_config`] applies to
/// later events.
pub struct Driver<H, S> {
    settings: RefCell<Settings>,
    table: &'static PatternTable,
    host: H,
    sink: S,
}

impl<H: Host, S: AudioSink> Driver<H, S> {
    pub fn new(config: Config, host: H, sink: S) -> Self {
        Self {
            settings: RefCell::new(Settings::new(config)),
            table: PatternTable::builtin(),
            host,
            sink,
        }
    }

    pub fn update_config(&self, config: Config) {
        *self.settings.borrow_mut() = Settings::new(config);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns how many playback requests reached the sink.
    pub async fn handle(&self, event: HostEvent) -> Result<usize, DetectError> {
        match event {
            HostEvent::MessageCreate(event) => self.on_message(&event).await,
            HostEvent::ReactionAdd(event) => Ok(self.on_reaction(&event)),
            HostEvent::VoiceChannelEffect(event) => Ok(self.on_voice_effect(&event)),
        }
    }

    pub async fn on_message(&self, event: &MessageCreate) -> Result<usize, DetectError> {
        let settings = self.settings.borrow().clone();
        let config = &settings.config;
        if event.optimistic {
            return Ok(0);
        }

        let message = &event.message;
        if message.state == Some(MessageState::Sending) {
            return Ok(0);
        }

        if let Some(author) = &message.author {
            if config.ignore_bots && author.bot {
                tracing::debug!(author = %author.id, "ignoring bot message");
                return Ok(0);
            }
            if config.ignore_blocked && self.host.is_blocked(&author.id) {
                tracing::debug!(author = %author.id, "ignoring blocked author");
                return Ok(0);
            }
        }

        let content = match message.content.as_deref() {
            Some(content) if !content.is_empty() => content,
            _ => return Ok(0),
        };

        if !self.is_selected(&event.channel_id) {
            return Ok(0);
        }

        let occurrences = self.table.occurrences(content, config.emoji_sound_limit)?;

        let mut played = 0;
        for occurrence in occurrences {
            tracing::info!(
                sound = %occurrence.sound,
                count = occurrence.count,
                channel_id = %event.channel_id,
                "playing sound for message"
            );
            for _ in 0..occurrence.count {
                if self.play(occurrence.sound, &settings) {
                    played += 1;
                }
                tokio::time::sleep(REPEAT_DELAY).await;
            }
        }

        Ok(played)
    }

    pub fn on_reaction(&self, event: &ReactionAdd) -> usize {
        let settings = self.settings.borrow().clone();
        let config = &settings.config;
        if event.optimistic {
            return 0;
        }

        if config.ignore_bots {
            if let Some(user) = self.host.user(&event.user_id) {
                if user.bot {
                    tracing::debug!(user = %user.id, "ignoring bot reaction");
                    return 0;
                }
            }
        }

        if config.ignore_blocked {
            if let Some(author) = event.message_author_id.as_deref() {
                if self.host.is_blocked(author) {
                    tracing::debug!(author, "ignoring reaction on blocked author");
                    return 0;
                }
            }
        }

        if !self.is_selected(&event.channel_id) {
            return 0;
        }

        match event.emoji.name.as_deref() {
            Some(name) => self.play_named(name, &settings),
            None => 0,
        }
    }

    pub fn on_voice_effect(&self, event: &VoiceChannelEffect) -> usize {
        let settings = self.settings.borrow().clone();
        let name = event
            .emoji
            .as_ref()
            .and_then(|emoji| emoji.name.as_deref())
            .filter(|name| !name.is_empty());

        match name {
            Some(name) => self.play_named(name, &settings),
            None => 0,
        }
    }

    fn is_selected(&self, channel_id: &str) -> bool {
        self.host.selected_channel_id().as_deref() == Some(channel_id)
    }

    fn play_named(&self, name: &str, settings: &Settings) -> usize {
        let Some(sound) = self.table.classify(name) else {
            tracing::debug!(name, "no sound for emoji");
            return 0;
        };
        usize::from(self.play(sound, settings))
    }

    fn play(&self, sound: Sound, settings: &Settings) -> bool {
        let config = &settings.config;
        let Some(locator) = settings.library.dispatch(sound, config) else {
            return false;
        };

        if !config.trigger_when_unfocused && !self.host.window_focused() {
            tracing::debug!(sound = %sound, "window unfocused; skipping");
            return false;
        }

        let request = PlaybackRequest::new(sound, locator, config.volume);
        if let Err(err) = self.sink.play(&request) {
            tracing::warn!(sound = %sound, error = ?err, "playback failed");
        }
        true
    }
}
