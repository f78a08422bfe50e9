use super::renderer;
use crate::sounds::{Locator, Sound};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackRequest {
    pub sound: Sound,
    pub locator: Locator,
    pub volume: f32,
    pub requested_at: DateTime<Utc>,
}

impl PlaybackRequest {
    pub fn new(sound: Sound, locator: Locator, volume: f32) -> Self {
        Self {
            sound,
            locator,
            volume,
            requested_at: Utc::now(),
        }
    }
}

/// Destination for playback requests. Playback is fire-and-forget: callers
/// log an error and move on.
pub trait AudioSink {
    fn play(&self, request: &PlaybackRequest) -> anyhow::Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AfplaySink;

impl AudioSink for AfplaySink {
    fn play(&self, request: &PlaybackRequest) -> anyhow::Result<()> {
        if renderer::is_remote(&request.locator) {
            tracing::warn!(
                sound = %request.sound,
                locator = %request.locator,
                "remote locators are not fetched; skipping"
            );
            return Ok(());
        }

        renderer::spawn_file(Path::new(&request.locator), request.volume)
            .with_context(|| format!("play {}", request.sound))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PrintSink;

impl AudioSink for PrintSink {
    fn play(&self, request: &PlaybackRequest) -> anyhow::Result<()> {
        let line = serde_json::to_string(request).context("serialize playback request")?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}").context("write playback request")?;
        stdout.flush()?;
        Ok(())
    }
}
