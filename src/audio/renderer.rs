use anyhow::{bail, Context};
use std::path::Path;
use std::process::Command;

pub fn is_remote(locator: &str) -> bool {
    locator.starts_with("http://") || locator.starts_with("https://")
}

pub fn spawn_file(path: &Path, volume: f32) -> anyhow::Result<()> {
    if !path.exists() {
        bail!("sound file missing: {}", path.display());
    }

    let mut child = Command::new("afplay")
        .arg("-v")
        .arg(volume.to_string())
        .arg(path)
        .spawn()
        .with_context(|| format!("play audio with afplay: {}", path.display()))?;

    let shown = path.display().to_string();
    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            tracing::warn!(path = %shown, %status, "afplay exited with failure");
        }
        Err(err) => tracing::warn!(path = %shown, error = ?err, "wait for afplay"),
        _ => {}
    });

    Ok(())
}
