use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rodio::Decoder;
use tracing::{info, warn};

/// Open and decode an audio file without playing it.
pub fn decode_file(path: &Path) -> anyhow::Result<Decoder<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Decoder::new(BufReader::new(file)).with_context(|| format!("decoding {}", path.display()))
}

#[cfg(feature = "playback")]
fn play_blocking(path: &Path) -> anyhow::Result<()> {
    let source = decode_file(path)?;
    let mut stream = rodio::OutputStreamBuilder::open_default_stream().context("opening audio output")?;
    stream.log_on_drop(false);

    let sink = rodio::Sink::connect_new(stream.mixer());
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

#[cfg(not(feature = "playback"))]
fn play_blocking(path: &Path) -> anyhow::Result<()> {
    decode_file(path)?;
    anyhow::bail!("built without the `playback` feature; open {} in a media player", path.display())
}

/// Play a file on a short-lived thread so the UI keeps repainting.
pub fn play_in_background(path: PathBuf) {
    std::thread::spawn(move || {
        info!(path = %path.display(), "playing audio");
        if let Err(e) = play_blocking(&path) {
            warn!(path = %path.display(), error = %format!("{e:#}"), "audio playback failed");
        }
    });
}
