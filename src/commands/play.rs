//! Play command

use anyhow::{bail, Result};

use lyricsync::cli::PlayArgs;
use lyricsync::lyrics::LyricTrack;
use lyricsync::player::{play_track, PlaybackOutcome, PlayerOptions};
use lyricsync::Config;

/// Apply command-line overrides on top of the loaded config.
fn effective_config(args: &PlayArgs, config: &Config) -> Config {
    let mut config = config.clone();
    if let Some(mode) = args.strategy {
        config.playback.strategy = mode;
    }
    if let Some(speed) = args.speed {
        config.playback.speed = speed;
    }
    if let Some(theme) = &args.theme {
        config.display.theme = theme.clone();
    }
    config.lyrics.strict |= args.strict;
    config
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config) -> Result<()> {
    let config = effective_config(args, config);
    let theme = config.theme()?;
    let speed = config.playback.speed;
    if !speed.is_finite() || speed <= 0.0 {
        bail!("Speed must be a positive number, got {}", speed);
    }

    let track = LyricTrack::load_checked(&args.file, args.format, config.lyrics.strict)?;
    if track.is_empty() {
        bail!("{} contains no timed lyrics", args.file.display());
    }

    let title = args
        .file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());
    let options = PlayerOptions {
        title: title.clone(),
        strategy: config.refresh_strategy(),
        speed,
        duration: args.duration,
        tail_secs: config.playback.tail_secs,
        seek_step: config.playback.seek_step_secs,
        context_lines: config.display.context_lines,
        theme: theme.clone(),
        autoplay: args.autoplay,
    };

    let display_title = track.title_or(&title).to_string();
    match play_track(track, options)? {
        PlaybackOutcome::Finished => {
            println!("{}", theme.success_text(&format!("Finished: {}", display_title)))
        }
        PlaybackOutcome::Quit => println!("{}", theme.secondary_text("Stopped.")),
    }
    Ok(())
}
