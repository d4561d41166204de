//! Resolve command: JSON in, active line index out

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use lyricsync::cli::ResolveArgs;
use lyricsync::lyrics::{LyricTrack, ResolveRequest, ResolveResponse};
use lyricsync::resolver::resolve;

pub fn handle(args: &ResolveArgs) -> Result<()> {
    let index = match (&args.track, args.at) {
        (Some(path), Some(at)) => {
            let track = LyricTrack::load(path, args.format)?;
            resolve(at, &track)
        }
        _ => {
            let input = read_input(args.input.as_deref())?;
            let request = ResolveRequest::from_json_str(&input)?;
            if let Some(previous) = request.current_line_index {
                tracing::debug!(previous, "ignoring currentLineIndex from request");
            }
            let track = request.track()?;
            resolve(request.current_time, &track)
        }
    };

    tracing::debug!(?index, "resolved");
    let response = ResolveResponse::from_index(index);
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
