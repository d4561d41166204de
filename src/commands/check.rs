//! Check command: report integrity issues in a lyrics file

use anyhow::{bail, Result};

use lyricsync::cli::CheckArgs;
use lyricsync::lyrics::{validate, LyricTrack};

use super::current_theme;

pub fn handle(args: &CheckArgs) -> Result<()> {
    let theme = current_theme();
    let track = LyricTrack::load(&args.file, args.format)?;
    let issues = validate::check(&track);

    if issues.is_empty() {
        println!(
            "{}",
            theme.success_text(&format!(
                "{}: {} lines, no issues",
                args.file.display(),
                track.len()
            ))
        );
        return Ok(());
    }

    for issue in &issues {
        println!("{}", theme.error_text(&format!("{}: {}", args.file.display(), issue)));
    }
    bail!("{} issue(s) found in {}", issues.len(), args.file.display())
}
