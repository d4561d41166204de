//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::lyrics::TrackFormat;
use crate::player::refresh::RefreshMode;

#[derive(Debug, Parser)]
#[command(name = "lyricsync")]
#[command(version, about = "Karaoke-style lyrics synchronized to a playback clock")]
#[command(long_about = "Karaoke-style lyrics synchronized to a playback clock.

Loads timed lyrics (JSON or LRC), works out which line is active at a given
time and plays them back in the terminal with a highlight that follows the
clock.

Examples:
  lyricsync play song.lrc
  lyricsync resolve < request.json
  lyricsync lines song.json --at 12.5")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log level requested on the command line, if any.
    pub fn log_level(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play lyrics in the terminal
    #[command(long_about = "Play lyrics in the terminal.

Press space to start, ? for key bindings and q to quit.")]
    Play(PlayArgs),

    /// Resolve the active line for a JSON request
    #[command(long_about = "Resolve the active line for a JSON request.

Reads {\"currentTime\": <secs>, \"lyricsData\": [...]} and prints
{\"currentLineIndex\": <n>}, with -1 when no line is active.

With --track and --at the lyrics come from a file instead.")]
    Resolve(ResolveArgs),

    /// List lyric lines with their time windows
    Lines(LinesArgs),

    /// Check a lyrics file for ordering and timing problems
    Check(CheckArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Lyrics file (.json or .lrc)
    pub file: PathBuf,

    /// Lyrics format (default: from the file extension)
    #[arg(long, value_enum)]
    pub format: Option<TrackFormat>,

    /// Refresh strategy
    #[arg(long, value_enum)]
    pub strategy: Option<RefreshMode>,

    /// Playback speed multiplier
    #[arg(long)]
    pub speed: Option<f64>,

    /// Session length in seconds (default: last line plus tail)
    #[arg(long)]
    pub duration: Option<f64>,

    /// Color theme (stage, classic, ocean)
    #[arg(long)]
    pub theme: Option<String>,

    /// Start playing immediately
    #[arg(long)]
    pub autoplay: bool,

    /// Refuse lyrics with validation issues
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// JSON request file, or - for stdin
    #[arg(long, short, conflicts_with = "track")]
    pub input: Option<PathBuf>,

    /// Playback time in seconds
    #[arg(long, requires = "track", allow_negative_numbers = true)]
    pub at: Option<f64>,

    /// Lyrics file to resolve against
    #[arg(long, requires = "at")]
    pub track: Option<PathBuf>,

    /// Lyrics format for --track
    #[arg(long, value_enum, requires = "track")]
    pub format: Option<TrackFormat>,
}

#[derive(Debug, Args)]
pub struct LinesArgs {
    /// Lyrics file (.json or .lrc)
    pub file: PathBuf,

    #[arg(long, value_enum)]
    pub format: Option<TrackFormat>,

    /// Mark the line active at this time
    #[arg(long, allow_negative_numbers = true)]
    pub at: Option<f64>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Lyrics file (.json or .lrc)
    pub file: PathBuf,

    #[arg(long, value_enum)]
    pub format: Option<TrackFormat>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file location
    Path,
    /// Add missing fields to the config file
    Migrate {
        /// Apply without prompting
        #[arg(long, short)]
        yes: bool,
    },
}
