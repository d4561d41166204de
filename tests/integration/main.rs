//! Integration tests for the lyricsync binary

mod helpers;

mod check_test;
mod cli_test;
mod config_test;
mod lines_test;
mod resolve_test;
