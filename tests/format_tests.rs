// Host-side tests for time formatting and track metadata.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod format {
    include!("../src/core/format.rs");
}
mod track {
    include!("../src/core/track.rs");
}

use format::format_time;
use track::*;

#[test]
fn format_time_pads_seconds_only() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(5.0), "0:05");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(600.0), "10:00");
}

#[test]
fn format_time_truncates_fractions() {
    assert_eq!(format_time(599.9), "9:59");
    assert_eq!(format_time(59.999), "0:59");
}

#[test]
fn format_time_has_no_hour_rollover() {
    assert_eq!(format_time(3600.0), "60:00");
    assert_eq!(format_time(7325.0), "122:05");
}

#[test]
fn format_time_treats_invalid_input_as_zero() {
    assert_eq!(format_time(-3.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
    assert_eq!(format_time(f64::INFINITY), "0:00");
}

#[test]
fn default_track_and_download_name() {
    let t = TrackInfo::default();
    assert_eq!(t.src, DEFAULT_TRACK_SRC);
    assert_eq!(t.title, "Dreamer");
    assert_eq!(t.artist, "Ava");
    assert_eq!(t.download_filename(), "Dreamer - Ava.mp3");
}

#[test]
fn overrides_replace_only_given_values() {
    let t = TrackInfo::default().with_overrides(
        Some("media/night.mp3".to_string()),
        None,
        Some("Nox".to_string()),
    );
    assert_eq!(t.src, "media/night.mp3");
    assert_eq!(t.title, "Dreamer");
    assert_eq!(t.artist, "Nox");
    assert_eq!(t.download_filename(), "Dreamer - Nox.mp3");
}

#[test]
fn no_overrides_keeps_defaults() {
    let t = TrackInfo::new("a.mp3").with_overrides(None, None, None);
    let expected = TrackInfo {
        src: "a.mp3".into(),
        title: DEFAULT_TITLE.into(),
        artist: DEFAULT_ARTIST.into(),
    };
    assert_eq!(t, expected);
}
