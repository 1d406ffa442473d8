// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

fn play(track_name: &str, artist_name: &str, unix_timestamp_secs: i64) -> Play {
    Play {
        track_name: track_name.into(),
        artist_name: artist_name.into(),
        album_name: String::new(),
        album_image_url: None,
        played_at: UtcDateTimeMs::from_unix_timestamp_secs(unix_timestamp_secs),
        duration_ms: 0,
        track_url: String::new(),
        track_mbid: None,
        source: Source::Lastfm,
        spotify_uri: None,
    }
}

#[test]
fn key_format() {
    assert_eq!(
        "Windowlicker|Aphex Twin|1717243200",
        play("Windowlicker", "Aphex Twin", 1_717_243_200).key().as_str()
    );
}

#[test]
fn key_ignores_sub_second_precision() {
    let mut lhs = play("Track", "Artist", 1_717_243_200);
    let rhs = lhs.clone();
    lhs.played_at = lhs.played_at.saturating_add_millis(999);
    assert_eq!(lhs.key(), rhs.key());
}

#[test]
fn key_differs_by_play_time() {
    assert_ne!(
        play("Track", "Artist", 1_717_243_200).key(),
        play("Track", "Artist", 1_717_243_201).key()
    );
}

#[test]
fn validate() {
    assert!(play("Track", "", 0).is_valid());
    assert!(!play(" ", "Artist", 0).is_valid());
    let mut invalid = play("Track", "Artist", 0);
    invalid.track_mbid = Some(String::new());
    assert!(!invalid.is_valid());
}

#[test]
fn source_from_repr() {
    assert_eq!(Some(Source::Lastfm), Source::from_repr(0));
    assert_eq!(Some(Source::Spotify), Source::from_repr(1));
    assert_eq!(None, Source::from_repr(2));
}

#[test]
fn retain_first_play_per_track_case_insensitive() {
    let plays = vec![
        play("Song", "Band", 1),
        play("Other", "Band", 2),
        play("SONG", "band", 3),
        play("Song", "Another Band", 4),
    ];
    let unique = retain_first_play_per_track(plays, |play| play);
    let played_at_secs = unique
        .iter()
        .map(|play| play.played_at.unix_timestamp_secs())
        .collect::<Vec<_>>();
    assert_eq!(vec![1, 2, 4], played_at_secs);
}
