// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::{
    matching::{suggest, suggest_batch},
    util::clock::UtcDateTimeMs,
};

use super::*;

const PHOTO_TIME_SECS: i64 = 1_717_243_200;

fn new_play(track_name: &str, played_at_secs: i64) -> _core::Play {
    _core::Play {
        track_name: track_name.into(),
        artist_name: "Band".into(),
        album_name: String::new(),
        album_image_url: None,
        played_at: UtcDateTimeMs::from_unix_timestamp_secs(played_at_secs),
        duration_ms: 0,
        track_url: String::new(),
        track_mbid: None,
        source: Default::default(),
        spotify_uri: None,
    }
}

fn new_photo(google_photo_id: &str, creation_time_secs: i64) -> _core::Photo {
    _core::Photo {
        google_photo_id: google_photo_id.into(),
        base_url: format!("https://example.com/{google_photo_id}"),
        filename: String::new(),
        mime_type: mime::IMAGE_JPEG,
        creation_time: UtcDateTimeMs::from_unix_timestamp_secs(creation_time_secs),
        width: None,
        height: None,
        local_path: None,
    }
}

#[test]
fn serialize_track_suggestion_flat() {
    let photo_time = UtcDateTimeMs::from_unix_timestamp_secs(1_717_243_200);
    let play = _core::Play {
        track_name: "Song".into(),
        artist_name: "Band".into(),
        album_name: "Album".into(),
        album_image_url: Some("https://example.com/cover.png".into()),
        played_at: UtcDateTimeMs::from_unix_timestamp_secs(1_717_243_200 - 600),
        duration_ms: 0,
        track_url: String::new(),
        track_mbid: None,
        source: Default::default(),
        spotify_uri: None,
    };
    let plays = [(42_i64, play)];
    let suggestions = suggest(photo_time, 3, plays.iter(), 5).unwrap();
    let suggestion = TrackSuggestion::from(suggestions.into_iter().next().unwrap());
    let json = serde_json::to_value(&suggestion).unwrap();
    assert_eq!(42, json["trackId"]);
    assert_eq!("Song", json["trackName"]);
    assert_eq!("Band", json["artistName"]);
    assert_eq!("Album", json["albumName"]);
    assert_eq!("https://example.com/cover.png", json["albumImageUrl"]);
    assert_eq!("2024-06-01T11:50:00Z", json["playedAt"]);
    assert_eq!(94, json["confidenceScore"]);
    assert_eq!(10, json["timeDifferenceMinutes"]);
}

#[test]
fn serialize_suggestions_per_photo() {
    let plays = vec![
        (1_i64, new_play("far", PHOTO_TIME_SECS - 170 * 60)),
        (2_i64, new_play("near", PHOTO_TIME_SECS - 10 * 60)),
    ];
    let photos = [
        (7_i64, new_photo("p1", PHOTO_TIME_SECS)),
        (8_i64, new_photo("p2", PHOTO_TIME_SECS + 1_000 * 60)),
    ];
    let first_suggestions = suggest(
        photos[0].1.creation_time,
        3,
        plays.iter().cloned(),
        5,
    )
    .unwrap();
    let per_photo = vec![
        PhotoSuggestions::new(photos[0].0, photos[0].1.clone(), first_suggestions),
        PhotoSuggestions::new(
            photos[1].0,
            photos[1].1.clone(),
            Vec::<_core::Suggestion<(i64, _core::Play)>>::new(),
        ),
    ];
    let json = serde_json::to_value(&per_photo).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(2, items.len());

    assert_eq!(7, items[0]["photoId"]);
    assert_eq!("p1", items[0]["photo"]["googlePhotoId"]);
    assert_eq!("image/jpeg", items[0]["photo"]["mimeType"]);
    assert_eq!("2024-06-01T12:00:00Z", items[0]["photo"]["creationTime"]);
    let tracks = items[0]["suggestedTracks"].as_array().unwrap();
    assert_eq!(2, tracks.len());
    assert_eq!(2, tracks[0]["trackId"]);
    assert_eq!("near", tracks[0]["trackName"]);
    assert_eq!(94, tracks[0]["confidenceScore"]);
    assert_eq!(10, tracks[0]["timeDifferenceMinutes"]);
    assert_eq!(1, tracks[1]["trackId"]);
    assert_eq!(6, tracks[1]["confidenceScore"]);

    assert_eq!(8, items[1]["photoId"]);
    assert_eq!(
        Some(0),
        items[1]["suggestedTracks"].as_array().map(Vec::len)
    );
}

#[test]
fn borrowed_and_owned_suggestions_convert_equally() {
    let plays = [(3_i64, new_play("near", PHOTO_TIME_SECS - 10 * 60))];
    let photos = [((), UtcDateTimeMs::from_unix_timestamp_secs(PHOTO_TIME_SECS))];
    let batch = suggest_batch(photos, 3, &plays, 1).unwrap();
    let borrowed = batch[0]
        .1
        .iter()
        .cloned()
        .map(TrackSuggestion::from)
        .collect::<Vec<_>>();
    let owned = suggest(photos[0].1, 3, plays.iter().cloned(), 1)
        .unwrap()
        .into_iter()
        .map(TrackSuggestion::from)
        .collect::<Vec<_>>();
    assert_eq!(1, owned.len());
    assert_eq!(borrowed, owned);
}
