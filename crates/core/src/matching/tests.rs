// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

const T: UtcDateTimeMs = UtcDateTimeMs::from_unix_timestamp_secs(1_717_243_200);

fn minutes_before(minutes: i64) -> UtcDateTimeMs {
    T.saturating_sub_millis(minutes * MILLIS_PER_MINUTE)
}

fn minutes_after(minutes: i64) -> UtcDateTimeMs {
    T.saturating_add_millis(minutes * MILLIS_PER_MINUTE)
}

fn window(hours: WindowHours) -> MatchWindow {
    MatchWindow::from_hours(hours).unwrap()
}

#[test]
fn window_hours_must_be_positive() {
    assert_eq!(
        Err(MatchError::InvalidWindowHours(0)),
        MatchWindow::from_hours(0)
    );
    assert_eq!(
        Err(MatchError::InvalidWindowHours(-3)),
        MatchWindow::from_hours(-3)
    );
    assert_eq!(180, window(3).minutes());
}

#[test]
fn window_around() {
    let (start, end) = window(3).around(T);
    assert_eq!(minutes_before(180), start);
    assert_eq!(minutes_after(180), end);
}

#[test]
fn score_bounds() {
    let window = window(3);
    assert_eq!(ConfidenceScore::MAX, confidence_score(0, window));
    assert_eq!(ConfidenceScore::MIN, confidence_score(180, window));
    assert_eq!(ConfidenceScore::MIN, confidence_score(181, window));
    assert_eq!(ConfidenceScore::MIN, confidence_score(u64::MAX, window));
}

#[test]
fn score_rounds_linear_decay() {
    let window = window(3);
    // 100 * (1 - 10/180) = 94.44
    assert_eq!(94, confidence_score(10, window).value());
    // 100 * (1 - 170/180) = 5.56
    assert_eq!(6, confidence_score(170, window).value());
    // 100 * (1 - 90/180) = 50
    assert_eq!(50, confidence_score(90, window).value());
    // 100 * (1 - 179/180) = 0.56
    assert_eq!(1, confidence_score(179, window).value());
}

#[test]
fn score_is_non_increasing() {
    for hours in [1, 3, 7, 24] {
        let window = window(hours);
        let mut prev = confidence_score(0, window);
        for minutes in 1..=window.minutes() + 10 {
            let next = confidence_score(minutes, window);
            assert!(next <= prev, "{minutes} min in {hours} h: {next} > {prev}");
            assert!(next.is_valid());
            prev = next;
        }
    }
}

#[test]
fn time_difference_is_absolute_and_floored() {
    assert_eq!(10, time_difference_minutes(T, minutes_before(10)));
    assert_eq!(10, time_difference_minutes(T, minutes_after(10)));
    assert_eq!(
        0,
        time_difference_minutes(T, T.saturating_add_millis(59_999))
    );
}

#[test]
fn suggest_example() {
    let candidates = [("far", minutes_before(170)), ("near", minutes_before(10))];
    let suggestions = suggest(T, 3, candidates, 5).unwrap();
    assert_eq!(
        vec![
            Suggestion {
                track: ("near", minutes_before(10)),
                confidence_score: ConfidenceScore::new_unchecked(94),
                time_difference_minutes: 10,
            },
            Suggestion {
                track: ("far", minutes_before(170)),
                confidence_score: ConfidenceScore::new_unchecked(6),
                time_difference_minutes: 170,
            },
        ],
        suggestions
    );
}

#[test]
fn suggest_excludes_candidates_outside_window() {
    let candidates = [minutes_after(200), minutes_before(180), minutes_after(181)];
    assert!(suggest(T, 3, candidates, 5).unwrap().is_empty());
}

#[test]
fn suggest_without_candidates() {
    assert!(suggest(T, 3, Vec::<UtcDateTimeMs>::new(), 5).unwrap().is_empty());
}

#[test]
fn suggest_rejects_invalid_arguments() {
    assert_eq!(
        Err(MatchError::InvalidWindowHours(0)),
        suggest(T, 0, [T], 5)
    );
    assert_eq!(
        Err(MatchError::InvalidWindowHours(-1)),
        suggest(T, -1, [T], 5)
    );
    assert_eq!(Err(MatchError::NoSuggestionsRequested), suggest(T, 3, [T], 0));
}

#[test]
fn suggest_truncates() {
    let candidates = (0..20).map(minutes_before).collect::<Vec<_>>();
    for max_suggestions in 1..=25 {
        let suggestions = suggest(T, 3, &candidates, max_suggestions).unwrap();
        assert_eq!(max_suggestions.min(20), suggestions.len());
    }
}

#[test]
fn suggest_sorts_stable_on_equal_scores() {
    // All of them score 94 or 89
    let candidates = [
        (1, minutes_after(10)),
        (2, minutes_before(20)),
        (3, minutes_before(10)),
        (4, minutes_after(20)),
        (5, minutes_after(10)),
    ];
    let suggestions = suggest(T, 3, candidates, 5).unwrap();
    let ids = suggestions
        .iter()
        .map(|suggestion| suggestion.track.0)
        .collect::<Vec<_>>();
    assert_eq!(vec![1, 3, 5, 2, 4], ids);
    assert!(
        suggestions
            .windows(2)
            .all(|pair| pair[0].confidence_score >= pair[1].confidence_score)
    );
}

#[test]
fn suggest_normalizes_timezone_naive_photo_time() {
    let naive = jiff::civil::date(2024, 6, 1).at(12, 0, 0, 0);
    let photo_time = UtcDateTimeMs::from_civil_utc(naive).unwrap();
    assert_eq!(T, photo_time);
    let with_offset = "2024-06-01T14:00:00+02:00"
        .parse::<jiff::Timestamp>()
        .unwrap();
    assert_eq!(
        suggest(photo_time, 3, [minutes_before(10)], 1).unwrap(),
        suggest(with_offset, 3, [minutes_before(10)], 1).unwrap(),
    );
}

#[test]
fn suggest_is_deterministic() {
    let candidates = (0..50)
        .map(|i| minutes_before(i * 7 % 200))
        .collect::<Vec<_>>();
    assert_eq!(
        suggest(T, 3, &candidates, 10).unwrap(),
        suggest(T, 3, &candidates, 10).unwrap()
    );
}

#[test]
fn suggest_plays() {
    let play = Play {
        track_name: "Song".into(),
        artist_name: "Band".into(),
        album_name: "Album".into(),
        album_image_url: None,
        played_at: minutes_after(45),
        duration_ms: 180_000,
        track_url: String::new(),
        track_mbid: None,
        source: Default::default(),
        spotify_uri: None,
    };
    let plays = [(7_i64, play)];
    let suggestions = suggest(T, 3, plays.iter(), 1).unwrap();
    assert_eq!(1, suggestions.len());
    assert_eq!(7, suggestions[0].track.0);
    assert_eq!(75, suggestions[0].confidence_score.value());
    assert_eq!(45, suggestions[0].time_difference_minutes);
}

#[test]
fn suggest_batch_per_photo() {
    let candidates = [minutes_before(10), minutes_after(100), minutes_after(300)];
    let photos = [
        ("a", T),
        ("b", minutes_after(100)),
        ("c", minutes_after(1_000)),
    ];
    let batch = suggest_batch(photos, 3, &candidates, 5).unwrap();
    assert_eq!(3, batch.len());
    let (photo, suggestions) = &batch[0];
    assert_eq!("a", *photo);
    assert_eq!(2, suggestions.len());
    assert_eq!(minutes_before(10), *suggestions[0].track);
    let (photo, suggestions) = &batch[1];
    assert_eq!("b", *photo);
    assert_eq!(2, suggestions.len());
    assert_eq!(minutes_after(100), *suggestions[0].track);
    // The same candidate is suggested for multiple photos
    assert_eq!(minutes_before(10), *suggestions[1].track);
    let (photo, suggestions) = &batch[2];
    assert_eq!("c", *photo);
    assert!(suggestions.is_empty());
}

#[test]
fn suggest_batch_rejects_invalid_window() {
    assert_eq!(
        Err(MatchError::InvalidWindowHours(0)),
        suggest_batch([((), T)], 0, &[T], 5)
    );
}

#[test]
fn display_score() {
    assert_eq!("94%", ConfidenceScore::new_unchecked(94).to_string());
    assert_eq!(ConfidenceScore::MAX, ConfidenceScore::clamp_from(200));
    assert!(!ConfidenceScore::new_unchecked(101).is_valid());
}
