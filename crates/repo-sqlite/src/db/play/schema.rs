// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    play (row_id) {
        row_id -> BigInt,
        row_created_ms -> BigInt,
        row_updated_ms -> BigInt,
        user_id -> BigInt,
        play_key -> Text,
        track_name -> Text,
        artist_name -> Text,
        album_name -> Text,
        album_image_url -> Nullable<Text>,
        played_at_ms -> BigInt,
        duration_ms -> BigInt,
        track_url -> Text,
        track_mbid -> Nullable<Text>,
        source -> SmallInt,
        spotify_uri -> Nullable<Text>,
    }
}
