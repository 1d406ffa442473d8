// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    photo (row_id) {
        row_id -> BigInt,
        row_created_ms -> BigInt,
        row_updated_ms -> BigInt,
        memory_id -> BigInt,
        google_photo_id -> Text,
        base_url -> Text,
        filename -> Text,
        mime_type -> Text,
        creation_time_ms -> BigInt,
        width -> Nullable<BigInt>,
        height -> Nullable<BigInt>,
        local_path -> Nullable<Text>,
    }
}
