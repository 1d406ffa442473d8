// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

diesel::table! {
    mapping (row_id) {
        row_id -> BigInt,
        row_created_ms -> BigInt,
        row_updated_ms -> BigInt,
        memory_id -> BigInt,
        photo_id -> BigInt,
        play_id -> BigInt,
        is_auto_suggested -> Bool,
        confidence_score -> Nullable<SmallInt>,
    }
}
