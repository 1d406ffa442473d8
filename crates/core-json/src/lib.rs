// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod prelude {
    pub(crate) use serde::{Deserialize, Serialize};
}

pub mod lastfm;
pub mod matching;
pub mod memory;
pub mod photo;
pub mod play;

/// Integer identifiers of stored records.
pub type RecordIdValue = i64;
