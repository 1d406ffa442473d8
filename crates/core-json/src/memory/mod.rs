// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use memorymix_core::util::clock::UtcDateTimeMs;

use crate::prelude::*;

mod _core {
    pub(super) use memorymix_core::memory::Memory;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    pub memory_date: UtcDateTimeMs,
}

impl From<_core::Memory> for Memory {
    fn from(from: _core::Memory) -> Self {
        let _core::Memory {
            title,
            description,
            memory_date,
        } = from;
        Self {
            title,
            description,
            memory_date,
        }
    }
}

impl From<Memory> for _core::Memory {
    fn from(from: Memory) -> Self {
        let Memory {
            title,
            description,
            memory_date,
        } = from;
        Self {
            title,
            description,
            memory_date,
        }
    }
}
