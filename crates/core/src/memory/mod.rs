// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::prelude::*;

/// A user-created bundle of photos and the tracks associated with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    pub title: String,

    pub description: Option<String>,

    pub memory_date: UtcDateTimeMs,
}

impl Memory {
    /// The title of the n-th memory when splitting a memory with
    /// multiple photos into individual memories.
    ///
    /// `number` is 1-based.
    #[must_use]
    pub fn numbered_title(title: &str, number: usize) -> String {
        format!("{title} #{number}")
    }
}

/// Partial update of a [`Memory`].
///
/// Only present fields are replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryUpdate {
    pub title: Option<String>,

    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,

    pub memory_date: Option<UtcDateTimeMs>,
}

impl MemoryUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            title,
            description,
            memory_date,
        } = self;
        title.is_none() && description.is_none() && memory_date.is_none()
    }

    /// Apply the update and return whether anything has changed.
    pub fn apply(self, memory: &mut Memory) -> bool {
        let Self {
            title,
            description,
            memory_date,
        } = self;
        let mut modified = false;
        if let Some(title) = title {
            modified |= memory.title != title;
            memory.title = title;
        }
        if let Some(description) = description {
            modified |= memory.description != description;
            memory.description = description;
        }
        if let Some(memory_date) = memory_date {
            modified |= memory.memory_date != memory_date;
            memory.memory_date = memory_date;
        }
        modified
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MemoryInvalidity {
    TitleEmpty,
}

impl Validate for Memory {
    type Invalidity = MemoryInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.title.trim().is_empty(), Self::Invalidity::TitleEmpty)
            .into()
    }
}
